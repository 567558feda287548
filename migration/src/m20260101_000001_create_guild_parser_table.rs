use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildParser::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildParser::Id))
                    .col(string_uniq(GuildParser::GuildId))
                    .col(string(GuildParser::Parser))
                    .col(
                        timestamp(GuildParser::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildParser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum GuildParser {
    Table,
    Id,
    GuildId,
    Parser,
    UpdatedAt,
}
