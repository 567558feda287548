//! Storage of the parser each guild has chosen.
//!
//! `set_parser` writes through `upsert`; `find_by_guild_id` is the read side for
//! parser selection when item lookups are served.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct GuildParserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildParserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores the parser chosen for a guild
    ///
    /// Inserts a row for the guild or, if one exists, replaces its parser and
    /// refreshes `updated_at`.
    ///
    /// # Arguments
    /// - `guild_id`: Discord's unique identifier for the guild
    /// - `parser`: Parser name, already validated by the caller
    ///
    /// # Returns
    /// - `Ok(Model)`: The stored row
    /// - `Err(DbErr)`: Database error during upsert
    pub async fn upsert(
        &self,
        guild_id: u64,
        parser: &str,
    ) -> Result<entity::guild_parser::Model, DbErr> {
        entity::prelude::GuildParser::insert(entity::guild_parser::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            parser: ActiveValue::Set(parser.to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::guild_parser::Column::GuildId)
                .update_columns([
                    entity::guild_parser::Column::Parser,
                    entity::guild_parser::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Finds the parser preference of a guild
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Guild has chosen a parser
    /// - `Ok(None)`: Guild never changed its parser
    /// - `Err(DbErr)`: Database error during query
    pub async fn find_by_guild_id(
        &self,
        guild_id: u64,
    ) -> Result<Option<entity::guild_parser::Model>, DbErr> {
        entity::prelude::GuildParser::find()
            .filter(entity::guild_parser::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await
    }
}
