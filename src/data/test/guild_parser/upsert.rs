use super::*;
use sea_orm::PaginatorTrait;

/// Tests upserting a parser for a guild without a stored preference.
///
/// Expected: Ok with row created
#[tokio::test]
async fn inserts_new_preference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildParser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildParserRepository::new(db);
    let stored = repo.upsert(123456789, "classicdb").await?;

    assert_eq!(stored.guild_id, "123456789");
    assert_eq!(stored.parser, "classicdb");

    let db_row = entity::prelude::GuildParser::find()
        .filter(entity::guild_parser::Column::GuildId.eq("123456789"))
        .one(db)
        .await?;
    assert!(db_row.is_some());

    Ok(())
}

/// Tests upserting replaces the parser of an existing guild.
///
/// Verifies that the existing row is updated in place rather than duplicated.
///
/// Expected: Ok with parser updated and a single row
#[tokio::test]
async fn replaces_existing_preference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildParser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::guild_parser::GuildParserFactory::new(db)
        .guild_id("123456789")
        .parser("classicdb")
        .build()
        .await?;

    let repo = GuildParserRepository::new(db);
    let stored = repo.upsert(123456789, "itemization").await?;

    assert_eq!(stored.parser, "itemization");
    assert!(stored.updated_at >= existing.updated_at);

    let count = entity::prelude::GuildParser::find()
        .filter(entity::guild_parser::Column::GuildId.eq("123456789"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests upserting leaves other guilds untouched.
///
/// Expected: Ok with the other guild's parser unchanged
#[tokio::test]
async fn does_not_touch_other_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildParser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let other = factory::guild_parser::GuildParserFactory::new(db)
        .guild_id("987654321")
        .parser("itemization")
        .build()
        .await?;

    let repo = GuildParserRepository::new(db);
    repo.upsert(123456789, "classicdb").await?;

    let reloaded = repo.find_by_guild_id(987654321).await?.unwrap();
    assert_eq!(reloaded.parser, other.parser);

    Ok(())
}

/// Tests upserting fails when the table is missing.
///
/// Expected: Err
#[tokio::test]
async fn fails_without_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildParserRepository::new(db);
    let result = repo.upsert(123456789, "classicdb").await;

    assert!(result.is_err());

    Ok(())
}
