use super::*;

/// Tests finding the parser of a guild that has one stored.
///
/// Expected: Ok(Some(row))
#[tokio::test]
async fn finds_existing_preference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildParser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_parser::GuildParserFactory::new(db)
        .guild_id("123456789")
        .parser("itemization")
        .build()
        .await?;

    let repo = GuildParserRepository::new(db);
    let row = repo.find_by_guild_id(123456789).await?;

    assert_eq!(row.map(|r| r.parser), Some("itemization".to_string()));

    Ok(())
}

/// Tests finding the parser of a guild that never set one.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildParser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_parser(db).await?;

    let repo = GuildParserRepository::new(db);
    let row = repo.find_by_guild_id(555).await?;

    assert!(row.is_none());

    Ok(())
}
