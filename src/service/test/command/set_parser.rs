use super::*;

async fn stored_rows(db: &sea_orm::DatabaseConnection) -> Result<u64, DbErr> {
    entity::prelude::GuildParser::find().count(db).await
}

/// Tests the guild owner changing the parser.
///
/// Expected: confirmation and the parser stored for the guild
#[tokio::test]
async fn owner_updates_parser() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildParser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();

    let service = CommandService::new(db, &config);
    let reply = service
        .interpret(
            "set_parser",
            &message(OWNER_ID, "! set_parser classicdb"),
            Some(&guild()),
        )
        .await;

    assert_eq!(reply, "Updated parser to `classicdb`.");

    let row = crate::data::guild_parser::GuildParserRepository::new(db)
        .find_by_guild_id(GUILD_ID)
        .await?
        .unwrap();
    assert_eq!(row.parser, "classicdb");

    Ok(())
}

/// Tests an override user changing the parser of a guild they do not own.
///
/// Expected: confirmation and the existing preference replaced
#[tokio::test]
async fn override_user_updates_parser() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildParser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();

    factory::guild_parser::GuildParserFactory::new(db)
        .guild_id(GUILD_ID.to_string())
        .parser("classicdb")
        .build()
        .await?;

    let service = CommandService::new(db, &config);
    let reply = service
        .interpret(
            "set_parser",
            &message(OVERRIDE_ID, "! set_parser itemization"),
            Some(&guild()),
        )
        .await;

    assert_eq!(reply, "Updated parser to `itemization`.");
    assert_eq!(stored_rows(db).await?, 1);

    let row = crate::data::guild_parser::GuildParserRepository::new(db)
        .find_by_guild_id(GUILD_ID)
        .await?
        .unwrap();
    assert_eq!(row.parser, "itemization");

    Ok(())
}

/// Tests a user who is neither owner nor override user.
///
/// Expected: denial and nothing stored
#[tokio::test]
async fn stranger_is_denied() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildParser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();

    let service = CommandService::new(db, &config);
    let reply = service
        .interpret(
            "set_parser",
            &message(STRANGER_ID, "! set_parser classicdb"),
            Some(&guild()),
        )
        .await;

    assert_eq!(reply, OWNER_ONLY_REPLY);
    assert_eq!(stored_rows(db).await?, 0);

    Ok(())
}

/// Tests the permission check runs before argument validation.
///
/// Expected: denial even though the parser name is invalid
#[tokio::test]
async fn stranger_is_denied_before_validation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildParser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();

    let service = CommandService::new(db, &config);
    let reply = service
        .interpret(
            "set_parser",
            &message(STRANGER_ID, "! set_parser wowhead"),
            Some(&guild()),
        )
        .await;

    assert_eq!(reply, OWNER_ONLY_REPLY);

    Ok(())
}

/// Tests missing and unknown parser names.
///
/// Expected: list of available parsers and nothing stored
#[tokio::test]
async fn invalid_parser_lists_available_parsers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildParser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();

    let service = CommandService::new(db, &config);
    for content in ["! set_parser", "! set_parser wowhead", "! set_parser ClassicDB"] {
        let reply = service
            .interpret("set_parser", &message(OWNER_ID, content), Some(&guild()))
            .await;

        assert_eq!(
            reply, "Available parsers are `classicdb` and `itemization`.",
            "content {content}"
        );
    }
    assert_eq!(stored_rows(db).await?, 0);

    Ok(())
}

/// Tests a storage failure while saving the parser.
///
/// The table is left out of the schema so the write fails.
///
/// Expected: generic error reply
#[tokio::test]
async fn storage_failure_gets_generic_reply() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();

    let service = CommandService::new(db, &config);
    let reply = service
        .interpret(
            "set_parser",
            &message(OWNER_ID, "! set_parser classicdb"),
            Some(&guild()),
        )
        .await;

    assert_eq!(reply, UPDATE_FAILED_REPLY);

    Ok(())
}

/// Tests changing the parser from a private channel.
///
/// Expected: guild-only reply and nothing stored
#[tokio::test]
async fn private_channel_cannot_change_parser() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildParser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();

    let service = CommandService::new(db, &config);
    let reply = service
        .interpret(
            "set_parser",
            &message(OWNER_ID, "! set_parser classicdb"),
            None,
        )
        .await;

    assert_eq!(reply, GUILD_ONLY_REPLY);
    assert_eq!(stored_rows(db).await?, 0);

    Ok(())
}
