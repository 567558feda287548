use super::*;

/// Tests the help command.
///
/// Expected: the fixed help text
#[tokio::test]
async fn returns_help_text() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();

    let service = CommandService::new(db, &config);
    let reply = service
        .interpret("help", &message(STRANGER_ID, "! help"), Some(&guild()))
        .await;

    assert_eq!(reply, HELP_TEXT);
    assert!(reply.contains("set_parser"));

    Ok(())
}

/// Tests help works outside of guilds.
///
/// Expected: the fixed help text
#[tokio::test]
async fn returns_help_text_in_private_channels() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();

    let service = CommandService::new(db, &config);
    let reply = service
        .interpret("help", &message(STRANGER_ID, "! help"), None)
        .await;

    assert_eq!(reply, HELP_TEXT);

    Ok(())
}

/// Tests an unknown command name.
///
/// Expected: unrecognized notice naming the command, followed by the help text
#[tokio::test]
async fn unknown_command_gets_notice_and_help() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();

    let service = CommandService::new(db, &config);
    let reply = service
        .interpret("xyz", &message(STRANGER_ID, "! xyz"), Some(&guild()))
        .await;

    assert!(reply.starts_with("*Unrecognized command* `xyz`"));
    assert!(reply.contains("Unrecognized command"));
    assert!(reply.ends_with(HELP_TEXT));

    Ok(())
}
