//! Text command handling.
//!
//! Every command produces a reply string. Permission and validation failures are replies,
//! not errors, and storage failures are logged and answered with a generic message.

use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    data::guild_parser::GuildParserRepository,
    model::command::{Command, CommandMessage, GuildContext},
};

pub const HELP_TEXT: &str = "**Available commands:**```css\n\
    help:                                - Displays this text.\n\
    set_parser: <classicdb|itemization>  - Changes the parser of the bot.\
    ```";

pub const OWNER_ONLY_REPLY: &str = "Only the owner is allowed to change this.";
pub const GUILD_ONLY_REPLY: &str = "The parser can only be changed inside a server.";
pub const UPDATE_FAILED_REPLY: &str = "An error occurred while updating parser.";

pub struct CommandService<'a> {
    db: &'a DatabaseConnection,
    config: &'a Config,
}

impl<'a> CommandService<'a> {
    pub fn new(db: &'a DatabaseConnection, config: &'a Config) -> Self {
        Self { db, config }
    }

    /// Builds the reply to a command
    ///
    /// # Arguments
    /// - `command_name`: Name typed after the prefix
    /// - `message`: Author and full text of the triggering message
    /// - `guild`: Guild the message was sent in, `None` for private channels
    ///
    /// # Returns
    /// Reply text to post in the channel
    pub async fn interpret(
        &self,
        command_name: &str,
        message: &CommandMessage,
        guild: Option<&GuildContext>,
    ) -> String {
        match Command::from_name(command_name) {
            Command::SetParser => self.set_parser(message, guild).await,
            Command::Help => HELP_TEXT.to_string(),
            Command::Unrecognized(name) => {
                format!("*Unrecognized command* `{}`\n\n{}", name, HELP_TEXT)
            }
        }
    }

    async fn set_parser(&self, message: &CommandMessage, guild: Option<&GuildContext>) -> String {
        let Some(guild) = guild else {
            return GUILD_ONLY_REPLY.to_string();
        };

        if !self.may_change_parser(message.author_id, guild) {
            tracing::warn!(
                "User {} tried to change the parser of guild {} without permission",
                message.author_id,
                guild.guild_id
            );
            return OWNER_ONLY_REPLY.to_string();
        }

        let Some(parser) = message
            .argument()
            .filter(|p| self.config.available_parsers.iter().any(|a| a.as_str() == *p))
        else {
            return available_parsers_reply(&self.config.available_parsers);
        };

        let repo = GuildParserRepository::new(self.db);

        match repo.upsert(guild.guild_id, parser).await {
            Ok(_) => {
                tracing::info!("Guild {} now uses parser {}", guild.guild_id, parser);
                format!("Updated parser to `{}`.", parser)
            }
            Err(e) => {
                tracing::error!(
                    "Failed to update parser of guild {}: {:?}",
                    guild.guild_id,
                    e
                );
                UPDATE_FAILED_REPLY.to_string()
            }
        }
    }

    /// Guild owners and configured override users may change the parser.
    fn may_change_parser(&self, author_id: u64, guild: &GuildContext) -> bool {
        author_id == guild.owner_id || self.config.override_ids.contains(&author_id)
    }
}

/// Lists the configured parsers, e.g. "Available parsers are `a` and `b`."
fn available_parsers_reply(parsers: &[String]) -> String {
    let quoted: Vec<String> = parsers.iter().map(|p| format!("`{}`", p)).collect();

    match quoted.split_last() {
        None => "No parsers are available.".to_string(),
        Some((only, [])) => format!("The only available parser is {}.", only),
        Some((last, rest)) => format!("Available parsers are {} and {}.", rest.join(", "), last),
    }
}
