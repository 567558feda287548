//! Command invocations and the context they are evaluated in.

/// Commands understood by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Change the guild's parser.
    SetParser,
    /// Show available commands.
    Help,
    /// Anything else, carrying the name as typed.
    Unrecognized(&'a str),
}

impl<'a> Command<'a> {
    pub fn from_name(name: &'a str) -> Self {
        match name {
            "set_parser" => Self::SetParser,
            "help" => Self::Help,
            other => Self::Unrecognized(other),
        }
    }
}

/// Command name extracted from a message addressed to the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub name: String,
}

impl CommandInvocation {
    /// Parses `content` as `<prefix> <command> [args...]`.
    ///
    /// The first whitespace-separated token must equal `prefix`. A bare prefix is
    /// treated as a request for help.
    ///
    /// # Returns
    /// - `Some(CommandInvocation)` - Message is addressed to the bot
    /// - `None` - Ordinary message
    pub fn parse(content: &str, prefix: &str) -> Option<Self> {
        let mut tokens = content.split_whitespace();

        if tokens.next()? != prefix {
            return None;
        }

        let name = tokens.next().unwrap_or("help").to_string();

        Some(Self { name })
    }
}

/// Author and text of the message that triggered a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMessage {
    pub author_id: u64,
    pub content: String,
}

impl CommandMessage {
    /// Third whitespace-separated token, the argument of `<prefix> <command> <arg>`.
    pub fn argument(&self) -> Option<&str> {
        self.content.split_whitespace().nth(2)
    }
}

/// Guild a command was issued in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuildContext {
    pub guild_id: u64,
    pub owner_id: u64,
}
