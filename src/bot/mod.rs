//! Discord bot integration.
//!
//! The bot listens for messages starting with the configured command prefix and answers
//! them through the command service. It is started from `main` and runs until the gateway
//! connection closes.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild data for the cache (names and owners)
//! - `GUILD_MESSAGES` / `DIRECT_MESSAGES` - Message events in guilds and private channels
//! - `MESSAGE_CONTENT` - Message text (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
