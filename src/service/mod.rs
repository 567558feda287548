//! Business logic between the bot's event handlers and the data layer.

pub mod command;
pub mod thumbnail;
