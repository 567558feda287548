//! SeaORM entity definitions for the bot's persistent state.

pub mod prelude;

pub mod guild_parser;
