//! Domain models shared by the bot's services.
//!
//! - **game** - Code tables for item quality and character class
//! - **channel** - Channel variants and their display identity
//! - **command** - Command invocations and the guild context they run in

pub mod channel;
pub mod command;
pub mod game;
