pub use super::guild_parser::Entity as GuildParser;
