//! Guild parser factory for seeding parser preferences.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating guild parser rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let row = GuildParserFactory::new(&db)
///     .guild_id("987654321")
///     .parser("classicdb")
///     .build()
///     .await?;
/// ```
pub struct GuildParserFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    parser: String,
}

impl<'a> GuildParserFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented id as string
    /// - parser: `"classicdb"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            parser: "classicdb".to_string(),
        }
    }

    /// Sets the Discord guild ID.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the parser name.
    pub fn parser(mut self, parser: impl Into<String>) -> Self {
        self.parser = parser.into();
        self
    }

    /// Builds and inserts the row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_parser::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_parser::Model, DbErr> {
        entity::guild_parser::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            parser: ActiveValue::Set(self.parser),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild parser row with default values.
///
/// Shorthand for `GuildParserFactory::new(db).build().await`.
pub async fn create_guild_parser(
    db: &DatabaseConnection,
) -> Result<entity::guild_parser::Model, DbErr> {
    GuildParserFactory::new(db).build().await
}
