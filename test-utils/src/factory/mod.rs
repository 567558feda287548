//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let row = factory::guild_parser::GuildParserFactory::new(&db)
//!     .guild_id("123456789")
//!     .parser("itemization")
//!     .build()
//!     .await?;
//! ```

pub mod guild_parser;
pub mod helpers;

pub use guild_parser::create_guild_parser;
