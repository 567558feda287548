//! Discord bot for World of Warcraft Classic database sites.
//!
//! # Layers
//!
//! - **Bot** (`bot/`) - Serenity client and event handlers
//! - **Service** (`service/`) - Command handling and icon lookup
//! - **Data** (`data/`) - SeaORM repositories
//! - **Model** (`model/`) - Code tables, channel identity and command types
//! - **Util** (`util/`) - Parsing, scraping and validation helpers
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Startup** (`startup`) - Logging and database initialization
//! - **Error** (`error/`) - Application error types

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
