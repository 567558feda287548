use std::collections::HashSet;

use url::Url;

use crate::{
    error::{config::ConfigError, AppError},
    util::parse::{parse_u64_from_string, split_list},
};

const DEFAULT_PARSERS: &str = "classicdb,itemization";
const DEFAULT_COMMAND_PREFIX: &str = "!";

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Database site base URL without trailing slash, e.g. `https://classicdb.ch`.
    pub site_host: String,
    /// Users allowed to change the parser in any guild.
    pub override_ids: HashSet<u64>,
    /// Parser names accepted by `set_parser`, in display order.
    pub available_parsers: Vec<String>,
    pub command_prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let site_host = required("SITE_HOST")?;
        let override_ids = std::env::var("OVERRIDE_IDS").unwrap_or_default();
        let available_parsers =
            std::env::var("AVAILABLE_PARSERS").unwrap_or_else(|_| DEFAULT_PARSERS.to_string());

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            site_host: normalize_host("SITE_HOST", &site_host)?,
            override_ids: parse_override_ids(&override_ids)?,
            available_parsers: split_list(&available_parsers).map(String::from).collect(),
            command_prefix: std::env::var("COMMAND_PREFIX")
                .unwrap_or_else(|_| DEFAULT_COMMAND_PREFIX.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Validates `value` as an absolute URL and strips trailing slashes.
fn normalize_host(name: &str, value: &str) -> Result<String, ConfigError> {
    Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
        name: name.to_string(),
        source,
    })?;

    Ok(value.trim_end_matches('/').to_string())
}

fn parse_override_ids(value: &str) -> Result<HashSet<u64>, ConfigError> {
    split_list(value)
        .map(|id| {
            parse_u64_from_string(id).map_err(|_| ConfigError::InvalidOverrideId(id.to_string()))
        })
        .collect()
}
