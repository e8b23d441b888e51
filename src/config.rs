//! Process configuration, read from the environment (and an optional `.env` file).

use crate::error::ConfigError;
use sqlx::sqlite::SqliteConnectOptions;
use std::env;
use std::str::FromStr;

pub const BOT_TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const FORWARD_CHAT_VAR: &str = "FORWARD_CHAT_ID";

pub const DEFAULT_DATABASE_URL: &str = "sqlite:telegram_bot.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub database_url: String,
    /// Validated connect options for `database_url`.
    pub database: SqliteConnectOptions,
    /// Chat every ingested message is forwarded to, if any.
    pub forward_chat_id: Option<i64>,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
        let bot_token = lookup(BOT_TOKEN_VAR)
            .map(|t| t.trim().to_owned())
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let database_url = lookup(DATABASE_URL_VAR)
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned());
        let database =
            connect_options(&database_url).map_err(|source| ConfigError::InvalidDatabaseUrl {
                url: database_url.clone(),
                source,
            })?;

        let forward_chat_id = match lookup(FORWARD_CHAT_VAR).filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(
                raw.trim()
                    .parse::<i64>()
                    .map_err(|_| ConfigError::InvalidForwardChat(raw.clone()))?,
            ),
            None => None,
        };

        Ok(Config {
            bot_token,
            database_url,
            database,
            forward_chat_id,
        })
    }
}

pub fn connect_options(database_url: &str) -> Result<SqliteConnectOptions, sqlx::Error> {
    Ok(SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true))
}
