//! Error types shared by the bot, services and storage.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no bot token provided, set the TELEGRAM_BOT_TOKEN environment variable")]
    MissingToken,

    #[error("invalid DATABASE_URL `{url}`: {source}")]
    InvalidDatabaseUrl {
        url: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("invalid FORWARD_CHAT_ID `{0}`, expected an integer chat id")]
    InvalidForwardChat(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("schema error: {0}")]
    Schema(#[from] sqlx::migrate::MigrateError),

    #[error("telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
