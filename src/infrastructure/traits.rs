//! Infrastructure traits, used for DI on higher levels

use crate::infrastructure::entities;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Stores a message, inserting its user and group first if they are not known yet.
    ///
    /// Existing user and group rows are left untouched.
    async fn record(
        &self,
        user: entities::User,
        group: Option<entities::Group>,
        message: entities::Message,
    ) -> Result<(), sqlx::Error>;

    /// Message counts per user, busiest first.
    async fn message_counts_by_user(&self) -> Result<Vec<entities::UserMessageCount>, sqlx::Error>;

    /// Message counts per group, busiest first. Direct messages are not counted.
    async fn message_counts_by_group(
        &self,
    ) -> Result<Vec<entities::GroupMessageCount>, sqlx::Error>;

    async fn message_timestamps(&self) -> Result<Vec<DateTime<Utc>>, sqlx::Error>;

    /// Texts of all messages that have one.
    async fn message_texts(&self) -> Result<Vec<String>, sqlx::Error>;
}
