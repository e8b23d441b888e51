//! Database entities

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub user_id: i64,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
    pub first_seen_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Group {
    pub group_id: i64,
    pub title: String,
    pub first_seen_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Message {
    pub chat_id: i64,
    pub message_id: i64,
    pub user_id: i64,
    /// `None` for direct chats.
    pub group_id: Option<i64>,
    pub text: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct UserMessageCount {
    pub user_id: i64,
    pub username: Option<String>,
    pub first_name: String,
    pub message_count: i64,
}

impl UserMessageCount {
    /// The handle shown in reports, falling back to the given name.
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.first_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct GroupMessageCount {
    pub group_id: i64,
    pub title: String,
    pub message_count: i64,
}
