//! Shared test fixtures: an in-memory repository and a real in-memory SQLite pool.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use group_insights_bot::core::models::{GroupInfo, InboundMessage, Sender};
use group_insights_bot::infrastructure::database::DatabaseConnection;
use group_insights_bot::infrastructure::entities::{
    Group, GroupMessageCount, Message, User, UserMessageCount,
};
use group_insights_bot::infrastructure::traits::ChatRepository;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Mutex;

/// One connection, since every `:memory:` connection is its own database.
pub async fn setup_test_db() -> DatabaseConnection {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool: SqlitePool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    let db = DatabaseConnection::from_pool(pool);
    db.ensure_schema().await.unwrap();
    db
}

pub fn at_hour(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, hour, minute, 0).unwrap()
}

pub fn sender(id: i64, username: &str) -> Sender {
    Sender {
        id,
        username: Some(username.to_owned()),
        first_name: username.to_uppercase(),
        last_name: None,
    }
}

pub fn group_message(
    sender: &Sender,
    group_id: i64,
    message_id: i64,
    text: Option<&str>,
) -> InboundMessage {
    InboundMessage {
        sender: sender.clone(),
        group: Some(GroupInfo {
            id: group_id,
            title: format!("group {group_id}"),
        }),
        chat_id: group_id,
        message_id,
        text: text.map(str::to_owned),
    }
}

pub fn direct_message(sender: &Sender, message_id: i64, text: Option<&str>) -> InboundMessage {
    InboundMessage {
        sender: sender.clone(),
        group: None,
        chat_id: sender.id,
        message_id,
        text: text.map(str::to_owned),
    }
}

#[derive(Default)]
struct State {
    users: Vec<User>,
    groups: Vec<Group>,
    messages: Vec<Message>,
}

/// Keeps rows in insertion order, mirroring the tie ordering of the SQL queries.
#[derive(Default)]
pub struct InMemoryChatRepository {
    state: Mutex<State>,
}

impl InMemoryChatRepository {
    pub fn counts(&self) -> (usize, usize, usize) {
        let state = self.state.lock().unwrap();
        (state.users.len(), state.groups.len(), state.messages.len())
    }
}

#[async_trait]
impl ChatRepository for InMemoryChatRepository {
    async fn record(
        &self,
        user: User,
        group: Option<Group>,
        message: Message,
    ) -> Result<(), sqlx::Error> {
        let mut state = self.state.lock().unwrap();
        if !state.users.iter().any(|u| u.user_id == user.user_id) {
            state.users.push(user);
        }
        if let Some(group) = group {
            if !state.groups.iter().any(|g| g.group_id == group.group_id) {
                state.groups.push(group);
            }
        }
        state.messages.push(message);
        Ok(())
    }

    async fn message_counts_by_user(&self) -> Result<Vec<UserMessageCount>, sqlx::Error> {
        let state = self.state.lock().unwrap();
        let mut counts: Vec<UserMessageCount> = Vec::new();
        for message in &state.messages {
            match counts.iter_mut().find(|c| c.user_id == message.user_id) {
                Some(count) => count.message_count += 1,
                None => {
                    let user = state
                        .users
                        .iter()
                        .find(|u| u.user_id == message.user_id)
                        .unwrap();
                    counts.push(UserMessageCount {
                        user_id: user.user_id,
                        username: user.username.clone(),
                        first_name: user.first_name.clone(),
                        message_count: 1,
                    });
                }
            }
        }
        counts.sort_by(|a, b| b.message_count.cmp(&a.message_count));
        Ok(counts)
    }

    async fn message_counts_by_group(&self) -> Result<Vec<GroupMessageCount>, sqlx::Error> {
        let state = self.state.lock().unwrap();
        let mut counts: Vec<GroupMessageCount> = Vec::new();
        for group_id in state.messages.iter().filter_map(|m| m.group_id) {
            match counts.iter_mut().find(|c| c.group_id == group_id) {
                Some(count) => count.message_count += 1,
                None => {
                    let group = state
                        .groups
                        .iter()
                        .find(|g| g.group_id == group_id)
                        .unwrap();
                    counts.push(GroupMessageCount {
                        group_id,
                        title: group.title.clone(),
                        message_count: 1,
                    });
                }
            }
        }
        counts.sort_by(|a, b| b.message_count.cmp(&a.message_count));
        Ok(counts)
    }

    async fn message_timestamps(&self) -> Result<Vec<DateTime<Utc>>, sqlx::Error> {
        let state = self.state.lock().unwrap();
        Ok(state.messages.iter().map(|m| m.created_at).collect())
    }

    async fn message_texts(&self) -> Result<Vec<String>, sqlx::Error> {
        let state = self.state.lock().unwrap();
        Ok(state
            .messages
            .iter()
            .filter_map(|m| m.text.clone())
            .collect())
    }
}
