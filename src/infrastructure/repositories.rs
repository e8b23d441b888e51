//! DB Repository abstractions

use crate::infrastructure::database::DatabaseConnection;
use crate::infrastructure::entities::{
    Group, GroupMessageCount, Message, User, UserMessageCount,
};
use crate::infrastructure::traits::ChatRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use di::{Ref, injectable};
use log::error;

#[injectable(ChatRepository)]
pub struct DbChatRepository {
    connection: Ref<DatabaseConnection>,
}

impl DbChatRepository {
    pub fn new(connection: Ref<DatabaseConnection>) -> DbChatRepository {
        DbChatRepository { connection }
    }

    async fn record_in_transaction(
        &self,
        user: User,
        group: Option<Group>,
        message: Message,
    ) -> Result<(), sqlx::Error> {
        let mut tx = self.connection.begin().await?;

        sqlx::query(
            "INSERT INTO users (user_id, username, first_name, last_name, first_seen_at) VALUES (?, ?, ?, ?, ?) ON CONFLICT (user_id) DO NOTHING",
        )
        .bind(user.user_id)
        .bind(user.username)
        .bind(user.first_name)
        .bind(user.last_name)
        .bind(user.first_seen_at)
        .execute(&mut *tx)
        .await?;

        if let Some(group) = group {
            sqlx::query(
                "INSERT INTO groups (group_id, title, first_seen_at) VALUES (?, ?, ?) ON CONFLICT (group_id) DO NOTHING",
            )
            .bind(group.group_id)
            .bind(group.title)
            .bind(group.first_seen_at)
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query(
            "INSERT INTO messages (chat_id, message_id, user_id, group_id, text, created_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(message.chat_id)
        .bind(message.message_id)
        .bind(message.user_id)
        .bind(message.group_id)
        .bind(message.text)
        .bind(message.created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await
    }
}

#[async_trait]
impl ChatRepository for DbChatRepository {
    async fn record(
        &self,
        user: User,
        group: Option<Group>,
        message: Message,
    ) -> Result<(), sqlx::Error> {
        self.record_in_transaction(user, group, message)
            .await
            .inspect_err(|e| error!("{e}"))
    }

    async fn message_counts_by_user(&self) -> Result<Vec<UserMessageCount>, sqlx::Error> {
        // Ties keep the order in which users first posted.
        sqlx::query_as(
            "SELECT u.user_id, u.username, u.first_name, COUNT(*) AS message_count FROM messages m INNER JOIN users u ON u.user_id = m.user_id GROUP BY u.user_id ORDER BY message_count DESC, MIN(m.rowid) ASC",
        )
        .fetch_all(&**self.connection)
        .await
        .inspect_err(|e| error!("{e}"))
    }

    async fn message_counts_by_group(&self) -> Result<Vec<GroupMessageCount>, sqlx::Error> {
        sqlx::query_as(
            "SELECT g.group_id, g.title, COUNT(*) AS message_count FROM messages m INNER JOIN groups g ON g.group_id = m.group_id GROUP BY g.group_id ORDER BY message_count DESC, MIN(m.rowid) ASC",
        )
        .fetch_all(&**self.connection)
        .await
        .inspect_err(|e| error!("{e}"))
    }

    async fn message_timestamps(&self) -> Result<Vec<DateTime<Utc>>, sqlx::Error> {
        sqlx::query_scalar("SELECT created_at FROM messages ORDER BY rowid ASC")
            .fetch_all(&**self.connection)
            .await
            .inspect_err(|e| error!("{e}"))
    }

    async fn message_texts(&self) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT text FROM messages WHERE text IS NOT NULL ORDER BY rowid ASC")
            .fetch_all(&**self.connection)
            .await
            .inspect_err(|e| error!("{e}"))
    }
}
