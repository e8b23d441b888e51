//! Platform-independent view of an inbound chat event.

use crate::infrastructure::entities;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Sender {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
}

/// A group-like chat, as opposed to a one-to-one chat with the bot.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupInfo {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InboundMessage {
    pub sender: Sender,
    pub group: Option<GroupInfo>,
    pub chat_id: i64,
    pub message_id: i64,
    pub text: Option<String>,
}

impl InboundMessage {
    /// Splits the event into the rows it is stored as, all stamped with `now`.
    pub fn into_entities(
        self,
        now: DateTime<Utc>,
    ) -> (entities::User, Option<entities::Group>, entities::Message) {
        let user = entities::User {
            user_id: self.sender.id,
            username: self.sender.username,
            first_name: self.sender.first_name,
            last_name: self.sender.last_name,
            first_seen_at: now,
        };
        let group_id = self.group.as_ref().map(|g| g.id);
        let group = self.group.map(|g| entities::Group {
            group_id: g.id,
            title: g.title,
            first_seen_at: now,
        });
        let message = entities::Message {
            chat_id: self.chat_id,
            message_id: self.message_id,
            user_id: user.user_id,
            group_id,
            text: self.text,
            created_at: now,
        };

        (user, group, message)
    }
}
