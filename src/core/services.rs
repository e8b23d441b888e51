//! Implementations for the service the app needs.
//!

use crate::core::interests::{self, INTEREST_CATEGORIES, InterestReport};
use crate::core::models::InboundMessage;
use crate::core::statistics::{self, StatisticsReport};
use crate::core::traits::ChatService;
use crate::error::Result;
use crate::infrastructure::traits::ChatRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use di::{Ref, injectable};
use log::debug;

#[injectable(ChatService)]
pub struct MyChatService {
    repo: Ref<dyn ChatRepository>,
}

impl MyChatService {
    pub fn new(repo: Ref<dyn ChatRepository>) -> MyChatService {
        MyChatService { repo }
    }
}

#[async_trait]
impl ChatService for MyChatService {
    async fn record_message(&self, message: InboundMessage, now: DateTime<Utc>) -> Result<()> {
        debug!(
            "recording message {} in chat {} from user {}",
            message.message_id, message.chat_id, message.sender.id
        );
        let (user, group, message) = message.into_entities(now);
        self.repo.record(user, group, message).await?;
        Ok(())
    }

    async fn compute_statistics(&self) -> Result<StatisticsReport> {
        let users = self.repo.message_counts_by_user().await?;
        let groups = self.repo.message_counts_by_group().await?;
        let timestamps = self.repo.message_timestamps().await?;

        Ok(StatisticsReport {
            users,
            groups,
            busiest_hour: statistics::busiest_hour(timestamps),
        })
    }

    async fn compute_interests(&self) -> Result<InterestReport> {
        let texts = self.repo.message_texts().await?;
        Ok(interests::classify(
            INTEREST_CATEGORIES,
            texts.iter().map(String::as_str),
        ))
    }
}
