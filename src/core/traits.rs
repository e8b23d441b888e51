//! DI "Interfaces"

use crate::core::interests::InterestReport;
use crate::core::models::InboundMessage;
use crate::core::statistics::StatisticsReport;
use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ChatService: Send + Sync {
    /// Records an inbound message, registering its sender and group on first sight.
    ///
    /// Storage errors are returned as-is, nothing is retried.
    async fn record_message(&self, message: InboundMessage, now: DateTime<Utc>) -> Result<()>;

    /// Message counts per user and per group, and the busiest hour of the day.
    async fn compute_statistics(&self) -> Result<StatisticsReport>;

    /// Ranks the interest categories over all messages that have text.
    async fn compute_interests(&self) -> Result<InterestReport>;
}
