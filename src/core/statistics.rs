//! Activity statistics over all recorded messages.

use crate::infrastructure::entities::{GroupMessageCount, UserMessageCount};
use chrono::{DateTime, Timelike, Utc};
use serde::Serialize;
use std::fmt::Write;

/// Number of users and groups listed in the chat reply.
pub const TOP_N: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourActivity {
    /// Hour of day in UTC, 0-23.
    pub hour: u32,
    pub message_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    pub users: Vec<UserMessageCount>,
    pub groups: Vec<GroupMessageCount>,
    /// `None` when no message has been recorded yet.
    pub busiest_hour: Option<HourActivity>,
}

impl StatisticsReport {
    pub fn total_messages(&self) -> i64 {
        self.users.iter().map(|u| u.message_count).sum()
    }

    pub fn to_reply(&self) -> String {
        let mut reply = String::from("📊 Bot Statistics:\n\n");

        if !self.users.is_empty() {
            reply.push_str("Top Users by Message Count:\n");
            for user in self.users.iter().take(TOP_N) {
                let _ = writeln!(
                    reply,
                    "- {}: {} messages",
                    user.display_name(),
                    user.message_count
                );
            }
            reply.push('\n');
        }

        if !self.groups.is_empty() {
            reply.push_str("Top Groups by Message Count:\n");
            for group in self.groups.iter().take(TOP_N) {
                let _ = writeln!(reply, "- {}: {} messages", group.title, group.message_count);
            }
            reply.push('\n');
        }

        match self.busiest_hour {
            Some(activity) => {
                let _ = writeln!(reply, "Most Active Hour: {}:00", activity.hour);
            }
            None => reply.push_str("Most Active Hour: no data yet\n"),
        }

        reply
    }
}

/// Picks the hour of day with the most messages, the earliest hour winning ties.
pub fn busiest_hour<I>(timestamps: I) -> Option<HourActivity>
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    let mut per_hour = [0usize; 24];
    for timestamp in timestamps {
        per_hour[timestamp.hour() as usize] += 1;
    }

    let mut best: Option<HourActivity> = None;
    for (hour, &message_count) in per_hour.iter().enumerate() {
        if message_count == 0 {
            continue;
        }
        if best.is_none_or(|b| message_count > b.message_count) {
            best = Some(HourActivity {
                hour: hour as u32,
                message_count,
            });
        }
    }
    best
}
