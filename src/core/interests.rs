//! Keyword based interest detection.
//!
//! Every message counts at most once per category, no matter how many of the
//! category's keywords it contains. Matching is a plain substring test on the
//! lowercased text, so `programming` also matches inside `programmings`.

use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InterestCategory {
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

impl InterestCategory {
    pub fn matches(&self, lowercase_text: &str) -> bool {
        self.keywords.iter().any(|k| lowercase_text.contains(k))
    }

    /// The label with its first letter capitalized.
    pub fn display_name(&self) -> String {
        let mut chars = self.label.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

pub static INTEREST_CATEGORIES: &[InterestCategory] = &[
    InterestCategory {
        label: "technology",
        keywords: &[
            "tech",
            "computer",
            "software",
            "hardware",
            "programming",
            "code",
        ],
    },
    InterestCategory {
        label: "sports",
        keywords: &["sport", "football", "soccer", "basketball", "tennis", "game"],
    },
    InterestCategory {
        label: "music",
        keywords: &["music", "song", "artist", "band", "concert", "album"],
    },
    InterestCategory {
        label: "movies",
        keywords: &["movie", "film", "cinema", "actor", "actress", "director"],
    },
    InterestCategory {
        label: "food",
        keywords: &["food", "recipe", "cooking", "restaurant", "meal", "dish"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InterestScore {
    pub category: &'static InterestCategory,
    pub score: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InterestReport {
    /// No message with text has been recorded.
    InsufficientData,
    Ranked {
        messages_analyzed: usize,
        /// Every category, highest score first. Zero scores are kept.
        scores: Vec<InterestScore>,
    },
}

impl InterestReport {
    pub fn to_reply(&self) -> String {
        let scores = match self {
            InterestReport::InsufficientData => {
                return "Not enough data to analyze interests.".to_owned();
            }
            InterestReport::Ranked { scores, .. } => scores,
        };

        let mut reply = String::from("📈 Interest Analysis:\n\n");
        let mut detected = false;
        for entry in scores.iter().filter(|s| s.score > 0) {
            detected = true;
            let _ = writeln!(
                reply,
                "- {}: {} mentions",
                entry.category.display_name(),
                entry.score
            );
        }
        if !detected {
            reply.push_str("No specific interests detected yet.\n");
        }
        reply
    }
}

/// Scores `categories` against `texts` and ranks them.
///
/// Categories with equal scores keep their table order.
pub fn classify<'a, I>(categories: &'static [InterestCategory], texts: I) -> InterestReport
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scores: Vec<InterestScore> = categories
        .iter()
        .map(|category| InterestScore { category, score: 0 })
        .collect();

    let mut messages_analyzed = 0;
    for text in texts {
        messages_analyzed += 1;
        let text = text.to_lowercase();
        for entry in scores.iter_mut() {
            if entry.category.matches(&text) {
                entry.score += 1;
            }
        }
    }

    if messages_analyzed == 0 {
        return InterestReport::InsufficientData;
    }

    scores.sort_by(|a, b| b.score.cmp(&a.score));
    InterestReport::Ranked {
        messages_analyzed,
        scores,
    }
}
