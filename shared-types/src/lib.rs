//! Shared types between frontend and backend
//!
//! These types are used by both:
//! - the axum inference API (native Rust)
//! - the Dioxus chat surface (WASM)
//!
//! Serializable with serde for JSON over HTTP

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

// ============================================================================
// Transcript
// ============================================================================

/// Who wrote a transcript entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Assistant,
}

impl Author {
    /// Name shown above the message body
    pub fn display_name(self) -> &'static str {
        match self {
            Author::User => "You",
            Author::Assistant => "Assistant",
        }
    }

    /// Short avatar label
    pub fn initial(self) -> &'static str {
        match self {
            Author::User => "U",
            Author::Assistant => "AI",
        }
    }
}

/// One transcript entry. Never mutated after it is appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub sender: Author,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Author::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            sender: Author::Assistant,
            text: text.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self.sender, Author::User)
    }
}

// ============================================================================
// Inference API
// ============================================================================

/// Body of `POST /api/infer`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InferRequest {
    pub text: String,
}

/// Successful body of `POST /api/infer`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InferResponse {
    pub result: String,
}

pub const INFER_PATH: &str = "/api/infer";

// ============================================================================
// Conversation History
// ============================================================================

/// Coarse time bucket for a past conversation.
///
/// Recognized buckets have a fixed display order; any other label is kept
/// verbatim in `Other` and sorts after them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DateBucket {
    Today,
    Yesterday,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    Other(String),
}

impl DateBucket {
    pub const ORDERED: [DateBucket; 6] = [
        DateBucket::Today,
        DateBucket::Yesterday,
        DateBucket::ThisWeek,
        DateBucket::LastWeek,
        DateBucket::ThisMonth,
        DateBucket::LastMonth,
    ];

    pub fn parse(label: &str) -> Self {
        match label {
            "today" => DateBucket::Today,
            "yesterday" => DateBucket::Yesterday,
            "this_week" => DateBucket::ThisWeek,
            "last_week" => DateBucket::LastWeek,
            "this_month" => DateBucket::ThisMonth,
            "last_month" => DateBucket::LastMonth,
            other => DateBucket::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            DateBucket::Today => "today",
            DateBucket::Yesterday => "yesterday",
            DateBucket::ThisWeek => "this_week",
            DateBucket::LastWeek => "last_week",
            DateBucket::ThisMonth => "this_month",
            DateBucket::LastMonth => "last_month",
            DateBucket::Other(label) => label,
        }
    }

    /// Heading shown above the bucket in the panel
    pub fn title(&self) -> &str {
        match self {
            DateBucket::Today => "Today",
            DateBucket::Yesterday => "Yesterday",
            DateBucket::ThisWeek => "This week",
            DateBucket::LastWeek => "Last week",
            DateBucket::ThisMonth => "This month",
            DateBucket::LastMonth => "Last month",
            DateBucket::Other(label) => label,
        }
    }

    /// Position in the fixed order, `None` for unrecognized labels.
    pub fn rank(&self) -> Option<usize> {
        Self::ORDERED.iter().position(|bucket| bucket == self)
    }

    /// Bucket for something created on `created`, seen from `today`.
    ///
    /// Weeks start on Monday. Anything older than last month gets a
    /// `YYYY-MM` label.
    pub fn from_dates(created: NaiveDate, today: NaiveDate) -> Self {
        let age_days = (today - created).num_days();
        if age_days <= 0 {
            return DateBucket::Today;
        }
        if age_days == 1 {
            return DateBucket::Yesterday;
        }

        let this_week = week_start(today);
        if created >= this_week {
            return DateBucket::ThisWeek;
        }
        if created >= this_week - Duration::days(7) {
            return DateBucket::LastWeek;
        }

        if created.year() == today.year() && created.month() == today.month() {
            return DateBucket::ThisMonth;
        }
        let (prev_year, prev_month) = if today.month() == 1 {
            (today.year() - 1, 12)
        } else {
            (today.year(), today.month() - 1)
        };
        if created.year() == prev_year && created.month() == prev_month {
            return DateBucket::LastMonth;
        }

        DateBucket::Other(created.format("%Y-%m").to_string())
    }
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

impl From<String> for DateBucket {
    fn from(label: String) -> Self {
        DateBucket::parse(&label)
    }
}

impl From<DateBucket> for String {
    fn from(bucket: DateBucket) -> Self {
        bucket.label().to_string()
    }
}

impl fmt::Display for DateBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Past conversation entry listed in the side panel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatHistoryItem {
    pub id: String,
    pub name: String,
    pub date: DateBucket,
}

// ============================================================================
// Tests
// ============================================================================
