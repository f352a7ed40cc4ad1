//! Conversations archived during this page session.
//!
//! Nothing here survives a reload.

use chrono::NaiveDate;
use shared_types::{ChatHistoryItem, DateBucket, Message};

const MAX_TITLE_CHARS: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ArchivedConversation {
    id: String,
    name: String,
    created_on: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionHistory {
    // oldest first
    entries: Vec<ArchivedConversation>,
}

impl SessionHistory {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Archive a finished transcript. Returns the new entry's id, or `None`
    /// when there was nothing worth keeping.
    pub fn archive(&mut self, messages: &[Message], today: NaiveDate) -> Option<String> {
        let name = conversation_title(messages)?;
        let id = uuid::Uuid::new_v4().to_string();
        self.entries.push(ArchivedConversation {
            id: id.clone(),
            name,
            created_on: today,
        });
        Some(id)
    }

    /// Panel entries, newest first.
    pub fn items(&self, today: NaiveDate) -> Vec<ChatHistoryItem> {
        self.entries
            .iter()
            .rev()
            .map(|entry| ChatHistoryItem {
                id: entry.id.clone(),
                name: entry.name.clone(),
                date: DateBucket::from_dates(entry.created_on, today),
            })
            .collect()
    }
}

/// First line of the first user message, shortened for the panel.
pub fn conversation_title(messages: &[Message]) -> Option<String> {
    let first = messages
        .iter()
        .find(|m| m.is_user())
        .and_then(|m| m.text.trim().lines().next())?
        .trim();
    if first.is_empty() {
        return None;
    }

    if first.chars().count() <= MAX_TITLE_CHARS {
        return Some(first.to_string());
    }
    let mut title: String = first.chars().take(MAX_TITLE_CHARS).collect();
    title.push('…');
    Some(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn title_uses_first_user_line() {
        let messages = vec![
            Message::user("  Plan a trip\nwith details"),
            Message::assistant("Sure"),
        ];
        assert_eq!(conversation_title(&messages).as_deref(), Some("Plan a trip"));
    }

    #[test]
    fn long_titles_are_truncated() {
        let messages = vec![Message::user("x".repeat(50))];
        let title = conversation_title(&messages).unwrap();
        assert_eq!(title.chars().count(), MAX_TITLE_CHARS + 1);
        assert!(title.ends_with('…'));
    }

    #[test]
    fn empty_transcript_is_not_archived() {
        let mut history = SessionHistory::default();
        assert_eq!(history.archive(&[], day(22)), None);
        assert!(history.is_empty());
    }

    #[test]
    fn items_are_newest_first_with_buckets() {
        let mut history = SessionHistory::default();
        history.archive(&[Message::user("older")], day(21)).unwrap();
        history.archive(&[Message::user("newer")], day(22)).unwrap();

        let items = history.items(day(22));
        assert_eq!(history.len(), 2);
        assert_eq!(items[0].name, "newer");
        assert_eq!(items[0].date, DateBucket::Today);
        assert_eq!(items[1].name, "older");
        assert_eq!(items[1].date, DateBucket::Yesterday);
        assert_ne!(items[0].id, items[1].id);
    }
}
