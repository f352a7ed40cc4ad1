//! Date-bucket grouping for the side panel's conversation list.

use shared_types::{ChatHistoryItem, DateBucket};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryGroup {
    pub bucket: DateBucket,
    pub items: Vec<ChatHistoryItem>,
}

/// Group `items` by bucket.
///
/// Items keep their relative order inside a group. Groups follow
/// [`DateBucket::ORDERED`]; unrecognized labels come last, in the order they
/// first appear.
pub fn group_by_date(items: &[ChatHistoryItem]) -> Vec<HistoryGroup> {
    let mut groups: Vec<HistoryGroup> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|group| group.bucket == item.date) {
            Some(group) => group.items.push(item.clone()),
            None => groups.push(HistoryGroup {
                bucket: item.date.clone(),
                items: vec![item.clone()],
            }),
        }
    }

    // stable: unrecognized buckets keep first-appearance order
    groups.sort_by_key(|group| group.bucket.rank().unwrap_or(usize::MAX));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, date: &str) -> ChatHistoryItem {
        ChatHistoryItem {
            id: id.to_string(),
            name: format!("chat {id}"),
            date: DateBucket::parse(date),
        }
    }

    fn ids(group: &HistoryGroup) -> Vec<&str> {
        group.items.iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn groups_follow_fixed_order() {
        let items = vec![
            item("a", "today"),
            item("b", "last_week"),
            item("c", "today"),
            item("d", "this_week"),
        ];
        let groups = group_by_date(&items);

        let buckets: Vec<_> = groups.iter().map(|g| g.bucket.clone()).collect();
        assert_eq!(
            buckets,
            [DateBucket::Today, DateBucket::ThisWeek, DateBucket::LastWeek]
        );
        assert_eq!(ids(&groups[0]), ["a", "c"]);
        assert_eq!(ids(&groups[1]), ["d"]);
        assert_eq!(ids(&groups[2]), ["b"]);
        // input untouched
        assert_eq!(items[1].id, "b");
    }

    #[test]
    fn unrecognized_labels_sort_last_in_first_seen_order() {
        let items = vec![
            item("a", "2025-11"),
            item("b", "last_month"),
            item("c", "archived"),
            item("d", "2025-11"),
            item("e", "yesterday"),
        ];
        let groups = group_by_date(&items);

        let labels: Vec<_> = groups.iter().map(|g| g.bucket.label()).collect();
        assert_eq!(labels, ["yesterday", "last_month", "2025-11", "archived"]);
        assert_eq!(ids(&groups[2]), ["a", "d"]);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_date(&[]).is_empty());
    }
}
