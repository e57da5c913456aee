//! Local search over the cached notes.

use notes_types::Note;

/// Case-insensitive substring match on title or content. A missing field
/// counts as empty text, and the empty query matches every note.
pub fn matches(note: &Note, query: &str) -> bool {
    let query = query.to_lowercase();
    note.title_str().to_lowercase().contains(&query)
        || note.content_str().to_lowercase().contains(&query)
}

/// Notes matching `query`, in collection order.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    notes.iter().filter(|note| matches(note, query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn note(id: u64, title: Option<&str>, content: Option<&str>) -> Note {
        Note {
            id,
            title: title.map(Value::from),
            content: content.map(Value::from),
            color: None,
        }
    }

    #[test]
    fn test_query_matches_content_case_insensitively() {
        let notes = vec![
            note(1, Some("Groceries"), None),
            note(2, Some("Work"), Some("email boss")),
        ];

        let ids: Vec<u64> = filter_notes(&notes, "bo").iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2]);

        let ids: Vec<u64> = filter_notes(&notes, "BO").iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_query_matches_title() {
        let notes = vec![note(1, Some("Groceries"), Some("milk")), note(2, Some("Work"), None)];
        let ids: Vec<u64> = filter_notes(&notes, "gRoC").iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let notes = vec![note(3, None, None), note(1, Some("a"), None), note(2, None, Some("b"))];
        let ids: Vec<u64> = filter_notes(&notes, "").iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_missing_fields_never_match_non_empty_query() {
        assert!(!matches(&note(1, None, None), "x"));
    }
}
