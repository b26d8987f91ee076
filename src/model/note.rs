use chrono::{DateTime, Local};

use super::id::IdGen;

/// Opaque note identifier, unique within a `NoteStore` for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteId(u64);

/// A free-text note. Never mutated after creation.
#[derive(Debug, Clone)]
pub struct Note {
    pub id: NoteId,
    pub text: String,
    /// Wall-clock creation time, display metadata only
    pub created: DateTime<Local>,
}

/// Ordered note collection, newest first
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
    ids: IdGen,
}

impl NoteStore {
    pub fn new() -> Self {
        NoteStore::default()
    }

    /// Add a note from raw input, prepending it to the list.
    /// Whitespace-only input is silently ignored.
    pub fn add(&mut self, raw: &str) -> Option<NoteId> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        let id = NoteId(self.ids.next_id());
        self.notes.insert(
            0,
            Note {
                id,
                text: text.to_string(),
                created: Local::now(),
            },
        );
        Some(id)
    }

    /// Remove a note. Unknown IDs are ignored.
    pub fn delete(&mut self, id: NoteId) {
        self.notes.retain(|n| n.id != id);
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_and_delete() {
        let mut store = NoteStore::new();
        let id = store.add("Buy milk").unwrap();
        assert_eq!(store.notes().len(), 1);
        assert_eq!(store.notes()[0].text, "Buy milk");

        store.delete(id);
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut store = NoteStore::new();
        assert_eq!(store.add("  \n  "), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_newest_first() {
        let mut store = NoteStore::new();
        store.add("older").unwrap();
        store.add("newer").unwrap();
        let texts: Vec<&str> = store.notes().iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["newer", "older"]);
    }

    #[test]
    fn test_multiline_text_survives_trim() {
        let mut store = NoteStore::new();
        store.add("  line one\nline two  ").unwrap();
        assert_eq!(store.notes()[0].text, "line one\nline two");
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = NoteStore::new();
        let id = store.add("only").unwrap();
        store.delete(id);
        store.delete(id);
        assert!(store.is_empty());
    }
}
