//! Name list management
//!
//! Holds the ordered entries shown on the wheel. Every operation is total:
//! blank names and unknown ids are silently ignored.

use uuid::Uuid;

/// A single name on the wheel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Session-unique identifier
    pub id: String,
    /// Display text, always trimmed and non-empty
    pub text: String,
}

impl Entry {
    fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text,
        }
    }
}

/// Ordered collection of entries
#[derive(Debug, Default, Clone)]
pub struct NameList {
    entries: Vec<Entry>,
}

impl NameList {
    /// Append a name. Returns the new entry, or `None` if the trimmed text is empty.
    pub fn add(&mut self, text: &str) -> Option<&Entry> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.entries.push(Entry::new(text.to_string()));
        self.entries.last()
    }

    /// Remove the entry with the given id. Returns the removed entry, if any.
    pub fn remove(&mut self, id: &str) -> Option<Entry> {
        let index = self.position(id)?;
        Some(self.entries.remove(index))
    }

    /// Index of the entry with the given id
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
