//! Identity-keyed snapshots of destination resources.

use crate::model::{Issue, Label, Milestone};
use std::collections::HashMap;

/// Extracts the identity key of an entity.
pub trait Keyed {
    /// Returns the key this entity is matched by.
    fn key(&self) -> &str;
}

impl Keyed for Milestone {
    fn key(&self) -> &str {
        &self.title
    }
}

impl Keyed for Label {
    fn key(&self) -> &str {
        &self.name
    }
}

impl Keyed for Issue {
    fn key(&self) -> &str {
        &self.title
    }
}

/// An in-memory snapshot of destination entities keyed by identity.
///
/// Built once from a full listing and read-only afterwards. If the listing
/// contains the same key twice, the entry seen last wins.
#[derive(Debug, Clone)]
pub struct LookupTable<T> {
    entries: HashMap<String, T>,
}

impl<T> Default for LookupTable<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T> LookupTable<T> {
    /// Builds a table, deriving each key with `key_fn`.
    pub fn from_entries_by<F>(entries: impl IntoIterator<Item = T>, mut key_fn: F) -> Self
    where
        F: FnMut(&T) -> Option<String>,
    {
        let entries = entries
            .into_iter()
            .filter_map(|entry| key_fn(&entry).map(|key| (key, entry)))
            .collect();
        Self { entries }
    }

    /// Looks up an entry by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    /// Returns true if an entry with this key exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Keyed> LookupTable<T> {
    /// Builds a table keyed by each entry's identity key.
    pub fn from_entries(entries: impl IntoIterator<Item = T>) -> Self {
        Self::from_entries_by(entries, |entry| Some(entry.key().to_string()))
    }

    /// Adds `entry` unless its key is already present.
    pub fn insert_if_absent(&mut self, entry: T) {
        self.entries
            .entry(entry.key().to_string())
            .or_insert(entry);
    }
}

impl<T: Keyed> FromIterator<T> for LookupTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(id: i64, name: &str) -> Label {
        Label {
            id,
            name: name.to_string(),
            description: String::new(),
            color: "#ffffff".to_string(),
        }
    }

    #[test]
    fn last_seen_entry_wins() {
        let table: LookupTable<Label> =
            vec![label(1, "bug"), label(2, "feature"), label(3, "bug")]
                .into_iter()
                .collect();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("bug").map(|l| l.id), Some(3));
    }

    #[test]
    fn keys_are_case_sensitive() {
        let table = LookupTable::from_entries(vec![label(1, "Bug")]);

        assert!(table.contains("Bug"));
        assert!(!table.contains("bug"));
    }

    #[test]
    fn insert_if_absent_keeps_existing_entry() {
        let mut table = LookupTable::from_entries(vec![label(1, "bug")]);

        table.insert_if_absent(label(-1, "bug"));
        table.insert_if_absent(label(-2, "ui"));

        assert_eq!(table.get("bug").map(|l| l.id), Some(1));
        assert_eq!(table.get("ui").map(|l| l.id), Some(-2));
    }

    #[test]
    fn custom_key_can_skip_entries() {
        let table = LookupTable::from_entries_by(vec![label(1, "a"), label(2, "b")], |l| {
            (l.id == 2).then(|| format!("id:{}", l.id))
        });

        assert_eq!(table.len(), 1);
        assert!(table.contains("id:2"));
    }
}
