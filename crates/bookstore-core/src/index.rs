//! Title index: a derived mapping from title to item position.

use std::collections::BTreeMap;

use bookstore_model::LiteraryItem;

/// Maps titles to positions in the owning catalog's item list.
///
/// Keys iterate in ordinal order. Entries are not refreshed when items are
/// added or edited; the catalog decides when to rebuild.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleIndex {
    entries: BTreeMap<String, usize>,
}

impl TitleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the index and inserts every item; the last item wins on a
    /// duplicate title.
    pub(crate) fn rebuild<T: LiteraryItem>(&mut self, items: &[T]) {
        self.entries.clear();
        for (position, item) in items.iter().enumerate() {
            self.insert(item.title(), position);
        }
    }

    pub(crate) fn insert(&mut self, title: &str, position: usize) {
        self.entries.insert(title.to_string(), position);
    }

    /// Drops every key containing `needle` (case-insensitive) and returns how
    /// many were dropped.
    pub(crate) fn remove_containing(&mut self, needle: &str) -> usize {
        let needle = needle.to_lowercase();
        let before = self.entries.len();
        self.entries
            .retain(|title, _| !title.to_lowercase().contains(&needle));
        before - self.entries.len()
    }

    /// Rewrites positions after items were removed from the catalog.
    /// `remap[old]` is the new position, or `None` when the item is gone.
    pub(crate) fn remap(&mut self, remap: &[Option<usize>]) {
        self.entries.retain(|_, position| {
            match remap.get(*position).copied().flatten() {
                Some(new_position) => {
                    *position = new_position;
                    true
                }
                None => false,
            }
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.entries.contains_key(title)
    }

    pub fn position(&self, title: &str) -> Option<usize> {
        self.entries.get(title).copied()
    }

    /// Index keys in ordinal order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(title, position)` pairs in ordinal title order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(title, position)| (title.as_str(), *position))
    }
}
