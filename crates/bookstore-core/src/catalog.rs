//! The catalog: an ordered, single-owner collection of literary items.

use std::ops::RangeInclusive;

use bookstore_model::{LiteraryItem, Novel};
use tracing::debug;

use crate::error::Result;
use crate::index::TitleIndex;
use crate::info::StoreInfo;
use crate::options::{CatalogOptions, IndexRefresh};

const DECADE_IN_YEARS: i32 = 10;

/// A named collection of literary items plus a derived title index.
///
/// Items keep insertion order. The title index is only as fresh as the last
/// [`Catalog::build_title_index`] call unless the catalog was configured with
/// [`IndexRefresh::OnAdd`].
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    name: String,
    items: Vec<T>,
    title_index: TitleIndex,
    options: CatalogOptions,
}

impl<T: LiteraryItem> Catalog<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            title_index: TitleIndex::new(),
            options: CatalogOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: CatalogOptions) -> Self {
        self.options = options;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> CatalogOptions {
        self.options
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&T> {
        self.items.get(position)
    }

    /// Mutable access for the variants with setters. Editing a title does not
    /// touch the title index.
    pub fn get_mut(&mut self, position: usize) -> Option<&mut T> {
        self.items.get_mut(position)
    }

    pub fn info(&self) -> StoreInfo<'_> {
        StoreInfo::new(&self.name, self.items.len())
    }

    pub fn add(&mut self, item: T) {
        debug!(
            catalog = %self.name,
            title = item.title(),
            kind = %item.kind(),
            "item added"
        );
        if self.options.index_refresh == IndexRefresh::OnAdd {
            self.title_index.insert(item.title(), self.items.len());
        }
        self.items.push(item);
    }

    /// Adds every successfully built item, stopping at the first failure.
    /// Items before the failing one stay in the catalog.
    pub fn try_extend<I>(&mut self, items: I) -> Result<usize>
    where
        I: IntoIterator<Item = bookstore_model::Result<T>>,
    {
        let mut added = 0usize;
        for item in items {
            self.add(item?);
            added += 1;
        }
        Ok(added)
    }

    pub fn build_title_index(&mut self) {
        self.title_index.rebuild(&self.items);
        debug!(
            catalog = %self.name,
            entries = self.title_index.len(),
            items = self.items.len(),
            "title index rebuilt"
        );
    }

    pub fn title_index(&self) -> &TitleIndex {
        &self.title_index
    }

    /// Looks a title up through the index (exact, case-sensitive).
    pub fn lookup(&self, title: &str) -> Option<&T> {
        self.title_index
            .position(title)
            .and_then(|position| self.items.get(position))
    }

    /// Removes index entries whose title contains `needle` (case-insensitive).
    ///
    /// Only the index shrinks; `items` is left untouched. Returns the number
    /// of index entries removed.
    pub fn remove_where_title_contains(&mut self, needle: &str) -> usize {
        let removed = self.title_index.remove_containing(needle);
        debug!(
            catalog = %self.name,
            needle,
            removed,
            remaining = self.title_index.len(),
            "index entries removed"
        );
        removed
    }

    /// Removes matching items from both `items` and the title index.
    ///
    /// Matching uses each item's current title, and index keys are filtered
    /// with the same needle. Returns the number of items removed.
    pub fn remove_items_where_title_contains(&mut self, needle: &str) -> usize {
        let lowered = needle.to_lowercase();
        let mut remap = Vec::with_capacity(self.items.len());
        let mut next = 0usize;
        for item in &self.items {
            if contains_ignore_case(item.title(), &lowered) {
                remap.push(None);
            } else {
                remap.push(Some(next));
                next += 1;
            }
        }
        let removed = self.items.len() - next;
        let mut keep = remap.iter().map(Option::is_some);
        self.items.retain(|_| keep.next().unwrap_or(false));
        self.title_index.remap(&remap);
        self.title_index.remove_containing(needle);
        debug!(
            catalog = %self.name,
            needle,
            removed,
            remaining = self.items.len(),
            "items removed"
        );
        removed
    }

    /// Every title in collection order.
    pub fn titles(&self) -> Vec<&str> {
        self.items.iter().map(LiteraryItem::title).collect()
    }

    pub fn uppercase_titles(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| item.title().to_uppercase())
            .collect()
    }

    /// Items behind the index keys, in ordinal key order.
    pub fn sorted_by_index(&self) -> Vec<&T> {
        self.title_index
            .iter()
            .filter_map(|(_, position)| self.items.get(position))
            .collect()
    }

    /// Items whose title contains `needle` (case-insensitive), collection order.
    pub fn titles_containing(&self, needle: &str) -> Vec<&T> {
        let needle = needle.to_lowercase();
        self.items
            .iter()
            .filter(|item| contains_ignore_case(item.title(), &needle))
            .collect()
    }

    /// Items sorted by case-insensitive title; equal keys keep insertion order.
    pub fn alphabetical(&self) -> Vec<&T> {
        let mut sorted: Vec<&T> = self.items.iter().collect();
        sorted.sort_by_cached_key(|item| item.title().to_lowercase());
        sorted
    }

    /// Items published in the decade containing `year`.
    pub fn by_decade(&self, year: i32) -> Vec<&T> {
        let decade = decade_bounds(year);
        self.items
            .iter()
            .filter(|item| decade.contains(&item.year_published()))
            .collect()
    }

    /// Items whose title is exactly `length` characters long.
    pub fn items_with_title_length(&self, length: usize) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| title_len(item.title()) == length)
            .collect()
    }

    /// Copies of every novel in the catalog, collection order.
    pub fn novels(&self) -> Vec<Novel> {
        let mut novels = Vec::new();
        self.collect_novels_into(&mut novels);
        novels
    }

    /// Appends a copy of every novel to `sink`, skipping other variants.
    pub fn collect_novels_into<E: Extend<Novel>>(&self, sink: &mut E) {
        sink.extend(
            self.items
                .iter()
                .filter_map(LiteraryItem::as_novel)
                .cloned(),
        );
    }
}

impl<T: LiteraryItem> Extend<T> for Catalog<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

/// The decade `start..=start + 9` with `start = year - year % 10`, capped at `i32::MAX`.
pub fn decade_bounds(year: i32) -> RangeInclusive<i32> {
    let start = year - year % DECADE_IN_YEARS;
    start..=start.saturating_add(DECADE_IN_YEARS - 1)
}

/// Title length in characters.
pub(crate) fn title_len(title: &str) -> usize {
    title.chars().count()
}

/// `needle` must already be lowercase.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
