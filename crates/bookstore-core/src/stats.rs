//! Aggregate queries: extremes, counts and percentages over catalog items.

use bookstore_model::LiteraryItem;
use tracing::warn;

use crate::catalog::{Catalog, contains_ignore_case, title_len};
use crate::error::{CatalogError, Result};

const PERCENT_SHIFT: usize = 100;

impl<T: LiteraryItem> Catalog<T> {
    /// The longest title by character count. The first title wins on ties.
    pub fn longest_title(&self) -> Result<&str> {
        let (first, rest) = self.split_first_item("longest_title")?;
        let mut longest = first.title();
        let mut longest_len = title_len(longest);
        for item in rest {
            let len = title_len(item.title());
            if len > longest_len {
                longest = item.title();
                longest_len = len;
            }
        }
        Ok(longest)
    }

    /// The item with the smallest publication year. The first item wins on
    /// ties.
    pub fn oldest(&self) -> Result<&T> {
        let (first, rest) = self.split_first_item("oldest")?;
        let mut oldest = first;
        for item in rest {
            if item.year_published() < oldest.year_published() {
                oldest = item;
            }
        }
        Ok(oldest)
    }

    /// True when any item was published in `year`. False for an empty catalog.
    pub fn exists_published_in(&self, year: i32) -> bool {
        self.items()
            .iter()
            .any(|item| item.year_published() == year)
    }

    /// Number of titles containing `word`, case-insensitive.
    pub fn count_titles_containing(&self, word: &str) -> usize {
        let word = word.to_lowercase();
        self.items()
            .iter()
            .filter(|item| contains_ignore_case(item.title(), &word))
            .count()
    }

    /// Whole percentage of items published in `first..=last`, truncated.
    pub fn percent_published_between(&self, first: i32, last: i32) -> Result<usize> {
        let total = self.require_items("percent_published_between")?;
        let count = self
            .items()
            .iter()
            .filter(|item| (first..=last).contains(&item.year_published()))
            .count();
        Ok(count * PERCENT_SHIFT / total)
    }

    pub fn average_title_length(&self) -> Result<f64> {
        let total = self.require_items("average_title_length")?;
        let sum: usize = self
            .items()
            .iter()
            .map(|item| title_len(item.title()))
            .sum();
        Ok(sum as f64 / total as f64)
    }

    /// Summary numbers for reporting.
    pub fn stats(&self) -> Result<CatalogStats<'_>> {
        let oldest = self.oldest()?;
        Ok(CatalogStats {
            item_count: self.len(),
            longest_title: self.longest_title()?,
            oldest_title: oldest.title(),
            oldest_year: oldest.year_published(),
            average_title_length: self.average_title_length()?,
        })
    }

    fn split_first_item(&self, operation: &'static str) -> Result<(&T, &[T])> {
        self.items()
            .split_first()
            .ok_or_else(|| empty_collection(self.name(), operation))
    }

    fn require_items(&self, operation: &'static str) -> Result<usize> {
        match self.len() {
            0 => Err(empty_collection(self.name(), operation)),
            total => Ok(total),
        }
    }
}

fn empty_collection(catalog: &str, operation: &'static str) -> CatalogError {
    warn!(catalog, operation, "query on empty catalog");
    CatalogError::EmptyCollection { operation }
}

/// Headline numbers for a non-empty catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStats<'a> {
    pub item_count: usize,
    pub longest_title: &'a str,
    pub oldest_title: &'a str,
    pub oldest_year: i32,
    pub average_title_length: f64,
}
