use std::cmp::Ordering;
use std::fmt;

use crate::error::Result;
use crate::validate;
use crate::{ItemKind, LiteraryItem};

/// A novel. All fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Novel {
    title: String,
    author: String,
    year_published: i32,
}

impl Novel {
    /// Validates title, author and year (in that order) and builds the novel.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year_published: i32,
    ) -> Result<Self> {
        let title = validate::title(title)?;
        let author = validate::author(author)?;
        let year_published = validate::year_published(year_published)?;
        Ok(Self {
            title,
            author,
            year_published,
        })
    }

    /// Ordinal (case-sensitive) comparison of the two titles.
    pub fn cmp_by_title(&self, other: &Self) -> Ordering {
        self.title.cmp(&other.title)
    }
}

impl LiteraryItem for Novel {
    fn title(&self) -> &str {
        &self.title
    }

    fn author(&self) -> &str {
        &self.author
    }

    fn year_published(&self) -> i32 {
        self.year_published
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Novel
    }

    fn as_novel(&self) -> Option<&Novel> {
        Some(self)
    }
}

impl fmt::Display for Novel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.citation())
    }
}
