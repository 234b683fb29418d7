use std::fmt;

use crate::error::Result;
use crate::validate;
use crate::{ItemKind, LiteraryItem};

/// A comic book. Fields can be replaced after construction; every setter
/// applies the same checks as [`ComicBook::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComicBook {
    title: String,
    author: String,
    year_published: i32,
}

impl ComicBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year_published: i32,
    ) -> Result<Self> {
        Ok(Self {
            title: validate::title(title)?,
            author: validate::author(author)?,
            year_published: validate::year_published(year_published)?,
        })
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        self.title = validate::title(title)?;
        Ok(())
    }

    pub fn set_author(&mut self, author: impl Into<String>) -> Result<()> {
        self.author = validate::author(author)?;
        Ok(())
    }

    pub fn set_year_published(&mut self, year_published: i32) -> Result<()> {
        self.year_published = validate::year_published(year_published)?;
        Ok(())
    }
}

impl LiteraryItem for ComicBook {
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
        ItemKind::ComicBook
    }
}

impl fmt::Display for ComicBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.citation())
    }
}
