//! The accessor contract shared by every literary item, plus the closed
//! [`Literature`] union used by mixed catalogs.

use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, Result};
use crate::{ComicBook, Magazine, Novel};

/// Uniform read-only view over a literary item.
///
/// Catalogs are generic over this trait, so they work for a single variant
/// (`Catalog<Novel>`) as well as for the mixed [`Literature`] union.
pub trait LiteraryItem {
    fn title(&self) -> &str;

    fn author(&self) -> &str;

    fn year_published(&self) -> i32;

    fn kind(&self) -> ItemKind;

    /// Returns the item as a novel when it is one.
    fn as_novel(&self) -> Option<&Novel> {
        None
    }

    /// Formats the item as `"<title>" by <author> (<year>)`.
    fn citation(&self) -> String {
        format!(
            "\"{}\" by {} ({})",
            self.title(),
            self.author(),
            self.year_published()
        )
    }
}

/// The variant of a literary item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemKind {
    Novel,
    ComicBook,
    Magazine,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Novel => "Novel",
            ItemKind::ComicBook => "Comic Book",
            ItemKind::Magazine => "Magazine",
        }
    }

    /// Returns true if items of this kind expose setters after construction.
    pub fn is_mutable(&self) -> bool {
        matches!(self, ItemKind::ComicBook | ItemKind::Magazine)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = ModelError;

    /// Accepts `novel`, `comic`, `comic book`, `comic-book` and `magazine`,
    /// case-insensitive.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "NOVEL" => Ok(ItemKind::Novel),
            "COMIC" | "COMIC BOOK" | "COMICBOOK" => Ok(ItemKind::ComicBook),
            "MAGAZINE" => Ok(ItemKind::Magazine),
            _ => Err(ModelError::UnknownKind(s.to_string())),
        }
    }
}

/// Any literary item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literature {
    Novel(Novel),
    ComicBook(ComicBook),
    Magazine(Magazine),
}

impl Literature {
    /// Builds and validates an item of the given kind.
    pub fn new(
        kind: ItemKind,
        title: impl Into<String>,
        author: impl Into<String>,
        year_published: i32,
    ) -> Result<Self> {
        Ok(match kind {
            ItemKind::Novel => Novel::new(title, author, year_published)?.into(),
            ItemKind::ComicBook => ComicBook::new(title, author, year_published)?.into(),
            ItemKind::Magazine => Magazine::new(title, author, year_published)?.into(),
        })
    }

    fn inner(&self) -> &dyn LiteraryItem {
        match self {
            Literature::Novel(novel) => novel,
            Literature::ComicBook(comic) => comic,
            Literature::Magazine(magazine) => magazine,
        }
    }
}

impl LiteraryItem for Literature {
    fn title(&self) -> &str {
        self.inner().title()
    }

    fn author(&self) -> &str {
        self.inner().author()
    }

    fn year_published(&self) -> i32 {
        self.inner().year_published()
    }

    fn kind(&self) -> ItemKind {
        self.inner().kind()
    }

    fn as_novel(&self) -> Option<&Novel> {
        match self {
            Literature::Novel(novel) => Some(novel),
            _ => None,
        }
    }
}

impl From<Novel> for Literature {
    fn from(value: Novel) -> Self {
        Literature::Novel(value)
    }
}

impl From<ComicBook> for Literature {
    fn from(value: ComicBook) -> Self {
        Literature::ComicBook(value)
    }
}

impl From<Magazine> for Literature {
    fn from(value: Magazine) -> Self {
        Literature::Magazine(value)
    }
}

impl fmt::Display for Literature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.citation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_kind_from_str() {
        assert_eq!("novel".parse::<ItemKind>().unwrap(), ItemKind::Novel);
        assert_eq!("Comic-Book".parse::<ItemKind>().unwrap(), ItemKind::ComicBook);
        assert_eq!("comic".parse::<ItemKind>().unwrap(), ItemKind::ComicBook);
        assert_eq!("MAGAZINE".parse::<ItemKind>().unwrap(), ItemKind::Magazine);
        assert!("pamphlet".parse::<ItemKind>().is_err());
    }

    #[test]
    fn test_only_novels_are_immutable() {
        assert!(!ItemKind::Novel.is_mutable());
        assert!(ItemKind::ComicBook.is_mutable());
        assert!(ItemKind::Magazine.is_mutable());
    }

    #[test]
    fn literature_delegates_to_variant() {
        let item = Literature::new(ItemKind::Magazine, "National Geographic", "Various", 1888)
            .unwrap();
        assert_eq!(item.title(), "National Geographic");
        assert_eq!(item.kind(), ItemKind::Magazine);
        assert!(item.as_novel().is_none());
        assert_eq!(item.to_string(), "\"National Geographic\" by Various (1888)");
    }
}
