//! Literary items: novels, comic books and magazines behind one accessor
//! contract.

pub mod comic_book;
pub mod error;
pub mod item;
pub mod magazine;
pub mod novel;
mod validate;

pub use comic_book::ComicBook;
pub use error::{ModelError, Result};
pub use item::{ItemKind, Literature, LiteraryItem};
pub use magazine::Magazine;
pub use novel::Novel;
pub use validate::{CURRENT_YEAR, MIN_YEAR};
