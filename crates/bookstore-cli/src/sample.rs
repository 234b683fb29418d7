//! Bundled sample data for the store.

use bookstore_core::{Catalog, CatalogOptions, Result};
use bookstore_model::{ItemKind, Literature};
use tracing::info;

/// `(kind, title, author, year)` rows loaded by [`sample_catalog`].
pub const SAMPLE_ITEMS: &[(ItemKind, &str, &str, i32)] = &[
    (ItemKind::Novel, "War and Peace", "Leo Tolstoy", 1869),
    (ItemKind::ComicBook, "Spider-Man", "Stan Lee", 1962),
    (ItemKind::Magazine, "National Geographic", "Gilbert H. Grosvenor", 1888),
    (ItemKind::Novel, "1984", "George Orwell", 1949),
    (ItemKind::Novel, "The Great Gatsby", "F. Scott Fitzgerald", 1925),
    (ItemKind::Novel, "To Kill a Mockingbird", "Harper Lee", 1960),
    (ItemKind::Novel, "Pride and Prejudice", "Jane Austen", 1813),
    (ItemKind::Novel, "The Catcher in the Rye", "J.D. Salinger", 1951),
    (ItemKind::Novel, "Moby-Dick", "Herman Melville", 1851),
    (ItemKind::Novel, "The Hobbit", "J.R.R. Tolkien", 1937),
    (ItemKind::Novel, "Brave New World", "Aldous Huxley", 1932),
    (ItemKind::Novel, "Frankenstein", "Mary Shelley", 1818),
    (ItemKind::Novel, "Jane Eyre", "Charlotte Brontë", 1847),
    (ItemKind::Novel, "The Road", "Cormac McCarthy", 2006),
    (ItemKind::Novel, "Beloved", "Toni Morrison", 1987),
    (ItemKind::Novel, "Atonement", "Ian McEwan", 2001),
    (ItemKind::Novel, "Life of Pi", "Yann Martel", 2001),
    (ItemKind::ComicBook, "Watchmen", "Alan Moore", 1986),
    (ItemKind::ComicBook, "Maus", "Art Spiegelman", 1980),
    (ItemKind::Magazine, "The New Yorker", "Harold Ross", 1925),
];

/// Builds the sample store with the given options.
pub fn sample_catalog(name: &str, options: CatalogOptions) -> Result<Catalog<Literature>> {
    let mut catalog = Catalog::new(name).with_options(options);
    let added = catalog.try_extend(
        SAMPLE_ITEMS
            .iter()
            .map(|&(kind, title, author, year)| Literature::new(kind, title, author, year)),
    )?;
    info!(
        catalog = name,
        items = added,
        index_refresh = %options.index_refresh,
        "sample catalog loaded"
    );
    Ok(catalog)
}
