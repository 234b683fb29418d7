//! Catalog query, index and removal behavior.

use bookstore_core::{Catalog, CatalogError, CatalogOptions, IndexRefresh};
use bookstore_model::{ComicBook, ItemKind, Literature, LiteraryItem, Magazine, ModelError, Novel};

fn novel(title: &str, author: &str, year: i32) -> Novel {
    Novel::new(title, author, year).unwrap()
}

fn classics() -> Catalog<Novel> {
    let mut catalog = Catalog::new("Classics");
    catalog.add(novel("1984", "George Orwell", 1949));
    catalog.add(novel("The Great Gatsby", "F. Scott Fitzgerald", 1925));
    catalog.add(novel("To Kill a Mockingbird", "Harper Lee", 1960));
    catalog
}

fn mixed() -> Catalog<Literature> {
    let mut catalog = Catalog::new("Mixed");
    catalog.add(novel("War and Peace", "Leo Tolstoy", 1869).into());
    catalog.add(ComicBook::new("Spider-Man", "Stan Lee", 1962).unwrap().into());
    catalog.add(Magazine::new("National Geographic", "Gilbert H. Grosvenor", 1888).unwrap().into());
    catalog.add(novel("Moby-Dick", "Herman Melville", 1851).into());
    catalog
}

fn titles<T: LiteraryItem>(items: Vec<&T>) -> Vec<&str> {
    items.into_iter().map(LiteraryItem::title).collect()
}

#[test]
fn end_to_end_classics() {
    let catalog = classics();
    assert_eq!(titles(catalog.items_with_title_length(4)), vec!["1984"]);
    assert_eq!(catalog.longest_title().unwrap(), "To Kill a Mockingbird");
    assert_eq!(catalog.count_titles_containing("the"), 1);
    assert_eq!(catalog.oldest().unwrap().title(), "The Great Gatsby");
}

#[test]
fn removal_only_shrinks_the_index() {
    let mut catalog = classics();
    catalog.build_title_index();
    assert_eq!(catalog.title_index().len(), 3);

    let removed = catalog.remove_where_title_contains("THE");
    assert_eq!(removed, 1);
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.title_index().len(), 2);
    assert!(!catalog.title_index().contains("The Great Gatsby"));
    assert_eq!(catalog.count_titles_containing("the"), 1);
}

#[test]
fn removed_index_entries_disappear_from_sorted_listing() {
    let mut catalog = classics();
    catalog.build_title_index();
    catalog.remove_where_title_contains("the");
    assert_eq!(
        titles(catalog.sorted_by_index()),
        vec!["1984", "To Kill a Mockingbird"]
    );
}

#[test]
fn manual_index_ignores_later_additions() {
    let mut catalog = classics();
    catalog.build_title_index();
    catalog.add(novel("Beloved", "Toni Morrison", 1987));

    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.title_index().len(), 3);
    assert!(catalog.lookup("Beloved").is_none());

    catalog.build_title_index();
    assert_eq!(catalog.lookup("Beloved").map(Novel::author), Some("Toni Morrison"));
}

#[test]
fn index_is_empty_until_built() {
    let catalog = classics();
    assert!(catalog.title_index().is_empty());
    assert!(catalog.sorted_by_index().is_empty());
}

#[test]
fn on_add_refresh_tracks_additions() {
    let options = CatalogOptions::default().with_index_refresh(IndexRefresh::OnAdd);
    let mut catalog = Catalog::new("Auto").with_options(options);
    catalog.add(novel("Emma", "Jane Austen", 1815));
    catalog.add(novel("Emma", "Someone Else", 2001));
    assert_eq!(catalog.options().index_refresh, IndexRefresh::OnAdd);
    assert_eq!(catalog.title_index().len(), 1);
    assert_eq!(catalog.lookup("Emma").map(Novel::author), Some("Someone Else"));
}

#[test]
fn duplicate_titles_collapse_to_last_inserted() {
    let mut catalog = classics();
    catalog.add(novel("1984", "Someone Else", 2010));
    catalog.build_title_index();
    assert_eq!(catalog.title_index().len(), 3);
    assert_eq!(
        catalog.lookup("1984").map(LiteraryItem::year_published),
        Some(2010)
    );
}

#[test]
fn sorted_by_index_uses_ordinal_order() {
    let mut catalog = Catalog::new("Ordinal");
    catalog.add(novel("beloved", "Toni Morrison", 1987));
    catalog.add(novel("Atonement", "Ian McEwan", 2001));
    catalog.add(novel("Ulysses", "James Joyce", 1922));
    catalog.build_title_index();
    assert_eq!(
        titles(catalog.sorted_by_index()),
        vec!["Atonement", "Ulysses", "beloved"]
    );
}

#[test]
fn alphabetical_ignores_case_and_is_stable() {
    let mut catalog = Catalog::new("Alpha");
    catalog.add(novel("emma", "First", 1815));
    catalog.add(novel("Dracula", "Bram Stoker", 1897));
    catalog.add(novel("Emma", "Second", 1996));
    catalog.add(novel("beloved", "Toni Morrison", 1987));

    let sorted = catalog.alphabetical();
    assert_eq!(titles(sorted.clone()), vec!["beloved", "Dracula", "emma", "Emma"]);
    assert_eq!(sorted[2].author(), "First");
    assert_eq!(sorted[3].author(), "Second");
    // The catalog itself keeps insertion order.
    assert_eq!(catalog.titles(), vec!["emma", "Dracula", "Emma", "beloved"]);
}

#[test]
fn decade_is_anchored_not_literal() {
    let mut catalog = Catalog::new("Decades");
    catalog.add(novel("Atonement", "Ian McEwan", 2001));
    catalog.add(novel("White Teeth", "Zadie Smith", 2000));
    catalog.add(novel("The Road", "Cormac McCarthy", 2006));
    catalog.add(novel("Wolf Hall", "Hilary Mantel", 2009));
    catalog.add(novel("Freedom", "Jonathan Franzen", 2010));
    catalog.add(novel("Disgrace", "J. M. Coetzee", 1999));

    let from_2005 = titles(catalog.by_decade(2005));
    let from_2000 = titles(catalog.by_decade(2000));
    assert_eq!(from_2005, from_2000);
    assert_eq!(from_2000, vec!["Atonement", "White Teeth", "The Road", "Wolf Hall"]);
}

#[test]
fn titles_containing_is_case_insensitive_in_collection_order() {
    let catalog = mixed();
    assert_eq!(
        titles(catalog.titles_containing("A")),
        vec!["War and Peace", "Spider-Man", "National Geographic"]
    );
    assert!(catalog.titles_containing("zz").is_empty());
}

#[test]
fn uppercase_titles_keep_order() {
    let catalog = classics();
    assert_eq!(
        catalog.uppercase_titles(),
        vec!["1984", "THE GREAT GATSBY", "TO KILL A MOCKINGBIRD"]
    );
}

#[test]
fn exists_published_in_matches_exact_year() {
    let catalog = classics();
    assert!(catalog.exists_published_in(1949));
    assert!(!catalog.exists_published_in(1950));
}

#[test]
fn percent_for_single_matching_year() {
    let catalog = classics();
    assert_eq!(catalog.percent_published_between(1925, 1925).unwrap(), 33);
    assert_eq!(catalog.percent_published_between(1900, 2000).unwrap(), 100);
}

#[test]
fn empty_catalog_fails_extremum_queries() {
    let catalog: Catalog<Novel> = Catalog::new("Empty");
    assert!(matches!(
        catalog.longest_title(),
        Err(CatalogError::EmptyCollection {
            operation: "longest_title"
        })
    ));
    assert!(matches!(
        catalog.oldest(),
        Err(CatalogError::EmptyCollection { operation: "oldest" })
    ));
    assert!(matches!(
        catalog.percent_published_between(1900, 2000),
        Err(CatalogError::EmptyCollection { .. })
    ));
    assert!(matches!(
        catalog.average_title_length(),
        Err(CatalogError::EmptyCollection { .. })
    ));
    assert!(catalog.stats().is_err());
}

#[test]
fn stats_summarize_the_catalog() {
    let catalog = classics();
    let stats = catalog.stats().unwrap();
    assert_eq!(stats.item_count, 3);
    assert_eq!(stats.longest_title, "To Kill a Mockingbird");
    assert_eq!(stats.oldest_title, "The Great Gatsby");
    assert_eq!(stats.oldest_year, 1925);
    assert!((stats.average_title_length - 41.0 / 3.0).abs() < 1e-9);
}

#[test]
fn novels_skip_other_variants() {
    let catalog = mixed();
    let novels = catalog.novels();
    let found: Vec<&str> = novels.iter().map(Novel::title).collect();
    assert_eq!(found, vec!["War and Peace", "Moby-Dick"]);

    let mut sink = vec![novel("Dune", "Frank Herbert", 1965)];
    catalog.collect_novels_into(&mut sink);
    assert_eq!(sink.len(), 3);
    assert_eq!(sink[0].title(), "Dune");
}

#[test]
fn edited_title_leaves_stale_index_key() {
    let mut catalog = mixed();
    catalog.build_title_index();
    if let Some(Literature::ComicBook(comic)) = catalog.get_mut(1) {
        comic.set_title("The Amazing Spider-Man").unwrap();
    }
    assert_eq!(catalog.titles()[1], "The Amazing Spider-Man");
    assert!(catalog.title_index().contains("Spider-Man"));
    assert_eq!(
        catalog.lookup("Spider-Man").map(LiteraryItem::title),
        Some("The Amazing Spider-Man")
    );
}

#[test]
fn removing_items_shrinks_both_collections() {
    let mut catalog = mixed();
    catalog.build_title_index();

    let removed = catalog.remove_items_where_title_contains("an");
    // "War and Peace" and "Spider-Man" match.
    assert_eq!(removed, 2);
    assert_eq!(catalog.titles(), vec!["National Geographic", "Moby-Dick"]);
    assert_eq!(catalog.title_index().len(), 2);
    assert_eq!(
        catalog.lookup("National Geographic").map(LiteraryItem::kind),
        Some(ItemKind::Magazine)
    );
    assert_eq!(catalog.lookup("Moby-Dick").map(LiteraryItem::kind), Some(ItemKind::Novel));
}

#[test]
fn try_extend_stops_at_first_invalid_item() {
    let mut catalog: Catalog<Literature> = Catalog::new("Bulk");
    let records = vec![
        Literature::new(ItemKind::Novel, "Dune", "Frank Herbert", 1965),
        Literature::new(ItemKind::Magazine, " ", "Nobody", 2000),
        Literature::new(ItemKind::ComicBook, "Maus", "Art Spiegelman", 1980),
    ];
    let error = catalog.try_extend(records).unwrap_err();
    assert!(matches!(error, CatalogError::Model(ModelError::BlankTitle)));
    assert_eq!(catalog.titles(), vec!["Dune"]);
}

#[test]
fn info_reports_name_and_count() {
    let catalog = classics();
    assert_eq!(catalog.info().to_string(), "BookStore: Classics, Items: 3");
}
