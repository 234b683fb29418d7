//! Text output of the report writers.

use bookstore_core::Catalog;
use bookstore_model::{ComicBook, Literature, Magazine, Novel};

fn store() -> Catalog<Literature> {
    let mut catalog = Catalog::new("The Greatest Bookstore");
    catalog.add(Novel::new("War and Peace", "Leo Tolstoy", 1869).unwrap().into());
    catalog.add(ComicBook::new("Spider-Man", "Stan Lee", 1962).unwrap().into());
    catalog.add(
        Magazine::new("National Geographic", "Gilbert H. Grosvenor", 1888)
            .unwrap()
            .into(),
    );
    catalog.add(Novel::new("the Hobbit", "J. R. R. Tolkien", 1937).unwrap().into());
    catalog
}

fn render<F>(write: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> bookstore_core::Result<()>,
{
    let mut out = Vec::new();
    write(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn print_all_lines() {
    let catalog = store();
    insta::assert_snapshot!(render(|out| catalog.print_all(out)), @r"
    The book War and Peace was written by Leo Tolstoy in 1869
    The book Spider-Man was written by Stan Lee in 1962
    The book National Geographic was written by Gilbert H. Grosvenor in 1888
    The book the Hobbit was written by J. R. R. Tolkien in 1937
    ");
}

#[test]
fn print_uppercase_titles_lines() {
    let catalog = store();
    insta::assert_snapshot!(render(|out| catalog.print_uppercase_titles(out)), @r"
    WAR AND PEACE
    SPIDER-MAN
    NATIONAL GEOGRAPHIC
    THE HOBBIT
    ");
}

#[test]
fn print_sorted_by_index_after_removal() {
    let mut catalog = store();
    catalog.build_title_index();
    catalog.remove_where_title_contains("THE");
    insta::assert_snapshot!(render(|out| catalog.print_sorted_by_index(out)), @r#"
    "National Geographic" by Gilbert H. Grosvenor (1888)
    "Spider-Man" by Stan Lee (1962)
    "War and Peace" by Leo Tolstoy (1869)
    "#);
}

#[test]
fn print_alphabetical_lines() {
    let catalog = store();
    insta::assert_snapshot!(render(|out| catalog.print_alphabetical(out)), @r"
    National Geographic
    Spider-Man
    the Hobbit
    War and Peace
    ");
}

#[test]
fn print_by_decade_and_search() {
    let catalog = store();
    assert_eq!(render(|out| catalog.print_by_decade(1865, out)), "War and Peace\n");
    assert_eq!(
        render(|out| catalog.print_titles_containing("man", out)),
        "Spider-Man\n"
    );
    assert_eq!(render(|out| catalog.print_titles_containing("xyz", out)), "");
}

#[test]
fn print_info_line() {
    let catalog = store();
    insta::assert_snapshot!(
        render(|out| catalog.print_info(out)),
        @"BookStore: The Greatest Bookstore, Items: 4"
    );
}
