use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use bookstore_core::{Catalog, decade_bounds};
use bookstore_model::{ItemKind, Literature, LiteraryItem, Novel};

use crate::summary::{OutputStyle, items_table, stats_table};

/// How `list` presents the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    Table,
    Lines,
    Uppercase,
    Alphabetical,
}

/// Optional figures for `stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsQuery {
    pub from: i32,
    pub to: i32,
    pub year: Option<i32>,
    pub title_length: Option<usize>,
}

/// How `sorted` trims the catalog before printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion<'a> {
    None,
    /// Drop matching entries from the title index only.
    IndexOnly(&'a str),
    /// Drop matching items from the catalog and the index.
    Items(&'a str),
}

pub fn run_list<W: Write>(
    catalog: &Catalog<Literature>,
    view: ListView,
    kind: Option<ItemKind>,
    style: OutputStyle,
    out: &mut W,
) -> Result<()> {
    let filtered;
    let catalog = match kind {
        Some(kind) => {
            filtered = only_kind(catalog, kind);
            &filtered
        }
        None => catalog,
    };
    info!(items = catalog.len(), ?view, "listing catalog");
    match view {
        ListView::Table => {
            let items: Vec<&Literature> = catalog.items().iter().collect();
            writeln!(out, "{}", items_table(&items, style))?;
        }
        ListView::Lines => catalog.print_all(out)?,
        ListView::Uppercase => catalog.print_uppercase_titles(out)?,
        ListView::Alphabetical => catalog.print_alphabetical(out)?,
    }
    Ok(())
}

pub fn run_search<W: Write>(
    catalog: &Catalog<Literature>,
    word: &str,
    style: OutputStyle,
    out: &mut W,
) -> Result<()> {
    let count = catalog.count_titles_containing(word);
    info!(word, count, "search complete");
    writeln!(out, "{count} title(s) contain \"{word}\"")?;
    if count > 0 {
        let matches = catalog.titles_containing(word);
        writeln!(out, "{}", items_table(&matches, style))?;
    }
    Ok(())
}

pub fn run_decade<W: Write>(catalog: &Catalog<Literature>, year: i32, out: &mut W) -> Result<()> {
    let decade = decade_bounds(year);
    writeln!(out, "Published {}-{}:", decade.start(), decade.end())?;
    if catalog.by_decade(year).is_empty() {
        writeln!(out, "(none)")?;
    } else {
        catalog.print_by_decade(year, out)?;
    }
    Ok(())
}

pub fn run_sorted<W: Write>(
    catalog: &mut Catalog<Literature>,
    exclusion: Exclusion<'_>,
    out: &mut W,
) -> Result<()> {
    catalog.build_title_index();
    match exclusion {
        Exclusion::None => {}
        Exclusion::IndexOnly(needle) => {
            let removed = catalog.remove_where_title_contains(needle);
            writeln!(
                out,
                "Removed {removed} index entr{} containing \"{needle}\"; {} item(s) remain in the store",
                if removed == 1 { "y" } else { "ies" },
                catalog.len()
            )?;
        }
        Exclusion::Items(needle) => {
            let removed = catalog.remove_items_where_title_contains(needle);
            writeln!(
                out,
                "Removed {removed} item(s) containing \"{needle}\"; {} item(s) remain in the store",
                catalog.len()
            )?;
        }
    }
    catalog.print_sorted_by_index(out)?;
    Ok(())
}

pub fn run_stats<W: Write>(
    catalog: &Catalog<Literature>,
    query: StatsQuery,
    style: OutputStyle,
    out: &mut W,
) -> Result<()> {
    let stats = catalog.stats().context("compute catalog statistics")?;
    let percent = catalog
        .percent_published_between(query.from, query.to)
        .context("compute publication percentage")?;
    let mut extra = vec![(
        format!("Published {}-{}", query.from, query.to),
        format!("{percent}%"),
    )];
    if let Some(year) = query.year {
        let answer = if catalog.exists_published_in(year) {
            "yes"
        } else {
            "no"
        };
        extra.push((format!("Published in {year}"), answer.to_string()));
    }
    if let Some(length) = query.title_length {
        let titles: Vec<&str> = catalog
            .items_with_title_length(length)
            .into_iter()
            .map(LiteraryItem::title)
            .collect();
        let value = if titles.is_empty() {
            "-".to_string()
        } else {
            titles.join(", ")
        };
        extra.push((format!("Titles of length {length}"), value));
    }
    writeln!(out, "{}", stats_table(&stats, &extra, style))?;
    Ok(())
}

pub fn run_novels<W: Write>(
    catalog: &Catalog<Literature>,
    style: OutputStyle,
    out: &mut W,
) -> Result<()> {
    let mut novels: Vec<Novel> = Vec::new();
    catalog.collect_novels_into(&mut novels);
    novels.sort_by(Novel::cmp_by_title);
    let rows: Vec<&Novel> = novels.iter().collect();
    writeln!(out, "{}", items_table(&rows, style))?;
    Ok(())
}

/// Runs every report in sequence, the way the store is showcased.
pub fn run_demo<W: Write>(catalog: &mut Catalog<Literature>, out: &mut W) -> Result<()> {
    let demo_span = info_span!("demo", catalog = %catalog.name());
    let _demo_guard = demo_span.enter();

    catalog.print_info(out)?;

    heading(out, "All items")?;
    catalog.print_all(out)?;

    heading(out, "Uppercase titles")?;
    catalog.print_uppercase_titles(out)?;

    heading(out, "Titles containing \"the\"")?;
    catalog.print_titles_containing("the", out)?;

    heading(out, "Alphabetical")?;
    catalog.print_alphabetical(out)?;

    heading(out, "Published in the 2000s")?;
    catalog.print_by_decade(2000, out)?;

    heading(out, "Highlights")?;
    writeln!(out, "Longest title: {}", catalog.longest_title()?)?;
    writeln!(out, "Oldest item: {}", catalog.oldest()?.citation())?;
    writeln!(
        out,
        "Anything published in 1925: {}",
        if catalog.exists_published_in(1925) {
            "yes"
        } else {
            "no"
        }
    )?;
    writeln!(
        out,
        "Titles containing \"the\": {}",
        catalog.count_titles_containing("the")
    )?;
    writeln!(
        out,
        "Published 1800-1900: {}%",
        catalog.percent_published_between(1800, 1900)?
    )?;
    let four: Vec<&str> = catalog
        .items_with_title_length(4)
        .into_iter()
        .map(LiteraryItem::title)
        .collect();
    writeln!(out, "Titles of length 4: {}", four.join(", "))?;
    writeln!(
        out,
        "Average title length: {:.2}",
        catalog.average_title_length()?
    )?;
    writeln!(out, "Novels: {}", catalog.novels().len())?;

    heading(out, "Sorted by title index, without \"the\"")?;
    catalog.build_title_index();
    catalog.remove_where_title_contains("the");
    catalog.print_sorted_by_index(out)?;

    info!(items = catalog.len(), "demo complete");
    Ok(())
}

fn heading<W: Write>(out: &mut W, title: &str) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "== {title} ==")
}

fn only_kind(catalog: &Catalog<Literature>, kind: ItemKind) -> Catalog<Literature> {
    let mut filtered = Catalog::new(catalog.name()).with_options(catalog.options());
    filtered.extend(
        catalog
            .items()
            .iter()
            .filter(|item| item.kind() == kind)
            .cloned(),
    );
    filtered
}
