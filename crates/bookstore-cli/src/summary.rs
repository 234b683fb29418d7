use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bookstore_core::CatalogStats;
use bookstore_model::{ItemKind, LiteraryItem};

/// Whether tables may carry ANSI styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputStyle {
    pub color: bool,
}

impl OutputStyle {
    pub fn plain() -> Self {
        Self { color: false }
    }
}

/// One row per item plus a total row.
pub fn items_table<T: LiteraryItem>(items: &[&T], style: OutputStyle) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Title"),
        header_cell("Author"),
        header_cell("Year"),
        header_cell("Kind"),
    ]);
    apply_table_style(&mut table, style);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (number, item) in items.iter().enumerate() {
        table.add_row(vec![
            dim_cell(number + 1),
            Cell::new(item.title()).add_attribute(Attribute::Bold),
            Cell::new(item.author()),
            Cell::new(item.year_published()),
            kind_cell(item.kind()),
        ]);
    }
    table.add_row(vec![
        dim_cell("-"),
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} item(s)", items.len())).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    table
}

/// Headline statistics followed by any caller-provided rows.
pub fn stats_table(
    stats: &CatalogStats<'_>,
    extra: &[(String, String)],
    style: OutputStyle,
) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table, style);
    let rows = [
        ("Items".to_string(), stats.item_count.to_string()),
        ("Longest title".to_string(), stats.longest_title.to_string()),
        (
            "Oldest item".to_string(),
            format!("{} ({})", stats.oldest_title, stats.oldest_year),
        ),
        (
            "Average title length".to_string(),
            format!("{:.2}", stats.average_title_length),
        ),
    ];
    for (metric, value) in rows.iter().chain(extra) {
        table.add_row(vec![Cell::new(metric).fg(Color::Blue), Cell::new(value)]);
    }
    table
}

pub fn apply_table_style(table: &mut Table, style: OutputStyle) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if style.color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn kind_cell(kind: ItemKind) -> Cell {
    let color = match kind {
        ItemKind::Novel => Color::Blue,
        ItemKind::ComicBook => Color::Magenta,
        ItemKind::Magazine => Color::Green,
    };
    Cell::new(kind).fg(color)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
