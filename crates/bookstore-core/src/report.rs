//! Line-oriented text reports written to any [`std::io::Write`].
//!
//! Each `print_*` method writes one line per selected entry and nothing else,
//! so callers can add their own headings.

use std::io::Write;

use bookstore_model::LiteraryItem;

use crate::catalog::Catalog;
use crate::error::Result;

impl<T: LiteraryItem> Catalog<T> {
    /// `The book <title> was written by <author> in <year>` per item.
    pub fn print_all<W: Write>(&self, out: &mut W) -> Result<()> {
        for item in self.items() {
            writeln!(
                out,
                "The book {} was written by {} in {}",
                item.title(),
                item.author(),
                item.year_published()
            )?;
        }
        Ok(())
    }

    pub fn print_uppercase_titles<W: Write>(&self, out: &mut W) -> Result<()> {
        write_lines(out, self.uppercase_titles())
    }

    /// Citations of the indexed items in ordinal title order.
    pub fn print_sorted_by_index<W: Write>(&self, out: &mut W) -> Result<()> {
        let citations = self
            .sorted_by_index()
            .into_iter()
            .map(LiteraryItem::citation);
        write_lines(out, citations)
    }

    pub fn print_titles_containing<W: Write>(&self, needle: &str, out: &mut W) -> Result<()> {
        write_titles(out, self.titles_containing(needle))
    }

    pub fn print_alphabetical<W: Write>(&self, out: &mut W) -> Result<()> {
        write_titles(out, self.alphabetical())
    }

    pub fn print_by_decade<W: Write>(&self, year: i32, out: &mut W) -> Result<()> {
        write_titles(out, self.by_decade(year))
    }

    pub fn print_info<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.info())?;
        Ok(())
    }
}

fn write_titles<T: LiteraryItem, W: Write>(out: &mut W, items: Vec<&T>) -> Result<()> {
    write_lines(out, items.into_iter().map(LiteraryItem::title))
}

fn write_lines<W, I, S>(out: &mut W, lines: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    Ok(())
}
