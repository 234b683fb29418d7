use crate::error::{ModelError, Result};

/// Earliest accepted publication year.
pub const MIN_YEAR: i32 = 0;

/// Latest accepted publication year.
pub const CURRENT_YEAR: i32 = 2025;

pub(crate) fn title(value: impl Into<String>) -> Result<String> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(ModelError::BlankTitle);
    }
    Ok(value)
}

pub(crate) fn author(value: impl Into<String>) -> Result<String> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(ModelError::BlankAuthor);
    }
    Ok(value)
}

pub(crate) fn year_published(year: i32) -> Result<i32> {
    if !(MIN_YEAR..=CURRENT_YEAR).contains(&year) {
        return Err(ModelError::YearOutOfRange {
            year,
            min: MIN_YEAR,
            max: CURRENT_YEAR,
        });
    }
    Ok(year)
}
