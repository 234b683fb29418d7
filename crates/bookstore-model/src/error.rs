use thiserror::Error;

/// Invalid-argument failures raised while building or updating an item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("title cannot be empty or blank")]
    BlankTitle,
    #[error("author cannot be empty or blank")]
    BlankAuthor,
    #[error("year published {year} is later than {max} or earlier than {min}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },
    #[error("unknown item kind: {0}")]
    UnknownKind(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
