use bookstore_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The operation has no answer for a catalog without items.
    #[error("{operation} requires at least one item in the catalog")]
    EmptyCollection { operation: &'static str },
    #[error("invalid item: {0}")]
    Model(#[from] ModelError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
