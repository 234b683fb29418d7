//! Catalog of literary items: ownership, the derived title index, and the
//! query and report operations over it.

pub mod catalog;
pub mod error;
pub mod index;
pub mod info;
pub mod options;
pub mod report;
pub mod stats;

pub use catalog::{Catalog, decade_bounds};
pub use error::{CatalogError, Result};
pub use index::TitleIndex;
pub use info::StoreInfo;
pub use options::{CatalogOptions, IndexRefresh};
pub use stats::CatalogStats;
