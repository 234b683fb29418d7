//! Catalog behavior options.

use std::fmt;

/// When the title index picks up newly added items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexRefresh {
    /// The index changes only through `build_title_index` and the removal
    /// operations. Items added after a rebuild are invisible to it.
    #[default]
    Manual,
    /// Every `add` also inserts the item into the index.
    OnAdd,
}

impl IndexRefresh {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexRefresh::Manual => "manual",
            IndexRefresh::OnAdd => "on-add",
        }
    }
}

impl fmt::Display for IndexRefresh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogOptions {
    pub index_refresh: IndexRefresh,
}

impl CatalogOptions {
    #[must_use]
    pub fn with_index_refresh(mut self, index_refresh: IndexRefresh) -> Self {
        self.index_refresh = index_refresh;
        self
    }
}
