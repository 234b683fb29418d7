use std::fmt;

/// Name and size of a catalog, rendered as `BookStore: <name>, Items: <count>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreInfo<'a> {
    pub name: &'a str,
    pub item_count: usize,
}

impl<'a> StoreInfo<'a> {
    pub fn new(name: &'a str, item_count: usize) -> Self {
        Self { name, item_count }
    }
}

impl fmt::Display for StoreInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BookStore: {}, Items: {}", self.name, self.item_count)
    }
}
