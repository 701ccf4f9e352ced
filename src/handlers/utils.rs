use crate::error::{CloudOptError, Result};

/// Largest page a listing command will return.
pub const MAX_PAGE_LIMIT: usize = 1000;

/// Offset/limit window applied to listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
}

impl Pagination {
    /// Create a window, rejecting limits outside 1..=MAX_PAGE_LIMIT.
    pub fn new(offset: usize, limit: usize) -> Result<Self> {
        if limit == 0 || limit > MAX_PAGE_LIMIT {
            return Err(CloudOptError::InvalidArgument(format!(
                "limit must be between 1 and {}, got {}",
                MAX_PAGE_LIMIT, limit
            )));
        }
        Ok(Self { offset, limit })
    }

    /// Keep only the items inside the window.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .collect()
    }
}
