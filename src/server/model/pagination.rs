//! Page-number pagination.

/// Largest offset or limit the database drivers can bind (they take signed 64-bit values).
const MAX_BOUND: u64 = i64::MAX as u64;

/// 1-indexed page request. A zero page or page size disables pagination, so the
/// `Default` value returns every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    pub page: u64,
    pub page_size: u64,
}

impl Pagination {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self { page, page_size }
    }

    /// The `(offset, limit)` pair to request from storage.
    ///
    /// # Returns
    /// - `Some((offset, limit))` - `offset = (page - 1) * page_size`, `limit = page_size`,
    ///   both capped at `i64::MAX`
    /// - `None` - `page` or `page_size` is zero; the full set is returned
    pub fn window(&self) -> Option<(u64, u64)> {
        if self.page == 0 || self.page_size == 0 {
            return None;
        }

        let offset = (self.page - 1)
            .saturating_mul(self.page_size)
            .min(MAX_BOUND);
        Some((offset, self.page_size.min(MAX_BOUND)))
    }
}
