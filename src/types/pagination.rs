//! Pagination types for list endpoints.

use serde::Deserialize;

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Pagination query parameters.
///
/// Raw values are kept signed so that out-of-range input degrades to the
/// defaults instead of failing extraction.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_page() -> i64 {
    DEFAULT_PAGE_NUMBER
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl PaginationParams {
    /// Page number floored at 1
    pub fn page(&self) -> u64 {
        self.page.max(DEFAULT_PAGE_NUMBER) as u64
    }

    /// Limit with defaults and cap applied: values below 1 fall back to the
    /// default, values above the maximum are capped
    pub fn limit(&self) -> u64 {
        if self.limit < 1 {
            DEFAULT_PAGE_SIZE as u64
        } else {
            self.limit.min(MAX_PAGE_SIZE) as u64
        }
    }

    /// Calculate offset for database query
    pub fn offset(&self) -> u64 {
        (self.page() - 1) * self.limit()
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}
