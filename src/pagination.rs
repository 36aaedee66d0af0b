//! This modules defines the common functionality for paging data.

use serde::Deserialize;

/// The config for pagination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: u64,
    /// The number of questions on each page.
    pub page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            page_size: 10,
        }
    }
}

/// The `?page=N` query string parameter.
///
/// The page is kept as a raw string so that a malformed value falls back to
/// the default page instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// The requested page, e.g. "2".
    pub page: Option<String>,
}

impl PageQuery {
    /// The 1-based page number requested, or `config.default_page` if the
    /// page is absent, not an integer, or less than one.
    pub fn page_number(&self, config: &PaginationConfig) -> u64 {
        self.page
            .as_deref()
            .and_then(|page| page.trim().parse::<i64>().ok())
            .filter(|&page| page >= 1)
            .map(|page| page as u64)
            .unwrap_or(config.default_page)
    }
}

/// Get the items on `page` (1-based) when `items` is split into pages of
/// `page_size` items.
///
/// A page past the end of `items` is empty.
pub fn paginate<T>(items: Vec<T>, page: u64, page_size: u64) -> Vec<T> {
    let offset = page.saturating_sub(1).saturating_mul(page_size);
    let offset = usize::try_from(offset).unwrap_or(usize::MAX);
    let page_size = usize::try_from(page_size).unwrap_or(usize::MAX);

    items.into_iter().skip(offset).take(page_size).collect()
}
