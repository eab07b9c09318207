//! Local view engine.
//!
//! Derives a filtered, paginated slice of an already materialized collection.
//! Pure and synchronous: no I/O, no hidden state, identical inputs give
//! identical outputs.

use serde::{Deserialize, Serialize};

use crate::entities::CatalogRecord;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// The (search term, page, page size) tuple driving one view.
///
/// `page` is 1-based. Zero values for `page` or `page_size` are treated as 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewQuery {
    #[serde(default)]
    pub search: Option<String>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self {
            search: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ViewQuery {
    /// First page, no filter.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// The trimmed search term, or `None` when the filter is empty or
    /// whitespace-only.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

/// One page of a view plus the pagination facts around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewResult<R> {
    pub results: Vec<R>,
    pub total_records: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Case-insensitive substring match on `name` or `uid`.
///
/// `needle` must already be lowercased.
#[must_use]
pub fn matches_search<R: CatalogRecord>(record: &R, needle: &str) -> bool {
    record.name().to_lowercase().contains(needle) || record.uid().to_lowercase().contains(needle)
}

/// Filter then paginate `records` according to `query`.
///
/// A page past the end yields an empty slice; `total_pages == 0` is valid for
/// an empty collection or a search without matches.
#[must_use]
pub fn view<R: CatalogRecord + Clone>(records: &[R], query: &ViewQuery) -> ViewResult<R> {
    let page = query.page.max(1);
    let page_size = query.page_size.max(1);

    let filtered: Vec<&R> = match query.search_term() {
        Some(term) => {
            let needle = term.to_lowercase();
            records
                .iter()
                .filter(|record| matches_search(*record, &needle))
                .collect()
        }
        None => records.iter().collect(),
    };

    let total_records = filtered.len();
    let total_pages = total_records.div_ceil(page_size);

    let start = (page - 1).saturating_mul(page_size);
    let results = filtered
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    ViewResult {
        results,
        total_records,
        total_pages,
        has_next: page < total_pages,
        has_previous: page > 1,
    }
}
