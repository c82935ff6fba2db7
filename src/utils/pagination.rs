// src/utils/pagination.rs

use serde::Deserialize;

/// Number of questions returned per page.
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// `?page=N` query parameters.
/// Kept as a raw string so malformed values fall back to page 1 instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

/// A 1-based page index over an id-ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(i64);

impl Page {
    pub fn new(number: i64) -> Self {
        Page(number.max(1))
    }

    /// Missing, non-integer and non-positive inputs all mean page 1.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<i64>().ok())
            .map(Page::new)
            .unwrap_or_default()
    }

    pub fn number(self) -> i64 {
        self.0
    }

    /// Rows to skip: `(page - 1) * QUESTIONS_PER_PAGE`, saturating for absurd page numbers.
    pub fn offset(self) -> i64 {
        (self.0 - 1).saturating_mul(QUESTIONS_PER_PAGE)
    }

    pub fn limit(self) -> i64 {
        QUESTIONS_PER_PAGE
    }

    /// Keeps the rows of this page from an already ordered, in-memory result set.
    pub fn slice<T>(self, items: Vec<T>) -> Vec<T> {
        let offset = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        items
            .into_iter()
            .skip(offset)
            .take(QUESTIONS_PER_PAGE as usize)
            .collect()
    }
}

impl Default for Page {
    fn default() -> Self {
        Page(1)
    }
}

impl From<&PageParams> for Page {
    fn from(params: &PageParams) -> Self {
        Page::parse(params.page.as_deref())
    }
}
