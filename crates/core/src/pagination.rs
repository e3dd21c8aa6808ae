//! Pagination request and envelope types.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! both the API layer (query parsing) and the repository layer (scan
//! parameters). Pages are 1-based at the boundary and translated to the
//! storage layer's 0-based indexing here, in exactly one place.

use serde::Serialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Default page number (pages are 1-based).
pub const DEFAULT_PAGE: i64 = 1;

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Default sort column.
pub const DEFAULT_SORT_FIELD: &str = "id";

// ---------------------------------------------------------------------------
// Sort direction
// ---------------------------------------------------------------------------

/// Sort direction for paginated scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    /// Parse a direction from a query-string value, case-insensitively.
    ///
    /// Anything outside `asc`/`desc` is a validation failure at the
    /// boundary; it never reaches storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use cinelist_core::pagination::SortDirection;
    /// assert_eq!(SortDirection::parse("ASC").unwrap(), SortDirection::Ascending);
    /// assert_eq!(SortDirection::parse("desc").unwrap(), SortDirection::Descending);
    /// assert!(SortDirection::parse("sideways").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            _ => Err(CoreError::Validation(format!(
                "Invalid sort direction '{s}'. Must be one of: asc, desc"
            ))),
        }
    }

    /// Return the direction as a SQL keyword.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

// ---------------------------------------------------------------------------
// Page request
// ---------------------------------------------------------------------------

/// A validated request for one page of results.
///
/// `page` is 1-based as seen by callers. [`PageRequest::offset`] and
/// [`PageRequest::page_index`] perform the 0-based translation for the
/// storage layer and the response envelope respectively.
///
/// The sort field is passed through to storage verbatim; whether it names
/// a real column is the storage layer's concern, not this type's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
    pub sort_field: String,
    pub direction: SortDirection,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
            sort_field: DEFAULT_SORT_FIELD.to_string(),
            direction: SortDirection::default(),
        }
    }
}

impl PageRequest {
    /// Reject out-of-range values before any storage access.
    ///
    /// A `page` of 0 or below would silently produce a negative offset;
    /// it is an input error, not something to normalize away.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.page < 1 {
            return Err(CoreError::Validation(format!(
                "Invalid page {}. Page numbers are 1-based",
                self.page
            )));
        }
        if self.size < 1 {
            return Err(CoreError::Validation(format!(
                "Invalid page size {}. Must be at least 1",
                self.size
            )));
        }
        Ok(())
    }

    /// Row offset for a SQL `OFFSET` clause.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.size
    }

    /// Row count for a SQL `LIMIT` clause.
    pub fn limit(&self) -> i64 {
        self.size
    }

    /// 0-based page index, mirroring the storage layer's indexing.
    pub fn page_index(&self) -> i64 {
        self.page - 1
    }
}

// ---------------------------------------------------------------------------
// Response envelope
// ---------------------------------------------------------------------------

/// One page of results plus the totals storage reported for the scan.
///
/// `page` is the 0-based index of the page the content came from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingResult<T> {
    pub content: Vec<T>,
    pub total_pages: i64,
    pub total_elements: i64,
    pub size: i64,
    pub page: i64,
    pub empty: bool,
}

impl<T> PagingResult<T> {
    /// Package scan results into an envelope.
    ///
    /// `total_elements` is whatever storage counted for the scan; the
    /// page count is the ceiling of that over the requested size.
    pub fn new(content: Vec<T>, total_elements: i64, request: &PageRequest) -> Self {
        let total_pages = (total_elements + request.size - 1) / request.size;
        Self {
            empty: content.is_empty(),
            content,
            total_pages,
            total_elements,
            size: request.size,
            page: request.page_index(),
        }
    }

    /// Map the content to another shape, keeping every total unchanged.
    pub fn map<U, F>(self, f: F) -> PagingResult<U>
    where
        F: FnMut(T) -> U,
    {
        PagingResult {
            content: self.content.into_iter().map(f).collect(),
            total_pages: self.total_pages,
            total_elements: self.total_elements,
            size: self.size,
            page: self.page,
            empty: self.empty,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
