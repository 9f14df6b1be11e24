//! Offset pagination over an ordered collection.
//!
//! The engine is pure: it slices a fully materialized, stably ordered
//! sequence and computes page-count metadata. Callers are responsible for
//! the ordering guarantee (repository lists order by id ascending), which
//! makes consecutive pages partition the collection without overlap or gaps.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::config::{DEFAULT_PAGE_NUMBER, MAX_PAGE_SIZE};
use crate::errors::{AppError, AppResult};

/// Raw pagination query parameters as they arrive on the wire.
///
/// Both fields are optional; unset values fall back to page 1 and the
/// configured default size. Signed integers are accepted so that
/// out-of-range values are rejected with a validation failure instead of
/// a deserialization error.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number
    pub page: Option<i64>,
    /// Number of items per page
    pub size: Option<i64>,
}

impl PageQuery {
    /// Resolve the raw query into a validated request.
    ///
    /// `default_size` is the configured fallback for an absent `size`.
    pub fn resolve(self, default_size: u64) -> AppResult<PageRequest> {
        let page = self.page.unwrap_or(DEFAULT_PAGE_NUMBER as i64);
        let size = self.size.unwrap_or(default_size as i64);
        PageRequest::new(page, size)
    }
}

/// A validated pagination request: `page >= 1`, `1 <= size <= MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageRequest {
    /// Validate and construct a request. There is no silent clamping:
    /// out-of-range values are rejected outright.
    pub fn new(page: i64, size: i64) -> AppResult<Self> {
        if page < 1 {
            return Err(AppError::validation("Page must be 1 or greater"));
        }
        if size < 1 {
            return Err(AppError::validation("Page size must be 1 or greater"));
        }
        if size as u64 > MAX_PAGE_SIZE {
            return Err(AppError::validation(format!(
                "Page size must not exceed {}",
                MAX_PAGE_SIZE
            )));
        }

        Ok(Self {
            page: page as u64,
            size: size as u64,
        })
    }

    /// Zero-based offset of the first item on this page.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.size)
    }
}

/// One page of an ordered collection plus page-count metadata.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[aliases(UserPage = Page<crate::domain::User>)]
pub struct Page<T> {
    /// Items on this page, at most `size` of them
    pub items: Vec<T>,
    /// Count of all records in the unfiltered listing
    pub total: u64,
    /// Requested page, echoed verbatim
    pub page: u64,
    /// Requested size, echoed verbatim
    pub size: u64,
    /// Total number of pages: `ceil(total / size)`, 0 when the collection
    /// is empty
    pub pages: u64,
}

impl<T> Page<T> {
    /// Slice one page out of the full ordered collection.
    ///
    /// Requests past the last page yield an empty `items` with `page` still
    /// echoing the requested value.
    pub fn paginate(all: Vec<T>, request: &PageRequest) -> Self {
        let total = all.len() as u64;
        let pages = (total + request.size - 1) / request.size;

        let items = all
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.size as usize)
            .collect();

        Self {
            items,
            total,
            page: request.page,
            size: request.size,
            pages,
        }
    }
}
