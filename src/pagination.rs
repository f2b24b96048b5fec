//! Page requests and paged results shared by every list endpoint.

use serde::Serialize;

use crate::domain::types::TypeConstraintError;

/// A validated, 1-based page window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    per_page: usize,
    offset: i64,
    limit: i64,
}

impl PageRequest {
    /// Builds a page request. Both the page index and the page size must be
    /// at least one, and the window must start within the `i64` range the
    /// store accepts for `OFFSET`.
    pub fn new(page: usize, per_page: usize) -> Result<Self, TypeConstraintError> {
        if page < 1 || per_page < 1 {
            return Err(TypeConstraintError::InvalidPageRequest { page, per_page });
        }

        let offset = (page - 1)
            .checked_mul(per_page)
            .and_then(|rows| i64::try_from(rows).ok());
        let limit = i64::try_from(per_page).ok();
        let (Some(offset), Some(limit)) = (offset, limit) else {
            return Err(TypeConstraintError::PageOutOfRange { page, per_page });
        };

        Ok(Self {
            page,
            per_page,
            offset,
            limit,
        })
    }

    pub const fn page(self) -> usize {
        self.page
    }

    pub const fn per_page(self) -> usize {
        self.per_page
    }

    /// Number of rows skipped before this page starts.
    pub const fn offset(self) -> i64 {
        self.offset
    }

    /// Maximum number of rows on this page.
    pub const fn limit(self) -> i64 {
        self.limit
    }
}

/// One page of an ordered collection plus its position within the whole.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub total_items: usize,
}

impl<T> Paged<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_items: usize) -> Self {
        Self {
            items,
            current_page: request.page(),
            total_pages: total_items.div_ceil(request.per_page()),
            page_size: request.per_page(),
            total_items,
        }
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn metadata(&self) -> PaginationMetadata {
        PaginationMetadata {
            total_pages: self.total_pages,
            page_size: self.page_size,
            current_page: self.current_page,
            has_next_page: self.has_next_page(),
            has_previous_page: self.has_previous_page(),
        }
    }
}

/// Pagination summary sent alongside list responses.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    pub total_pages: usize,
    pub page_size: usize,
    pub current_page: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}
