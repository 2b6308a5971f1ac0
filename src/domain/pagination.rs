//! Pagination primitives shared by listing operations

use serde::{Deserialize, Serialize};

/// Sort direction for single-key sorts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// Page request with a 1-indexed page number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    /// Create a page request, rejecting zero page numbers and sizes
    pub fn new(page: usize, page_size: usize) -> Result<Self, PageRequestError> {
        if page == 0 {
            return Err(PageRequestError::ZeroPage);
        }
        if page_size == 0 {
            return Err(PageRequestError::ZeroPageSize);
        }

        Ok(Self { page, page_size })
    }

    /// Offset of the first item on this page; saturates for absurd page
    /// numbers, which then read as pages past the end
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }
}

/// Errors for malformed page requests
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum PageRequestError {
    #[error("Page numbers are 1-indexed; page 0 is invalid")]
    ZeroPage,

    #[error("Page size must be at least 1")]
    ZeroPageSize,
}

/// One page of results plus the paging envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    /// Build a page envelope; `total_pages` is ceil(total / page_size)
    pub fn new(data: Vec<T>, total: usize, request: &PageRequest) -> Self {
        Self {
            data,
            total,
            page: request.page,
            page_size: request.page_size,
            total_pages: total.div_ceil(request.page_size),
        }
    }

    /// Map the page contents, keeping the envelope
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_valid() {
        let request = PageRequest::new(2, 25).unwrap();
        assert_eq!(request.offset(), 25);
    }

    #[test]
    fn test_offset_saturates_for_huge_pages() {
        let request = PageRequest::new(usize::MAX, 10).unwrap();
        assert_eq!(request.offset(), usize::MAX);
    }

    #[test]
    fn test_page_request_zero_page() {
        assert_eq!(PageRequest::new(0, 10), Err(PageRequestError::ZeroPage));
    }

    #[test]
    fn test_page_request_zero_page_size() {
        assert_eq!(PageRequest::new(1, 0), Err(PageRequestError::ZeroPageSize));
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let request = PageRequest::new(1, 10).unwrap();
        let page: Paginated<u32> = Paginated::new(vec![], 21, &request);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_total_pages_exact_multiple() {
        let request = PageRequest::new(1, 10).unwrap();
        let page: Paginated<u32> = Paginated::new(vec![], 20, &request);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_total_pages_empty() {
        let request = PageRequest::new(1, 10).unwrap();
        let page: Paginated<u32> = Paginated::new(vec![], 0, &request);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_map_keeps_envelope() {
        let request = PageRequest::new(2, 2).unwrap();
        let page = Paginated::new(vec![1, 2], 5, &request).map(|n| n * 10);

        assert_eq!(page.data, vec![10, 20]);
        assert_eq!(page.page, 2);
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_serialization_is_camel_case() {
        let request = PageRequest::new(1, 10).unwrap();
        let page: Paginated<u32> = Paginated::new(vec![1], 1, &request);
        let json = serde_json::to_string(&page).unwrap();

        assert!(json.contains("\"pageSize\":10"));
        assert!(json.contains("\"totalPages\":1"));
    }
}
