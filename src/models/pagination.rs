//! Pagination primitives for the invoice table.

use serde::Serialize;

/// Rows per page of the invoice table.
pub const ITEMS_PER_PAGE: i64 = 6;

/// A 1-indexed window of `page_size` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub page_size: i64,
}

impl PageRequest {
    /// Page `page` with the default page size.
    pub fn new(page: i64) -> Self {
        Self {
            page,
            page_size: ITEMS_PER_PAGE,
        }
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// Row offset of the first row on this page. Not clamped: a page below 1
    /// yields a negative offset which the store rejects. Saturates instead of
    /// overflowing, so a huge page reads past the end and returns no rows.
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

/// Number of pages needed for `total` rows; never less than 1.
pub fn total_pages(total: i64, page_size: i64) -> i64 {
    let page_size = page_size.max(1);
    let total = total.max(0);
    let pages = total / page_size + i64::from(total % page_size != 0);
    pages.max(1)
}

/// One page of rows plus the page count for the same filter.
#[derive(Debug, Clone, Serialize)]
pub struct Paged<T: Serialize> {
    pub items: Vec<T>,
    pub page: i64,
    pub total_pages: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_defaults() {
        let p = PageRequest::new(1);
        assert_eq!(p.limit(), 6);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn offset_calculation() {
        assert_eq!(PageRequest::new(3).offset(), 12);
        let p = PageRequest {
            page: 3,
            page_size: 10,
        };
        assert_eq!(p.offset(), 20);
    }

    #[test]
    fn offset_saturates_for_huge_pages() {
        assert_eq!(PageRequest::new(i64::MAX).offset(), i64::MAX);
        let p = PageRequest {
            page: 2,
            page_size: i64::MAX,
        };
        assert_eq!(p.offset(), i64::MAX);
        assert!(PageRequest::new(i64::MIN).offset() < 0);
    }

    #[test]
    fn offset_is_not_clamped() {
        assert_eq!(PageRequest::new(0).offset(), -6);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(12, 6), 2);
        assert_eq!(total_pages(13, 6), 3);
        assert_eq!(total_pages(1, 6), 1);
    }

    #[test]
    fn total_pages_is_at_least_one() {
        assert_eq!(total_pages(0, 6), 1);
        assert_eq!(total_pages(0, 1), 1);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn total_pages_handles_extreme_sizes() {
        assert_eq!(total_pages(10, i64::MAX), 1);
        assert_eq!(total_pages(i64::MAX, 1), i64::MAX);
        assert_eq!(total_pages(i64::MAX, i64::MAX), 1);
        assert_eq!(total_pages(i64::MAX, 2), i64::MAX / 2 + 1);
        assert_eq!(total_pages(-5, 6), 1);
    }
}
