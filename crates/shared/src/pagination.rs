//! Zero-based page/size pagination helpers.

/// Default page size applied when a query omits `size`.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Upper bound on the page size a caller may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Row offset for a zero-based page index.
pub fn offset(page: u32, size: u32) -> i64 {
    i64::from(page) * i64::from(size)
}

/// Total page count for `total` matching rows at `size` rows per page.
///
/// An empty result set has zero pages, not one.
pub fn total_pages(total: i64, size: u32) -> u32 {
    if total <= 0 || size == 0 {
        return 0;
    }
    let size = i64::from(size);
    ((total + size - 1) / size) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_page_times_size() {
        assert_eq!(offset(0, 10), 0);
        assert_eq!(offset(1, 10), 10);
        assert_eq!(offset(2, 10), 20);
        assert_eq!(offset(3, 25), 75);
    }

    #[test]
    fn offset_handles_large_pages() {
        assert_eq!(offset(1_000_000, 100), 100_000_000);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(30, 10), 3);
        assert_eq!(total_pages(31, 10), 4);
        assert_eq!(total_pages(1, 10), 1);
    }

    #[test]
    fn total_pages_exact_multiple() {
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(100, 25), 4);
    }

    #[test]
    fn empty_result_has_zero_pages() {
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn degenerate_inputs_have_zero_pages() {
        assert_eq!(total_pages(-1, 10), 0);
        assert_eq!(total_pages(10, 0), 0);
    }
}
