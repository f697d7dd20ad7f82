// src/pager.rs
// =============================================================================
// Splits the repository list into pages of PAGE_SIZE.
//
// Pages are 1-indexed. The free functions are pure arithmetic; `Pager` adds
// the current page and the prev/next moves.
//
// `go_to` stores whatever it is given. Keeping the current page inside
// 1..=total_pages is the caller's job (UiState rejects out-of-range
// selections); an out-of-range page simply maps to an empty slice.
// =============================================================================

use std::ops::Range;

/// Repositories shown per page.
pub const PAGE_SIZE: usize = 10;

/// `ceil(total / page_size)`; zero items means zero pages.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// Index range of `page` within a list of `total` items.
pub fn page_range(total: usize, page_size: usize, page: usize) -> Range<usize> {
    if page == 0 {
        return 0..0;
    }
    let page_size = page_size.max(1);
    let start = (page - 1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);
    start..end
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current: usize,
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Pager::new(PAGE_SIZE)
    }
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Pager {
            current: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total_pages(total, self.page_size)
    }

    /// Back to page one.
    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Jumps to `page` without bounds checking.
    pub fn go_to(&mut self, page: usize) {
        self.current = page;
    }

    /// Moves forward one page; returns false (and stays put) on the last page.
    pub fn next(&mut self, total: usize) -> bool {
        if self.current < self.total_pages(total) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Moves back one page; returns false (and stays put) on the first page.
    pub fn prev(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// The items of the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[page_range(items.len(), self.page_size, self.current)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, PAGE_SIZE), 0);
        assert_eq!(total_pages(1, PAGE_SIZE), 1);
        assert_eq!(total_pages(10, PAGE_SIZE), 1);
        assert_eq!(total_pages(11, PAGE_SIZE), 2);
        assert_eq!(total_pages(25, PAGE_SIZE), 3);
    }

    #[test]
    fn test_every_page_is_full_except_the_last() {
        for total in 0..=65usize {
            let pages = total_pages(total, PAGE_SIZE);
            assert_eq!(pages, (total + 9) / 10);

            let mut seen = 0;
            for page in 1..=pages {
                let len = page_range(total, PAGE_SIZE, page).len();
                if page < pages {
                    assert_eq!(len, PAGE_SIZE, "total={} page={}", total, page);
                } else {
                    assert_eq!(len, total - PAGE_SIZE * (page - 1), "total={} page={}", total, page);
                }
                seen += len;
            }
            assert_eq!(seen, total);
        }
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        assert_eq!(page_range(25, PAGE_SIZE, 4), 25..25);
        assert_eq!(page_range(25, PAGE_SIZE, 0), 0..0);
        assert_eq!(page_range(25, PAGE_SIZE, usize::MAX).len(), 0);
    }

    #[test]
    fn test_slice() {
        let items: Vec<usize> = (1..=25).collect();
        let mut pager = Pager::default();
        assert_eq!(pager.slice(&items), &items[0..10]);

        pager.go_to(3);
        assert_eq!(pager.slice(&items), &[21, 22, 23, 24, 25]);

        pager.go_to(9);
        assert!(pager.slice(&items).is_empty());
    }

    #[test]
    fn test_next_stops_on_last_page() {
        let mut pager = Pager::default();
        assert!(pager.next(25));
        assert!(pager.next(25));
        assert_eq!(pager.current(), 3);

        assert!(!pager.next(25));
        assert_eq!(pager.current(), 3);
    }

    #[test]
    fn test_prev_stops_on_first_page() {
        let mut pager = Pager::default();
        assert!(!pager.prev());
        assert_eq!(pager.current(), 1);

        pager.go_to(2);
        assert!(pager.prev());
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn test_next_on_empty_list() {
        let mut pager = Pager::default();
        assert!(!pager.next(0));
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        let pager = Pager::new(0);
        assert_eq!(pager.total_pages(3), 3);
    }
}
