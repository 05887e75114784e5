use std::ops::{Range, RangeInclusive};

/// Products shown per catalog page.
pub const PRODUCTS_PER_PAGE: usize = 9;

/// Page numbers shown at once by the pagination control.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// A navigation request from the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    Next,
    Previous,
    /// 1-based page number
    Index(usize),
}

/// Page position over a result set of known size. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current: usize,
    total: usize,
    item_count: usize,
    page_size: usize,
}

impl Pagination {
    /// Pagination with the catalog page size; `current` is clamped into range.
    pub fn new(item_count: usize, current: usize) -> Self {
        Self::with_page_size(item_count, current, PRODUCTS_PER_PAGE)
    }

    pub fn with_page_size(item_count: usize, current: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total = item_count.div_ceil(page_size);
        Self {
            current: current.clamp(1, total.max(1)),
            total,
            item_count,
            page_size,
        }
    }

    pub const fn current(&self) -> usize {
        self.current
    }

    /// Number of pages; 0 for an empty result set.
    pub const fn total(&self) -> usize {
        self.total
    }

    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    pub const fn is_first(&self) -> bool {
        self.current <= 1
    }

    pub const fn is_last(&self) -> bool {
        self.current >= self.total
    }

    /// Page a navigation request leads to, or `None` when it would not move.
    pub fn resolve(&self, target: PageTarget) -> Option<usize> {
        let page = match target {
            PageTarget::Next if self.current < self.total => self.current + 1,
            PageTarget::Previous if self.current > 1 => self.current - 1,
            PageTarget::Next | PageTarget::Previous => return None,
            PageTarget::Index(index) => index.clamp(1, self.total.max(1)),
        };
        (page != self.current).then_some(page)
    }

    /// Item indices on the current page.
    pub fn range(&self) -> Range<usize> {
        let start = ((self.current - 1) * self.page_size).min(self.item_count);
        let end = (start + self.page_size).min(self.item_count);
        start..end
    }

    /// Page numbers to show: a window of at most `max` pages around the
    /// current one, clamped to the valid range. Empty when there are no pages.
    pub fn visible_pages(&self, max: usize) -> RangeInclusive<usize> {
        if self.total == 0 || max == 0 {
            return 1..=0;
        }
        let max = max.min(self.total);
        let start = self.current.saturating_sub(max / 2).max(1);
        let end = (start + max - 1).min(self.total);
        let start = end + 1 - max;
        start..=end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(Pagination::new(0, 1).total(), 0);
        assert_eq!(Pagination::new(1, 1).total(), 1);
        assert_eq!(Pagination::new(9, 1).total(), 1);
        assert_eq!(Pagination::new(10, 1).total(), 2);
        assert_eq!(Pagination::new(20, 1).total(), 3);
    }

    #[test]
    fn test_current_is_clamped() {
        assert_eq!(Pagination::new(20, 7).current(), 3);
        assert_eq!(Pagination::new(20, 0).current(), 1);
        assert_eq!(Pagination::new(0, 4).current(), 1);
    }

    #[test]
    fn test_ranges() {
        assert_eq!(Pagination::new(20, 1).range(), 0..9);
        assert_eq!(Pagination::new(20, 2).range(), 9..18);
        assert_eq!(Pagination::new(20, 3).range(), 18..20);
        assert_eq!(Pagination::new(0, 1).range(), 0..0);
    }

    #[test]
    fn test_next_and_previous_at_edges() {
        let first = Pagination::new(20, 1);
        assert_eq!(first.resolve(PageTarget::Previous), None);
        assert_eq!(first.resolve(PageTarget::Next), Some(2));

        let last = Pagination::new(20, 3);
        assert_eq!(last.resolve(PageTarget::Next), None);
        assert_eq!(last.resolve(PageTarget::Previous), Some(2));
    }

    #[test]
    fn test_index_is_clamped_and_same_page_is_noop() {
        let pagination = Pagination::new(20, 2);
        assert_eq!(pagination.resolve(PageTarget::Index(2)), None);
        assert_eq!(pagination.resolve(PageTarget::Index(50)), Some(3));
        assert_eq!(pagination.resolve(PageTarget::Index(0)), Some(1));
    }

    #[test]
    fn test_empty_result_never_moves() {
        let pagination = Pagination::new(0, 1);
        assert_eq!(pagination.resolve(PageTarget::Next), None);
        assert_eq!(pagination.resolve(PageTarget::Index(3)), None);
        assert!(pagination.visible_pages(MAX_VISIBLE_PAGES).is_empty());
    }

    #[test]
    fn test_visible_pages_window() {
        let window = |count, current| {
            Pagination::new(count, current)
                .visible_pages(MAX_VISIBLE_PAGES)
                .collect::<Vec<_>>()
        };
        assert_eq!(window(20, 1), vec![1, 2, 3]);
        assert_eq!(window(9 * 10, 1), vec![1, 2, 3, 4, 5]);
        assert_eq!(window(9 * 10, 6), vec![4, 5, 6, 7, 8]);
        assert_eq!(window(9 * 10, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(window(9 * 10, 9), vec![6, 7, 8, 9, 10]);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_pages_cover_every_item_once(count in 0usize..500) {
            let total = Pagination::new(count, 1).total();
            let mut covered = 0;
            for page in 1..=total {
                let range = Pagination::new(count, page).range();
                prop_assert_eq!(range.start, covered);
                covered = range.end;
            }
            prop_assert_eq!(covered, count);
        }

        #[test]
        fn test_navigation_stays_in_bounds(count in 1usize..300, start in 1usize..40, steps in prop::collection::vec(0u8..3, 0..30)) {
            let mut pagination = Pagination::new(count, start);
            for step in steps {
                let target = match step {
                    0 => PageTarget::Next,
                    1 => PageTarget::Previous,
                    _ => PageTarget::Index(usize::from(step) * 7),
                };
                if let Some(page) = pagination.resolve(target) {
                    prop_assert!(page >= 1 && page <= pagination.total());
                    prop_assert_ne!(page, pagination.current());
                    pagination = Pagination::new(count, page);
                }
            }
        }

        #[test]
        fn test_visible_window_contains_current(count in 1usize..500, current in 1usize..60) {
            let pagination = Pagination::new(count, current);
            let window = pagination.visible_pages(MAX_VISIBLE_PAGES);
            prop_assert!(window.contains(&pagination.current()));
            prop_assert!(window.clone().count() <= MAX_VISIBLE_PAGES);
            prop_assert!(*window.end() <= pagination.total());
        }
    }
}
