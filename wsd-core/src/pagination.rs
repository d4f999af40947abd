//! Page arithmetic shared by the business list and the review list.

/// Position within a paginated result set.
///
/// `page` is 1-based and always within `[1, last_page()]`, where the last
/// page is at least 1 even for an empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: u32,
    page_size: u32,
    total: u64,
}

impl Pager {
    /// Build a pager, clamping `page` into range for `total`.
    pub fn new(page: u32, page_size: u32, total: u64) -> Self {
        let page_size = page_size.max(1);
        let mut pager = Self {
            page: 1,
            page_size,
            total,
        };
        pager.page = pager.clamp(page);
        pager
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// `ceil(total / page_size)`; zero for an empty result.
    pub fn total_pages(&self) -> u32 {
        let pages = self.total.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Highest requestable page. Page 1 is always requestable.
    pub fn last_page(&self) -> u32 {
        self.total_pages().max(1)
    }

    pub fn clamp(&self, page: u32) -> u32 {
        page.clamp(1, self.last_page())
    }

    /// Controls are only worth showing with more than one page.
    pub fn is_paginated(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.last_page()
    }

    /// Page "Previous" leads to; stays put at the first page.
    pub fn prev(&self) -> u32 {
        self.clamp(self.page.saturating_sub(1))
    }

    /// Page "Next" leads to; stays put at the last page.
    pub fn next(&self) -> u32 {
        self.clamp(self.page.saturating_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(Pager::new(1, 20, 0).total_pages(), 0);
        assert_eq!(Pager::new(1, 20, 20).total_pages(), 1);
        assert_eq!(Pager::new(1, 20, 21).total_pages(), 2);
        assert_eq!(Pager::new(1, 10, 95).total_pages(), 10);
    }

    #[test]
    fn page_is_clamped_into_range() {
        assert_eq!(Pager::new(0, 10, 95).page(), 1);
        assert_eq!(Pager::new(42, 10, 95).page(), 10);
        assert_eq!(Pager::new(3, 10, 0).page(), 1);
    }

    #[test]
    fn controls_disable_exactly_at_boundaries() {
        let first = Pager::new(1, 10, 30);
        assert!(!first.has_prev());
        assert!(first.has_next());
        assert_eq!(first.prev(), 1);

        let middle = Pager::new(2, 10, 30);
        assert!(middle.has_prev());
        assert!(middle.has_next());

        let last = Pager::new(3, 10, 30);
        assert!(last.has_prev());
        assert!(!last.has_next());
        assert_eq!(last.next(), 3);
    }

    #[test]
    fn single_page_is_not_paginated() {
        assert!(!Pager::new(1, 20, 20).is_paginated());
        assert!(Pager::new(1, 20, 21).is_paginated());
        let empty = Pager::new(1, 20, 0);
        assert!(!empty.has_prev());
        assert!(!empty.has_next());
    }
}
