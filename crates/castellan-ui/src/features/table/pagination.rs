//! Pagination engine: page computation and direct-accessible windowing.

/// Selectable page sizes, smallest first.
pub const PAGE_SIZES: [usize; 4] = [10, 20, 50, 100];

/// Pages kept individually clickable on each side of the current page.
pub const DEFAULT_REACH: usize = 3;

/// Pagination store slice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationState {
    /// Page size, always one of [`PAGE_SIZES`].
    pub limit: usize,
    /// Zero-based index of the current page.
    pub offset: usize,
    /// Authoritative row count from the server.
    pub total_items: usize,
    /// Direct-accessible reach around the current page.
    pub reach: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            limit: PAGE_SIZES[0],
            offset: 0,
            total_items: 0,
            reach: DEFAULT_REACH,
        }
    }
}

/// One entry of the page list.
///
/// Synthetic ellipsis entries carry the label `".."` and a `number`
/// addressing the hidden page adjacent to the window, so clicking them
/// steps one page beyond the visible range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    /// Zero-based page index this entry navigates to.
    pub number: usize,
    /// Display label; the one-based page number, or `".."`.
    pub label: String,
    /// Whether this is the current page.
    pub active: bool,
}

impl Page {
    fn numbered(number: usize, current: usize) -> Self {
        Self {
            number,
            label: (number + 1).to_string(),
            active: number == current,
        }
    }

    fn ellipsis(number: usize) -> Self {
        Self {
            number,
            label: "..".to_string(),
            active: false,
        }
    }

    /// Whether this entry is a synthetic ellipsis.
    #[must_use]
    pub fn is_ellipsis(&self) -> bool {
        self.label == ".."
    }
}

/// Clamp an arbitrary page size to the configured size options.
#[must_use]
pub fn clamp_limit(limit: usize) -> usize {
    if PAGE_SIZES.contains(&limit) {
        limit
    } else {
        PAGE_SIZES[0]
    }
}

/// Number of logical pages; an empty result set still renders one page.
#[must_use]
pub fn page_count(total_items: usize, limit: usize) -> usize {
    total_items.div_ceil(clamp_limit(limit)).max(1)
}

/// The full page list, exactly one entry active.
#[must_use]
pub fn compute_pages(state: &PaginationState) -> Vec<Page> {
    (0..page_count(state.total_items, state.limit))
        .map(|number| Page::numbered(number, state.offset))
        .collect()
}

/// The windowed page list rendered as individually clickable controls.
///
/// The window spans `reach` pages on each side of the current page,
/// clamped to the valid range. The first and last page are always
/// present; a gap wider than one page collapses into a single ellipsis
/// per side, while a gap of exactly one page includes that page
/// directly.
#[must_use]
pub fn direct_accessible(state: &PaginationState) -> Vec<Page> {
    let count = page_count(state.total_items, state.limit);
    let last = count - 1;
    let current = state.offset.min(last);
    let start = current.saturating_sub(state.reach);
    let end = (current + state.reach).min(last);

    let mut pages = Vec::new();
    if start > 0 {
        pages.push(Page::numbered(0, current));
        if start == 2 {
            pages.push(Page::numbered(1, current));
        } else if start > 2 {
            pages.push(Page::ellipsis(start - 1));
        }
    }
    for number in start..=end {
        pages.push(Page::numbered(number, current));
    }
    if end < last {
        if last - end == 2 {
            pages.push(Page::numbered(last - 1, current));
        } else if last - end > 2 {
            pages.push(Page::ellipsis(end + 1));
        }
        pages.push(Page::numbered(last, current));
    }
    pages
}

/// Record a new authoritative total, clamping the offset into range.
pub fn set_total(state: &mut PaginationState, total_items: usize) {
    state.total_items = total_items;
    state.offset = state
        .offset
        .min(page_count(total_items, state.limit) - 1);
}

/// Navigate to a page, clamped to the valid range.
pub fn go_to(state: &mut PaginationState, number: usize) {
    state.offset = number.min(page_count(state.total_items, state.limit) - 1);
}

/// Change the page size and reset to the first page.
pub fn set_limit(state: &mut PaginationState, limit: usize) {
    state.limit = clamp_limit(limit);
    state.offset = 0;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(total_items: usize, limit: usize, offset: usize, reach: usize) -> PaginationState {
        PaginationState {
            limit,
            offset,
            total_items,
            reach,
        }
    }

    #[test]
    fn page_count_is_ceiling_with_a_one_page_floor() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(45, 10), 5);
    }

    #[test]
    fn invalid_limits_clamp_to_the_smallest_size_option() {
        assert_eq!(clamp_limit(0), 10);
        assert_eq!(clamp_limit(7), 10);
        assert_eq!(clamp_limit(50), 50);
        assert_eq!(page_count(45, 0), 5);
    }

    #[test]
    fn pages_are_sequential_with_exactly_one_active() {
        let pages = compute_pages(&state(45, 10, 2, 2));
        assert_eq!(pages.len(), 5);
        for (position, page) in pages.iter().enumerate() {
            assert_eq!(page.number, position);
            assert_eq!(page.label, (position + 1).to_string());
        }
        assert_eq!(pages.iter().filter(|page| page.active).count(), 1);
        assert!(pages[2].active);
    }

    #[test]
    fn empty_result_set_yields_a_single_placeholder_page() {
        let pages = compute_pages(&state(0, 10, 0, 2));
        assert_eq!(pages.len(), 1);
        assert!(pages[0].active);
        assert_eq!(pages[0].label, "1");
    }

    #[test]
    fn window_collapses_both_sides_into_one_ellipsis_each() {
        // 20 pages, reach 2, current 10: [0, .., 8 9 10 11 12, .., 19]
        let pages = direct_accessible(&state(200, 10, 10, 2));
        let labels: Vec<&str> = pages.iter().map(|page| page.label.as_str()).collect();
        assert_eq!(labels, ["1", "..", "9", "10", "11", "12", "13", "..", "20"]);
        assert_eq!(pages.iter().filter(|page| page.is_ellipsis()).count(), 2);
        // Ellipsis entries address the hidden page adjacent to the window.
        assert_eq!(pages[1].number, 7);
        assert_eq!(pages[7].number, 13);
        assert!(pages[4].active);
    }

    #[test]
    fn full_range_window_produces_no_ellipsis() {
        let pages = direct_accessible(&state(45, 10, 2, 2));
        let numbers: Vec<usize> = pages.iter().map(|page| page.number).collect();
        assert_eq!(numbers, [0, 1, 2, 3, 4]);
        assert!(pages.iter().all(|page| !page.is_ellipsis()));
    }

    #[test]
    fn single_page_gaps_render_the_page_instead_of_an_ellipsis() {
        // 7 pages, reach 1, current 3: gaps of exactly one page on both sides.
        let pages = direct_accessible(&state(70, 10, 3, 1));
        let numbers: Vec<usize> = pages.iter().map(|page| page.number).collect();
        assert_eq!(numbers, [0, 1, 2, 3, 4, 5, 6]);
        assert!(pages.iter().all(|page| !page.is_ellipsis()));
    }

    #[test]
    fn first_and_last_page_stay_reachable_at_the_edges() {
        let pages = direct_accessible(&state(200, 10, 0, 2));
        assert_eq!(pages.first().map(|page| page.number), Some(0));
        assert_eq!(pages.last().map(|page| page.number), Some(19));
        let pages = direct_accessible(&state(200, 10, 19, 2));
        assert_eq!(pages.first().map(|page| page.number), Some(0));
        assert_eq!(pages.last().map(|page| page.number), Some(19));
    }

    #[test]
    fn page_size_change_resets_the_offset_and_recomputes_pages() {
        let mut pagination = state(45, 10, 4, 2);
        assert_eq!(compute_pages(&pagination).len(), 5);
        set_limit(&mut pagination, 20);
        assert_eq!(pagination.offset, 0);
        assert_eq!(pagination.limit, 20);
        assert_eq!(compute_pages(&pagination).len(), 3);
    }

    #[test]
    fn shrinking_totals_clamp_the_current_offset() {
        let mut pagination = state(200, 10, 19, 2);
        set_total(&mut pagination, 45);
        assert_eq!(pagination.offset, 4);
        set_total(&mut pagination, 0);
        assert_eq!(pagination.offset, 0);
    }

    #[test]
    fn navigation_clamps_to_the_valid_range() {
        let mut pagination = state(45, 10, 0, 2);
        go_to(&mut pagination, 3);
        assert_eq!(pagination.offset, 3);
        go_to(&mut pagination, 99);
        assert_eq!(pagination.offset, 4);
    }
}
