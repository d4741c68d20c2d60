//! Page arithmetic and page-button generation

/// Rows per page
pub const PAGE_SIZE: usize = 10;

/// A button in the pager strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Page(usize),
    Ellipsis,
}

/// Number of pages for `len` rows
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Clamp a 1-based page into `[1, max(page_count, 1)]`
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}

/// Rows on the 1-based `page`; empty past the end
pub fn page_slice<T>(rows: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE).min(rows.len());
    let end = (start + PAGE_SIZE).min(rows.len());
    &rows[start..end]
}

/// Pager buttons for `current` of `total` pages.
///
/// The first, last and current pages plus the current page's neighbours are
/// always shown. Each gap to the left or right collapses into one ellipsis.
pub fn page_buttons(current: usize, total: usize) -> Vec<PageButton> {
    let mut buttons = Vec::new();
    for p in 1..=total {
        if p == 1 || p == total || p.abs_diff(current) <= 1 {
            buttons.push(PageButton::Page(p));
        } else if (p == 2 && current > 3) || (p + 1 == total && current + 2 < total) {
            buttons.push(PageButton::Ellipsis);
        }
    }
    buttons
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageButton::{Ellipsis, Page};

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(10), 1);
        assert_eq!(page_count(11), 2);
        assert_eq!(page_count(23), 3);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(7, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn test_pages_concatenate_to_input() {
        for len in [0usize, 1, 9, 10, 11, 23, 40] {
            let rows: Vec<usize> = (0..len).collect();
            let rebuilt: Vec<usize> = (1..=page_count(len))
                .flat_map(|p| page_slice(&rows, p).iter().copied())
                .collect();
            assert_eq!(rebuilt, rows, "len {len}");
        }
    }

    #[test]
    fn test_page_slice_past_end_is_empty() {
        let rows = [1, 2, 3];
        assert!(page_slice(&rows, 2).is_empty());
        assert_eq!(page_slice(&rows, 0), &[1, 2, 3]);
    }

    #[test]
    fn test_three_pages_no_ellipsis() {
        assert_eq!(page_buttons(2, 3), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn test_ellipsis_on_both_sides() {
        assert_eq!(
            page_buttons(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_ellipsis_near_edges() {
        assert_eq!(page_buttons(1, 10), vec![Page(1), Page(2), Ellipsis, Page(10)]);
        assert_eq!(page_buttons(10, 10), vec![Page(1), Ellipsis, Page(9), Page(10)]);
        // current == 3: page 2 is a neighbour, no left ellipsis
        assert_eq!(
            page_buttons(3, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_gap_wider_than_one_collapses_to_single_marker() {
        // pages 3 and 8 are skipped silently, only 2 and 9 become markers
        let buttons = page_buttons(5, 10);
        assert_eq!(buttons.iter().filter(|b| **b == Ellipsis).count(), 2);
    }

    #[test]
    fn test_no_pages() {
        assert!(page_buttons(1, 0).is_empty());
        assert_eq!(page_buttons(1, 1), vec![Page(1)]);
    }
}
