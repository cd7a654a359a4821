//! Shared cursor navigation for list screens.

use super::constants::SCROLL_PAGE_ROWS;

/// Cursor movement over a list of `total()` rows.
///
/// Implementors only provide the cursor storage and the row count; the
/// movement rules live here so every list behaves the same.
pub trait ListNavigation {
    /// Get the current selection index.
    fn selected(&self) -> usize;

    /// Set the selection index.
    fn set_selected(&mut self, idx: usize);

    /// Number of selectable rows.
    fn total(&self) -> usize;

    /// Move selection to the next item.
    fn select_next(&mut self) {
        let total = self.total();
        let selected = self.selected();
        if total > 0 && selected < total - 1 {
            self.set_selected(selected + 1);
        }
    }

    /// Move selection to the previous item.
    fn select_prev(&mut self) {
        let selected = self.selected();
        if selected > 0 {
            self.set_selected(selected - 1);
        }
    }

    /// Ensure selection is within valid bounds.
    fn clamp_selection(&mut self) {
        let total = self.total();
        if total == 0 {
            self.set_selected(0);
        } else if self.selected() >= total {
            self.set_selected(total - 1);
        }
    }

    fn page_up(&mut self) {
        let selected = self.selected();
        self.set_selected(selected.saturating_sub(SCROLL_PAGE_ROWS));
    }

    fn page_down(&mut self) {
        let total = self.total();
        if total > 0 {
            self.set_selected((self.selected() + SCROLL_PAGE_ROWS).min(total - 1));
        }
    }

    fn go_first(&mut self) {
        self.set_selected(0);
    }

    fn go_last(&mut self) {
        let total = self.total();
        if total > 0 {
            self.set_selected(total - 1);
        }
    }

    /// Whether the cursor sits on the first row (or the list is empty).
    fn at_top(&self) -> bool {
        self.selected() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rows {
        selected: usize,
        total: usize,
    }

    impl ListNavigation for Rows {
        fn selected(&self) -> usize {
            self.selected
        }

        fn set_selected(&mut self, idx: usize) {
            self.selected = idx;
        }

        fn total(&self) -> usize {
            self.total
        }
    }

    #[test]
    fn test_navigation_bounds() {
        let mut rows = Rows { selected: 0, total: 10 };

        rows.select_prev();
        assert_eq!(rows.selected(), 0);
        assert!(rows.at_top());

        rows.select_next();
        assert_eq!(rows.selected(), 1);

        rows.go_last();
        assert_eq!(rows.selected(), 9);
        rows.select_next();
        assert_eq!(rows.selected(), 9);

        rows.go_first();
        assert_eq!(rows.selected(), 0);
    }

    #[test]
    fn test_page_navigation() {
        let mut rows = Rows { selected: 0, total: 12 };

        rows.page_down();
        assert_eq!(rows.selected(), 5);
        rows.page_down();
        rows.page_down();
        assert_eq!(rows.selected(), 11);
        rows.page_up();
        assert_eq!(rows.selected(), 6);
        rows.page_up();
        rows.page_up();
        assert_eq!(rows.selected(), 0);
    }

    #[test]
    fn test_empty_list() {
        let mut rows = Rows { selected: 3, total: 0 };
        rows.clamp_selection();
        assert_eq!(rows.selected(), 0);

        rows.select_next();
        rows.page_down();
        rows.go_last();
        assert_eq!(rows.selected(), 0);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut rows = Rows { selected: 9, total: 4 };
        rows.clamp_selection();
        assert_eq!(rows.selected(), 3);
    }
}
