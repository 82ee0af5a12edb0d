pub const PAGE_STEP: usize = 5;

/// Cursor over the selectable rows and the first visible display row.
///
/// `index` counts selectable rows only; `scroll_top` counts every display
/// row, category headers included.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub scroll_top: usize,
}

impl Selection {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn move_up(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.index = (self.index + count - 1) % count;
    }

    pub fn move_down(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.index = (self.index + 1) % count;
    }

    pub fn page_up(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.index = self.index.saturating_sub(PAGE_STEP);
    }

    pub fn page_down(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.index = (self.index + PAGE_STEP).min(count - 1);
    }

    pub fn clamp(&mut self, count: usize) {
        self.index = self.index.min(count.saturating_sub(1));
    }

    pub fn selected_row(&self, selectable: &[usize]) -> Option<usize> {
        selectable.get(self.index).copied()
    }

    /// Scroll as little as possible so `selected_row` sits inside the
    /// viewport, then keep the viewport inside `total_rows`.
    pub fn reveal(&mut self, selected_row: Option<usize>, viewport_height: usize, total_rows: usize) {
        let height = viewport_height.max(1);
        if let Some(row) = selected_row {
            if row < self.scroll_top {
                self.scroll_top = row;
            } else if row >= self.scroll_top + height {
                self.scroll_top = row + 1 - height;
            }
        }
        self.scroll_top = self.scroll_top.min(total_rows.saturating_sub(height));
    }

    pub fn visible_range(&self, viewport_height: usize, total_rows: usize) -> std::ops::Range<usize> {
        let start = self.scroll_top.min(total_rows);
        start..(start + viewport_height).min(total_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn at(index: usize) -> Selection {
        Selection { index, scroll_top: 0 }
    }

    #[test]
    fn arrows_wrap_around() {
        let mut selection = at(4);
        selection.move_down(5);
        assert_eq!(selection.index, 0);
        selection.move_up(5);
        assert_eq!(selection.index, 4);
        selection.move_up(5);
        assert_eq!(selection.index, 3);
    }

    #[test]
    fn navigation_without_rows_is_a_no_op() {
        let mut selection = at(0);
        selection.move_up(0);
        selection.move_down(0);
        selection.page_up(0);
        selection.page_down(0);
        assert_eq!(selection, at(0));
    }

    #[test]
    fn paging_clamps_instead_of_wrapping() {
        let mut selection = at(0);
        selection.page_up(12);
        assert_eq!(selection.index, 0);

        selection.page_down(12);
        assert_eq!(selection.index, 5);
        selection.page_down(12);
        selection.page_down(12);
        assert_eq!(selection.index, 11);
        selection.page_down(12);
        assert_eq!(selection.index, 11);

        selection.page_up(12);
        assert_eq!(selection.index, 6);
        selection.index = 3;
        selection.page_up(12);
        assert_eq!(selection.index, 0);
    }

    #[test]
    fn clamp_keeps_index_in_range() {
        let mut selection = at(9);
        selection.clamp(4);
        assert_eq!(selection.index, 3);
        selection.clamp(0);
        assert_eq!(selection.index, 0);
    }

    #[test]
    fn reveal_scrolls_minimally() {
        let mut selection = Selection { index: 0, scroll_top: 0 };
        selection.reveal(Some(12), 5, 40);
        assert_eq!(selection.scroll_top, 8);

        selection.reveal(Some(10), 5, 40);
        assert_eq!(selection.scroll_top, 8);

        selection.reveal(Some(3), 5, 40);
        assert_eq!(selection.scroll_top, 3);
    }

    #[test]
    fn reveal_clamps_to_the_row_count() {
        let mut selection = Selection { index: 0, scroll_top: 30 };
        selection.reveal(None, 10, 12);
        assert_eq!(selection.scroll_top, 2);

        selection.reveal(None, 10, 4);
        assert_eq!(selection.scroll_top, 0);
    }

    #[test]
    fn visible_range_stays_inside_rows() {
        let selection = Selection { index: 0, scroll_top: 8 };
        assert_eq!(selection.visible_range(5, 10), 8..10);
        assert_eq!(selection.visible_range(5, 3), 3..3);
    }
}
