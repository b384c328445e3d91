//! Dirty-window tracking
//!
//! The driver only sends the rectangle of pages and columns touched since
//! the last refresh. [`DirtyWindow`] is that rectangle: inclusive page and
//! column bounds plus a flag saying whether anything was touched at all.

/// Inclusive page/column rectangle touched since the last refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DirtyWindow {
    dirty: bool,
    top_page: u8,
    bottom_page: u8,
    left_col: u8,
    right_col: u8,
}

impl DirtyWindow {
    /// Window covering `pages` full pages of `columns` columns
    pub fn full(pages: u8, columns: u8) -> Self {
        Self {
            dirty: pages > 0 && columns > 0,
            top_page: 0,
            bottom_page: pages.saturating_sub(1),
            left_col: 0,
            right_col: columns.saturating_sub(1),
        }
    }

    /// Grow the window to include columns `left..=right` of `page`
    pub fn touch(&mut self, page: u8, left: u8, right: u8) {
        let (left, right) = (left.min(right), left.max(right));
        if self.dirty {
            self.top_page = self.top_page.min(page);
            self.bottom_page = self.bottom_page.max(page);
            self.left_col = self.left_col.min(left);
            self.right_col = self.right_col.max(right);
        } else {
            *self = Self {
                dirty: true,
                top_page: page,
                bottom_page: page,
                left_col: left,
                right_col: right,
            };
        }
    }

    /// Grow the window to include another window
    pub fn merge(&mut self, other: &Self) {
        if other.dirty {
            self.touch(other.top_page, other.left_col, other.right_col);
            self.touch(other.bottom_page, other.left_col, other.right_col);
        }
    }

    /// Forget everything touched
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Anything touched?
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Inclusive page range
    pub fn pages(&self) -> (u8, u8) {
        (self.top_page, self.bottom_page)
    }

    /// Inclusive column range
    pub fn columns(&self) -> (u8, u8) {
        (self.left_col, self.right_col)
    }
}
