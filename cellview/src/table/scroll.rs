//! Row and column offsets.

use super::state::TableState;

/// How the scrollable columns are offset horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalScroll {
    /// Skip this many whole scrollable columns.
    Columns(usize),
    /// Shift the scrollable columns left by this many screen cells.
    Cells(usize),
}

impl Default for HorizontalScroll {
    fn default() -> Self {
        Self::Columns(0)
    }
}

impl HorizontalScroll {
    /// The same mode scrolled back to the start.
    pub fn reset(self) -> Self {
        match self {
            Self::Columns(_) => Self::Columns(0),
            Self::Cells(_) => Self::Cells(0),
        }
    }
}

impl TableState {
    /// Row offset and, in discrete mode, column offset.
    pub fn offset(&self) -> (usize, Option<usize>) {
        let column = match self.horizontal {
            HorizontalScroll::Columns(offset) => Some(offset),
            HorizontalScroll::Cells(_) => None,
        };
        (self.row_offset, column)
    }

    /// Set both offsets and switch to discrete column scrolling. Stops
    /// following the last row.
    pub fn set_offset(&mut self, row: usize, column: usize) {
        self.track_end = false;
        self.row_offset = row;
        self.horizontal = HorizontalScroll::Columns(column);
    }

    /// Horizontal scroll amount in continuous mode.
    pub fn x_scroll(&self) -> Option<usize> {
        match self.horizontal {
            HorizontalScroll::Cells(x) => Some(x),
            HorizontalScroll::Columns(_) => None,
        }
    }

    /// Switch to continuous scrolling at `x` cells. Stops following the
    /// last row.
    pub fn set_x_scroll(&mut self, x: usize) {
        self.track_end = false;
        self.horizontal = HorizontalScroll::Cells(x);
    }

    pub fn horizontal_scroll(&self) -> HorizontalScroll {
        self.horizontal
    }

    pub fn is_tracking_end(&self) -> bool {
        self.track_end
    }

    /// Show the top-left corner. A selection may pull the view elsewhere on
    /// the next draw.
    pub fn scroll_to_beginning(&mut self) {
        self.track_end = false;
        self.row_offset = 0;
        self.horizontal = self.horizontal.reset();
    }

    /// Show the last row and keep showing it as rows are added.
    pub fn scroll_to_end(&mut self) {
        self.track_end = true;
        self.row_offset = self.content.row_count();
        self.horizontal = self.horizontal.reset();
    }

    /// Move the row offset by `delta` rows. Scrolling up stops following
    /// the last row.
    pub fn scroll_rows(&mut self, delta: isize) {
        if delta < 0 {
            self.track_end = false;
        }
        self.row_offset = self.row_offset.saturating_add_signed(delta);
    }

    /// Move the horizontal position by `delta` columns or cells, whichever
    /// the current mode counts in.
    pub fn scroll_horizontal(&mut self, delta: isize) {
        self.horizontal = match self.horizontal {
            HorizontalScroll::Columns(offset) => {
                HorizontalScroll::Columns(offset.saturating_add_signed(delta))
            }
            HorizontalScroll::Cells(x) => HorizontalScroll::Cells(x.saturating_add_signed(delta)),
        };
    }

    /// Settle the row offset for a viewport showing `visible` table rows.
    ///
    /// Keeps the selection in view when a navigation asked for it, clamps
    /// the offset into range, engages end tracking when the last row is
    /// reached and then honours it.
    pub(crate) fn resolve_row_offset(&mut self, visible: usize) {
        let rows = self.content.row_count();

        if self.clamp_to_selection && self.rows_selectable {
            let selected = self.selected_row;
            if selected >= self.fixed_rows && selected < self.fixed_rows + self.row_offset {
                self.row_offset = selected - self.fixed_rows;
                self.track_end = false;
            }
            if selected + 1 > self.row_offset + visible {
                self.row_offset = selected + 1 - visible;
                self.track_end = false;
            }
        }

        let max_offset = rows.saturating_sub(visible);
        if self.row_offset > max_offset {
            self.row_offset = max_offset;
        }

        if !self.track_end && rows > 0 && self.row_offset + visible >= rows {
            log::trace!("row offset {} reaches the last row, tracking end", self.row_offset);
            self.track_end = true;
        }
        if self.track_end {
            self.row_offset = max_offset;
        }
    }

    /// Keep the discrete column offset inside the scrollable columns.
    pub(crate) fn clamp_column_offset(&mut self) {
        if let HorizontalScroll::Columns(offset) = self.horizontal {
            let scrollable = self
                .content
                .column_count()
                .saturating_sub(self.fixed_columns);
            let max = scrollable.saturating_sub(1);
            if offset > max {
                self.horizontal = HorizontalScroll::Columns(max);
            }
        }
    }

    /// Rows to draw, fixed rows first, for a viewport of `visible` rows.
    pub(crate) fn visible_row_list(&self, visible: usize) -> Vec<usize> {
        let rows = self.content.row_count();
        let fixed = self.fixed_rows.min(rows).min(visible);
        let mut list: Vec<usize> = (0..fixed).collect();
        let start = self.fixed_rows + self.row_offset;
        list.extend((start..rows).take(visible - fixed));
        list
    }
}
