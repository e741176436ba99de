//! Selection movement.
//!
//! Every move computes a tentative position and then scans row-major for
//! the nearest selectable cell, first in the direction of travel, then the
//! other way from the current selection. A move that finds nothing leaves
//! the selection where it was.

use super::state::TableState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn reverse(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Where a scan gives up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanLimit {
    /// After examining this cell.
    Until(usize, usize),
    /// After examining every cell once.
    FullCircle,
}

/// One move of the selection, before the search for a selectable cell.
#[derive(Debug, Clone, Copy)]
struct Plan {
    origin: (usize, usize),
    tentative: (usize, usize),
    direction: Direction,
    limit: ScanLimit,
    fallback: ScanLimit,
}

impl TableState {
    pub(crate) fn last_position(&self) -> (usize, usize) {
        (
            self.content.row_count().saturating_sub(1),
            self.content.column_count().saturating_sub(1),
        )
    }

    fn step(&self, (row, column): (usize, usize), direction: Direction) -> (usize, usize) {
        let (last_row, last_column) = self.last_position();
        match direction {
            Direction::Forward => {
                if column < last_column {
                    (row, column + 1)
                } else if row < last_row {
                    (row + 1, 0)
                } else {
                    (0, 0)
                }
            }
            Direction::Backward => {
                if column > 0 {
                    (row, column - 1)
                } else if row > 0 {
                    (row - 1, last_column)
                } else {
                    (last_row, last_column)
                }
            }
        }
    }

    /// First selectable cell from `start` (inclusive) walking row-major in
    /// `direction`, wrapping around the grid, until `limit`.
    pub(crate) fn scan(
        &self,
        start: (usize, usize),
        direction: Direction,
        limit: ScanLimit,
    ) -> Option<(usize, usize)> {
        let mut position = start;
        loop {
            if self.is_selectable(position.0, position.1) {
                return Some(position);
            }
            if limit == ScanLimit::Until(position.0, position.1) {
                return None;
            }
            position = self.step(position, direction);
            if position == start {
                return None;
            }
        }
    }

    fn grid_is_empty(&self) -> bool {
        self.content.row_count() == 0 || self.content.column_count() == 0
    }

    fn execute(&mut self, plan: Plan) -> bool {
        let found = self
            .scan(plan.tentative, plan.direction, plan.limit)
            .or_else(|| self.scan(plan.origin, plan.direction.reverse(), plan.fallback));
        self.clamp_to_selection = true;
        match found {
            Some((row, column)) => {
                self.selected_row = row;
                self.selected_column = column;
                true
            }
            None => {
                log::debug!(
                    "no selectable cell reachable from ({}, {})",
                    plan.origin.0,
                    plan.origin.1
                );
                false
            }
        }
    }

    fn vertical_limits(&self, direction: Direction) -> (ScanLimit, ScanLimit) {
        let (last_row, last_column) = self.last_position();
        let towards_end = ScanLimit::Until(last_row, last_column);
        let towards_start = ScanLimit::Until(0, 0);
        match direction {
            Direction::Forward => (towards_end, towards_start),
            Direction::Backward => (towards_start, towards_end),
        }
    }

    pub fn move_down(&mut self) {
        if self.grid_is_empty() {
            return;
        }
        if !self.rows_selectable {
            self.scroll_rows(1);
            return;
        }
        let (last_row, _) = self.last_position();
        let row = if self.selected_row < last_row {
            self.selected_row + 1
        } else if self.wrap_vertically {
            0
        } else {
            last_row
        };
        let (limit, fallback) = if self.wrap_vertically {
            (ScanLimit::FullCircle, ScanLimit::FullCircle)
        } else {
            self.vertical_limits(Direction::Forward)
        };
        self.execute(Plan {
            origin: (self.selected_row, self.selected_column),
            tentative: (row, self.selected_column),
            direction: Direction::Forward,
            limit,
            fallback,
        });
    }

    pub fn move_up(&mut self) {
        if self.grid_is_empty() {
            return;
        }
        if !self.rows_selectable {
            self.scroll_rows(-1);
            return;
        }
        let (last_row, _) = self.last_position();
        let row = if self.selected_row > 0 {
            self.selected_row - 1
        } else if self.wrap_vertically {
            last_row
        } else {
            0
        };
        let (limit, fallback) = if self.wrap_vertically {
            (ScanLimit::FullCircle, ScanLimit::FullCircle)
        } else {
            self.vertical_limits(Direction::Backward)
        };
        self.execute(Plan {
            origin: (self.selected_row, self.selected_column),
            tentative: (row, self.selected_column),
            direction: Direction::Backward,
            limit,
            fallback,
        });
    }

    pub fn move_right(&mut self) {
        if self.grid_is_empty() {
            return;
        }
        if !self.columns_selectable {
            self.scroll_horizontal(1);
            return;
        }
        let (last_row, last_column) = self.last_position();
        let (row, column) = (self.selected_row, self.selected_column);

        let tentative = if column < last_column {
            (row, column + 1)
        } else if !self.wrap_horizontally {
            (row, last_column)
        } else if row < last_row {
            (row + 1, 0)
        } else if self.wrap_vertically {
            (0, 0)
        } else {
            (last_row, last_column)
        };

        let (limit, fallback) = match (self.wrap_horizontally, self.wrap_vertically) {
            (false, _) => (ScanLimit::Until(row, last_column), ScanLimit::Until(row, 0)),
            (true, false) => self.vertical_limits(Direction::Forward),
            (true, true) => (ScanLimit::FullCircle, ScanLimit::FullCircle),
        };
        self.execute(Plan {
            origin: (self.selected_row, self.selected_column),
            tentative,
            direction: Direction::Forward,
            limit,
            fallback,
        });
    }

    pub fn move_left(&mut self) {
        if self.grid_is_empty() {
            return;
        }
        if !self.columns_selectable {
            self.scroll_horizontal(-1);
            return;
        }
        let (last_row, last_column) = self.last_position();
        let (row, column) = (self.selected_row, self.selected_column);

        let tentative = if column > 0 {
            (row, column - 1)
        } else if !self.wrap_horizontally {
            (row, 0)
        } else if row > 0 {
            (row - 1, last_column)
        } else if self.wrap_vertically {
            (last_row, last_column)
        } else {
            (0, 0)
        };

        let (limit, fallback) = match (self.wrap_horizontally, self.wrap_vertically) {
            (false, _) => (ScanLimit::Until(row, 0), ScanLimit::Until(row, last_column)),
            (true, false) => self.vertical_limits(Direction::Backward),
            (true, true) => (ScanLimit::FullCircle, ScanLimit::FullCircle),
        };
        self.execute(Plan {
            origin: (self.selected_row, self.selected_column),
            tentative,
            direction: Direction::Backward,
            limit,
            fallback,
        });
    }

    pub fn move_home(&mut self) {
        if self.grid_is_empty() {
            return;
        }
        if !self.rows_selectable {
            self.track_end = false;
            self.row_offset = 0;
            self.horizontal = self.horizontal.reset();
            return;
        }
        let (limit, fallback) = self.vertical_limits(Direction::Forward);
        self.execute(Plan {
            origin: (self.selected_row, self.selected_column),
            tentative: (0, 0),
            direction: Direction::Forward,
            limit,
            fallback,
        });
    }

    pub fn move_end(&mut self) {
        if self.grid_is_empty() {
            return;
        }
        if !self.rows_selectable {
            self.track_end = true;
            self.horizontal = self.horizontal.reset();
            return;
        }
        let (limit, fallback) = self.vertical_limits(Direction::Backward);
        self.execute(Plan {
            origin: (self.selected_row, self.selected_column),
            tentative: self.last_position(),
            direction: Direction::Backward,
            limit,
            fallback,
        });
    }

    /// Scrollable rows per page as of the last draw.
    fn page_size(&self) -> usize {
        self.visible_rows.saturating_sub(self.fixed_rows)
    }

    pub fn page_down(&mut self) {
        if self.grid_is_empty() {
            return;
        }
        let shift = self.page_size();
        if !self.rows_selectable {
            self.scroll_rows(shift as isize);
            return;
        }
        let (last_row, _) = self.last_position();
        let row = (self.selected_row + shift).min(last_row);
        let (limit, fallback) = self.vertical_limits(Direction::Forward);
        self.execute(Plan {
            origin: (self.selected_row, self.selected_column),
            tentative: (row, self.selected_column),
            direction: Direction::Forward,
            limit,
            fallback,
        });
    }

    pub fn page_up(&mut self) {
        if self.grid_is_empty() {
            return;
        }
        let shift = self.page_size();
        if !self.rows_selectable {
            self.scroll_rows(-(shift as isize));
            return;
        }
        let row = self.selected_row.saturating_sub(shift);
        let (limit, fallback) = self.vertical_limits(Direction::Backward);
        self.execute(Plan {
            origin: (self.selected_row, self.selected_column),
            tentative: (row, self.selected_column),
            direction: Direction::Backward,
            limit,
            fallback,
        });
    }

    /// Move the selection into range and onto a selectable cell, scanning
    /// forward from where it is. Without any selectable cell the clamped
    /// position is kept.
    pub(crate) fn ensure_valid_selection(&mut self) {
        if !self.selection_enabled() || self.grid_is_empty() {
            return;
        }
        let (last_row, last_column) = self.last_position();
        let start = (
            self.selected_row.min(last_row),
            self.selected_column.min(last_column),
        );
        let limit = ScanLimit::Until(last_row, last_column);
        let found = self.scan(start, Direction::Forward, limit).unwrap_or(start);
        self.selected_row = found.0;
        self.selected_column = found.1;
    }
}
