//! Cell storage.
//!
//! [`TableContent`] is the read side every data source must provide.
//! [`TableContentMut`] adds the structural mutations; sources that cannot
//! be written can wrap themselves in [`ReadOnly`] to get no-op writes.

use std::borrow::Cow;

use super::cell::TableCell;

/// Read access to a grid of cells.
pub trait TableContent: Send + Sync {
    /// The cell at `(row, column)`, or `None` if nothing is stored there.
    fn cell(&self, row: usize, column: usize) -> Option<Cow<'_, TableCell>>;

    fn row_count(&self) -> usize;

    fn column_count(&self) -> usize;
}

/// Write access to a grid of cells. Out-of-range arguments are no-ops.
pub trait TableContentMut: TableContent {
    fn set_cell(&mut self, row: usize, column: usize, cell: TableCell);

    fn remove_row(&mut self, row: usize);

    fn remove_column(&mut self, column: usize);

    /// Insert an empty row before `row`. Only existing positions qualify.
    fn insert_row(&mut self, row: usize);

    /// Insert an empty column before `column`. Only existing positions
    /// qualify.
    fn insert_column(&mut self, column: usize);

    fn clear(&mut self);

    /// In-place access to a stored cell, for sources that keep cells.
    fn cell_mut(&mut self, _row: usize, _column: usize) -> Option<&mut TableCell> {
        None
    }
}

/// Row-major in-memory store. Rows may be ragged; the column count follows
/// the highest column ever written.
#[derive(Debug, Clone, Default)]
pub struct GridContent {
    rows: Vec<Vec<TableCell>>,
    last_column: Option<usize>,
}

impl GridContent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TableContent for GridContent {
    fn cell(&self, row: usize, column: usize) -> Option<Cow<'_, TableCell>> {
        self.rows.get(row)?.get(column).map(Cow::Borrowed)
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        if self.rows.is_empty() {
            return 0;
        }
        self.last_column.map_or(0, |last| last + 1)
    }
}

impl TableContentMut for GridContent {
    fn set_cell(&mut self, row: usize, column: usize, cell: TableCell) {
        if row >= self.rows.len() {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if column >= cells.len() {
            cells.resize_with(column + 1, TableCell::default);
        }
        cells[column] = cell;
        self.last_column = Some(self.last_column.map_or(column, |last| last.max(column)));
    }

    fn remove_row(&mut self, row: usize) {
        if row < self.rows.len() {
            self.rows.remove(row);
        }
    }

    fn remove_column(&mut self, column: usize) {
        let Some(last) = self.last_column else {
            return;
        };
        if column > last {
            return;
        }
        for cells in &mut self.rows {
            if column < cells.len() {
                cells.remove(column);
            }
        }
        self.last_column = last.checked_sub(1);
    }

    fn insert_row(&mut self, row: usize) {
        if row >= self.rows.len() {
            return;
        }
        let width = self.column_count();
        self.rows
            .insert(row, std::iter::repeat_with(TableCell::default).take(width).collect());
    }

    fn insert_column(&mut self, column: usize) {
        let Some(last) = self.last_column else {
            return;
        };
        if column > last {
            return;
        }
        for cells in &mut self.rows {
            if column < cells.len() {
                cells.insert(column, TableCell::default());
            }
        }
        self.last_column = Some(last + 1);
    }

    fn clear(&mut self) {
        self.rows.clear();
        self.last_column = None;
    }

    fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut TableCell> {
        self.rows.get_mut(row)?.get_mut(column)
    }
}

/// Adapter giving a read-only source a mutable interface whose writes do
/// nothing.
#[derive(Debug, Clone, Default)]
pub struct ReadOnly<C>(pub C);

impl<C: TableContent> TableContent for ReadOnly<C> {
    fn cell(&self, row: usize, column: usize) -> Option<Cow<'_, TableCell>> {
        self.0.cell(row, column)
    }

    fn row_count(&self) -> usize {
        self.0.row_count()
    }

    fn column_count(&self) -> usize {
        self.0.column_count()
    }
}

impl<C: TableContent> TableContentMut for ReadOnly<C> {
    fn set_cell(&mut self, _row: usize, _column: usize, _cell: TableCell) {}

    fn remove_row(&mut self, _row: usize) {}

    fn remove_column(&mut self, _column: usize) {}

    fn insert_row(&mut self, _row: usize) {}

    fn insert_column(&mut self, _column: usize) {}

    fn clear(&mut self) {}
}
