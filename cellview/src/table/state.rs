//! Owned table state.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use cellscreen::text::char_width;
use cellscreen::{Color, Rect, Style};

use crate::theme::Theme;
use crate::widget::Block;

use super::cell::TableCell;
use super::config::{DEFAULT_DOUBLE_CLICK, TableConfig};
use super::content::{GridContent, TableContentMut};
use super::layout::ColumnLayout;
use super::scroll::HorizontalScroll;

/// Where a column landed on screen in the last draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub column: usize,
    /// Absolute screen column of the first visible cell.
    pub x: u16,
    /// Visible width, after clipping.
    pub width: u16,
}

/// # Panics
///
/// If `separator` does not occupy exactly one screen cell.
pub(crate) fn check_separator(separator: char) {
    let width = char_width(separator);
    assert!(
        width == 1,
        "table separator {:?} must be one cell wide, not {}",
        separator,
        width
    );
}

/// Geometry remembered from the last draw, used to resolve mouse clicks.
#[derive(Debug, Clone, Default)]
pub(crate) struct Frame {
    pub inner: Rect,
    pub rows: Vec<usize>,
    pub layout: ColumnLayout,
    /// Cells the scrollable columns are shifted left by.
    pub x_scroll: usize,
    pub spans: Vec<ColumnSpan>,
}

/// Everything a table knows: content, configuration, selection, scroll
/// position and the geometry of the last draw.
///
/// All operations are plain methods taking `&self` or `&mut self`.
/// [`super::Table`] wraps this in a lock for shared use; callers that own
/// the state outright can use it directly.
pub struct TableState {
    pub(crate) block: Block,
    pub(crate) theme: Theme,
    pub(crate) content: Box<dyn TableContentMut>,

    pub(crate) borders: bool,
    pub(crate) border_color: Option<Color>,
    pub(crate) separator: char,
    pub(crate) fixed_rows: usize,
    pub(crate) fixed_columns: usize,
    pub(crate) rows_selectable: bool,
    pub(crate) columns_selectable: bool,
    pub(crate) selected_style: Option<Style>,
    pub(crate) wrap_vertically: bool,
    pub(crate) wrap_horizontally: bool,
    pub(crate) evaluate_all_rows: bool,

    pub(crate) selected_row: usize,
    pub(crate) selected_column: usize,
    pub(crate) row_offset: usize,
    pub(crate) horizontal: HorizontalScroll,
    pub(crate) track_end: bool,
    /// One-shot: the next draw scrolls the selection into view.
    pub(crate) clamp_to_selection: bool,

    /// Table rows that fit the last drawn viewport.
    pub(crate) visible_rows: usize,
    pub(crate) frame: Option<Frame>,
    pub(crate) positions: HashMap<(usize, usize), (u16, u16, u16)>,

    pub(crate) double_click: Duration,
    pub(crate) last_mouse_down: Option<Instant>,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TableState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableState")
            .field("rows", &self.content.row_count())
            .field("columns", &self.content.column_count())
            .field("selection", &(self.selected_row, self.selected_column))
            .field("row_offset", &self.row_offset)
            .field("horizontal", &self.horizontal)
            .field("track_end", &self.track_end)
            .finish_non_exhaustive()
    }
}

impl TableState {
    pub fn new() -> Self {
        Self::themed(Theme::default())
    }

    pub fn themed(theme: Theme) -> Self {
        Self::with_content(theme, Box::new(GridContent::new()))
    }

    pub fn with_content(theme: Theme, content: Box<dyn TableContentMut>) -> Self {
        Self {
            block: Block::new(&theme),
            theme,
            content,
            borders: false,
            border_color: None,
            separator: ' ',
            fixed_rows: 0,
            fixed_columns: 0,
            rows_selectable: false,
            columns_selectable: false,
            selected_style: None,
            wrap_vertically: false,
            wrap_horizontally: false,
            evaluate_all_rows: false,
            selected_row: 0,
            selected_column: 0,
            row_offset: 0,
            horizontal: HorizontalScroll::default(),
            track_end: false,
            clamp_to_selection: false,
            visible_rows: 0,
            frame: None,
            positions: HashMap::new(),
            double_click: DEFAULT_DOUBLE_CLICK,
            last_mouse_down: None,
        }
    }

    pub fn apply_config(&mut self, config: &TableConfig) {
        self.set_separator(config.separator);
        self.borders = config.borders;
        self.border_color = config.border_color;
        self.fixed_rows = config.fixed_rows;
        self.fixed_columns = config.fixed_columns;
        self.rows_selectable = config.rows_selectable;
        self.columns_selectable = config.columns_selectable;
        self.selected_style = config.selected_style;
        self.wrap_vertically = config.wrap_vertically;
        self.wrap_horizontally = config.wrap_horizontally;
        self.evaluate_all_rows = config.evaluate_all_rows;
        self.double_click = config.double_click;
    }

    // -------------------------------------------------------------------------
    // Frame
    // -------------------------------------------------------------------------

    pub fn block(&self) -> &Block {
        &self.block
    }

    pub fn block_mut(&mut self) -> &mut Block {
        &mut self.block
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    pub fn borders(&self) -> bool {
        self.borders
    }

    pub fn set_borders(&mut self, borders: bool) {
        self.borders = borders;
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.border_color = Some(color);
    }

    /// Style of grid lines and separators.
    pub(crate) fn border_style(&self) -> Style {
        let style = self.theme.graphics_style();
        match self.border_color {
            Some(color) => style.fg(color),
            None => style,
        }
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// # Panics
    ///
    /// If `separator` does not occupy exactly one screen cell.
    pub fn set_separator(&mut self, separator: char) {
        check_separator(separator);
        self.separator = separator;
    }

    pub fn fixed(&self) -> (usize, usize) {
        (self.fixed_rows, self.fixed_columns)
    }

    pub fn set_fixed(&mut self, rows: usize, columns: usize) {
        self.fixed_rows = rows;
        self.fixed_columns = columns;
    }

    /// Whether rows and columns can be selected.
    pub fn selectable(&self) -> (bool, bool) {
        (self.rows_selectable, self.columns_selectable)
    }

    pub fn set_selectable(&mut self, rows: bool, columns: bool) {
        self.rows_selectable = rows;
        self.columns_selectable = columns;
    }

    pub(crate) fn selection_enabled(&self) -> bool {
        self.rows_selectable || self.columns_selectable
    }

    pub fn set_selected_style(&mut self, style: Option<Style>) {
        self.selected_style = style;
    }

    pub fn set_wrap_selection(&mut self, vertically: bool, horizontally: bool) {
        self.wrap_vertically = vertically;
        self.wrap_horizontally = horizontally;
    }

    pub fn set_evaluate_all_rows(&mut self, all: bool) {
        self.evaluate_all_rows = all;
    }

    pub fn set_double_click(&mut self, window: Duration) {
        self.double_click = window;
    }

    // -------------------------------------------------------------------------
    // Content
    // -------------------------------------------------------------------------

    pub fn set_content(&mut self, content: Box<dyn TableContentMut>) {
        self.content = content;
    }

    pub fn row_count(&self) -> usize {
        self.content.row_count()
    }

    pub fn column_count(&self) -> usize {
        self.content.column_count()
    }

    pub fn set_cell(&mut self, row: usize, column: usize, cell: TableCell) {
        self.content.set_cell(row, column, cell);
    }

    /// Store a cell with the given text and the theme's defaults.
    pub fn set_cell_simple(&mut self, row: usize, column: usize, text: impl Into<String>) {
        let cell = TableCell::themed(text, &self.theme);
        self.content.set_cell(row, column, cell);
    }

    /// A copy of the stored cell, or a fresh empty cell when nothing is
    /// stored. The fresh cell is not inserted.
    pub fn cell(&self, row: usize, column: usize) -> TableCell {
        self.content
            .cell(row, column)
            .map(|cell| cell.into_owned())
            .unwrap_or_else(|| TableCell::themed("", &self.theme))
    }

    /// Whether a cell is actually stored at `(row, column)`.
    pub fn has_cell(&self, row: usize, column: usize) -> bool {
        self.content.cell(row, column).is_some()
    }

    /// Change a stored cell in place. Returns false when the content does
    /// not hand out mutable cells or nothing is stored there.
    pub fn update_cell<F>(&mut self, row: usize, column: usize, update: F) -> bool
    where
        F: FnOnce(&mut TableCell),
    {
        match self.content.cell_mut(row, column) {
            Some(cell) => {
                update(cell);
                true
            }
            None => false,
        }
    }

    pub fn remove_row(&mut self, row: usize) {
        self.content.remove_row(row);
    }

    pub fn remove_column(&mut self, column: usize) {
        self.content.remove_column(column);
    }

    pub fn insert_row(&mut self, row: usize) {
        self.content.insert_row(row);
    }

    pub fn insert_column(&mut self, column: usize) {
        self.content.insert_column(column);
    }

    /// Drop all content. Selection and offsets are kept and re-validated on
    /// the next draw.
    pub fn clear(&mut self) {
        self.content.clear();
    }

    /// Stored and selectable.
    pub(crate) fn is_selectable(&self, row: usize, column: usize) -> bool {
        self.content
            .cell(row, column)
            .is_some_and(|cell| cell.is_selectable())
    }

    // -------------------------------------------------------------------------
    // Last draw
    // -------------------------------------------------------------------------

    /// First and last column index drawn last time.
    pub fn visible_column_range(&self) -> Option<(usize, usize)> {
        let frame = self.frame.as_ref()?;
        let first = frame.spans.first()?;
        let last = frame.spans.last()?;
        Some((first.column, last.column))
    }

    /// Rows drawn last time, fixed rows first.
    pub fn visible_row_indices(&self) -> Vec<usize> {
        self.frame
            .as_ref()
            .map(|frame| frame.rows.clone())
            .unwrap_or_default()
    }

    /// Columns with their screen placement from the last draw.
    pub fn column_spans(&self) -> Vec<ColumnSpan> {
        self.frame
            .as_ref()
            .map(|frame| frame.spans.clone())
            .unwrap_or_default()
    }

    /// Resolved width of each column included in the last draw, fixed
    /// columns first.
    pub fn column_widths(&self) -> Vec<(usize, usize)> {
        self.frame
            .as_ref()
            .map(|frame| {
                frame
                    .layout
                    .columns
                    .iter()
                    .copied()
                    .zip(frame.layout.widths.iter().copied())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Screen `(x, y, width)` of a cell as of the last draw.
    pub fn cell_position(&self, row: usize, column: usize) -> Option<(u16, u16, u16)> {
        self.positions.get(&(row, column)).copied()
    }

    /// Table row and column under the screen position `(x, y)`, using the
    /// geometry of the last draw.
    pub fn cell_at(&self, x: u16, y: u16) -> (Option<usize>, Option<usize>) {
        let Some(frame) = self.frame.as_ref() else {
            return (None, None);
        };
        let inner = frame.inner;
        if !inner.contains(x, y) {
            return (None, None);
        }

        let line = (y - inner.y) as usize;
        let screen_row = if self.borders {
            line.checked_sub(1).map(|line| line / 2)
        } else {
            Some(line)
        };
        let row = screen_row.and_then(|index| frame.rows.get(index).copied());

        let column = frame
            .spans
            .iter()
            .find(|span| (x as usize) < span.x as usize + span.width as usize + 1)
            .map(|span| span.column);

        (row, column)
    }
}
