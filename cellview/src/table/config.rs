//! Table configuration.

use std::time::Duration;

use cellscreen::{Color, Style};

/// Default window in which a second click on the same cell counts as a
/// double click.
pub const DEFAULT_DOUBLE_CLICK: Duration = Duration::from_millis(500);

/// Everything about a table that is not its content or its runtime
/// selection and scroll state.
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    /// Draw a box-drawing grid around and between cells.
    pub borders: bool,
    /// Grid and separator color. `None` uses the theme's graphics color.
    pub border_color: Option<Color>,
    /// Drawn between columns when borders are off. Must be one cell wide.
    pub separator: char,
    pub fixed_rows: usize,
    pub fixed_columns: usize,
    pub rows_selectable: bool,
    pub columns_selectable: bool,
    /// Selection highlight used for cells without their own.
    pub selected_style: Option<Style>,
    pub wrap_vertically: bool,
    pub wrap_horizontally: bool,
    /// Size columns from every row instead of only the visible ones.
    pub evaluate_all_rows: bool,
    pub double_click: Duration,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
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
            double_click: DEFAULT_DOUBLE_CLICK,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn borders(mut self, borders: bool) -> Self {
        self.borders = borders;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Pin the first `rows` rows and `columns` columns.
    pub fn fixed(mut self, rows: usize, columns: usize) -> Self {
        self.fixed_rows = rows;
        self.fixed_columns = columns;
        self
    }

    pub fn selectable(mut self, rows: bool, columns: bool) -> Self {
        self.rows_selectable = rows;
        self.columns_selectable = columns;
        self
    }

    pub fn selected_style(mut self, style: Style) -> Self {
        self.selected_style = Some(style);
        self
    }

    pub fn wrap_selection(mut self, vertically: bool, horizontally: bool) -> Self {
        self.wrap_vertically = vertically;
        self.wrap_horizontally = horizontally;
        self
    }

    pub fn evaluate_all_rows(mut self, all: bool) -> Self {
        self.evaluate_all_rows = all;
        self
    }

    pub fn double_click(mut self, window: Duration) -> Self {
        self.double_click = window;
        self
    }
}
