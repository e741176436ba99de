//! Drawing.
//!
//! A draw first settles selection, offsets and column widths, then paints
//! the included columns into an off-screen strip and copies the visible
//! window of that strip onto the surface. Fixed columns are copied as they
//! are; the scrollable part is copied shifted by the horizontal scroll.

use cellscreen::text::{ELLIPSIS, char_width, display_width, place_glyphs};
use cellscreen::{Buffer, Cell, Rect, Style, Surface, TextAlign};

use super::layout::{FitRequest, column_starts, fit_columns, measure_column, scroll_columns};
use super::scroll::HorizontalScroll;
use super::state::{ColumnSpan, Frame, TableState};

impl TableState {
    /// Draw the table into `surface`, which is addressed in absolute
    /// coordinates.
    pub fn draw(&mut self, surface: &mut dyn Surface) {
        self.block.draw(surface);
        let inner = self.block.inner_rect();

        let mut frame = self.prepare(inner);
        self.positions.clear();
        self.paint(surface, &mut frame);
        self.frame = Some(frame);
    }

    /// Settle selection, row offset, horizontal scroll and column widths
    /// for a content area.
    pub(crate) fn prepare(&mut self, inner: Rect) -> Frame {
        let (width, height) = (inner.width as usize, inner.height as usize);
        let (viewport, visible) = if self.borders {
            (width.saturating_sub(2), height.saturating_sub(1) / 2)
        } else {
            (width, height)
        };
        self.visible_rows = visible;

        self.ensure_valid_selection();
        self.resolve_row_offset(visible);
        self.clamp_column_offset();

        let rows = self.visible_row_list(visible);
        let evaluated: Vec<usize> = if self.evaluate_all_rows {
            (0..self.content.row_count()).collect()
        } else {
            rows.clone()
        };

        let request = FitRequest {
            viewport,
            column_count: self.content.column_count(),
            fixed_columns: self.fixed_columns,
            keep_visible: (self.clamp_to_selection && self.columns_selectable)
                .then_some(self.selected_column),
        };

        let content = self.content.as_ref();
        let measure = |column| measure_column(content, &evaluated, column);
        let horizontal = self.horizontal;
        let (layout, x_scroll) = match horizontal {
            HorizontalScroll::Columns(offset) => {
                let (layout, offset) = fit_columns(&request, offset, measure);
                self.horizontal = HorizontalScroll::Columns(offset);
                (layout, 0)
            }
            HorizontalScroll::Cells(x) => {
                let (layout, x) = scroll_columns(&request, x, measure);
                self.horizontal = HorizontalScroll::Cells(x);
                (layout, x)
            }
        };

        self.clamp_to_selection = false;

        Frame {
            inner,
            rows,
            layout,
            x_scroll,
            spans: Vec::new(),
        }
    }

    fn row_y(&self, index: usize) -> usize {
        if self.borders { 1 + 2 * index } else { index }
    }

    fn paint(&mut self, surface: &mut dyn Surface, frame: &mut Frame) {
        let inner = frame.inner;
        let widths = &frame.layout.widths;
        if inner.is_empty() || widths.is_empty() {
            return;
        }

        let lead = usize::from(self.borders);
        let starts: Vec<usize> = column_starts(widths).into_iter().map(|x| x + lead).collect();
        let last = widths.len() - 1;
        let strip_width = starts[last] + widths[last] + lead;
        let fixed_end = starts
            .get(frame.layout.fixed)
            .copied()
            .unwrap_or(strip_width);

        let window = Window {
            fixed_end,
            x_scroll: frame.x_scroll,
            width: inner.width as usize,
        };
        let background = Cell::default().styled(&self.block.background());
        let mut strip = Strip::new(window, strip_width, inner.height, background);

        self.paint_grid(&mut strip, frame, &starts);
        self.paint_cells(&mut strip, frame, &starts);
        self.paint_selection(&mut strip, frame, &starts);
        strip.copy(surface, inner);

        frame.spans = frame
            .layout
            .columns
            .iter()
            .zip(widths)
            .zip(&starts)
            .filter_map(|((&column, &width), &start)| {
                let (x, width) = window.visible(start, width)?;
                Some(ColumnSpan {
                    column,
                    x: inner.x.saturating_add(x as u16),
                    width: width as u16,
                })
            })
            .collect();

        for (index, &row) in frame.rows.iter().enumerate() {
            let y = inner.y.saturating_add(self.row_y(index) as u16);
            for span in &frame.spans {
                if self.content.cell(row, span.column).is_some() {
                    self.positions.insert((row, span.column), (span.x, y, span.width));
                }
            }
        }
    }

    fn paint_grid(&self, strip: &mut Strip, frame: &Frame, starts: &[usize]) {
        let style = self.border_style();
        let widths = &frame.layout.widths;
        let last = widths.len() - 1;

        if !self.borders {
            for index in 0..frame.rows.len() {
                let y = index as u16;
                for (column, (&start, &width)) in starts.iter().zip(widths).enumerate() {
                    if column < last {
                        strip.set_char(start + width, y, self.separator, &style);
                    }
                }
            }
            return;
        }

        let glyphs = cellscreen::BorderGlyphs::SINGLE;
        let right = starts[last] + widths[last];
        let line = |strip: &mut Strip, y: u16, left: char, middle: char, end: char| {
            for (column, (&start, &width)) in starts.iter().zip(widths).enumerate() {
                let junction = if column == 0 { left } else { middle };
                strip.set_char(start - 1, y, junction, &style);
                for x in start..start + width {
                    strip.set_char(x, y, glyphs.horizontal, &style);
                }
            }
            strip.set_char(right, y, end, &style);
        };

        for index in 0..frame.rows.len() {
            let y = (2 * index) as u16;
            if index == 0 {
                line(strip, y, glyphs.top_left, glyphs.top_t, glyphs.top_right);
            } else {
                line(strip, y, glyphs.left_t, glyphs.cross, glyphs.right_t);
            }
            for &start in starts {
                strip.set_char(start - 1, y + 1, glyphs.vertical, &style);
            }
            strip.set_char(right, y + 1, glyphs.vertical, &style);
        }
        if !frame.rows.is_empty() {
            let y = (2 * frame.rows.len()) as u16;
            line(strip, y, glyphs.bottom_left, glyphs.bottom_t, glyphs.bottom_right);
        }
    }

    /// The cell's own style, minus its background when transparent.
    fn text_style(&self, transparent: bool, style: Style) -> Style {
        if transparent {
            Style { bg: None, ..style }
        } else {
            style
        }
    }

    fn paint_cells(&self, strip: &mut Strip, frame: &Frame, starts: &[usize]) {
        for (index, &row) in frame.rows.iter().enumerate() {
            let y = self.row_y(index) as u16;
            let placed = frame
                .layout
                .columns
                .iter()
                .zip(&frame.layout.widths)
                .zip(starts);
            for ((&column, &width), &start) in placed {
                let Some(cell) = self.content.cell(row, column) else {
                    continue;
                };
                let style = self.text_style(cell.is_transparent(), cell.style());
                for x in start..start + width {
                    strip.set_char(x, y, ' ', &style);
                }

                let printed = strip.print(cell.text(), start, y, width, cell.align(), &style);
                if display_width(cell.text()) > printed && printed > 0 {
                    strip.set_char(start + width - 1, y, ELLIPSIS, &style);
                }
            }
        }
    }

    fn is_highlighted(&self, row: usize, column: usize) -> bool {
        match (self.rows_selectable, self.columns_selectable) {
            (true, false) => row == self.selected_row,
            (false, true) => column == self.selected_column,
            (true, true) => row == self.selected_row && column == self.selected_column,
            (false, false) => false,
        }
    }

    fn paint_selection(&self, strip: &mut Strip, frame: &Frame, starts: &[usize]) {
        if !self.selection_enabled() {
            return;
        }
        let whole_row = self.rows_selectable && !self.columns_selectable && !self.borders;
        let last = frame.layout.columns.len() - 1;
        let background = self.block.background();

        for (index, &row) in frame.rows.iter().enumerate() {
            let y = self.row_y(index) as u16;
            for (position, ((&column, &width), &start)) in frame
                .layout
                .columns
                .iter()
                .zip(&frame.layout.widths)
                .zip(starts)
                .enumerate()
            {
                if !self.is_highlighted(row, column) {
                    continue;
                }
                let Some(cell) = self.content.cell(row, column) else {
                    continue;
                };
                if !cell.is_selectable() {
                    continue;
                }

                let style = cell
                    .selected_style()
                    .or(self.selected_style)
                    .unwrap_or_else(|| {
                        let own = cell.style();
                        let fg = own.fg.unwrap_or(self.theme.primary_text);
                        let bg = if cell.is_transparent() {
                            background.bg
                        } else {
                            own.bg
                        };
                        let bg = bg.unwrap_or(self.theme.primitive_background);
                        Style::new().fg(fg).bg(bg).text(own.text).reversed()
                    });

                let end = if whole_row && position < last {
                    start + width + 1
                } else {
                    start + width
                };
                for x in start..end {
                    strip.restyle(x, y, &style);
                }
            }
        }
    }
}

/// The part of the strip that reaches the screen.
#[derive(Debug, Clone, Copy)]
struct Window {
    /// Strip columns before this are fixed and never shift.
    fixed_end: usize,
    x_scroll: usize,
    /// Screen width available.
    width: usize,
}

impl Window {
    /// Strip column shown at screen column `x`.
    fn source(&self, x: usize) -> usize {
        if x < self.fixed_end { x } else { x + self.x_scroll }
    }

    /// Screen placement of the strip span `[start, start + width)` as
    /// `(x, visible_width)`, or `None` if none of it is on screen.
    fn visible(&self, start: usize, width: usize) -> Option<(usize, usize)> {
        let (screen_start, screen_end) = if start < self.fixed_end {
            (start, start + width)
        } else {
            let shown_from = self.fixed_end + self.x_scroll;
            if start + width < shown_from || (width > 0 && start + width == shown_from) {
                return None;
            }
            let from = start.max(shown_from);
            (from - self.x_scroll, start + width - self.x_scroll)
        };
        if screen_start >= self.width {
            return None;
        }
        Some((screen_start, screen_end.min(self.width) - screen_start))
    }

    /// Screen column showing strip column `x`, if it is in the window.
    fn screen(&self, x: usize) -> Option<u16> {
        let screen = if x < self.fixed_end {
            x
        } else {
            x.checked_sub(self.x_scroll)
                .filter(|&screen| screen >= self.fixed_end)?
        };
        if screen < self.width {
            u16::try_from(screen).ok()
        } else {
            None
        }
    }
}

/// The strip as seen through the window.
///
/// Painting addresses strip columns, which may run well past what a
/// buffer can hold; only the columns that reach the screen are stored.
struct Strip {
    buffer: Buffer,
    window: Window,
    /// Strip columns in use.
    width: usize,
}

impl Strip {
    fn new(window: Window, width: usize, height: u16, background: Cell) -> Self {
        let mut buffer = Buffer::new(u16::try_from(window.width).unwrap_or(u16::MAX), height);
        buffer.fill(background);
        Self {
            buffer,
            window,
            width,
        }
    }

    fn set_char(&mut self, x: usize, y: u16, ch: char, style: &Style) {
        if let Some(x) = self.window.screen(x) {
            self.buffer.set_char(x, y, ch, style);
        }
    }

    fn restyle(&mut self, x: usize, y: u16, style: &Style) {
        if let Some(x) = self.window.screen(x) {
            self.buffer.restyle(x, y, style);
        }
    }

    /// Like [`print`](cellscreen::text::print), at strip column `start`.
    fn print(
        &mut self,
        text: &str,
        start: usize,
        y: u16,
        width: usize,
        align: TextAlign,
        style: &Style,
    ) -> usize {
        let (glyphs, printed) = place_glyphs(text, width, align);
        for (offset, ch) in glyphs {
            let x = start + offset;
            self.set_char(x, y, ch, style);
            if char_width(ch) < 2 {
                continue;
            }
            let Some(next) = self.window.screen(x + 1) else {
                continue;
            };
            if let Some(base) = self.buffer.get(next, y).copied() {
                let continuation = Cell {
                    ch: ' ',
                    wide_continuation: true,
                    ..base
                }
                .styled(style);
                self.buffer.set(next, y, continuation);
            }
        }
        printed
    }

    fn copy(&self, surface: &mut dyn Surface, inner: Rect) {
        let window = &self.window;
        let blank = |cell: &Cell| Cell {
            ch: ' ',
            wide_continuation: false,
            ..*cell
        };
        for x in 0..window.width {
            if window.source(x) >= self.width {
                continue;
            }
            let Ok(screen_x) = u16::try_from(x) else {
                break;
            };
            for y in 0..inner.height {
                let Some(cell) = self.buffer.get(screen_x, y) else {
                    continue;
                };
                let cut_left = x == window.fixed_end && window.x_scroll > 0 && cell.wide_continuation;
                let cut_right = x + 1 == window.width && char_width(cell.ch) > 1;
                let cell = if cut_left || cut_right { blank(cell) } else { *cell };
                surface.set(inner.x + screen_x, inner.y + y, cell);
            }
        }
    }
}
