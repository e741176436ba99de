//! Shared, thread-safe table handle.

use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use cellscreen::{Color, Key, Modifiers, MouseAction, Rect, Style, Surface};

use crate::theme::Theme;
use crate::widget::{EventResult, Widget};

use super::cell::TableCell;
use super::config::TableConfig;
use super::content::TableContentMut;
use super::events::TableEvent;
use super::scroll::HorizontalScroll;
use super::state::{ColumnSpan, TableState, check_separator};

/// Receives a row and column.
pub type CellCallback = Arc<dyn Fn(usize, usize) + Send + Sync>;

/// Receives the key that finished interaction with the table.
pub type DoneCallback = Arc<dyn Fn(Key) + Send + Sync>;

#[derive(Clone, Default)]
struct Callbacks {
    selected: Option<CellCallback>,
    selection_changed: Option<CellCallback>,
    double_click: Option<CellCallback>,
    done: Option<DoneCallback>,
}

impl Callbacks {
    fn fire(&self, event: TableEvent) {
        match event {
            TableEvent::Selected { row, column } => {
                if let Some(callback) = &self.selected {
                    callback(row, column);
                }
            }
            TableEvent::SelectionChanged { row, column } => {
                if let Some(callback) = &self.selection_changed {
                    callback(row, column);
                }
            }
            TableEvent::DoubleClicked { row, column } => {
                if let Some(callback) = &self.double_click {
                    callback(row, column);
                }
            }
            TableEvent::Done(key) => {
                if let Some(callback) = &self.done {
                    callback(key);
                }
            }
        }
    }
}

/// A table widget.
///
/// `Table` is a cheap handle: clones share one [`TableState`] behind a
/// read-write lock. Drawing holds the lock for the whole frame. Callbacks
/// run after the lock is released, so they may call back into the table.
#[derive(Clone, Default)]
pub struct Table {
    inner: Arc<RwLock<TableState>>,
    callbacks: Arc<RwLock<Callbacks>>,
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.inner.read() {
            Ok(guard) => std::fmt::Debug::fmt(&*guard, f),
            Err(_) => f.write_str("Table(<poisoned>)"),
        }
    }
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn themed(theme: Theme) -> Self {
        Self::from_state(TableState::themed(theme))
    }

    pub fn from_state(state: TableState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
            callbacks: Arc::new(RwLock::new(Callbacks::default())),
        }
    }

    /// Replace the cell store with a custom data source.
    pub fn with_content<C>(self, content: C) -> Self
    where
        C: TableContentMut + 'static,
    {
        self.update(|state| state.set_content(Box::new(content)));
        self
    }

    pub fn with_config(self, config: &TableConfig) -> Self {
        check_separator(config.separator);
        self.update(|state| state.apply_config(config));
        self
    }

    fn query<R, F>(&self, f: F) -> R
    where
        R: Default,
        F: FnOnce(&TableState) -> R,
    {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(_) => {
                log::warn!("table state lock poisoned, returning default");
                R::default()
            }
        }
    }

    fn update<R, F>(&self, f: F) -> R
    where
        R: Default,
        F: FnOnce(&mut TableState) -> R,
    {
        match self.inner.write() {
            Ok(mut guard) => f(&mut guard),
            Err(_) => {
                log::warn!("table state lock poisoned, ignoring update");
                R::default()
            }
        }
    }

    fn dispatch(&self, events: Vec<TableEvent>) {
        if events.is_empty() {
            return;
        }
        let callbacks = self
            .callbacks
            .read()
            .map(|g| g.clone())
            .unwrap_or_default();
        for event in events {
            callbacks.fire(event);
        }
    }

    fn set_callbacks(&self, f: impl FnOnce(&mut Callbacks)) {
        if let Ok(mut guard) = self.callbacks.write() {
            f(&mut guard);
        }
    }

    /// Run `f` with exclusive access to the state. Callbacks are not fired
    /// for anything `f` does.
    pub fn with_state<R, F>(&self, f: F) -> R
    where
        R: Default,
        F: FnOnce(&mut TableState) -> R,
    {
        self.update(f)
    }

    // -------------------------------------------------------------------------
    // Callbacks
    // -------------------------------------------------------------------------

    /// Called when Enter is pressed on a selection.
    pub fn set_selected_func<F>(&self, f: F)
    where
        F: Fn(usize, usize) + Send + Sync + 'static,
    {
        self.set_callbacks(|c| c.selected = Some(Arc::new(f)));
    }

    pub fn set_selection_changed_func<F>(&self, f: F)
    where
        F: Fn(usize, usize) + Send + Sync + 'static,
    {
        self.set_callbacks(|c| c.selection_changed = Some(Arc::new(f)));
    }

    pub fn set_double_click_func<F>(&self, f: F)
    where
        F: Fn(usize, usize) + Send + Sync + 'static,
    {
        self.set_callbacks(|c| c.double_click = Some(Arc::new(f)));
    }

    /// Called on Escape, Tab, Backtab, and Enter when nothing is selectable.
    pub fn set_done_func<F>(&self, f: F)
    where
        F: Fn(Key) + Send + Sync + 'static,
    {
        self.set_callbacks(|c| c.done = Some(Arc::new(f)));
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    pub fn set_borders(&self, borders: bool) {
        self.update(|state| state.set_borders(borders));
    }

    pub fn set_border_color(&self, color: Color) {
        self.update(|state| state.set_border_color(color));
    }

    /// # Panics
    ///
    /// If `separator` is not exactly one cell wide.
    pub fn set_separator(&self, separator: char) {
        check_separator(separator);
        self.update(|state| state.set_separator(separator));
    }

    pub fn set_fixed(&self, rows: usize, columns: usize) {
        self.update(|state| state.set_fixed(rows, columns));
    }

    pub fn fixed(&self) -> (usize, usize) {
        self.query(|state| state.fixed())
    }

    pub fn set_selectable(&self, rows: bool, columns: bool) {
        self.update(|state| state.set_selectable(rows, columns));
    }

    pub fn selectable(&self) -> (bool, bool) {
        self.query(|state| state.selectable())
    }

    pub fn set_selected_style(&self, style: Option<Style>) {
        self.update(|state| state.set_selected_style(style));
    }

    pub fn set_wrap_selection(&self, vertically: bool, horizontally: bool) {
        self.update(|state| state.set_wrap_selection(vertically, horizontally));
    }

    pub fn set_evaluate_all_rows(&self, all: bool) {
        self.update(|state| state.set_evaluate_all_rows(all));
    }

    pub fn set_double_click(&self, window: Duration) {
        self.update(|state| state.set_double_click(window));
    }

    pub fn set_title(&self, title: impl Into<String>) {
        let title = title.into();
        self.update(|state| state.block_mut().set_title(title));
    }

    /// Frame the table with a box border (separate from the cell grid).
    pub fn set_frame_border(&self, border: bool) {
        self.update(|state| state.block_mut().set_border(border));
    }

    // -------------------------------------------------------------------------
    // Content
    // -------------------------------------------------------------------------

    pub fn set_cell(&self, row: usize, column: usize, cell: TableCell) {
        self.update(|state| state.set_cell(row, column, cell));
    }

    pub fn set_cell_simple(&self, row: usize, column: usize, text: impl Into<String>) {
        let text = text.into();
        self.update(|state| state.set_cell_simple(row, column, text));
    }

    /// A copy of the cell, or an empty default if nothing is stored.
    pub fn cell(&self, row: usize, column: usize) -> TableCell {
        self.query(|state| state.cell(row, column))
    }

    pub fn update_cell<F>(&self, row: usize, column: usize, f: F) -> bool
    where
        F: FnOnce(&mut TableCell),
    {
        self.update(|state| state.update_cell(row, column, f))
    }

    pub fn remove_row(&self, row: usize) {
        self.update(|state| state.remove_row(row));
    }

    pub fn remove_column(&self, column: usize) {
        self.update(|state| state.remove_column(column));
    }

    pub fn insert_row(&self, row: usize) {
        self.update(|state| state.insert_row(row));
    }

    pub fn insert_column(&self, column: usize) {
        self.update(|state| state.insert_column(column));
    }

    pub fn clear(&self) {
        self.update(|state| state.clear());
    }

    pub fn row_count(&self) -> usize {
        self.query(|state| state.row_count())
    }

    pub fn column_count(&self) -> usize {
        self.query(|state| state.column_count())
    }

    // -------------------------------------------------------------------------
    // Selection and scrolling
    // -------------------------------------------------------------------------

    pub fn selection(&self) -> (usize, usize) {
        self.query(|state| state.selection())
    }

    /// Select a cell. The selection-changed callback always fires.
    pub fn select(&self, row: usize, column: usize) {
        let event = self.update(|state| Some(state.select(row, column)));
        self.dispatch(event.into_iter().collect());
    }

    pub fn offset(&self) -> (usize, Option<usize>) {
        self.query(|state| state.offset())
    }

    pub fn set_offset(&self, row: usize, column: usize) {
        self.update(|state| state.set_offset(row, column));
    }

    pub fn x_scroll(&self) -> Option<usize> {
        self.query(|state| state.x_scroll())
    }

    pub fn set_x_scroll(&self, x: usize) {
        self.update(|state| state.set_x_scroll(x));
    }

    pub fn horizontal_scroll(&self) -> HorizontalScroll {
        self.query(|state| state.horizontal_scroll())
    }

    pub fn scroll_to_beginning(&self) {
        self.update(|state| state.scroll_to_beginning());
    }

    pub fn scroll_to_end(&self) {
        self.update(|state| state.scroll_to_end());
    }

    // -------------------------------------------------------------------------
    // Last draw
    // -------------------------------------------------------------------------

    pub fn visible_column_range(&self) -> Option<(usize, usize)> {
        self.query(|state| state.visible_column_range())
    }

    pub fn column_spans(&self) -> Vec<ColumnSpan> {
        self.query(|state| state.column_spans())
    }

    pub fn cell_position(&self, row: usize, column: usize) -> Option<(u16, u16, u16)> {
        self.query(|state| state.cell_position(row, column))
    }

    pub fn cell_at(&self, x: u16, y: u16) -> (Option<usize>, Option<usize>) {
        self.query(|state| state.cell_at(x, y))
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Handle a mouse event at an explicit time.
    ///
    /// A click first runs the clicked cell's own handler with the lock
    /// released, then updates the selection unless the handler vetoed it.
    pub fn handle_mouse_at(
        &self,
        action: MouseAction,
        x: u16,
        y: u16,
        now: Instant,
    ) -> EventResult {
        if action != MouseAction::LeftDown {
            let (result, events) =
                self.update(|state| state.handle_mouse_at(action, x, y, now));
            self.dispatch(events);
            return result;
        }

        let Some(click) = self
            .inner
            .read()
            .ok()
            .filter(|state| state.block().contains(x, y))
            .map(|state| state.begin_click(x, y))
        else {
            return EventResult::Ignored;
        };

        let suppress = click.handler.as_ref().is_some_and(|handler| handler());
        let events = self.update(|state| state.finish_click(&click, suppress, now));
        self.dispatch(events);
        EventResult::Consumed
    }
}

impl Widget for Table {
    fn rect(&self) -> Rect {
        self.query(|state| state.block().rect())
    }

    fn set_rect(&self, rect: Rect) {
        self.update(|state| state.block_mut().set_rect(rect));
    }

    fn focus(&self) {
        self.update(|state| state.block_mut().set_focus(true));
    }

    fn blur(&self) {
        self.update(|state| state.block_mut().set_focus(false));
    }

    fn has_focus(&self) -> bool {
        self.query(|state| state.block().has_focus())
    }

    fn draw(&self, surface: &mut dyn Surface) {
        self.update(|state| state.draw(surface));
    }

    fn handle_key(&self, key: Key, modifiers: Modifiers) -> EventResult {
        let (result, events) = self.update(|state| state.handle_key(key, modifiers));
        self.dispatch(events);
        result
    }

    fn handle_mouse(&self, action: MouseAction, x: u16, y: u16) -> EventResult {
        self.handle_mouse_at(action, x, y, Instant::now())
    }
}
