//! Keyboard and mouse handling.

use std::time::Instant;

use cellscreen::{Key, Modifiers, MouseAction};

use crate::widget::EventResult;

use super::cell::ClickHandler;
use super::state::TableState;

/// Something the host application asked to be told about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    /// Enter was pressed on the selection.
    Selected { row: usize, column: usize },
    /// The selection moved.
    SelectionChanged { row: usize, column: usize },
    /// The selected cell was clicked twice in quick succession.
    DoubleClicked { row: usize, column: usize },
    /// The user is done with the table.
    Done(Key),
}

/// What a key press means to a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Select,
    Done,
}

impl TableAction {
    pub fn from_key(key: Key, modifiers: Modifiers) -> Option<Self> {
        if modifiers.ctrl {
            return match key {
                Key::Char('f') => Some(Self::PageDown),
                Key::Char('b') => Some(Self::PageUp),
                _ => None,
            };
        }
        match key {
            Key::Up | Key::Char('k') => Some(Self::Up),
            Key::Down | Key::Char('j') => Some(Self::Down),
            Key::Left | Key::Char('h') => Some(Self::Left),
            Key::Right | Key::Char('l') => Some(Self::Right),
            Key::Home | Key::Char('g') => Some(Self::Home),
            Key::End | Key::Char('G') => Some(Self::End),
            Key::PageUp => Some(Self::PageUp),
            Key::PageDown => Some(Self::PageDown),
            Key::Enter => Some(Self::Select),
            Key::Escape | Key::Tab | Key::BackTab => Some(Self::Done),
            _ => None,
        }
    }
}

/// A resolved mouse click waiting for the cell's own handler to run.
pub struct PendingClick {
    pub row: Option<usize>,
    pub column: Option<usize>,
    pub handler: Option<ClickHandler>,
}

impl TableState {
    /// Put the selection at `(row, column)`. Always reports a selection
    /// change.
    pub fn select(&mut self, row: usize, column: usize) -> TableEvent {
        self.selected_row = row;
        self.selected_column = column;
        self.clamp_to_selection = true;
        TableEvent::SelectionChanged { row, column }
    }

    pub fn selection(&self) -> (usize, usize) {
        (self.selected_row, self.selected_column)
    }

    fn selection_changed_since(&self, before: (usize, usize)) -> Option<TableEvent> {
        let (row, column) = self.selection();
        let moved = (self.rows_selectable && row != before.0)
            || (self.columns_selectable && column != before.1);
        moved.then_some(TableEvent::SelectionChanged { row, column })
    }

    /// Apply one action. Returns the events it produced.
    pub fn perform(&mut self, action: TableAction, key: Key) -> Vec<TableEvent> {
        match action {
            TableAction::Done => return vec![TableEvent::Done(key)],
            TableAction::Select => {
                if !self.selection_enabled() {
                    return vec![TableEvent::Done(key)];
                }
                if self.content.row_count() == 0 {
                    return Vec::new();
                }
                let (row, column) = self.selection();
                return vec![TableEvent::Selected { row, column }];
            }
            _ => {}
        }

        if self.content.row_count() == 0 {
            return Vec::new();
        }

        let before = self.selection();
        match action {
            TableAction::Up => self.move_up(),
            TableAction::Down => self.move_down(),
            TableAction::Left => self.move_left(),
            TableAction::Right => self.move_right(),
            TableAction::Home => self.move_home(),
            TableAction::End => self.move_end(),
            TableAction::PageUp => self.page_up(),
            TableAction::PageDown => self.page_down(),
            TableAction::Select | TableAction::Done => {}
        }
        self.selection_changed_since(before).into_iter().collect()
    }

    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> (EventResult, Vec<TableEvent>) {
        match TableAction::from_key(key, modifiers) {
            Some(action) => (EventResult::Consumed, self.perform(action, key)),
            None => (EventResult::Ignored, Vec::new()),
        }
    }

    /// Resolve a click position against the last draw.
    pub fn begin_click(&self, x: u16, y: u16) -> PendingClick {
        let (row, column) = self.cell_at(x, y);
        let handler = match (row, column) {
            (Some(row), Some(column)) => self
                .content
                .cell(row, column)
                .and_then(|cell| cell.click_handler()),
            _ => None,
        };
        PendingClick {
            row,
            column,
            handler,
        }
    }

    /// Finish a click once the cell handler has run. `suppress_select` is
    /// the handler's verdict.
    pub fn finish_click(
        &mut self,
        click: &PendingClick,
        suppress_select: bool,
        now: Instant,
    ) -> Vec<TableEvent> {
        self.block.set_focus(true);
        let mut events = Vec::new();

        let Some(row) = click.row else {
            self.last_mouse_down = Some(now);
            return events;
        };
        let column = click.column.unwrap_or(self.selected_column);

        let already_selected = self.selection() == (row, column);
        if !already_selected && !suppress_select && self.selection_enabled() {
            events.push(self.select(row, column));
        }

        let mut double = false;
        if already_selected
            && let Some(previous) = self.last_mouse_down
            && now.saturating_duration_since(previous) < self.double_click
        {
            log::debug!("double click on ({}, {})", row, column);
            events.push(TableEvent::DoubleClicked { row, column });
            double = true;
        }
        self.last_mouse_down = if double { None } else { Some(now) };
        events
    }

    /// Handle a mouse event at an explicit time.
    pub fn handle_mouse_at(
        &mut self,
        action: MouseAction,
        x: u16,
        y: u16,
        now: Instant,
    ) -> (EventResult, Vec<TableEvent>) {
        if !self.block.contains(x, y) {
            return (EventResult::Ignored, Vec::new());
        }
        match action {
            MouseAction::LeftDown => {
                let click = self.begin_click(x, y);
                let suppress = click.handler.as_ref().is_some_and(|handler| handler());
                (EventResult::Consumed, self.finish_click(&click, suppress, now))
            }
            MouseAction::ScrollUp => {
                self.scroll_rows(-1);
                (EventResult::Consumed, Vec::new())
            }
            MouseAction::ScrollDown => {
                self.scroll_rows(1);
                (EventResult::Consumed, Vec::new())
            }
            _ => (EventResult::Ignored, Vec::new()),
        }
    }

    pub fn handle_mouse(
        &mut self,
        action: MouseAction,
        x: u16,
        y: u16,
    ) -> (EventResult, Vec<TableEvent>) {
        self.handle_mouse_at(action, x, y, Instant::now())
    }
}
