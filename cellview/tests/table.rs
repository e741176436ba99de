use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use cellscreen::{Buffer, Color, Key, Modifiers, MouseAction, Rect};
use cellview::{EventResult, GridContent, ReadOnly, Table, TableCell, TableConfig, TableContentMut, Widget};

fn table(rows: usize, columns: usize) -> Table {
    let table = Table::new();
    for row in 0..rows {
        for column in 0..columns {
            table.set_cell_simple(row, column, "aa");
        }
    }
    table
}

fn draw(table: &Table, width: u16, height: u16) -> Buffer {
    table.set_rect(Rect::from_size(width, height));
    let mut buffer = Buffer::new(width, height);
    table.draw(&mut buffer);
    buffer
}

type Log = Arc<Mutex<Vec<String>>>;

fn record(table: &Table) -> Log {
    let log: Log = Arc::default();

    let sink = Arc::clone(&log);
    table.set_selected_func(move |row, column| {
        sink.lock().unwrap().push(format!("selected {row},{column}"));
    });
    let sink = Arc::clone(&log);
    table.set_selection_changed_func(move |row, column| {
        sink.lock().unwrap().push(format!("changed {row},{column}"));
    });
    let sink = Arc::clone(&log);
    table.set_double_click_func(move |row, column| {
        sink.lock().unwrap().push(format!("double {row},{column}"));
    });
    let sink = Arc::clone(&log);
    table.set_done_func(move |key| {
        sink.lock().unwrap().push(format!("done {key:?}"));
    });

    log
}

fn entries(log: &Log) -> Vec<String> {
    log.lock().unwrap().clone()
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_with_config_applies_everything() {
    let config = TableConfig::new()
        .borders(true)
        .separator('|')
        .fixed(1, 2)
        .selectable(true, true)
        .wrap_selection(true, false)
        .double_click(Duration::from_millis(200));
    let table = Table::new().with_config(&config);

    assert_eq!(table.fixed(), (1, 2));
    assert_eq!(table.selectable(), (true, true));
    assert!(table.with_state(|state| state.borders()));
    assert_eq!(table.with_state(|state| state.separator()), '|');
}

#[test]
fn test_clones_share_state() {
    let table = table(2, 2);
    let other = table.clone();
    other.set_cell_simple(0, 0, "changed");
    assert_eq!(table.cell(0, 0).text(), "changed");
}

#[test]
fn test_wide_separator_panics() {
    let result = catch_unwind(|| {
        Table::new().set_separator('日');
    });
    assert!(result.is_err());
}

#[test]
#[should_panic]
fn test_wide_separator_in_config_panics() {
    let _ = Table::new().with_config(&TableConfig::new().separator('日'));
}

#[test]
fn test_rejected_separator_leaves_table_usable() {
    let table = Table::new();
    let result = catch_unwind(AssertUnwindSafe(|| table.set_separator('\u{0301}')));
    assert!(result.is_err());

    table.set_borders(true);
    assert_eq!(table.with_state(|state| state.separator()), ' ');
    assert!(table.with_state(|state| state.borders()));
}

#[test]
fn test_external_content() {
    let mut grid = GridContent::new();
    grid.set_cell(0, 0, TableCell::new("fixed"));
    let table = Table::new().with_content(ReadOnly(grid));

    table.set_cell_simple(0, 0, "ignored");
    table.remove_row(0);
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.cell(0, 0).text(), "fixed");

    let buffer = draw(&table, 6, 1);
    assert_eq!(buffer.row_text(0), "fixed ");
}

// =============================================================================
// Callbacks
// =============================================================================

#[test]
fn test_keys_fire_callbacks() {
    let table = table(3, 1);
    table.set_selectable(true, false);
    let log = record(&table);

    table.handle_key(Key::Down, Modifiers::new());
    table.handle_key(Key::Enter, Modifiers::new());
    table.handle_key(Key::Escape, Modifiers::new());

    assert_eq!(
        entries(&log),
        vec!["changed 1,0", "selected 1,0", "done Escape"]
    );
}

#[test]
fn test_select_fires_change_even_when_unchanged() {
    let table = table(2, 2);
    table.set_selectable(true, true);
    let log = record(&table);

    table.select(0, 0);
    table.select(0, 0);
    assert_eq!(entries(&log), vec!["changed 0,0", "changed 0,0"]);
}

#[test]
fn test_callbacks_can_reenter_table() {
    let table = table(3, 3);
    table.set_selectable(true, false);

    let handle = table.clone();
    table.set_selected_func(move |row, column| {
        handle.update_cell(row, column, |cell| cell.set_text_color(Color::hex(0xff0000)));
        handle.set_selectable(false, false);
        handle.set_cell_simple(row, column, "picked");
    });

    let result = table.handle_key(Key::Enter, Modifiers::new());
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(table.selectable(), (false, false));
    assert_eq!(table.cell(0, 0).text(), "picked");
}

#[test]
fn test_done_callback_can_change_selectability() {
    let table = table(2, 2);
    let handle = table.clone();
    table.set_done_func(move |key| {
        if key == Key::Enter {
            handle.set_selectable(true, true);
        }
    });

    table.handle_key(Key::Enter, Modifiers::new());
    assert_eq!(table.selectable(), (true, true));
}

// =============================================================================
// Mouse
// =============================================================================

#[test]
fn test_double_click_fires_only_double_callback() {
    let table = table(3, 3);
    table.set_selectable(true, true);
    table.select(1, 1);
    draw(&table, 20, 5);
    let log = record(&table);
    let start = Instant::now();

    table.handle_mouse_at(MouseAction::LeftDown, 3, 1, start);
    table.handle_mouse_at(MouseAction::LeftDown, 3, 1, start + Duration::from_millis(120));

    assert_eq!(entries(&log), vec!["double 1,1"]);
}

#[test]
fn test_click_handler_runs_without_lock() {
    let table = table(3, 3);
    table.set_selectable(true, true);

    let handle = table.clone();
    let seen = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&seen);
    table.set_cell(
        2,
        0,
        TableCell::new("aa").with_click_handler(move || {
            *sink.lock().unwrap() = Some(handle.selection());
            handle.set_cell_simple(2, 1, "hit");
            false
        }),
    );
    draw(&table, 20, 5);
    let log = record(&table);

    let result = table.handle_mouse_at(MouseAction::LeftDown, 0, 2, Instant::now());
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(*seen.lock().unwrap(), Some((0, 0)));
    assert_eq!(table.cell(2, 1).text(), "hit");
    assert_eq!(table.selection(), (2, 0));
    assert_eq!(entries(&log), vec!["changed 2,0"]);
    assert!(table.has_focus());
}

#[test]
fn test_click_outside_table_is_ignored() {
    let table = table(2, 2);
    table.set_rect(Rect::new(10, 10, 5, 5));
    let result = table.handle_mouse_at(MouseAction::LeftDown, 0, 0, Instant::now());
    assert_eq!(result, EventResult::Ignored);
}

#[test]
fn test_last_draw_queries() {
    let table = table(3, 3);
    draw(&table, 20, 5);

    assert_eq!(table.visible_column_range(), Some((0, 2)));
    assert_eq!(table.cell_at(4, 2), (Some(2), Some(1)));
    assert_eq!(table.cell_position(2, 1), Some((3, 2, 2)));
    assert_eq!(table.column_spans().len(), 3);
}
