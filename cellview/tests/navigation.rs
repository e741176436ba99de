use cellscreen::{Buffer, Rect};
use cellview::{TableCell, TableState};

fn table(rows: usize, columns: usize) -> TableState {
    let mut state = TableState::new();
    for row in 0..rows {
        for column in 0..columns {
            state.set_cell_simple(row, column, format!("{row}.{column}"));
        }
    }
    state
}

fn block_cell(state: &mut TableState, row: usize, column: usize) {
    state.set_cell(row, column, TableCell::new("--").with_selectable(false));
}

fn draw(state: &mut TableState, width: u16, height: u16) {
    state.block_mut().set_rect(Rect::from_size(width, height));
    let mut buffer = Buffer::new(width, height);
    state.draw(&mut buffer);
}

// =============================================================================
// Vertical
// =============================================================================

#[test]
fn test_down_skips_to_only_selectable_row() {
    let mut state = table(5, 1);
    for row in [0, 1, 3, 4] {
        block_cell(&mut state, row, 0);
    }
    state.set_selectable(true, false);

    for _ in 0..3 {
        state.move_down();
        assert_eq!(state.selection(), (2, 0));
    }
}

#[test]
fn test_down_stops_at_last_row_without_wrap() {
    let mut state = table(3, 1);
    state.set_selectable(true, false);
    state.select(1, 0);

    state.move_down();
    assert_eq!(state.selection(), (2, 0));
    for _ in 0..3 {
        state.move_down();
        assert_eq!(state.selection(), (2, 0));
    }
}

#[test]
fn test_up_stops_at_first_row_without_wrap() {
    let mut state = table(3, 1);
    state.set_selectable(true, false);
    state.select(1, 0);

    for _ in 0..3 {
        state.move_up();
        assert_eq!(state.selection(), (0, 0));
    }
}

#[test]
fn test_vertical_wrap() {
    let mut state = table(3, 1);
    state.set_selectable(true, false);
    state.set_wrap_selection(true, false);
    state.select(2, 0);

    state.move_down();
    assert_eq!(state.selection(), (0, 0));
    state.move_up();
    assert_eq!(state.selection(), (2, 0));
}

#[test]
fn test_wrap_skips_unselectable_rows() {
    let mut state = table(4, 1);
    block_cell(&mut state, 0, 0);
    state.set_selectable(true, false);
    state.set_wrap_selection(true, false);
    state.select(3, 0);

    state.move_down();
    assert_eq!(state.selection(), (1, 0));
}

#[test]
fn test_nothing_selectable_leaves_selection() {
    let mut state = table(3, 1);
    for row in 0..3 {
        block_cell(&mut state, row, 0);
    }
    state.set_selectable(true, false);
    state.select(1, 0);

    state.move_down();
    assert_eq!(state.selection(), (1, 0));
    state.move_up();
    assert_eq!(state.selection(), (1, 0));
    state.move_end();
    assert_eq!(state.selection(), (1, 0));
}

#[test]
fn test_down_falls_back_upwards() {
    let mut state = table(4, 1);
    block_cell(&mut state, 2, 0);
    block_cell(&mut state, 3, 0);
    state.set_selectable(true, false);
    state.select(0, 0);

    state.move_down();
    assert_eq!(state.selection(), (1, 0));
    state.move_down();
    assert_eq!(state.selection(), (1, 0));
}

#[test]
fn test_down_without_rows_below_keeps_column() {
    let mut state = table(3, 3);
    for row in 0..3 {
        for column in 0..3 {
            if (row, column) != (0, 0) && (row, column) != (0, 1) {
                block_cell(&mut state, row, column);
            }
        }
    }
    state.set_selectable(true, true);
    state.select(0, 0);

    state.move_down();
    assert_eq!(state.selection(), (0, 0));
    state.move_right();
    assert_eq!(state.selection(), (0, 1));
    state.move_down();
    assert_eq!(state.selection(), (0, 1));
}

#[test]
fn test_right_onto_blocked_last_column_stays() {
    let mut state = table(1, 3);
    block_cell(&mut state, 0, 2);
    state.set_selectable(true, true);
    state.select(0, 1);

    state.move_right();
    assert_eq!(state.selection(), (0, 1));
}

// =============================================================================
// Horizontal
// =============================================================================

#[test]
fn test_right_skips_unselectable_cell() {
    let mut state = table(1, 3);
    block_cell(&mut state, 0, 1);
    state.set_selectable(true, true);

    state.move_right();
    assert_eq!(state.selection(), (0, 2));
    state.move_left();
    assert_eq!(state.selection(), (0, 0));
}

#[test]
fn test_right_stops_at_last_column_without_wrap() {
    let mut state = table(2, 3);
    state.set_selectable(true, true);
    state.select(0, 2);

    for _ in 0..3 {
        state.move_right();
        assert_eq!(state.selection(), (0, 2));
    }
}

#[test]
fn test_horizontal_wrap_moves_to_next_row() {
    let mut state = table(2, 3);
    state.set_selectable(true, true);
    state.set_wrap_selection(false, true);
    state.select(0, 2);

    state.move_right();
    assert_eq!(state.selection(), (1, 0));
    state.move_left();
    assert_eq!(state.selection(), (0, 2));
}

#[test]
fn test_horizontal_wrap_stops_at_last_cell_without_vertical_wrap() {
    let mut state = table(2, 3);
    state.set_selectable(true, true);
    state.set_wrap_selection(false, true);
    state.select(1, 2);

    state.move_right();
    assert_eq!(state.selection(), (1, 2));
}

#[test]
fn test_full_wrap_goes_round_the_grid() {
    let mut state = table(2, 3);
    state.set_selectable(true, true);
    state.set_wrap_selection(true, true);
    state.select(1, 2);

    state.move_right();
    assert_eq!(state.selection(), (0, 0));
    state.move_left();
    assert_eq!(state.selection(), (1, 2));
}

// =============================================================================
// Jumps
// =============================================================================

#[test]
fn test_home_and_end() {
    let mut state = table(10, 1);
    block_cell(&mut state, 0, 0);
    state.set_selectable(true, false);
    state.select(5, 0);

    state.move_end();
    assert_eq!(state.selection(), (9, 0));
    state.move_home();
    assert_eq!(state.selection(), (1, 0));
}

#[test]
fn test_paging_moves_by_visible_rows() {
    let mut state = table(50, 1);
    state.set_selectable(true, false);
    draw(&mut state, 10, 10);

    state.page_down();
    assert_eq!(state.selection(), (10, 0));
    state.page_down();
    assert_eq!(state.selection(), (20, 0));
    state.page_up();
    assert_eq!(state.selection(), (10, 0));
}

#[test]
fn test_paging_excludes_fixed_rows_and_stops_at_edges() {
    let mut state = table(20, 1);
    state.set_selectable(true, false);
    state.set_fixed(2, 0);
    draw(&mut state, 10, 10);

    state.page_down();
    assert_eq!(state.selection(), (8, 0));
    state.page_down();
    state.page_down();
    assert_eq!(state.selection(), (19, 0));
    state.page_up();
    state.page_up();
    state.page_up();
    assert_eq!(state.selection(), (0, 0));
}

// =============================================================================
// Without selection
// =============================================================================

#[test]
fn test_moves_scroll_when_rows_are_not_selectable() {
    let mut state = table(20, 1);

    state.move_down();
    state.move_down();
    assert_eq!(state.offset().0, 2);
    assert_eq!(state.selection(), (0, 0));

    state.move_end();
    assert!(state.is_tracking_end());
    draw(&mut state, 10, 5);
    assert_eq!(state.offset().0, 15);

    state.move_home();
    assert!(!state.is_tracking_end());
    assert_eq!(state.offset().0, 0);
}

#[test]
fn test_left_right_scroll_columns_when_not_selectable() {
    let mut state = table(1, 5);
    state.set_selectable(true, false);

    state.move_right();
    assert_eq!(state.offset().1, Some(1));
    state.move_left();
    state.move_left();
    assert_eq!(state.offset().1, Some(0));
}

// =============================================================================
// Visibility after moves
// =============================================================================

#[test]
fn test_selected_row_is_drawn_after_moves() {
    let mut state = table(100, 1);
    state.set_selectable(true, false);
    draw(&mut state, 10, 10);

    for _ in 0..25 {
        state.move_down();
    }
    draw(&mut state, 10, 10);
    assert!(state.visible_row_indices().contains(&25));

    state.move_home();
    draw(&mut state, 10, 10);
    assert!(state.visible_row_indices().contains(&0));

    state.page_down();
    state.page_down();
    state.page_down();
    draw(&mut state, 10, 10);
    assert!(state.visible_row_indices().contains(&30));
}

#[test]
fn test_selected_column_is_drawn_after_moves() {
    let mut state = TableState::new();
    for column in 0..20 {
        state.set_cell_simple(0, column, format!("c{column:02}!"));
    }
    state.set_selectable(false, true);
    draw(&mut state, 20, 3);

    for expected in 1..20 {
        state.move_right();
        draw(&mut state, 20, 3);
        let (first, last) = state.visible_column_range().expect("columns drawn");
        assert!(
            (first..=last).contains(&expected),
            "column {} not in {}..={}",
            expected,
            first,
            last
        );
    }

    state.move_home();
    draw(&mut state, 20, 3);
    assert_eq!(state.visible_column_range().map(|(first, _)| first), Some(0));
}

#[test]
fn test_draw_moves_selection_into_range() {
    let mut state = table(10, 1);
    state.set_selectable(true, false);
    state.select(50, 3);
    draw(&mut state, 10, 5);

    assert_eq!(state.selection(), (9, 0));
}
