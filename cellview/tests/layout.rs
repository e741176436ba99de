use cellview::table::{
    ColumnMeasure, FitRequest, column_starts, distribute, fit_columns, measure_column,
    scroll_columns,
};
use cellview::{GridContent, TableCell, TableContentMut};

fn natural(widths: &[usize]) -> impl Fn(usize) -> ColumnMeasure + '_ {
    move |column| ColumnMeasure {
        width: widths[column],
        expansion: 0,
    }
}

fn request(viewport: usize, column_count: usize) -> FitRequest {
    FitRequest {
        viewport,
        column_count,
        fixed_columns: 0,
        keep_visible: None,
    }
}

// =============================================================================
// Measuring
// =============================================================================

#[test]
fn test_measure_column_takes_maximum_over_rows() {
    let mut grid = GridContent::new();
    grid.set_cell(0, 0, TableCell::new("abc"));
    grid.set_cell(1, 0, TableCell::new("abcdef").with_expansion(2));
    grid.set_cell(2, 0, TableCell::new("a").with_expansion(1));

    let all = measure_column(&grid, &[0, 1, 2], 0);
    assert_eq!(all, ColumnMeasure { width: 6, expansion: 2 });

    let some = measure_column(&grid, &[0, 2], 0);
    assert_eq!(some, ColumnMeasure { width: 3, expansion: 1 });

    // Absent cells count as zero.
    assert_eq!(measure_column(&grid, &[0, 1], 4), ColumnMeasure::default());
}

// =============================================================================
// Discrete fitting
// =============================================================================

#[test]
fn test_all_columns_fit_without_expansion() {
    let widths = [2, 2, 2];
    let (layout, offset) = fit_columns(&request(10, 3), 0, natural(&widths));

    assert_eq!(layout.columns, vec![0, 1, 2]);
    assert_eq!(layout.widths, vec![2, 2, 2]);
    assert_eq!(layout.used_width(), 8);
    assert_eq!(offset, 0);
}

#[test]
fn test_columns_stop_when_budget_is_spent() {
    let widths = [5, 5, 5, 5];
    let (layout, _) = fit_columns(&request(12, 4), 0, natural(&widths));

    assert_eq!(layout.columns, vec![0, 1]);
    assert!(layout.used_width() <= 12);
    // No more waste than the widest excluded column.
    assert!(layout.used_width() >= 12 - 5);
}

#[test]
fn test_last_column_is_truncated_to_remaining_width() {
    let widths = [5, 5, 5, 5];
    let (layout, _) = fit_columns(&request(14, 4), 0, natural(&widths));

    assert_eq!(layout.columns, vec![0, 1, 2]);
    assert_eq!(layout.widths, vec![5, 5, 1]);
    assert_eq!(layout.used_width(), 13);
}

#[test]
fn test_used_width_never_exceeds_viewport() {
    let widths = [7, 3, 9, 1, 4, 12, 2, 6];
    for viewport in 1..40 {
        for offset in 0..widths.len() {
            let (layout, _) = fit_columns(&request(viewport, widths.len()), offset, natural(&widths));
            assert!(
                layout.used_width() <= viewport,
                "viewport {} offset {} used {}",
                viewport,
                offset,
                layout.used_width()
            );
        }
    }
}

#[test]
fn test_fixed_columns_come_first() {
    let widths = [2, 4, 4, 4, 4];
    let req = FitRequest {
        fixed_columns: 1,
        ..request(11, 5)
    };
    let (layout, offset) = fit_columns(&req, 1, natural(&widths));

    assert_eq!(layout.columns, vec![0, 2, 3]);
    assert_eq!(layout.widths, vec![2, 4, 3]);
    assert_eq!(layout.fixed, 1);
    assert_eq!(offset, 1);
}

#[test]
fn test_selection_right_of_window_scrolls_it_in() {
    let widths = [4; 10];
    let req = FitRequest {
        keep_visible: Some(5),
        ..request(10, 10)
    };
    let (layout, offset) = fit_columns(&req, 0, natural(&widths));

    assert_eq!(offset, 4);
    assert_eq!(layout.columns, vec![4, 5]);
    assert_eq!(layout.width_of(5), Some(4));
}

#[test]
fn test_selection_left_of_window_becomes_first_column() {
    let widths = [4; 10];
    let req = FitRequest {
        keep_visible: Some(2),
        ..request(10, 10)
    };
    let (layout, offset) = fit_columns(&req, 6, natural(&widths));

    assert_eq!(offset, 2);
    assert_eq!(layout.columns, vec![2, 3]);
}

#[test]
fn test_truncated_selection_is_shown_whole() {
    let widths = [5, 5, 5, 5];
    let req = FitRequest {
        keep_visible: Some(2),
        ..request(14, 4)
    };
    let (layout, offset) = fit_columns(&req, 0, natural(&widths));

    assert_eq!(offset, 1);
    assert_eq!(layout.width_of(2), Some(5));
    assert!(layout.used_width() <= 14);
}

#[test]
fn test_fixed_selection_needs_no_correction() {
    let widths = [3, 4, 4, 4];
    let req = FitRequest {
        fixed_columns: 1,
        keep_visible: Some(0),
        ..request(8, 4)
    };
    let (layout, offset) = fit_columns(&req, 2, natural(&widths));

    assert_eq!(offset, 2);
    assert_eq!(layout.columns, vec![0, 3]);
}

#[test]
fn test_slack_pulls_offset_back() {
    let widths = [3; 5];
    let (layout, offset) = fit_columns(&request(11, 5), 3, natural(&widths));

    assert_eq!(offset, 2);
    assert_eq!(layout.columns, vec![2, 3, 4]);
    assert_eq!(layout.used_width(), 11);
}

#[test]
fn test_fixed_columns_alone_can_fill_viewport() {
    let widths = [6, 6, 6];
    let req = FitRequest {
        fixed_columns: 2,
        ..request(8, 3)
    };
    let (layout, _) = fit_columns(&req, 0, natural(&widths));

    assert_eq!(layout.columns, vec![0, 1]);
    assert_eq!(layout.widths, vec![6, 1]);
}

#[test]
fn test_zero_viewport_includes_nothing() {
    let widths = [1, 1];
    let (layout, _) = fit_columns(&request(0, 2), 0, natural(&widths));
    assert!(layout.columns.is_empty());
    assert_eq!(layout.used_width(), 0);
}

// =============================================================================
// Expansion
// =============================================================================

#[test]
fn test_distribute_by_weight_with_leftover_to_earliest() {
    let mut widths = [1, 1, 1];
    distribute(&mut widths, &[1, 2, 0], 4);
    assert_eq!(widths, [3, 3, 1]);
}

#[test]
fn test_distribute_without_weights_changes_nothing() {
    let mut widths = [2, 3];
    distribute(&mut widths, &[0, 0], 10);
    assert_eq!(widths, [2, 3]);
}

#[test]
fn test_expanding_columns_fill_viewport() {
    let measure = |_column: usize| ColumnMeasure {
        width: 2,
        expansion: 1,
    };
    let (layout, _) = fit_columns(&request(10, 2), 0, measure);

    assert_eq!(layout.widths, vec![5, 4]);
    assert_eq!(layout.used_width(), 10);
}

// =============================================================================
// Continuous scrolling
// =============================================================================

#[test]
fn test_column_starts_leave_one_separator() {
    assert_eq!(column_starts(&[2, 3, 1]), vec![0, 3, 7]);
    assert!(column_starts(&[]).is_empty());
}

#[test]
fn test_scroll_includes_every_column_at_natural_width() {
    let widths = [3, 3, 3, 3];
    let (layout, x) = scroll_columns(&request(5, 4), 2, natural(&widths));

    assert_eq!(layout.columns, vec![0, 1, 2, 3]);
    assert_eq!(layout.widths, vec![3, 3, 3, 3]);
    assert_eq!(x, 2);
}

#[test]
fn test_scroll_is_clamped_to_content() {
    let widths = [3, 3, 3, 3];
    let (_, x) = scroll_columns(&request(5, 4), 100, natural(&widths));
    // 4 * 3 plus 3 separators, minus the 5 visible cells.
    assert_eq!(x, 10);

    let (_, x) = scroll_columns(&request(50, 4), 7, natural(&widths));
    assert_eq!(x, 0);
}

#[test]
fn test_scroll_follows_selection_edges() {
    let widths = [3, 3, 3, 3];

    let left = FitRequest {
        keep_visible: Some(1),
        ..request(5, 4)
    };
    let (_, x) = scroll_columns(&left, 9, natural(&widths));
    assert_eq!(x, 4);

    let right = FitRequest {
        keep_visible: Some(2),
        ..request(5, 4)
    };
    let (_, x) = scroll_columns(&right, 0, natural(&widths));
    assert_eq!(x, 6);
}

#[test]
fn test_scroll_region_excludes_fixed_columns() {
    let widths = [2, 3, 3];
    let req = FitRequest {
        fixed_columns: 1,
        ..request(6, 3)
    };
    let (layout, x) = scroll_columns(&req, 100, natural(&widths));

    assert_eq!(layout.fixed, 1);
    // Region is 6 - (2 + 1) = 3 cells over 7 cells of content.
    assert_eq!(x, 4);
}

#[test]
fn test_scroll_expands_scrollable_columns_only() {
    let measure = |column: usize| ColumnMeasure {
        width: 2,
        expansion: 1 + column,
    };
    let req = FitRequest {
        fixed_columns: 1,
        ..request(12, 2)
    };
    let (layout, x) = scroll_columns(&req, 0, measure);

    assert_eq!(x, 0);
    // Region 12 - 3 = 9; the one scrollable column takes all of it.
    assert_eq!(layout.widths, vec![2, 9]);
}
