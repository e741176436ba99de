//! Column fitting.
//!
//! Columns compete for the viewport width. Fixed columns are placed first
//! and always; scrollable columns follow from the current horizontal
//! offset. One separator cell sits between neighbouring columns, so the
//! width consumed by `n` included columns is their widths plus `n - 1`.

use super::content::TableContent;

/// Natural size of a column over the evaluated rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnMeasure {
    pub width: usize,
    pub expansion: usize,
}

/// Width and expansion of `column`: the maxima over `rows`. Absent cells
/// count as zero.
pub fn measure_column<C>(content: &C, rows: &[usize], column: usize) -> ColumnMeasure
where
    C: TableContent + ?Sized,
{
    rows.iter()
        .filter_map(|&row| content.cell(row, column))
        .fold(ColumnMeasure::default(), |acc, cell| ColumnMeasure {
            width: acc.width.max(cell.width()),
            expansion: acc.expansion.max(cell.expansion()),
        })
}

/// What the fitter needs to know about the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitRequest {
    /// Width available for columns and separators.
    pub viewport: usize,
    pub column_count: usize,
    pub fixed_columns: usize,
    /// Column that must end up fully visible, if any.
    pub keep_visible: Option<usize>,
}

/// Included columns in screen order, fixed ones first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnLayout {
    pub columns: Vec<usize>,
    pub widths: Vec<usize>,
    /// Number of leading entries that are fixed columns.
    pub fixed: usize,
}

impl ColumnLayout {
    /// Widths plus one separator between each pair of neighbours.
    pub fn used_width(&self) -> usize {
        let widths: usize = self.widths.iter().sum();
        widths + self.widths.len().saturating_sub(1)
    }

    pub fn contains(&self, column: usize) -> bool {
        self.columns.contains(&column)
    }

    pub fn width_of(&self, column: usize) -> Option<usize> {
        self.columns
            .iter()
            .position(|&c| c == column)
            .map(|index| self.widths[index])
    }
}

struct Fitter<F> {
    viewport: usize,
    keep_visible: Option<usize>,
    measure: F,
    columns: Vec<usize>,
    widths: Vec<usize>,
    expansions: Vec<usize>,
    used: usize,
    selection_shown: bool,
}

impl<F> Fitter<F>
where
    F: Fn(usize) -> ColumnMeasure,
{
    fn separator(&self) -> usize {
        usize::from(!self.columns.is_empty())
    }

    /// Add one column, clamped to what is left. Returns true if no space
    /// was left for it at all.
    fn include(&mut self, column: usize) -> bool {
        let separator = self.separator();
        if self.viewport == 0 || self.used + separator >= self.viewport {
            return true;
        }

        let natural = (self.measure)(column);
        let remaining = self.viewport - self.used - separator;
        let width = natural.width.min(remaining);

        self.columns.push(column);
        self.widths.push(width);
        self.expansions.push(natural.expansion);
        self.used += separator + width;

        if self.keep_visible == Some(column) {
            self.selection_shown = width == natural.width;
        }
        false
    }

    /// Include `start..end` left to right. Returns the first column that
    /// did not fit.
    fn forward(&mut self, start: usize, end: usize) -> Option<usize> {
        (start..end).find(|&column| self.include(column))
    }

    fn fits_whole(&self, column: usize) -> bool {
        let separator = self.separator();
        self.used + separator < self.viewport
            && (self.measure)(column).width <= self.viewport - self.used - separator
    }

    /// Include `start` down to `end` (inclusive) right to left, then
    /// restore screen order. Only `start` itself may be cut; the walk stops
    /// at the first column that would not fit whole. Returns that column.
    fn backward(&mut self, start: usize, end: usize) -> Option<usize> {
        let mark = self.columns.len();
        let stopped = (end..=start).rev().find(|&column| {
            if column == start {
                self.include(column)
            } else {
                !self.fits_whole(column) || self.include(column)
            }
        });
        self.columns[mark..].reverse();
        self.widths[mark..].reverse();
        self.expansions[mark..].reverse();
        stopped
    }

    fn truncate(&mut self, len: usize, used: usize) {
        self.columns.truncate(len);
        self.widths.truncate(len);
        self.expansions.truncate(len);
        self.used = used;
    }

    fn finish(mut self, fixed: usize) -> ColumnLayout {
        if self.used < self.viewport {
            distribute(&mut self.widths, &self.expansions, self.viewport - self.used);
        }
        ColumnLayout {
            columns: self.columns,
            widths: self.widths,
            fixed,
        }
    }
}

/// Share `slack` cells among columns in proportion to their expansion
/// weights. Shares are rounded down; the cells left over go one each to the
/// earliest expandable columns.
pub fn distribute(widths: &mut [usize], expansions: &[usize], slack: usize) {
    let total: usize = expansions.iter().sum();
    if total == 0 || slack == 0 {
        return;
    }

    let mut given = 0;
    for (width, &expansion) in widths.iter_mut().zip(expansions) {
        let share = slack * expansion / total;
        *width += share;
        given += share;
    }

    let mut leftover = slack - given;
    for (width, &expansion) in widths.iter_mut().zip(expansions) {
        if leftover == 0 {
            break;
        }
        if expansion > 0 {
            *width += 1;
            leftover -= 1;
        }
    }
}

/// Fit columns with a discrete offset, counted in whole scrollable columns.
///
/// Returns the layout and the offset actually used, which differs from
/// `offset` when the kept-visible column would otherwise be hidden or cut,
/// or when scrolling back would fill space left empty at the right.
pub fn fit_columns<F>(request: &FitRequest, offset: usize, measure: F) -> (ColumnLayout, usize)
where
    F: Fn(usize) -> ColumnMeasure,
{
    let count = request.column_count;
    let fixed = request.fixed_columns.min(count);
    let keep_visible = request.keep_visible.filter(|&column| column >= fixed && column < count);

    let mut fitter = Fitter {
        viewport: request.viewport,
        keep_visible,
        measure,
        columns: Vec::new(),
        widths: Vec::new(),
        expansions: Vec::new(),
        used: 0,
        selection_shown: keep_visible.is_none(),
    };

    if fitter.forward(0, fixed).is_some() {
        // Fixed columns alone fill the viewport.
        let included = fitter.columns.len();
        return (fitter.finish(included), offset);
    }

    let fixed_used = fitter.used;
    let mut offset = offset;
    let stopped = fitter.forward(fixed + offset, count);

    if !fitter.selection_shown {
        let Some(selected) = keep_visible else {
            return (fitter.finish(fixed), offset);
        };
        fitter.truncate(fixed, fixed_used);
        fitter.selection_shown = true;
        let before = offset;
        if selected <= fixed + offset {
            offset = selected - fixed;
            fitter.forward(fixed + offset, count);
        } else {
            offset = match fitter.backward(selected, fixed) {
                Some(column) => column + 1 - fixed,
                None => 0,
            };
            fitter.forward(selected + 1, count);
        }
        log::debug!(
            "column offset {} -> {} to keep column {} visible",
            before,
            offset,
            selected
        );
    } else if stopped.is_none() && offset > 0 && fitter.used < fitter.viewport {
        fitter.truncate(fixed, fixed_used);
        let before = offset;
        offset = match fitter.backward(count - 1, fixed) {
            Some(column) => column + 1 - fixed,
            None => 0,
        };
        log::debug!(
            "column offset {} -> {} to fill {} unused cells",
            before,
            offset,
            request.viewport.saturating_sub(fixed_used)
        );
    }

    (fitter.finish(fixed), offset)
}

/// Start of each column relative to the first one, with one separator
/// between neighbours.
pub fn column_starts(widths: &[usize]) -> Vec<usize> {
    let mut starts = Vec::with_capacity(widths.len());
    let mut x = 0;
    for width in widths {
        starts.push(x);
        x += width + 1;
    }
    starts
}

/// Lay out every column for continuous horizontal scrolling.
///
/// Fixed columns are fitted as in [`fit_columns`]. All scrollable columns
/// are included at their natural widths and `x_scroll` is an offset into
/// their concatenation. Returns the layout and the clamped scroll amount.
pub fn scroll_columns<F>(request: &FitRequest, x_scroll: usize, measure: F) -> (ColumnLayout, usize)
where
    F: Fn(usize) -> ColumnMeasure,
{
    let count = request.column_count;
    let fixed = request.fixed_columns.min(count);

    let mut fitter = Fitter {
        viewport: request.viewport,
        keep_visible: None,
        measure,
        columns: Vec::new(),
        widths: Vec::new(),
        expansions: Vec::new(),
        used: 0,
        selection_shown: true,
    };

    if fitter.forward(0, fixed).is_some() {
        let included = fitter.columns.len();
        return (fitter.finish(included), 0);
    }
    let region_start = fitter.used + fitter.separator();
    let region = request.viewport.saturating_sub(region_start);

    let mut widths = fitter.widths;
    let mut expansions = fitter.expansions;
    let mut columns = fitter.columns;
    for column in fixed..count {
        let natural = (fitter.measure)(column);
        columns.push(column);
        widths.push(natural.width);
        expansions.push(natural.expansion);
    }

    let scrollable = &widths[fixed..];
    let starts = column_starts(scrollable);
    let total = scrollable.iter().sum::<usize>() + scrollable.len().saturating_sub(1);

    let mut x = x_scroll;
    if let Some(selected) = request.keep_visible.filter(|&c| c >= fixed && c < count) {
        let left = starts[selected - fixed];
        let right = left + scrollable[selected - fixed];
        if left < x {
            x = left;
        } else if right > x + region {
            x = right - region;
        }
    }

    let max_scroll = total.saturating_sub(region);
    if x > max_scroll {
        log::trace!("x scroll {} clamped to {}", x, max_scroll);
        x = max_scroll;
    }

    if total < region {
        distribute(&mut widths[fixed..], &expansions[fixed..], region - total);
    }

    (
        ColumnLayout {
            columns,
            widths,
            fixed,
        },
        x,
    )
}
