//! The table widget.
//!
//! A sparse grid of [`TableCell`]s with fixed rows and columns, discrete or
//! continuous horizontal scrolling, end tracking and keyboard/mouse
//! selection over rows, columns or single cells.
//!
//! [`TableState`] owns everything and is driven through plain methods.
//! [`Table`] is the shareable widget handle around it.

mod cell;
mod config;
mod content;
mod events;
mod handle;
mod layout;
mod navigation;
mod render;
mod scroll;
mod state;

pub use cell::{CellReference, ClickHandler, TableCell};
pub use config::{DEFAULT_DOUBLE_CLICK, TableConfig};
pub use content::{GridContent, ReadOnly, TableContent, TableContentMut};
pub use events::{PendingClick, TableAction, TableEvent};
pub use handle::{CellCallback, DoneCallback, Table};
pub use layout::{
    ColumnLayout, ColumnMeasure, FitRequest, column_starts, distribute, fit_columns,
    measure_column, scroll_columns,
};
pub use scroll::HorizontalScroll;
pub use state::{ColumnSpan, TableState};
