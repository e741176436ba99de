//! Terminal widgets built on [`cellscreen`].
//!
//! The centrepiece is [`Table`]: a scrollable, selectable grid whose
//! column widths are fitted to the available space every frame. Widgets
//! share the small [`Widget`] capability set and paint their frame with
//! [`Block`].

pub mod table;
pub mod theme;
pub mod widget;

pub use table::{
    GridContent, HorizontalScroll, ReadOnly, Table, TableCell, TableConfig, TableContent,
    TableContentMut, TableEvent, TableState,
};
pub use theme::Theme;
pub use widget::{Block, EventResult, Widget};
