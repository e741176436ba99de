//! Character-grid screen primitives for cellview.
//!
//! This crate holds everything a widget needs to put glyphs on a terminal:
//! a styled cell [`Buffer`], the [`Surface`] trait widgets draw into (with a
//! translating, clipping [`Clip`] view for nested regions), display-width
//! aware text printing, decoded input [`Event`]s and a crossterm-backed
//! [`Terminal`] that flushes buffer diffs.

pub mod buffer;
pub mod event;
pub mod rect;
pub mod surface;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use event::{Event, Key, Modifiers, MouseAction, MouseButton};
pub use rect::Rect;
pub use surface::{Clip, Surface};
pub use terminal::Terminal;
pub use types::*;
