mod borders;
mod color;
mod enums;
mod style;

pub use borders::BorderGlyphs;
pub use color::{Color, Rgb};
pub use enums::{TextAlign, TextStyle};
pub use style::Style;
