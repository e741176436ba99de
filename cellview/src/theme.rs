//! Default colors applied when widgets and cells are created.

use cellscreen::{Color, Style};

/// Palette applied to newly created widgets and table cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Cell and label text.
    pub primary_text: Color,
    /// Main background for widgets.
    pub primitive_background: Color,
    /// Borders, separators, grid lines.
    pub graphics: Color,
    /// Block titles.
    pub title: Color,
    /// Background for contrasting elements.
    pub contrast_background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_text: Color::hex(0xffffff),
            primitive_background: Color::hex(0x000000),
            graphics: Color::hex(0xffffff),
            title: Color::hex(0xffffff),
            contrast_background: Color::hex(0x0000ff),
        }
    }
}

impl Theme {
    /// Text in the primary color over the widget background.
    pub fn text_style(&self) -> Style {
        Style::new()
            .fg(self.primary_text)
            .bg(self.primitive_background)
    }

    /// Grid lines over the widget background.
    pub fn graphics_style(&self) -> Style {
        Style::new().fg(self.graphics).bg(self.primitive_background)
    }
}
