use crate::types::{Rgb, Style, TextStyle};

/// One glyph on screen together with its colors and attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// Set on the cell to the right of a double-width glyph.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }
}

impl Cell {
    pub fn new(ch: char) -> Self {
        Self {
            ch,
            ..Default::default()
        }
    }

    pub fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    pub fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Apply a [`Style`] on top of this cell. Unset colors are inherited
    /// from the cell; attributes are replaced only when the style sets any.
    pub fn styled(mut self, style: &Style) -> Self {
        if let Some(fg) = &style.fg {
            self.fg = fg.to_rgb();
        }
        if let Some(bg) = &style.bg {
            self.bg = bg.to_rgb();
        }
        if !style.text.is_plain() {
            self.style = style.text;
        }
        self
    }
}
