use super::{Color, TextStyle};

/// Foreground, background and attributes. `None` colors inherit whatever is
/// already on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub text: TextStyle,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            text: TextStyle::new(),
        }
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn text(mut self, text: TextStyle) -> Self {
        self.text = text;
        self
    }

    pub fn bold(mut self) -> Self {
        self.text.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text.underline = true;
        self
    }

    /// Same style with foreground and background swapped.
    pub fn reversed(self) -> Self {
        Self {
            fg: self.bg,
            bg: self.fg,
            text: self.text,
        }
    }

    /// True for a style that sets nothing at all.
    pub fn is_unset(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.text.is_plain()
    }
}
