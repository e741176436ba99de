//! Base capabilities shared by all widgets.

use cellscreen::text::{display_width, print, truncate_to_width};
use cellscreen::{BorderGlyphs, Key, Modifiers, MouseAction, Rect, Style, Surface, TextAlign};

use crate::theme::Theme;

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    #[default]
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// A rectangular, focusable, drawable element.
///
/// Widgets are handles with interior state, so every method takes `&self`.
pub trait Widget {
    fn rect(&self) -> Rect;

    fn set_rect(&self, rect: Rect);

    fn focus(&self);

    fn blur(&self);

    fn has_focus(&self) -> bool;

    /// Paint the widget into `surface`. Coordinates are absolute.
    fn draw(&self, surface: &mut dyn Surface);

    fn handle_key(&self, key: Key, modifiers: Modifiers) -> EventResult;

    fn handle_mouse(&self, action: MouseAction, x: u16, y: u16) -> EventResult;
}

/// The frame around a widget: background, optional border and title.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    rect: Rect,
    border: bool,
    title: String,
    title_align: TextAlign,
    border_style: Style,
    title_style: Style,
    background: Style,
    focused: bool,
}

impl Default for Block {
    fn default() -> Self {
        Self::new(&Theme::default())
    }
}

impl Block {
    pub fn new(theme: &Theme) -> Self {
        Self {
            rect: Rect::default(),
            border: false,
            title: String::new(),
            title_align: TextAlign::Center,
            border_style: theme.graphics_style(),
            title_style: Style::new().fg(theme.title).bg(theme.primitive_background),
            background: theme.text_style(),
            focused: false,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn has_border(&self) -> bool {
        self.border
    }

    pub fn set_border(&mut self, border: bool) {
        self.border = border;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_title_align(&mut self, align: TextAlign) {
        self.title_align = align;
    }

    pub fn set_border_style(&mut self, style: Style) {
        self.border_style = style;
    }

    pub fn background(&self) -> Style {
        self.background
    }

    pub fn set_background(&mut self, style: Style) {
        self.background = style;
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// The area left for content once the border is taken away.
    pub fn inner_rect(&self) -> Rect {
        if self.border {
            self.rect.shrink(1, 1, 1, 1)
        } else {
            self.rect
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.rect.contains(x, y)
    }

    /// Paint background, border and title. Content goes on top afterwards.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let rect = self.rect;
        if rect.is_empty() {
            return;
        }

        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                surface.set_char(x, y, ' ', &self.background);
            }
        }

        if !self.border || rect.width < 2 || rect.height < 2 {
            return;
        }

        let glyphs = if self.focused {
            BorderGlyphs::DOUBLE
        } else {
            BorderGlyphs::SINGLE
        };
        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;

        for x in rect.x + 1..right {
            surface.set_char(x, rect.y, glyphs.horizontal, &self.border_style);
            surface.set_char(x, bottom, glyphs.horizontal, &self.border_style);
        }
        for y in rect.y + 1..bottom {
            surface.set_char(rect.x, y, glyphs.vertical, &self.border_style);
            surface.set_char(right, y, glyphs.vertical, &self.border_style);
        }
        surface.set_char(rect.x, rect.y, glyphs.top_left, &self.border_style);
        surface.set_char(right, rect.y, glyphs.top_right, &self.border_style);
        surface.set_char(rect.x, bottom, glyphs.bottom_left, &self.border_style);
        surface.set_char(right, bottom, glyphs.bottom_right, &self.border_style);

        if !self.title.is_empty() && rect.width > 2 {
            let available = (rect.width - 2) as usize;
            let title = if display_width(&self.title) > available {
                truncate_to_width(&self.title, available)
            } else {
                self.title.clone()
            };
            print(
                surface,
                &title,
                rect.x + 1,
                rect.y,
                available,
                self.title_align,
                &self.title_style,
            );
        }
    }
}
