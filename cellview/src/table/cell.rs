//! A single table cell.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use cellscreen::text::display_width;
use cellscreen::{Color, Style, TextAlign, TextStyle};

use crate::theme::Theme;

/// Called when the cell is clicked. Returning `true` suppresses the
/// selection that would otherwise follow the click.
pub type ClickHandler = Arc<dyn Fn() -> bool + Send + Sync>;

/// Opaque application data attached to a cell.
pub type CellReference = Arc<dyn Any + Send + Sync>;

/// Text and presentation attributes of one grid cell.
///
/// The effective [`width`](Self::width) is kept in sync with the text and
/// the maximum width by every setter.
#[derive(Clone)]
pub struct TableCell {
    text: String,
    align: TextAlign,
    max_width: usize,
    expansion: usize,
    style: Style,
    selected_style: Option<Style>,
    transparent: bool,
    selectable: bool,
    reference: Option<CellReference>,
    on_click: Option<ClickHandler>,
    width: usize,
}

impl Default for TableCell {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Debug for TableCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableCell")
            .field("text", &self.text)
            .field("align", &self.align)
            .field("max_width", &self.max_width)
            .field("expansion", &self.expansion)
            .field("selectable", &self.selectable)
            .field("transparent", &self.transparent)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

impl TableCell {
    /// Left aligned text in the default theme's text color over a
    /// transparent background.
    pub fn new(text: impl Into<String>) -> Self {
        Self::themed(text, &Theme::default())
    }

    pub fn themed(text: impl Into<String>, theme: &Theme) -> Self {
        let mut cell = Self {
            text: text.into(),
            align: TextAlign::Left,
            max_width: 0,
            expansion: 0,
            style: theme.text_style(),
            selected_style: None,
            transparent: true,
            selectable: true,
            reference: None,
            on_click: None,
            width: 0,
        };
        cell.update_width();
        cell
    }

    fn update_width(&mut self) {
        let text_width = display_width(&self.text);
        self.width = if self.max_width > 0 {
            text_width.min(self.max_width)
        } else {
            text_width
        };
    }

    // -------------------------------------------------------------------------
    // Builders
    // -------------------------------------------------------------------------

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.set_max_width(max_width);
        self
    }

    pub fn with_expansion(mut self, expansion: usize) -> Self {
        self.expansion = expansion;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_selected_style(mut self, style: Style) -> Self {
        self.selected_style = Some(style);
        self
    }

    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn with_reference(mut self, reference: CellReference) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn with_click_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(handler));
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.update_width();
    }

    pub fn align(&self) -> TextAlign {
        self.align
    }

    pub fn set_align(&mut self, align: TextAlign) {
        self.align = align;
    }

    /// Maximum width in screen cells, 0 for unbounded.
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    pub fn set_max_width(&mut self, max_width: usize) {
        self.max_width = max_width;
        self.update_width();
    }

    /// Weight for sharing leftover horizontal space. 0 never grows.
    pub fn expansion(&self) -> usize {
        self.expansion
    }

    pub fn set_expansion(&mut self, expansion: usize) {
        self.expansion = expansion;
    }

    /// Display width of the text, capped by the maximum width.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.style.fg = Some(color);
    }

    /// Also turns transparency off.
    pub fn set_background_color(&mut self, color: Color) {
        self.style.bg = Some(color);
        self.transparent = false;
    }

    pub fn set_attributes(&mut self, attributes: TextStyle) {
        self.style.text = attributes;
    }

    pub fn selected_style(&self) -> Option<Style> {
        self.selected_style
    }

    pub fn set_selected_style(&mut self, style: Option<Style>) {
        self.selected_style = style;
    }

    /// Transparent cells show the table background instead of their own.
    pub fn is_transparent(&self) -> bool {
        self.transparent
    }

    pub fn set_transparency(&mut self, transparent: bool) {
        self.transparent = transparent;
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn set_selectable(&mut self, selectable: bool) {
        self.selectable = selectable;
    }

    pub fn reference(&self) -> Option<&CellReference> {
        self.reference.as_ref()
    }

    pub fn set_reference(&mut self, reference: Option<CellReference>) {
        self.reference = reference;
    }

    pub fn click_handler(&self) -> Option<ClickHandler> {
        self.on_click.clone()
    }

    pub fn set_click_handler(&mut self, handler: Option<ClickHandler>) {
        self.on_click = handler;
    }
}
