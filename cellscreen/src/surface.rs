//! The drawing target widgets paint into.

use crate::buffer::{Buffer, Cell};
use crate::rect::Rect;
use crate::types::Style;

/// A grid of styled cells. Coordinates outside [`Surface::size`] are
/// ignored on write and read back as `None`.
pub trait Surface {
    fn size(&self) -> (u16, u16);

    fn get(&self, x: u16, y: u16) -> Option<Cell>;

    fn set(&mut self, x: u16, y: u16, cell: Cell);

    /// Overwrite every cell.
    fn fill(&mut self, cell: Cell) {
        let (width, height) = self.size();
        for y in 0..height {
            for x in 0..width {
                self.set(x, y, cell);
            }
        }
    }

    /// Write a glyph, layering `style` over what is already there.
    fn set_char(&mut self, x: u16, y: u16, ch: char, style: &Style) {
        let Some(existing) = self.get(x, y) else {
            return;
        };
        let cell = Cell {
            ch,
            wide_continuation: false,
            ..existing
        };
        self.set(x, y, cell.styled(style));
    }

    /// Change colors and attributes without touching the glyph.
    fn restyle(&mut self, x: u16, y: u16, style: &Style) {
        if let Some(existing) = self.get(x, y) {
            self.set(x, y, existing.styled(style));
        }
    }

    fn fill_rect(&mut self, rect: Rect, cell: Cell) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.set(x, y, cell);
            }
        }
    }

    fn restyle_rect(&mut self, rect: Rect, style: &Style) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.restyle(x, y, style);
            }
        }
    }
}

impl Surface for Buffer {
    fn size(&self) -> (u16, u16) {
        (self.width(), self.height())
    }

    fn get(&self, x: u16, y: u16) -> Option<Cell> {
        Buffer::get(self, x, y).copied()
    }

    fn set(&mut self, x: u16, y: u16, cell: Cell) {
        Buffer::set(self, x, y, cell);
    }
}

/// A translated, clipped window onto another surface.
///
/// Coordinates are relative to the window's origin. Writes that fall
/// outside the window are dropped even if the underlying surface could take
/// them.
pub struct Clip<'a> {
    inner: &'a mut dyn Surface,
    area: Rect,
}

impl<'a> Clip<'a> {
    pub fn new(inner: &'a mut dyn Surface, area: Rect) -> Self {
        Self { inner, area }
    }

    /// The window in the parent's coordinates.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Translate window coordinates to the parent's coordinates.
    pub fn absolute(&self, x: u16, y: u16) -> (u16, u16) {
        (self.area.x.saturating_add(x), self.area.y.saturating_add(y))
    }

    /// A nested window starting at `(x, y)` of this one and extending to its
    /// bottom-right corner.
    pub fn sub(&mut self, x: u16, y: u16) -> Clip<'_> {
        let area = Rect::new(
            x,
            y,
            self.area.width.saturating_sub(x),
            self.area.height.saturating_sub(y),
        );
        Clip::new(self, area)
    }
}

impl Surface for Clip<'_> {
    fn size(&self) -> (u16, u16) {
        (self.area.width, self.area.height)
    }

    fn get(&self, x: u16, y: u16) -> Option<Cell> {
        if x >= self.area.width || y >= self.area.height {
            return None;
        }
        let (ax, ay) = self.absolute(x, y);
        self.inner.get(ax, ay)
    }

    fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x >= self.area.width || y >= self.area.height {
            return;
        }
        let (ax, ay) = self.absolute(x, y);
        self.inner.set(ax, ay, cell);
    }
}
