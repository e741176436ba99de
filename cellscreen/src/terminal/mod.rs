use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor, event, execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::{Buffer, Cell};
use crate::event::Event;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

/// Raw-mode, alternate-screen terminal with double-buffered output.
///
/// Each [`Terminal::draw`] paints into a fresh buffer and only the cells
/// that changed since the previous frame are written out.
pub struct Terminal {
    stdout: io::Stdout,
    current: Buffer,
    previous: Buffer,
    force_full: bool,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        log::debug!("terminal opened at {}x{}", width, height);

        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
            force_full: true,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    /// Wait up to `timeout` (forever on `None`) for input and return every
    /// event that is ready, converted. Events with no toolkit meaning are
    /// dropped.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<Event>> {
        let mut raw = Vec::new();

        match timeout {
            Some(dur) => {
                if event::poll(dur)? {
                    raw.push(event::read()?);
                }
            }
            None => raw.push(event::read()?),
        }

        while !raw.is_empty() && event::poll(Duration::ZERO)? {
            raw.push(event::read()?);
        }

        Ok(raw.into_iter().filter_map(Event::from_crossterm).collect())
    }

    /// Paint one frame.
    pub fn draw<F>(&mut self, paint: F) -> io::Result<()>
    where
        F: FnOnce(&mut Buffer),
    {
        let (width, height) = terminal::size()?;
        if width != self.current.width() || height != self.current.height() {
            log::debug!("terminal resized to {}x{}", width, height);
            self.current = Buffer::new(width, height);
            self.previous = Buffer::new(width, height);
            self.force_full = true;
        }

        self.current.clear();
        paint(&mut self.current);
        self.flush()?;

        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut cursor_at: Option<(u16, u16)> = None;
        let mut fg = Rgb::WHITE;
        let mut bg = Rgb::BLACK;
        let mut attrs = TextStyle::new();

        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(to_crossterm(fg)),
            SetBackgroundColor(to_crossterm(bg))
        )?;

        let changed: Vec<(u16, u16, Cell)> = if self.force_full {
            let mut all = Vec::new();
            for y in 0..self.current.height() {
                for x in 0..self.current.width() {
                    if let Some(cell) = self.current.get(x, y) {
                        all.push((x, y, *cell));
                    }
                }
            }
            all
        } else {
            self.current
                .diff(&self.previous)
                .map(|(x, y, cell)| (x, y, *cell))
                .collect()
        };
        self.force_full = false;

        for (x, y, cell) in changed {
            if cell.wide_continuation {
                continue;
            }

            if cursor_at != Some((x, y)) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if cell.fg != fg {
                queue!(self.stdout, SetForegroundColor(to_crossterm(cell.fg)))?;
                fg = cell.fg;
            }
            if cell.bg != bg {
                queue!(self.stdout, SetBackgroundColor(to_crossterm(cell.bg)))?;
                bg = cell.bg;
            }
            if cell.style != attrs {
                self.write_attributes(cell.style)?;
                attrs = cell.style;
            }

            write!(self.stdout, "{}", cell.ch)?;

            let advance = char_width(cell.ch).max(1) as u16;
            cursor_at = Some((x.saturating_add(advance), y));
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }

    fn write_attributes(&mut self, style: TextStyle) -> io::Result<()> {
        queue!(self.stdout, SetAttribute(Attribute::NormalIntensity))?;
        queue!(self.stdout, SetAttribute(Attribute::NoItalic))?;
        queue!(self.stdout, SetAttribute(Attribute::NoUnderline))?;
        queue!(self.stdout, SetAttribute(Attribute::NotCrossedOut))?;
        if style.bold {
            queue!(self.stdout, SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            queue!(self.stdout, SetAttribute(Attribute::Dim))?;
        }
        if style.italic {
            queue!(self.stdout, SetAttribute(Attribute::Italic))?;
        }
        if style.underline {
            queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
        }
        if style.strikethrough {
            queue!(self.stdout, SetAttribute(Attribute::CrossedOut))?;
        }
        Ok(())
    }
}

fn to_crossterm(color: Rgb) -> CtColor {
    CtColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
