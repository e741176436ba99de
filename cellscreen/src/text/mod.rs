use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::buffer::Cell;
use crate::surface::Surface;
use crate::types::{Style, TextAlign};

pub const ELLIPSIS: char = '…';

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let current_width = display_width(s);
    if current_width <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width.saturating_sub(1);

    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push(ELLIPSIS);
    result
}

/// The longest prefix of `s` that fits in `max_width` columns, and its width.
pub fn fit_prefix(s: &str, max_width: usize) -> (&str, usize) {
    let mut width = 0;
    for (index, ch) in s.char_indices() {
        let ch_width = char_width(ch);
        if width + ch_width > max_width {
            return (&s[..index], width);
        }
        width += ch_width;
    }
    (s, width)
}

pub fn align_offset(text_width: usize, available_width: usize, align: TextAlign) -> usize {
    if text_width >= available_width {
        return 0;
    }

    match align {
        TextAlign::Left => 0,
        TextAlign::Center => (available_width - text_width) / 2,
        TextAlign::Right => available_width - text_width,
    }
}

/// Glyphs of `text` that fit in `max_width` columns, each with its column
/// offset inside the span once aligned, plus the total width placed.
/// Zero-width characters are dropped.
pub fn place_glyphs(
    text: &str,
    max_width: usize,
    align: TextAlign,
) -> (impl Iterator<Item = (usize, char)> + '_, usize) {
    let (visible, width) = fit_prefix(text, max_width);
    let mut col = align_offset(width, max_width, align);
    let glyphs = visible.chars().filter_map(move |ch| {
        let ch_width = char_width(ch);
        if ch_width == 0 {
            return None;
        }
        let at = col;
        col += ch_width;
        Some((at, ch))
    });
    (glyphs, width)
}

/// Print `text` on row `y`, starting at `x`, into at most `max_width`
/// columns, aligned within that span. Text that does not fit is cut at the
/// right edge. Returns the display width actually printed.
pub fn print(
    surface: &mut dyn Surface,
    text: &str,
    x: u16,
    y: u16,
    max_width: usize,
    align: TextAlign,
    style: &Style,
) -> usize {
    let (glyphs, width) = place_glyphs(text, max_width, align);
    for (offset, ch) in glyphs {
        let Ok(cx) = u16::try_from(x as usize + offset) else {
            break;
        };
        surface.set_char(cx, y, ch, style);
        if char_width(ch) > 1 {
            if let Some(base) = surface.get(cx.saturating_add(1), y) {
                let continuation = Cell {
                    ch: ' ',
                    wide_continuation: true,
                    ..base
                }
                .styled(style);
                surface.set(cx + 1, y, continuation);
            }
        }
    }

    width
}
