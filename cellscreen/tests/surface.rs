use cellscreen::{Buffer, Cell, Clip, Rect, Style, Surface, TextStyle};

#[test]
fn test_buffer_out_of_bounds_is_ignored() {
    let mut buf = Buffer::new(2, 2);
    buf.set(5, 5, Cell::new('x'));
    assert!(Surface::get(&buf, 5, 5).is_none());
    assert_eq!(buf.row_text(0), "  ");
}

#[test]
fn test_clip_translates_coordinates() {
    let mut buf = Buffer::new(6, 3);
    {
        let mut clip = Clip::new(&mut buf, Rect::new(2, 1, 3, 2));
        clip.set_char(0, 0, 'a', &Style::new());
        clip.set_char(2, 1, 'b', &Style::new());
        assert_eq!(clip.size(), (3, 2));
        assert_eq!(clip.absolute(1, 1), (3, 2));
    }
    assert_eq!(buf.row_text(1), "  a   ");
    assert_eq!(buf.row_text(2), "    b ");
}

#[test]
fn test_clip_drops_writes_outside_window() {
    let mut buf = Buffer::new(6, 2);
    {
        let mut clip = Clip::new(&mut buf, Rect::new(1, 0, 2, 1));
        for x in 0..6 {
            clip.set_char(x, 0, '#', &Style::new());
        }
        clip.set_char(0, 1, '#', &Style::new());
        assert!(clip.get(2, 0).is_none());
    }
    assert_eq!(buf.row_text(0), " ##   ");
    assert_eq!(buf.row_text(1), "      ");
}

#[test]
fn test_sub_clip_nests() {
    let mut buf = Buffer::new(6, 3);
    {
        let mut outer = Clip::new(&mut buf, Rect::new(1, 1, 4, 2));
        let mut inner = outer.sub(2, 1);
        assert_eq!(inner.size(), (2, 1));
        inner.set_char(0, 0, 'z', &Style::new());
        inner.set_char(2, 0, 'q', &Style::new());
    }
    assert_eq!(buf.row_text(2), "   z  ");
}

#[test]
fn test_restyle_keeps_glyph() {
    let mut buf = Buffer::new(2, 1);
    buf.set_char(0, 0, 'k', &Style::new());
    buf.restyle(0, 0, &Style::new().text(TextStyle::new().bold()));
    let cell = Surface::get(&buf, 0, 0).unwrap();
    assert_eq!(cell.ch, 'k');
    assert!(cell.style.bold);
}

#[test]
fn test_style_reversed_swaps_colors() {
    use cellscreen::Color;
    let style = Style::new().fg(Color::rgb(1, 2, 3)).bg(Color::rgb(4, 5, 6));
    let flipped = style.reversed();
    assert_eq!(flipped.fg, Some(Color::rgb(4, 5, 6)));
    assert_eq!(flipped.bg, Some(Color::rgb(1, 2, 3)));
}

#[test]
fn test_oklch_resolves_through_palette() {
    use cellscreen::Color;
    let black = Color::oklch(0.0, 0.0, 0.0).to_rgb();
    assert!(black.r <= 1 && black.g <= 1 && black.b <= 1);
    assert_eq!(Color::hex(0x102030).to_rgb(), cellscreen::Rgb::new(0x10, 0x20, 0x30));
}
