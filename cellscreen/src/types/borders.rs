/// Box-drawing glyphs for grids and frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub left_t: char,
    pub right_t: char,
    pub top_t: char,
    pub bottom_t: char,
    pub cross: char,
}

impl BorderGlyphs {
    pub const SINGLE: BorderGlyphs = BorderGlyphs {
        horizontal: '─',
        vertical: '│',
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        left_t: '├',
        right_t: '┤',
        top_t: '┬',
        bottom_t: '┴',
        cross: '┼',
    };

    pub const DOUBLE: BorderGlyphs = BorderGlyphs {
        horizontal: '═',
        vertical: '║',
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        left_t: '╠',
        right_t: '╣',
        top_t: '╦',
        bottom_t: '╩',
        cross: '╬',
    };
}

impl Default for BorderGlyphs {
    fn default() -> Self {
        Self::SINGLE
    }
}
