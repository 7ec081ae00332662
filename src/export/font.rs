//! Built-in monospace bitmap font.
//!
//! Printable ASCII glyphs are 5×7 bitmaps, one `u8` per row with the
//! leftmost pixel in bit 4. Each glyph sits in a 6×9 cell: one blank column
//! on the right, one blank row above and one below.
//!
//! Box-drawing characters are not bitmaps. They are described by which
//! cell edges they connect to and are drawn edge to edge, so that adjacent
//! cells join into unbroken lines.

/// Glyph bitmap width in pixels.
pub const GLYPH_WIDTH: u32 = 5;

/// Glyph bitmap height in pixels.
pub const GLYPH_HEIGHT: u32 = 7;

/// Horizontal advance per character at scale 1.
pub const ADVANCE: u32 = 6;

/// Vertical advance per line at scale 1.
pub const LINE_HEIGHT: u32 = 9;

/// Row offset of the bitmap inside its cell.
pub const GLYPH_TOP: u32 = 1;

/// Column of the vertical stroke of box-drawing characters.
pub const STROKE_X: u32 = GLYPH_WIDTH / 2;

/// Row of the horizontal stroke of box-drawing characters.
pub const STROKE_Y: u32 = GLYPH_TOP + GLYPH_HEIGHT / 2;

/// Which cell edges a box-drawing character connects to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoxStrokes {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl BoxStrokes {
    const fn new(left: bool, right: bool, up: bool, down: bool) -> Self {
        Self { left, right, up, down }
    }
}

/// How a character is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Bitmap([u8; GLYPH_HEIGHT as usize]),
    Box(BoxStrokes),
    Blank,
}

/// Look up the glyph for a character. Unknown characters are blank.
#[must_use]
pub fn glyph(c: char) -> Glyph {
    if let Some(strokes) = box_strokes(c) {
        return Glyph::Box(strokes);
    }
    match bitmap(c) {
        Some(rows) => Glyph::Bitmap(rows),
        None => {
            if !c.is_whitespace() {
                log::debug!("no glyph for {c:?}, leaving blank");
            }
            Glyph::Blank
        }
    }
}

/// Light box-drawing characters.
#[must_use]
pub fn box_strokes(c: char) -> Option<BoxStrokes> {
    let strokes = match c {
        '─' => BoxStrokes::new(true, true, false, false),
        '│' => BoxStrokes::new(false, false, true, true),
        '┌' => BoxStrokes::new(false, true, false, true),
        '┐' => BoxStrokes::new(true, false, false, true),
        '└' => BoxStrokes::new(false, true, true, false),
        '┘' => BoxStrokes::new(true, false, true, false),
        '├' => BoxStrokes::new(false, true, true, true),
        '┤' => BoxStrokes::new(true, false, true, true),
        '┬' => BoxStrokes::new(true, true, false, true),
        '┴' => BoxStrokes::new(true, true, true, false),
        '┼' => BoxStrokes::new(true, true, true, true),
        _ => return None,
    };
    Some(strokes)
}

#[rustfmt::skip]
fn bitmap(c: char) -> Option<[u8; GLYPH_HEIGHT as usize]> {
    let rows = match c {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b11110, 0b10001, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b01010, 0b10001],
        'Y' => [0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        'a' => [0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111],
        'b' => [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b11110],
        'c' => [0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110],
        'd' => [0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10001, 0b01111],
        'e' => [0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110],
        'f' => [0b00110, 0b01001, 0b01000, 0b11100, 0b01000, 0b01000, 0b01000],
        'g' => [0b00000, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110],
        'h' => [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
        'i' => [0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110],
        'j' => [0b00010, 0b00000, 0b00110, 0b00010, 0b00010, 0b10010, 0b01100],
        'k' => [0b10000, 0b10000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010],
        'l' => [0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'm' => [0b00000, 0b00000, 0b11010, 0b10101, 0b10101, 0b10001, 0b10001],
        'n' => [0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
        'o' => [0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110],
        'p' => [0b00000, 0b11110, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'q' => [0b00000, 0b01111, 0b10001, 0b01111, 0b00001, 0b00001, 0b00001],
        'r' => [0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000],
        's' => [0b00000, 0b00000, 0b01110, 0b10000, 0b01110, 0b00001, 0b11110],
        't' => [0b01000, 0b01000, 0b11100, 0b01000, 0b01000, 0b01001, 0b00110],
        'u' => [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101],
        'v' => [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'w' => [0b00000, 0b00000, 0b10001, 0b10001, 0b10101, 0b10101, 0b01010],
        'x' => [0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001],
        'y' => [0b00000, 0b10001, 0b10001, 0b01111, 0b00001, 0b10001, 0b01110],
        'z' => [0b00000, 0b00000, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '"' => [0b01010, 0b01010, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000],
        '#' => [0b01010, 0b11111, 0b01010, 0b01010, 0b11111, 0b01010, 0b00000],
        '$' => [0b00100, 0b01111, 0b10100, 0b01110, 0b00101, 0b11110, 0b00100],
        '%' => [0b11001, 0b11010, 0b00100, 0b01000, 0b01011, 0b10011, 0b00000],
        '&' => [0b01100, 0b10010, 0b01100, 0b10110, 0b10001, 0b10001, 0b01110],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        '*' => [0b00000, 0b10101, 0b01110, 0b11111, 0b01110, 0b10101, 0b00000],
        '+' => [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100, 0b11000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        '/' => [0b00001, 0b00010, 0b00100, 0b00100, 0b01000, 0b10000, 0b00000],
        ':' => [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000],
        ';' => [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b11000],
        '=' => [0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000],
        '?' => [0b01110, 0b10001, 0b00001, 0b00110, 0b00100, 0b00000, 0b00100],
        '@' => [0b01110, 0b10001, 0b10111, 0b10101, 0b10111, 0b10000, 0b01110],
        '[' => [0b01110, 0b01000, 0b01000, 0b01000, 0b01000, 0b01000, 0b01110],
        ']' => [0b01110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b01110],
        '^' => [0b00100, 0b01010, 0b10001, 0b00000, 0b00000, 0b00000, 0b00000],
        '_' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111],
        '|' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        '~' => [0b00000, 0b01000, 0b10101, 0b00010, 0b00000, 0b00000, 0b00000],
        _ => return None,
    };
    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_characters_have_glyphs() {
        let text = "Faction A wins on row 3! Wins - A: 10 | B: 29 Days: 4 Record: 58";
        for c in text.chars().filter(|c| !c.is_whitespace()) {
            assert!(matches!(glyph(c), Glyph::Bitmap(_)), "missing glyph for {c:?}");
        }
    }

    #[test]
    fn test_all_digits_are_distinct() {
        let digits: Vec<_> = ('0'..='9').map(glyph).collect();
        for (i, a) in digits.iter().enumerate() {
            for b in &digits[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_bitmaps_fit_glyph_width() {
        for rows in (' '..='~').filter_map(bitmap) {
            assert!(rows.iter().all(|&row| row < 1 << GLYPH_WIDTH));
        }
    }

    #[test]
    fn test_box_characters() {
        assert_eq!(glyph('┼'), Glyph::Box(BoxStrokes::new(true, true, true, true)));
        assert_eq!(
            box_strokes('┌'),
            Some(BoxStrokes { left: false, right: true, up: false, down: true })
        );
        assert_eq!(box_strokes('A'), None);
    }

    #[test]
    fn test_space_and_unknown_are_blank() {
        assert_eq!(glyph(' '), Glyph::Blank);
        assert_eq!(glyph('é'), Glyph::Blank);
    }
}
