//! Border glyph tables: which code points count as left/right borders and how they mirror.

/// Glyphs recognized as a left border (box-drawing plus ASCII fallbacks).
pub const LEFT_BORDERS: &[char] = &['│', '║', '┌', '└', '╔', '╚', '├', '╠', '|', '*', '+'];

/// Glyphs recognized as a right border.
pub const RIGHT_BORDERS: &[char] = &['│', '║', '┐', '┘', '╗', '╝', '┤', '╣', '|', '*', '+'];

/// Right border drawn when none is present.
pub const DEFAULT_RIGHT_BORDER: char = '│';

pub fn is_left_border(c: char) -> bool {
    LEFT_BORDERS.contains(&c)
}

pub fn is_right_border(c: char) -> bool {
    RIGHT_BORDERS.contains(&c)
}

/// True if `c` belongs to either border set.
pub fn is_border_glyph(c: char) -> bool {
    is_left_border(c) || is_right_border(c)
}

/// Right-hand counterpart of a left border glyph (`┌` → `┐`, `╚` → `╝`, ...).
/// Anything outside the table closes with `│`.
pub fn mirror(left: char) -> char {
    match left {
        '│' => '│',
        '║' => '║',
        '|' => '|',
        '┌' => '┐',
        '└' => '┘',
        '╔' => '╗',
        '╚' => '╝',
        '├' => '┤',
        '╠' => '╣',
        '*' => '*',
        '+' => '+',
        _ => DEFAULT_RIGHT_BORDER,
    }
}
