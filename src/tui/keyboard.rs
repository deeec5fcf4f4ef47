//! On-screen keyboard layout and key-event to key-cap mapping.

use crossterm::event::KeyCode;

pub(crate) const KEYBOARD_LAYOUT: &[&[&str]] = &[
    &["ESC", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "-", "=", "BKSP"],
    &["TAB", "Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P", "[", "]", "\\"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L", ";", "'", "RETURN"],
    &["Z", "X", "C", "V", "B", "N", "M", ",", ".", "/"],
    &["SPACE"],
];

/// Unshifted key-cap for shifted punctuation.
const SHIFTED: &[(char, char)] = &[
    ('!', '1'),
    ('@', '2'),
    ('#', '3'),
    ('$', '4'),
    ('%', '5'),
    ('^', '6'),
    ('&', '7'),
    ('*', '8'),
    ('(', '9'),
    (')', '0'),
    ('_', '-'),
    ('+', '='),
    ('{', '['),
    ('}', ']'),
    ('|', '\\'),
    (':', ';'),
    ('"', '\''),
    ('<', ','),
    ('>', '.'),
    ('?', '/'),
];

fn find_cap(label: &str) -> Option<&'static str> {
    KEYBOARD_LAYOUT
        .iter()
        .flat_map(|row| row.iter())
        .find(|cap| **cap == label)
        .copied()
}

/// Key-cap on the layout for a key event, if it has one.
pub(crate) fn key_cap(code: KeyCode) -> Option<&'static str> {
    match code {
        KeyCode::Esc => Some("ESC"),
        KeyCode::Backspace => Some("BKSP"),
        KeyCode::Tab => Some("TAB"),
        KeyCode::Enter => Some("RETURN"),
        KeyCode::Char(' ') => Some("SPACE"),
        KeyCode::Char(c) => {
            let base = SHIFTED
                .iter()
                .find(|(shifted, _)| *shifted == c)
                .map(|(_, base)| *base)
                .unwrap_or(c);
            let label: String = base.to_uppercase().collect();
            find_cap(&label)
        }
        _ => None,
    }
}
