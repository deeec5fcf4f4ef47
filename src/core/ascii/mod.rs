//! ASCII-art normalization: re-flow banners and bordered lines to a fixed column width.
//!
//! Lengths are counted in code points (`char`s), never bytes or display cells.
//! Every function here is total: any string and width map to a defined output.

mod borders;

use borders::{is_border_glyph, is_left_border, is_right_border, mirror};

/// The repeated character if every char in `chars` is the same; `None` for empty input.
fn uniform_char(chars: &[char]) -> Option<char> {
    let (&first, rest) = chars.split_first()?;
    rest.iter().all(|&c| c == first).then_some(first)
}

/// Truncate or pad `chars` with `fill` to exactly `columns` chars.
fn fit(chars: &[char], columns: usize, fill: char) -> String {
    if chars.len() >= columns {
        return chars[..columns].iter().collect();
    }
    chars
        .iter()
        .copied()
        .chain(std::iter::repeat_n(fill, columns - chars.len()))
        .collect()
}

/// Normalize a single line to exactly `width` chars (empty when `width` is 0).
///
/// Uniform lines (`-----`) keep their character. Lines that start with a left
/// border and/or end with a right border keep those glyphs and have their
/// interior resized; a missing right border is synthesized from the left one.
/// Anything else is padded with spaces or truncated.
pub fn normalize_line(line: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let chars: Vec<char> = line.chars().collect();
    if chars.len() < 2 {
        return fit(&chars, width, ' ');
    }
    if let Some(c) = uniform_char(&chars) {
        return fit(&chars, width, c);
    }

    let first = chars[0];
    let last = chars[chars.len() - 1];
    let has_left = is_left_border(first);
    let has_right = is_right_border(last);
    if !has_left && !has_right {
        return fit(&chars, width, ' ');
    }
    if width == 1 {
        return first.to_string();
    }

    let synthesize_right = has_left && !has_right;
    let (interior, right) = if synthesize_right {
        (&chars[1..], mirror(first))
    } else {
        (&chars[1..chars.len() - 1], last)
    };
    let fill = uniform_char(interior).unwrap_or(' ');

    let mut out = String::with_capacity(width * 3);
    out.push(first);
    out.push_str(&fit(interior, width - 2, fill));
    out.push(right);
    out
}

/// Normalize every line, structured or not. Meant for fixed layouts such as boot banners.
pub fn normalize_lines<S: AsRef<str>>(lines: &[S], width: usize) -> Vec<String> {
    lines
        .iter()
        .map(|line| normalize_line(line.as_ref(), width))
        .collect()
}

/// Like [`normalize_lines`], for input with holes: a missing line counts as empty.
pub fn normalize_optional_lines(lines: &[Option<&str>], width: usize) -> Vec<String> {
    lines
        .iter()
        .map(|line| normalize_line(line.unwrap_or(""), width))
        .collect()
}

/// True for non-empty lines that are uniform or carry at least one border glyph.
pub fn is_structured(line: &str) -> bool {
    let chars: Vec<char> = line.chars().collect();
    uniform_char(&chars).is_some() || chars.iter().any(|&c| is_border_glyph(c))
}

/// Normalize only the structured lines of a block; every other line is left untouched.
pub fn normalize_text(text: &str, width: usize) -> String {
    text.split('\n')
        .map(|line| {
            if is_structured(line) {
                normalize_line(line, width)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cheap pre-check: does any line contain a border glyph?
pub fn contains_border_glyphs(text: &str) -> bool {
    text.chars().any(is_border_glyph)
}

#[cfg(test)]
mod tests;
