//! Text wrapping for the terminal output pane.

use crate::core::ascii;

/// Split text into lines of max width (columns). Uses textwrap for correct UTF-8 handling.
fn wrap_text(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![s.to_string()];
    }
    textwrap::wrap(s, width)
        .into_iter()
        .map(|cow| cow.into_owned())
        .collect()
}

/// Split a message into display lines respecting message newlines, then wrap to `width`.
pub(crate) fn wrap_message(msg: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in msg.split('\n') {
        if line.is_empty() {
            out.push(String::new());
        } else {
            out.extend(wrap_text(line, width));
        }
    }
    out
}

/// Display lines for a transcript entry. Framed output is clipped by the pane, never re-wrapped.
pub(crate) fn entry_lines(content: &str, width: usize) -> Vec<String> {
    if ascii::contains_border_glyphs(content) {
        content.split('\n').map(str::to_string).collect()
    } else {
        wrap_message(content, width)
    }
}
