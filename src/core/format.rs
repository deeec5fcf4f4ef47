//! Text transforms applied to model replies: fence stripping, line prefixes, and framing.

use std::sync::OnceLock;

use regex::Regex;

static FENCED_BLOCK: OnceLock<Regex> = OnceLock::new();

fn fenced_block() -> &'static Regex {
    FENCED_BLOCK.get_or_init(|| {
        Regex::new(r"(?s)^\s*```[a-zA-Z0-9_-]*\n(.*?)\n```\s*$").expect("fence pattern is valid")
    })
}

/// If the whole text is a single fenced block, return its body; otherwise return it unchanged.
pub fn strip_code_fences(text: &str) -> String {
    fenced_block()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| text.to_string(), |body| body.as_str().to_string())
}

/// Drop every line that starts (after indentation) with a fence marker.
pub fn strip_fence_lines(text: &str) -> String {
    text.split('\n')
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prepend `prefix` to every line.
pub fn prefix_lines(text: &str, prefix: &str) -> String {
    text.split('\n')
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Copy)]
pub struct PlainOptions {
    pub uppercase: bool,
    pub trailing_newline: bool,
}

impl Default for PlainOptions {
    fn default() -> Self {
        Self {
            uppercase: false,
            trailing_newline: true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TrailerOptions {
    pub uppercase: bool,
    pub trailing_newline: bool,
    /// Blank lines between the body and the trailer.
    pub gap_lines: usize,
}

impl Default for TrailerOptions {
    fn default() -> Self {
        Self {
            uppercase: false,
            trailing_newline: true,
            gap_lines: 1,
        }
    }
}

/// Frame pieces for [`format_boxed`]. `top` and `bottom` are emitted verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxedOptions<'a> {
    pub top: &'a str,
    pub bottom: &'a str,
    pub line_prefix: &'a str,
    pub before_lines: &'a [&'a str],
    pub after_lines: &'a [&'a str],
}

fn body(text: &str, uppercase: bool) -> String {
    if uppercase {
        text.to_uppercase()
    } else {
        text.to_string()
    }
}

fn newline_if(flag: bool) -> &'static str {
    if flag { "\n" } else { "" }
}

pub fn format_plain(text: &str, options: PlainOptions) -> String {
    format!(
        "\n{}{}",
        body(text, options.uppercase),
        newline_if(options.trailing_newline)
    )
}

/// Body, a gap of `gap_lines` blank lines, then the literal trailer (e.g. `READY.`).
pub fn format_with_trailer(text: &str, trailer: &str, options: TrailerOptions) -> String {
    format!(
        "\n{}{}{}{}",
        body(text, options.uppercase),
        "\n".repeat(options.gap_lines + 1),
        trailer,
        newline_if(options.trailing_newline)
    )
}

pub fn format_boxed(text: &str, options: &BoxedOptions<'_>) -> String {
    let lines = prefix_lines(text, options.line_prefix);
    let before = if options.before_lines.is_empty() {
        String::new()
    } else {
        format!("{}\n", options.before_lines.join("\n"))
    };
    let after = if options.after_lines.is_empty() {
        String::new()
    } else {
        format!("\n{}", options.after_lines.join("\n"))
    };
    format!(
        "\n{}\n{}{}{}\n{}\n",
        options.top, before, lines, after, options.bottom
    )
}
