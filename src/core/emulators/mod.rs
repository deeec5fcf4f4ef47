//! Emulated machines: display geometry, boot banners, prompts, and reply styling.

mod catalog;
mod themes;

pub use themes::{DEFAULT_THEME, Palette, Rgb, THEMES, find_theme, is_known_theme};

use crate::core::format::{self, BoxedOptions, PlainOptions, TrailerOptions};

/// Emulator used when nothing (or something unknown) is selected.
pub const DEFAULT_EMULATOR: &str = "vt100";

/// How a machine frames a reply before it is normalized to the screen width.
#[derive(Debug, Clone, Copy)]
pub enum ResponseStyle {
    Plain {
        uppercase: bool,
    },
    Trailer {
        trailer: &'static str,
        gap_lines: usize,
        uppercase: bool,
    },
    Boxed {
        top: &'static str,
        bottom: &'static str,
        line_prefix: &'static str,
        before_lines: &'static [&'static str],
        after_lines: &'static [&'static str],
    },
}

impl ResponseStyle {
    pub fn apply(&self, text: &str) -> String {
        match *self {
            ResponseStyle::Plain { uppercase } => format::format_plain(
                text,
                PlainOptions {
                    uppercase,
                    ..Default::default()
                },
            ),
            ResponseStyle::Trailer {
                trailer,
                gap_lines,
                uppercase,
            } => format::format_with_trailer(
                text,
                trailer,
                TrailerOptions {
                    uppercase,
                    gap_lines,
                    ..Default::default()
                },
            ),
            ResponseStyle::Boxed {
                top,
                bottom,
                line_prefix,
                before_lines,
                after_lines,
            } => format::format_boxed(
                text,
                &BoxedOptions {
                    top,
                    bottom,
                    line_prefix,
                    before_lines,
                    after_lines,
                },
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Emulator {
    pub id: &'static str,
    pub name: &'static str,
    pub year: u16,
    pub description: &'static str,
    /// Screen width in characters; replies are normalized to it.
    pub columns: usize,
    pub prompt: &'static str,
    pub uppercase: bool,
    pub system_prompt_addition: &'static str,
    pub boot_sequence: &'static [&'static str],
    pub palette: Palette,
    pub response_style: ResponseStyle,
}

impl Emulator {
    /// Frame a reply the way this machine prints it. Line breaks are left as they are.
    pub fn style_response(&self, text: &str) -> String {
        self.response_style.apply(text)
    }

    /// Text shown while a request is in flight.
    pub fn loading_text(&self) -> &'static str {
        if self.uppercase {
            "PROCESSING..."
        } else {
            "Processing..."
        }
    }
}

/// All emulators in catalog order.
pub fn all() -> &'static [Emulator] {
    catalog::EMULATORS
}

pub fn find(id: &str) -> Option<&'static Emulator> {
    all().iter().find(|e| e.id == id)
}

/// Look up an emulator, falling back to [`DEFAULT_EMULATOR`].
pub fn find_or_default(id: &str) -> &'static Emulator {
    find(id).unwrap_or_else(default_emulator)
}

pub fn default_emulator() -> &'static Emulator {
    find(DEFAULT_EMULATOR).unwrap_or(&catalog::EMULATORS[0])
}

/// Emulators sorted by release year (oldest first).
pub fn by_year() -> Vec<&'static Emulator> {
    let mut list: Vec<&Emulator> = all().iter().collect();
    list.sort_by_key(|e| e.year);
    list
}

pub fn ids() -> Vec<&'static str> {
    all().iter().map(|e| e.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ascii;

    #[test]
    fn known_emulator_ids_exist() {
        for id in ["vt100", "c64", "apple2", "msdos", "amiga", "zx"] {
            assert!(find(id).is_some(), "missing {}", id);
        }
        assert!(find("pdp11").is_none());
    }

    #[test]
    fn find_or_default_falls_back_to_vt100() {
        assert_eq!(find_or_default("nope").id, "vt100");
        assert_eq!(find_or_default("c64").id, "c64");
    }

    #[test]
    fn ids_are_unique() {
        let mut ids = ids();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), all().len());
    }

    #[test]
    fn by_year_is_chronological() {
        let list = by_year();
        let pos = |id: &str| list.iter().position(|e| e.id == id).unwrap();
        assert!(pos("apple2") < pos("vt100"));
        assert!(pos("vt100") < pos("amiga"));
        assert!(list.windows(2).all(|w| w[0].year <= w[1].year));
    }

    #[test]
    fn vt100_replies_are_boxed() {
        let output = find("vt100").unwrap().style_response("Hello");
        assert!(output.contains("┌─ CLAUDE"));
        assert!(output.contains("Hello"));
        assert!(output.contains('└'));
    }

    #[test]
    fn c64_replies_are_uppercase_with_ready_trailer() {
        let output = find("c64").unwrap().style_response("hello");
        assert!(output.contains("HELLO"));
        assert!(output.contains("READY."));
    }

    #[test]
    fn style_response_keeps_long_lines_whole() {
        let emu = find("vt100").unwrap();
        let row = format!("| {} |", "x".repeat(100));
        let styled = emu.style_response(&row);
        assert_eq!(
            styled.split('\n').filter(|l| l.contains('x')).collect::<Vec<_>>(),
            vec![format!("│ {}", row)]
        );
    }

    #[test]
    fn styled_replies_normalize_to_screen_width() {
        for emu in all() {
            let styled = emu.style_response("a reply line");
            let normalized = ascii::normalize_text(&styled, emu.columns);
            for line in normalized.split('\n') {
                if ascii::is_structured(line) {
                    assert_eq!(line.chars().count(), emu.columns, "{}: {:?}", emu.id, line);
                }
            }
        }
    }

    #[test]
    fn boot_sequences_fit_their_screens() {
        for emu in all() {
            assert!(!emu.boot_sequence.is_empty(), "{} has no boot banner", emu.id);
            for line in ascii::normalize_lines(emu.boot_sequence, emu.columns) {
                assert_eq!(line.chars().count(), emu.columns);
            }
        }
    }

    #[test]
    fn loading_text_follows_case() {
        assert_eq!(find("c64").unwrap().loading_text(), "PROCESSING...");
        assert_eq!(find("amiga").unwrap().loading_text(), "Processing...");
    }
}
