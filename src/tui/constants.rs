//! TUI constants: colors, timing, and layout sizes.

use ratatui::style::Color;

use crate::core::emulators::Rgb;

/// Error lines (#FF6666), independent of the palette.
pub(super) const ERROR_COLOR: Color = Color::Rgb(255, 102, 102);

/// Event poll timeout in milliseconds (main loop). Shorter than the boot line delay.
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 40;

/// How long a pressed key stays lit on the keyboard overlay.
pub(crate) const KEY_HIGHLIGHT_MS: u64 = 150;

/// Scroll amount for arrow keys.
pub(crate) const SCROLL_LINES_SMALL: usize = 3;

/// Scroll amount for PageUp/PageDown.
pub(crate) const SCROLL_LINES_PAGE: usize = 10;

/// Input bar height including its border.
pub(crate) const INPUT_HEIGHT: u16 = 3;

pub(super) fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}
