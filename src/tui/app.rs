//! TUI application state: session, input line, scroll, boot timer, pressed key.

use std::time::{Duration, Instant};

use crate::core::persistence::{self, Preferences};
use crate::core::session::{BOOT_LINE_DELAY_MS, Session};

use super::constants::KEY_HIGHLIGHT_MS;

/// Scroll position: either a specific line index, or "at bottom" (follow new content).
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ScrollPosition {
    Line(usize),
    Bottom,
}

pub struct App {
    pub(crate) session: Session,
    /// User input in the text field.
    pub(crate) input: String,
    pub(crate) scroll: ScrollPosition,
    /// Max scroll offset from the last draw.
    pub(crate) last_max_scroll: usize,
    last_boot_step: Instant,
    pressed: Option<(&'static str, Instant)>,
    saved_prefs: Preferences,
}

impl App {
    pub fn new(prefs: Preferences) -> Self {
        let session = Session::new(&prefs);
        let saved_prefs = session.preferences();
        Self {
            session,
            input: String::new(),
            scroll: ScrollPosition::Bottom,
            last_max_scroll: 0,
            last_boot_step: Instant::now(),
            pressed: None,
            saved_prefs,
        }
    }

    /// Reveal the next boot line when its delay has elapsed. Returns true if the screen changed.
    pub(crate) fn tick_boot(&mut self, now: Instant) -> bool {
        if self.session.is_booted()
            || now.duration_since(self.last_boot_step) < Duration::from_millis(BOOT_LINE_DELAY_MS)
        {
            return false;
        }
        self.last_boot_step = now;
        let changed = self.session.advance_boot();
        if changed {
            self.scroll = ScrollPosition::Bottom;
        }
        changed
    }

    /// Input accepts keys only once booted and while no request is in flight.
    pub(crate) fn input_enabled(&self) -> bool {
        self.session.is_booted() && !self.session.is_loading()
    }

    pub(crate) fn push_input(&mut self, c: char) {
        if self.session.emulator().uppercase {
            self.input.extend(c.to_uppercase());
        } else {
            self.input.push(c);
        }
    }

    pub(crate) fn press(&mut self, label: &'static str) {
        self.pressed = Some((label, Instant::now()));
    }

    /// Key to highlight on the keyboard overlay, if one was pressed recently.
    pub(crate) fn pressed_key(&self) -> Option<&'static str> {
        self.pressed
            .filter(|(_, at)| at.elapsed() < Duration::from_millis(KEY_HIGHLIGHT_MS))
            .map(|(label, _)| label)
    }

    /// Save preferences if an emulator, theme, or keyboard change happened since the last save.
    pub(crate) fn persist_preferences(&mut self) {
        let current = self.session.preferences();
        if current == self.saved_prefs {
            return;
        }
        if let Err(e) = persistence::save(&current) {
            log::warn!("Failed to save preferences: {}", e);
        }
        self.saved_prefs = current;
    }

    /// Must be called before scroll_up/scroll_down when at bottom.
    pub(crate) fn materialize_scroll(&mut self) {
        if self.scroll == ScrollPosition::Bottom {
            self.scroll = ScrollPosition::Line(self.last_max_scroll);
        }
    }

    pub(crate) fn scroll_down(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            let pos = (pos + n).min(self.last_max_scroll);
            self.scroll = if pos == self.last_max_scroll {
                ScrollPosition::Bottom
            } else {
                ScrollPosition::Line(pos)
            };
        }
    }

    pub(crate) fn scroll_up(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            self.scroll = ScrollPosition::Line(pos.saturating_sub(n));
        }
    }

    /// Resolve scroll position to a concrete line index.
    pub(crate) fn scroll_line(&self) -> usize {
        match self.scroll {
            ScrollPosition::Line(n) => n.min(self.last_max_scroll),
            ScrollPosition::Bottom => self.last_max_scroll,
        }
    }
}
