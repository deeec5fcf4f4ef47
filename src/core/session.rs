//! Terminal session: transcript, boot reveal, slash commands, and in-flight request state.
//!
//! The session is UI-agnostic. The TUI drives it with key input and a timer; tests drive it directly.

use std::collections::VecDeque;

use crate::core::ascii;
use crate::core::commands::{self, CommandKind};
use crate::core::emulators::{self, Emulator, Palette};
use crate::core::llm::{self, ChatError, RequestSequence, Ticket};
use crate::core::persistence::Preferences;

/// Delay between two revealed boot lines, in milliseconds.
pub const BOOT_LINE_DELAY_MS: u64 = 80;

const LIST_RULE_WIDTH: usize = 44;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    System,
    User,
    Response,
    Error,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub kind: EntryKind,
    pub content: String,
}

/// Outcome of submitting an input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Submission {
    /// Blank input, still booting, or a request already in flight.
    Ignored,
    /// A slash command ran locally.
    Command,
    /// A chat request should be sent; its reply must be passed back with `ticket`.
    Chat { message: String, ticket: Ticket },
}

pub struct Session {
    emulator: &'static Emulator,
    theme: String,
    show_keyboard: bool,
    history: Vec<Entry>,
    boot_queue: VecDeque<String>,
    booted: bool,
    loading: bool,
    requests: RequestSequence,
}

impl Session {
    /// Build a session from saved preferences and start its boot sequence.
    pub fn new(prefs: &Preferences) -> Self {
        let prefs = prefs.clone().sanitized();
        let mut session = Self {
            emulator: emulators::find_or_default(&prefs.current_emulator),
            theme: prefs.color_theme,
            show_keyboard: prefs.show_keyboard,
            history: Vec::new(),
            boot_queue: VecDeque::new(),
            booted: false,
            loading: false,
            requests: RequestSequence::new(),
        };
        session.boot();
        session
    }

    pub fn emulator(&self) -> &'static Emulator {
        self.emulator
    }

    pub fn show_keyboard(&self) -> bool {
        self.show_keyboard
    }

    pub fn history(&self) -> &[Entry] {
        &self.history
    }

    pub fn is_booted(&self) -> bool {
        self.booted
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.requests.is_current(ticket)
    }

    /// Colors to draw with: the selected theme, or the emulator's own palette.
    pub fn palette(&self) -> Palette {
        emulators::find_theme(&self.theme)
            .map(|t| t.palette)
            .unwrap_or(self.emulator.palette)
    }

    pub fn preferences(&self) -> Preferences {
        Preferences {
            current_emulator: self.emulator.id.to_string(),
            color_theme: self.theme.clone(),
            show_keyboard: self.show_keyboard,
        }
    }

    /// Clear the screen and queue the emulator's boot lines, normalized to its column width.
    /// Any in-flight request is superseded.
    pub fn boot(&mut self) {
        self.requests.supersede();
        self.loading = false;
        self.history.clear();
        self.booted = false;
        self.boot_queue = ascii::normalize_lines(self.emulator.boot_sequence, self.emulator.columns)
            .into_iter()
            .collect();
        log::debug!("Booting {} ({} lines)", self.emulator.id, self.boot_queue.len());
    }

    /// Reveal the next boot line. Returns true while the display changed.
    pub fn advance_boot(&mut self) -> bool {
        if self.booted {
            return false;
        }
        match self.boot_queue.pop_front() {
            Some(line) => {
                self.push(EntryKind::System, line);
                true
            }
            None => {
                self.booted = true;
                true
            }
        }
    }

    /// Reveal all remaining boot lines at once.
    pub fn finish_boot(&mut self) {
        while self.advance_boot() {}
    }

    fn push(&mut self, kind: EntryKind, content: impl Into<String>) {
        self.history.push(Entry {
            kind,
            content: content.into(),
        });
    }

    /// Handle one line of user input: echo it, then run a command or start a chat request.
    pub fn submit(&mut self, input: &str) -> Submission {
        let input = input.trim();
        if input.is_empty() || self.loading || !self.booted {
            return Submission::Ignored;
        }

        let shown = if self.emulator.uppercase {
            input.to_uppercase()
        } else {
            input.to_string()
        };
        self.push(EntryKind::User, format!("{}{}", self.emulator.prompt, shown));

        if input.starts_with('/') {
            self.run_command(input);
            return Submission::Command;
        }

        let ticket = self.begin_request();
        Submission::Chat {
            message: input.to_string(),
            ticket,
        }
    }

    /// Mark a request as in flight and show the emulator's loading text.
    pub fn begin_request(&mut self) -> Ticket {
        self.loading = true;
        self.push(
            EntryKind::System,
            format!("\n{}\n", self.emulator.loading_text()),
        );
        self.requests.issue()
    }

    /// Apply a finished request. Results for superseded tickets are dropped; returns whether
    /// the result was applied.
    pub fn complete_request(&mut self, ticket: Ticket, result: Result<String, ChatError>) -> bool {
        if !self.requests.is_current(ticket) {
            log::debug!("Dropping result of superseded request {:?}", ticket);
            return false;
        }
        self.loading = false;
        match result {
            Ok(reply) => {
                let formatted = llm::format_reply(self.emulator, &reply);
                self.push(EntryKind::Response, formatted);
            }
            Err(ChatError::Cancelled) => {}
            Err(e) => {
                match e.status() {
                    Some(status) => log::warn!("Chat request failed ({}): {}", status, e),
                    None => log::warn!("Chat request failed: {}", e),
                }
                self.push(EntryKind::Error, format!("\nERROR: {}\n", e));
            }
        }
        true
    }

    fn run_command(&mut self, input: &str) {
        let Some(invocation) = commands::parse(input) else {
            self.push(
                EntryKind::Error,
                "Unknown command. Type /help for available commands.",
            );
            return;
        };
        let arg = invocation.arg.as_deref();

        match invocation.kind {
            CommandKind::Help => self.push(EntryKind::System, commands::help_text()),
            CommandKind::Clear => self.history.clear(),
            CommandKind::Emu => match arg.and_then(emulators::find) {
                Some(emu) => self.switch_emulator(emu),
                None => self.push(
                    EntryKind::Error,
                    format!("Unknown emulator. Available: {}", emulators::ids().join(", ")),
                ),
            },
            CommandKind::Theme => match arg.filter(|a| emulators::is_known_theme(a)) {
                Some(theme) => {
                    self.theme = theme.to_string();
                    self.push(
                        EntryKind::System,
                        format!("Theme changed to: {}", theme.to_uppercase()),
                    );
                }
                None => {
                    let mut names = vec![emulators::DEFAULT_THEME];
                    names.extend(emulators::THEMES.iter().map(|t| t.id));
                    self.push(
                        EntryKind::Error,
                        format!("Unknown theme. Available: {}", names.join(", ")),
                    );
                }
            },
            CommandKind::List => self.push(EntryKind::System, emulator_list()),
            CommandKind::About => {
                let emu = self.emulator;
                self.push(
                    EntryKind::System,
                    format!("\n{} ({})\n{}\n", emu.name, emu.year, emu.description),
                );
            }
            CommandKind::Keyboard => {
                self.show_keyboard = !self.show_keyboard;
                let state = if self.show_keyboard { "ON" } else { "OFF" };
                self.push(EntryKind::System, format!("\nKeyboard display {}\n", state));
            }
        }
    }

    /// Switch to another emulator and reboot. Selecting the current one is a no-op.
    pub fn switch_emulator(&mut self, emu: &'static Emulator) {
        if emu.id == self.emulator.id {
            return;
        }
        log::info!("Switching emulator {} -> {}", self.emulator.id, emu.id);
        self.emulator = emu;
        self.boot();
    }
}

fn emulator_list() -> String {
    let all = emulators::by_year();
    let rule = "─".repeat(LIST_RULE_WIDTH);
    let rows: Vec<String> = all
        .iter()
        .map(|e| format!("  {:<12} {:<20} {}", e.id, e.name, e.year))
        .collect();
    format!(
        "\nAVAILABLE EMULATORS ({} total):\n{}\n{}\n{}\nUse: /emu [name]\n",
        all.len(),
        rule,
        rows.join("\n"),
        rule
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booted(emulator: &str) -> Session {
        let mut session = Session::new(&Preferences {
            current_emulator: emulator.to_string(),
            ..Preferences::default()
        });
        session.finish_boot();
        session
    }

    fn last(session: &Session) -> &Entry {
        session.history().last().expect("transcript is empty")
    }

    #[test]
    fn boot_reveals_normalized_lines_one_at_a_time() {
        let mut session = Session::new(&Preferences::default());
        assert!(session.history().is_empty());
        assert!(!session.is_booted());

        assert!(session.advance_boot());
        assert_eq!(session.history().len(), 1);

        session.finish_boot();
        assert!(session.is_booted());
        let emu = session.emulator();
        assert_eq!(session.history().len(), emu.boot_sequence.len());
        for entry in session.history() {
            assert_eq!(entry.kind, EntryKind::System);
            assert_eq!(entry.content.chars().count(), emu.columns);
        }
        assert!(!session.advance_boot());
    }

    #[test]
    fn input_ignored_until_booted() {
        let mut session = Session::new(&Preferences::default());
        assert_eq!(session.submit("hello"), Submission::Ignored);
        session.finish_boot();
        assert_eq!(session.submit("   "), Submission::Ignored);
    }

    #[test]
    fn chat_submission_echoes_and_starts_request() {
        let mut session = booted("c64");
        let before = session.history().len();
        let Submission::Chat { message, ticket } = session.submit("  hello there ") else {
            panic!("expected chat submission");
        };
        assert_eq!(message, "hello there");
        assert!(session.is_loading());
        assert!(session.is_current(ticket));

        let echo = &session.history()[before];
        assert_eq!(echo.kind, EntryKind::User);
        assert_eq!(echo.content, "HELLO THERE");
        assert_eq!(last(&session).content, "\nPROCESSING...\n");

        assert_eq!(session.submit("again"), Submission::Ignored);
    }

    #[test]
    fn completed_request_is_styled_for_the_emulator() {
        let mut session = booted("c64");
        let Submission::Chat { ticket, .. } = session.submit("hi") else {
            panic!("expected chat submission");
        };
        assert!(session.complete_request(ticket, Ok("hello".to_string())));
        assert!(!session.is_loading());
        let reply = last(&session);
        assert_eq!(reply.kind, EntryKind::Response);
        assert!(reply.content.contains("HELLO"));
        assert!(reply.content.contains("READY."));
    }

    #[test]
    fn failed_request_shows_error() {
        let mut session = booted("vt100");
        let Submission::Chat { ticket, .. } = session.submit("hi") else {
            panic!("expected chat submission");
        };
        let err = ChatError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(session.complete_request(ticket, Err(err)));
        assert_eq!(last(&session).kind, EntryKind::Error);
        assert_eq!(last(&session).content, "\nERROR: boom\n");
    }

    #[test]
    fn cancelled_request_is_silent() {
        let mut session = booted("vt100");
        let Submission::Chat { ticket, .. } = session.submit("hi") else {
            panic!("expected chat submission");
        };
        let len = session.history().len();
        assert!(session.complete_request(ticket, Err(ChatError::Cancelled)));
        assert_eq!(session.history().len(), len);
        assert!(!session.is_loading());
    }

    #[test]
    fn switching_emulator_supersedes_in_flight_request() {
        let mut session = booted("vt100");
        let Submission::Chat { ticket, .. } = session.submit("hi") else {
            panic!("expected chat submission");
        };
        session.switch_emulator(emulators::find("zx").unwrap());
        assert!(!session.is_loading());
        assert!(!session.is_current(ticket));

        session.finish_boot();
        let len = session.history().len();
        assert!(!session.complete_request(ticket, Ok("late".to_string())));
        assert_eq!(session.history().len(), len);
    }

    #[test]
    fn emu_command_switches_and_reboots() {
        let mut session = booted("vt100");
        assert_eq!(session.submit("/emu AMIGA"), Submission::Command);
        assert_eq!(session.emulator().id, "amiga");
        assert!(session.history().is_empty());
        assert!(!session.is_booted());
        assert_eq!(session.preferences().current_emulator, "amiga");
    }

    #[test]
    fn emu_command_rejects_unknown() {
        let mut session = booted("vt100");
        session.submit("/emu pdp11");
        assert_eq!(session.emulator().id, "vt100");
        let entry = last(&session);
        assert_eq!(entry.kind, EntryKind::Error);
        assert!(entry.content.starts_with("Unknown emulator. Available: "));
        assert!(entry.content.contains("c64"));
    }

    #[test]
    fn theme_command() {
        let mut session = booted("vt100");
        session.submit("/theme amber");
        assert_eq!(session.preferences().color_theme, "amber");
        assert_eq!(last(&session).content, "Theme changed to: AMBER");
        assert_eq!(
            session.palette(),
            emulators::find_theme("amber").unwrap().palette
        );

        session.submit("/theme neon");
        assert_eq!(session.preferences().color_theme, "amber");
        assert_eq!(
            last(&session).content,
            "Unknown theme. Available: default, synthwave, miami, amber, green"
        );

        session.submit("/theme default");
        assert_eq!(session.palette(), session.emulator().palette);
    }

    #[test]
    fn list_about_keyboard_and_clear() {
        let mut session = booted("msdos");

        session.submit("/list");
        let list = &last(&session).content;
        assert!(list.starts_with(&format!(
            "\nAVAILABLE EMULATORS ({} total):\n",
            emulators::all().len()
        )));
        assert!(list.contains("  apple2       "));
        assert!(list.ends_with("Use: /emu [name]\n"));

        session.submit("/about");
        let emu = session.emulator();
        assert_eq!(
            last(&session).content,
            format!("\n{} ({})\n{}\n", emu.name, emu.year, emu.description)
        );

        assert!(session.show_keyboard());
        session.submit("/keyboard");
        assert!(!session.show_keyboard());
        assert_eq!(last(&session).content, "\nKeyboard display OFF\n");

        session.submit("/clear");
        assert!(session.history().is_empty());
    }

    #[test]
    fn unknown_command() {
        let mut session = booted("vt100");
        session.submit("/frobnicate");
        assert_eq!(
            last(&session).content,
            "Unknown command. Type /help for available commands."
        );
    }
}
