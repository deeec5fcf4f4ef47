//! Slash commands: tokenizer, command table, and help text.

use crate::core::emulators;

/// What a slash command does. Execution lives in [`crate::core::session::Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    Clear,
    Emu,
    Theme,
    List,
    About,
    Keyboard,
}

#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub id: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
    pub kind: CommandKind,
}

pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        id: "/help",
        usage: "/help",
        description: "Show this help",
        kind: CommandKind::Help,
    },
    CommandSpec {
        id: "/clear",
        usage: "/clear",
        description: "Clear screen",
        kind: CommandKind::Clear,
    },
    CommandSpec {
        id: "/emu",
        usage: "/emu [name]",
        description: "Switch emulator (use /list to see all)",
        kind: CommandKind::Emu,
    },
    CommandSpec {
        id: "/theme",
        usage: "/theme [name]",
        description: "Color theme",
        kind: CommandKind::Theme,
    },
    CommandSpec {
        id: "/list",
        usage: "/list",
        description: "List all emulators",
        kind: CommandKind::List,
    },
    CommandSpec {
        id: "/about",
        usage: "/about",
        description: "About current emulator",
        kind: CommandKind::About,
    },
    CommandSpec {
        id: "/keyboard",
        usage: "/keyboard",
        description: "Toggle keyboard display",
        kind: CommandKind::Keyboard,
    },
];

/// A parsed command line: the command plus its lowercased first argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub kind: CommandKind,
    pub arg: Option<String>,
}

/// Split a command line into tokens. Whitespace separates tokens, `'` and `"`
/// quote (the quotes are dropped), and `\` escapes the next character.
pub fn parse_command_line(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in input.chars() {
        if escaped {
            current.push(c);
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
            continue;
        }
        if let Some(q) = quote {
            if c == q {
                quote = None;
            } else {
                current.push(c);
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            ' ' | '\t' => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Parse `input` into a known command, or `None` if the first token is not one.
pub fn parse(input: &str) -> Option<Invocation> {
    let tokens = parse_command_line(input);
    let name = tokens.first()?.to_lowercase();
    let spec = COMMANDS.iter().find(|c| c.id == name)?;
    Some(Invocation {
        kind: spec.kind,
        arg: tokens.get(1).map(|a| a.to_lowercase()),
    })
}

/// Slash-separated theme names for help output (`default/synthwave/...`).
fn theme_names() -> String {
    std::iter::once(emulators::DEFAULT_THEME)
        .chain(emulators::THEMES.iter().map(|t| t.id))
        .collect::<Vec<_>>()
        .join("/")
}

pub fn help_text() -> String {
    let lines: Vec<String> = COMMANDS
        .iter()
        .map(|cmd| match cmd.kind {
            CommandKind::Theme => format!("  /theme [name] - Color theme ({})", theme_names()),
            _ => format!("  {:<13} - {}", cmd.usage, cmd.description),
        })
        .collect();
    format!("\nAVAILABLE COMMANDS:\n{}\n", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizer_splits_on_whitespace() {
        assert_eq!(parse_command_line("/emu  c64\tnow"), vec!["/emu", "c64", "now"]);
        assert!(parse_command_line("   ").is_empty());
    }

    #[test]
    fn tokenizer_handles_quotes_and_escapes() {
        assert_eq!(parse_command_line("/theme \"miami\""), vec!["/theme", "miami"]);
        assert_eq!(parse_command_line("say 'two words'"), vec!["say", "two words"]);
        assert_eq!(parse_command_line(r"a\ b"), vec!["a b"]);
        assert_eq!(parse_command_line(r#""it's""#), vec!["it's"]);
    }

    #[test]
    fn parse_known_command_lowercases() {
        let inv = parse("/EMU C64 extra").unwrap();
        assert_eq!(inv.kind, CommandKind::Emu);
        assert_eq!(inv.arg.as_deref(), Some("c64"));
        assert_eq!(parse("/help").unwrap().arg, None);
    }

    #[test]
    fn parse_unknown_command() {
        assert!(parse("/nope").is_none());
        assert!(parse("").is_none());
    }

    #[test]
    fn help_lists_every_command() {
        let help = help_text();
        assert!(help.starts_with("\nAVAILABLE COMMANDS:\n"));
        for cmd in COMMANDS {
            assert!(help.contains(cmd.id), "missing {}", cmd.id);
        }
        assert!(help.contains("  /help         - Show this help"));
        assert!(help.contains("Color theme (default/synthwave/miami"));
    }
}
