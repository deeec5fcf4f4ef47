//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  retro-term                          Launch the terminal
  retro-term -e c64                   Launch as a Commodore 64
  retro-term -p \"hello\" -e amiga      Single prompt, styled reply to stdout
  retro-term -p -                     Read prompt from stdin
  retro-term relay --port 3001        Run the local API relay
  cat art.txt | retro-term normalize --width 40
  retro-term emulators                List emulators
  retro-term completions bash         Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "A retro terminal chat client with period-accurate computer personas",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Send a single prompt then exit (without opening the TUI)
    #[arg(
        short = 'p',
        long,
        help = "Send one prompt and print the styled reply (use '-' to read from stdin)"
    )]
    pub prompt: Option<String>,

    /// Emulator to use instead of the saved one
    #[arg(short = 'e', long = "emu", help = "Emulator id (e.g. vt100, c64, amiga)")]
    pub emulator: Option<String>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the local relay that holds the API key
    Relay {
        /// Listen host (default: PROXY_HOST or 127.0.0.1)
        #[arg(long)]
        host: Option<String>,
        /// Listen port (default: PROXY_PORT or 3001)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Normalize ASCII art read from stdin to a fixed width
    Normalize {
        /// Target width in characters
        #[arg(short, long)]
        width: usize,
        /// Normalize every line, not only bordered or ruled ones
        #[arg(long)]
        lines: bool,
    },
    /// List emulators in chronological order
    Emulators,
    /// List color themes
    Themes,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    /// The relay logs its requests at info by default.
    pub fn log_level(&self) -> &'static str {
        let base = match self.command {
            Some(Commands::Relay { .. }) => 1,
            _ => 0,
        };
        if self.quiet {
            "error"
        } else if self.verbose + base >= 2 {
            "debug"
        } else if self.verbose + base >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    /// Whether the interactive terminal will own the screen.
    pub fn is_tui(&self) -> bool {
        self.command.is_none() && self.prompt.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_levels() {
        let args = Args::parse_from(["retro-term"]);
        assert_eq!(args.log_level(), "warn");
        assert!(args.is_tui());

        let args = Args::parse_from(["retro-term", "-vv", "-p", "hi"]);
        assert_eq!(args.log_level(), "debug");
        assert!(!args.is_tui());

        let args = Args::parse_from(["retro-term", "relay"]);
        assert_eq!(args.log_level(), "info");

        let args = Args::parse_from(["retro-term", "-q", "relay"]);
        assert_eq!(args.log_level(), "error");
    }

    #[test]
    fn parses_subcommands() {
        let args = Args::parse_from(["retro-term", "normalize", "--width", "40", "--lines"]);
        assert!(matches!(
            args.command,
            Some(Commands::Normalize { width: 40, lines: true })
        ));

        let args = Args::parse_from(["retro-term", "relay", "--port", "4000"]);
        assert!(matches!(
            args.command,
            Some(Commands::Relay { host: None, port: Some(4000) })
        ));

        let args = Args::parse_from(["retro-term", "-e", "c64"]);
        assert_eq!(args.emulator.as_deref(), Some("c64"));
    }
}
