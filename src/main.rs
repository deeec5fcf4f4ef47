//! # retro-term
//!
//! A chat terminal that answers in the voice and layout of classic computers
//! (VT100, Commodore 64, Amiga, ...), plus a small relay that keeps the API key
//! off the client.
//!
//! ## Modes
//! - Interactive terminal UI (default)
//! - Single prompt with `-p` / `--prompt`
//! - `relay`, `normalize`, `emulators`, `themes`, `completions` subcommands

mod cli;
mod core;
mod relay;
mod run;
mod tui;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    match args.command {
        Some(Commands::Relay { host, port }) => return run::run_relay(host, port).await,
        Some(Commands::Normalize { width, lines }) => {
            run::run_normalize(width, lines)?;
            return Ok(());
        }
        Some(Commands::Emulators) => {
            run::list_emulators();
            return Ok(());
        }
        Some(Commands::Themes) => {
            run::list_themes();
            return Ok(());
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Args::command();
            let name = cmd.get_name().to_string();
            cli::generate(shell, &mut cmd, name, &mut std::io::stdout());
            return Ok(());
        }
        None => {}
    }

    let emulator = args.emulator.as_deref().map(run::resolve_emulator);
    let config = run::load_config();

    if let Some(prompt) = args.prompt.as_deref() {
        let emulator = emulator.unwrap_or_else(|| {
            core::emulators::find_or_default(&core::persistence::load().current_emulator)
        });
        return run::run_single_prompt(prompt, emulator, config).await;
    }

    run::launch_tui(config, emulator).await
}
