//! Application run modes: logger init, single prompt, relay, normalize, listings, TUI launch.

use std::io::{self, Read};

use crate::cli::Args;
use crate::core;
use crate::core::config::Config;
use crate::core::emulators::{self, Emulator};
use crate::core::llm::{self, ChatClient};
use crate::core::persistence::Preferences;
use crate::relay::{self, RelayConfig};

/// Initialize env_logger. In TUI mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.is_tui() {
        let log_path = core::paths::cache_dir().and_then(|d| {
            std::fs::create_dir_all(&d).ok()?;
            Some(d.join(format!("{}.log", core::app::NAME)))
        });
        if let Some(path) = log_path
            && let Ok(file) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
        {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    let _ = logger.try_init();
}

/// Load client config, exiting with a readable message when it is invalid.
pub fn load_config() -> Config {
    core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    })
}

/// Resolve `-e/--emu`, exiting on an unknown id.
pub fn resolve_emulator(id: &str) -> &'static Emulator {
    emulators::find(id).unwrap_or_else(|| {
        eprintln!(
            "Error: unknown emulator '{}'. Available: {}",
            id,
            emulators::ids().join(", ")
        );
        std::process::exit(1);
    })
}

/// Run single prompt mode: send one message, print the styled reply to stdout.
pub async fn run_single_prompt(
    prompt_arg: &str,
    emulator: &'static Emulator,
    config: Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let prompt = if prompt_arg == "-" {
        io::read_to_string(io::stdin())?
    } else {
        prompt_arg.to_string()
    };
    let prompt = prompt.trim();
    if prompt.is_empty() {
        eprintln!("Error: empty prompt");
        std::process::exit(1);
    }

    log::info!("Single prompt as {} via {}", emulator.id, config.messages_url());
    let client = ChatClient::new(config);
    match client.send(emulator, prompt).await {
        Ok(reply) => {
            println!("{}", llm::format_reply(emulator, &reply));
            Ok(())
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    }
}

/// Run the relay until Ctrl-C. A missing API key is fatal.
pub async fn run_relay(
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = RelayConfig::load(host, port).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    println!("Relay listening on http://{}", listener.local_addr()?);
    relay::serve(listener, &config).await?;
    Ok(())
}

/// Normalize stdin to `width`. Text mode only touches bordered or ruled lines;
/// `--lines` normalizes every line.
/// In `--lines` mode a line that is not valid UTF-8 is printed as a blank line.
pub fn run_normalize(width: usize, every_line: bool) -> io::Result<()> {
    if every_line {
        let mut raw = Vec::new();
        io::stdin().read_to_end(&mut raw)?;
        let lines = split_raw_lines(&raw);
        if lines.iter().any(Option::is_none) {
            log::warn!("Blanking lines of normalize input that are not valid UTF-8");
        }
        for line in core::ascii::normalize_optional_lines(&lines, width) {
            println!("{}", line);
        }
    } else {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        print!("{}", core::ascii::normalize_text(&input, width));
    }
    Ok(())
}

fn split_raw_lines(raw: &[u8]) -> Vec<Option<&str>> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(|&b| b == b'\n')
        .map(|line| {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            std::str::from_utf8(line).ok()
        })
        .collect()
}

pub fn list_emulators() {
    for emu in emulators::by_year() {
        println!(
            "{:<8} {:<22} {}  {:>2} cols",
            emu.id, emu.name, emu.year, emu.columns
        );
    }
}

pub fn list_themes() {
    println!("{:<10} (emulator palette)", emulators::DEFAULT_THEME);
    for theme in emulators::THEMES {
        println!("{}", theme.id);
    }
}

/// Launch the TUI in a blocking thread. Returns on panic or IO error.
pub async fn launch_tui(
    config: Config,
    emulator: Option<&'static Emulator>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut prefs: Preferences = core::persistence::load();
    if let Some(emu) = emulator {
        prefs.current_emulator = emu.id.to_string();
    }

    let join_result: Result<io::Result<()>, tokio::task::JoinError> =
        tokio::task::spawn_blocking(move || crate::tui::run(config, prefs)).await;

    match join_result {
        Ok(io_result) => io_result?,
        Err(join_err) => {
            if let Ok(panic) = join_err.try_into_panic() {
                let msg = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    format!("{:?}", panic)
                };
                eprintln!("TUI panic: {}", msg);
            }
            return Err(
                Box::new(io::Error::other("TUI thread panicked")) as Box<dyn std::error::Error>
            );
        }
    }
    Ok(())
}
