//! TUI (Text User Interface): the retro terminal itself.

mod app;
mod constants;
mod draw;
mod handlers;
mod keyboard;
mod text;

use crossterm::event::{self, Event};
use crossterm::execute;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::runtime::Runtime;

use crate::core::app as app_info;
use crate::core::config::Config;
use crate::core::llm::ChatClient;
use crate::core::persistence::Preferences;

use app::App;
use draw::draw;
use handlers::{HandleResult, PendingChat};

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the TUI loop. Uses a dedicated Tokio runtime for chat requests.
pub fn run(config: Config, prefs: Preferences) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let rt = Arc::new(
        Runtime::new().map_err(|e| io::Error::other(format!("Failed to create runtime: {}", e)))?,
    );

    log::info!(
        "Starting {} {} as {} (model {}, {})",
        app_info::NAME,
        app_info::VERSION,
        prefs.current_emulator,
        config.model_id,
        config.messages_url()
    );
    let client = Arc::new(ChatClient::new(config));
    let mut app = App::new(prefs);
    let mut pending_chat: Option<PendingChat> = None;

    loop {
        handlers::poll_chat(&mut app, &mut pending_chat);
        app.tick_boot(Instant::now());

        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if event::poll(Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS))?
            && let Event::Key(key) = event::read()?
        {
            let result = handlers::handle_key(
                key,
                handlers::HandleKeyContext {
                    app: &mut app,
                    client: &client,
                    pending_chat: &mut pending_chat,
                    rt: &rt,
                },
            );
            if result == HandleResult::Break {
                break;
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
