//! Event handlers for the TUI: keyboard input and chat results.

mod chat_spawn;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use std::sync::mpsc::{self, TryRecvError};
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::core::llm::{ChatClient, ChatError, Ticket};
use crate::core::session::Submission;

use super::app::{App, ScrollPosition};
use super::constants;
use super::keyboard;

/// A chat request in flight.
pub struct PendingChat {
    pub ticket: Ticket,
    pub result_rx: mpsc::Receiver<Result<String, ChatError>>,
    /// Token to cancel the in-flight request.
    pub cancel_token: CancellationToken,
}

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

/// Context for handling a key.
pub struct HandleKeyContext<'a> {
    pub app: &'a mut App,
    pub client: &'a Arc<ChatClient>,
    pub pending_chat: &'a mut Option<PendingChat>,
    pub rt: &'a Arc<Runtime>,
}

/// Apply a finished chat, or cancel one the session has superseded.
pub fn poll_chat(app: &mut App, pending_chat: &mut Option<PendingChat>) {
    let Some(chat) = pending_chat.take() else {
        return;
    };
    if !app.session.is_current(chat.ticket) {
        log::debug!("Cancelling superseded request {:?}", chat.ticket);
        chat.cancel_token.cancel();
        return;
    }
    match chat.result_rx.try_recv() {
        Ok(result) => {
            app.session.complete_request(chat.ticket, result);
            app.scroll = ScrollPosition::Bottom;
        }
        Err(TryRecvError::Empty) => *pending_chat = Some(chat),
        Err(TryRecvError::Disconnected) => {
            log::warn!("Chat worker exited without a result");
            app.session.complete_request(chat.ticket, Err(ChatError::Cancelled));
        }
    }
}

pub fn handle_key(key: KeyEvent, ctx: HandleKeyContext<'_>) -> HandleResult {
    if key.kind == KeyEventKind::Release {
        return HandleResult::Continue;
    }
    let HandleKeyContext {
        app,
        client,
        pending_chat,
        rt,
    } = ctx;

    if let Some(cap) = keyboard::key_cap(key.code) {
        app.press(cap);
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('d'), KeyModifiers::CONTROL) => {
            if let Some(chat) = pending_chat.take() {
                chat.cancel_token.cancel();
            }
            return HandleResult::Break;
        }
        (KeyCode::Esc, _) => {
            if !app.session.is_booted() {
                app.session.finish_boot();
            }
        }
        (KeyCode::Enter, _) => match app.session.submit(&app.input) {
            Submission::Ignored => {}
            Submission::Command => {
                app.input.clear();
                app.scroll = ScrollPosition::Bottom;
            }
            Submission::Chat { message, ticket } => {
                app.input.clear();
                app.scroll = ScrollPosition::Bottom;
                if let Some(previous) = pending_chat.take() {
                    previous.cancel_token.cancel();
                }
                *pending_chat = Some(chat_spawn::spawn_chat(
                    rt,
                    Arc::clone(client),
                    app.session.emulator(),
                    message,
                    ticket,
                ));
            }
        },
        (KeyCode::Backspace, _) => {
            if app.input_enabled() {
                app.input.pop();
            }
        }
        (KeyCode::Up, _) => app.scroll_up(constants::SCROLL_LINES_SMALL),
        (KeyCode::Down, _) => app.scroll_down(constants::SCROLL_LINES_SMALL),
        (KeyCode::PageUp, _) => app.scroll_up(constants::SCROLL_LINES_PAGE),
        (KeyCode::PageDown, _) => app.scroll_down(constants::SCROLL_LINES_PAGE),
        (KeyCode::Char(c), mods) => {
            if app.input_enabled()
                && !mods.contains(KeyModifiers::CONTROL)
                && !mods.contains(KeyModifiers::ALT)
            {
                app.push_input(c);
            }
        }
        _ => {}
    }

    app.persist_preferences();
    HandleResult::Continue
}
