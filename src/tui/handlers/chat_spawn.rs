//! Spawns chat requests in a background thread with a result channel.

use std::sync::Arc;
use std::sync::mpsc;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::core::emulators::Emulator;
use crate::core::llm::{ChatClient, Ticket};

use super::PendingChat;

/// Spawn a chat request for `ticket`. The result arrives on `PendingChat::result_rx`.
pub fn spawn_chat(
    rt: &Arc<Runtime>,
    client: Arc<ChatClient>,
    emulator: &'static Emulator,
    message: String,
    ticket: Ticket,
) -> PendingChat {
    let (result_tx, result_rx) = mpsc::channel();
    let cancel_token = CancellationToken::new();
    let cancel_token_clone = cancel_token.clone();
    let rt_clone = Arc::clone(rt);

    std::thread::spawn(move || {
        let result = rt_clone.block_on(client.send_cancellable(
            emulator,
            &message,
            &cancel_token_clone,
        ));
        let _ = result_tx.send(result);
    });

    PendingChat {
        ticket,
        result_rx,
        cancel_token,
    }
}
