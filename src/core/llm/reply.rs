//! Reply extraction and the display pipeline for model output.

use serde_json::Value;

use crate::core::ascii;
use crate::core::emulators::Emulator;
use crate::core::format;

/// Pull the reply text out of a response body.
///
/// Order: `content` array (text parts joined by newlines), `content` string,
/// `text` string, then the raw body. Returns `None` when nothing usable is found.
pub fn extract_reply(raw: &str, data: Option<&Value>) -> Option<String> {
    let reply = match data.and_then(|d| d.get("content")) {
        Some(Value::Array(parts)) => {
            let chunks: Vec<&str> = parts
                .iter()
                .filter_map(|p| p.get("text").and_then(Value::as_str))
                .filter(|t| !t.is_empty())
                .collect();
            if chunks.is_empty() {
                None
            } else {
                Some(chunks.join("\n"))
            }
        }
        Some(Value::String(s)) => Some(s.clone()),
        _ => match data.and_then(|d| d.get("text")).and_then(Value::as_str) {
            Some(t) => Some(t.to_string()),
            None if !raw.is_empty() => Some(raw.to_string()),
            None => None,
        },
    };
    reply.filter(|r| !r.trim().is_empty())
}

/// Turn a raw reply into what the emulator prints: unwrap fences, style, then normalize.
pub fn format_reply(emulator: &Emulator, reply: &str) -> String {
    let cleaned = format::strip_fence_lines(&format::strip_code_fences(reply));
    let styled = emulator.style_response(&cleaned);
    ascii::normalize_text(&styled, emulator.columns)
}
