//! Reply extraction from the thread's message list
//!
//! The message list arrives newest-first. The reply for a turn is the
//! first assistant-authored message in that order; its content is a list
//! of typed parts, and each text part carries the display string at
//! `text.value`. Malformed shapes are noted and skipped - a bad part
//! never aborts the extraction, and messages past the first assistant
//! one are never inspected.

use serde_json::Value;
use tracing::debug;

/// Extracted reply text plus notes about any content that did not parse
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reply {
    /// Display lines, one per text content part, in message order
    pub lines: Vec<String>,
    /// Human-readable notes for content that had an unexpected shape
    pub problems: Vec<String>,
}

impl Reply {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.problems.is_empty()
    }
}

/// Pull the most recent assistant reply out of a message list
///
/// Returns an empty [`Reply`] when the list holds no assistant message.
pub fn extract_reply(messages: &[Value]) -> Reply {
    let mut reply = Reply::default();

    for message in messages {
        if message.get("role").and_then(Value::as_str) != Some("assistant") {
            continue;
        }

        debug!("extract_reply: found assistant message");
        let Some(parts) = message.get("content").and_then(Value::as_array) else {
            reply.problems.push("assistant message content is not a list".to_string());
            return reply;
        };

        for part in parts {
            if !part.is_object() {
                reply.problems.push("content part is not an object".to_string());
                continue;
            }

            match part.get("text").and_then(|t| t.get("value")).and_then(Value::as_str) {
                Some(value) => reply.lines.push(value.to_string()),
                None => {
                    // Non-text parts (images etc.) have no display value
                    if part.get("text").is_some() {
                        reply.problems.push("text part has no string value".to_string());
                    }
                }
            }
        }

        // Only the newest assistant message is the reply for this turn
        return reply;
    }

    debug!("extract_reply: no assistant message in list");
    reply
}
