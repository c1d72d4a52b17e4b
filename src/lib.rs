//! Shellchat - terminal chat with a persistent OpenAI assistant
//!
//! Creates an assistant persona once, opens a conversation thread per
//! session, and per user turn posts a message, starts a run, polls it to
//! a terminal state, and prints the extracted reply.
//!
//! # Modules
//!
//! - [`api`] - transport adapter and typed resource operations
//! - [`chat`] - run lifecycle controller and reply extraction
//! - [`config`] - config file load/store and first-run setup
//! - [`repl`] - interactive read-line session
//! - [`cli`] - command-line interface
//! - [`spinner`] - busy indicator

pub mod api;
pub mod chat;
pub mod cli;
pub mod config;
pub mod repl;
pub mod spinner;

// Re-export commonly used types
pub use api::{ApiError, AssistantApi, AssistantProfile, OpenAIAssistants, Transport};
pub use chat::{Reply, TurnDriver, TurnError, TurnOutcome, extract_reply};
pub use config::Config;
