//! Assistants API client
//!
//! Split the way the wire works: [`Transport`] issues requests and hands
//! back untyped JSON, [`extract`] projects fields out of it fallibly,
//! and [`OpenAIAssistants`] maps each domain action to exactly one call.
//! Everything above this module depends only on the [`AssistantApi`]
//! trait.

mod assistants;
pub mod client;
mod error;
pub mod extract;
mod transport;

pub use assistants::{AssistantProfile, DEFAULT_INSTRUCTIONS, OpenAIAssistants};
pub use client::AssistantApi;
pub use error::ApiError;
pub use transport::Transport;
