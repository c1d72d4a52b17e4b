//! Interactive REPL
//!
//! The outer read-line loop around the turn machinery. One thread per
//! session; strictly sequential - no new input while a run is
//! outstanding.

mod session;

pub use session::ChatSession;

use std::sync::Arc;

use eyre::Result;

use crate::api::AssistantApi;

/// Run an interactive session against an existing assistant
pub async fn run(api: Arc<dyn AssistantApi>, assistant_id: String) -> Result<()> {
    let mut session = ChatSession::start(api, assistant_id).await?;
    session.run().await
}
