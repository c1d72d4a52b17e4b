//! Turn machinery: run lifecycle control and reply extraction

mod reply;
mod turn;

pub use reply::{Reply, extract_reply};
pub use turn::{POLL_INTERVAL, TurnDriver, TurnError, TurnOutcome};
