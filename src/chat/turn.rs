//! Run lifecycle controller
//!
//! One user turn is: post the message, start a run, then poll the run's
//! status at a fixed interval until it reaches a terminal state. Only
//! "completed" and "failed" are terminal; every other status means the
//! remote service is still working and we wait another interval. The
//! sleep is a tokio suspension point, so a paused-clock test runtime can
//! drive the loop without real delays.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::api::{ApiError, AssistantApi};

/// Default wait between status polls
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// How a turn ended, once the run reached a terminal state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The run completed; the reply is ready to fetch
    Completed,
    /// The remote service reported the run as failed
    Failed,
}

/// Errors that end a turn before the run reaches a terminal state
#[derive(Debug, Error)]
pub enum TurnError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("run {run_id} still not finished after {polls} status checks")]
    PollLimit { run_id: String, polls: u32 },
}

/// Drives one run per user turn over an [`AssistantApi`]
///
/// Polling is unbounded by default, matching the remote service's
/// contract that every run eventually reaches a terminal state. Callers
/// that cannot tolerate that can set a poll limit.
pub struct TurnDriver {
    api: Arc<dyn AssistantApi>,
    poll_interval: Duration,
    poll_limit: Option<u32>,
}

impl TurnDriver {
    pub fn new(api: Arc<dyn AssistantApi>) -> Self {
        Self {
            api,
            poll_interval: POLL_INTERVAL,
            poll_limit: None,
        }
    }

    /// Override the wait between status polls
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Cap the number of status polls per turn
    pub fn with_poll_limit(mut self, limit: u32) -> Self {
        self.poll_limit = Some(limit);
        self
    }

    /// Run one full turn: submit, start, poll to a terminal state
    ///
    /// Any API failure ends the turn immediately; the session itself
    /// survives and keeps accepting input.
    pub async fn run_turn(
        &self,
        thread_id: &str,
        assistant_id: &str,
        text: &str,
    ) -> Result<TurnOutcome, TurnError> {
        debug!(%thread_id, %assistant_id, "run_turn: submitting message");
        self.api.send_message(thread_id, text).await?;

        let run_id = self.api.create_run(thread_id, assistant_id).await?;
        debug!(%run_id, "run_turn: run created, polling");

        let mut polls: u32 = 0;
        loop {
            let status = self.api.run_status(thread_id, &run_id).await?;
            polls += 1;

            match status.as_str() {
                "completed" => {
                    debug!(%run_id, polls, "run_turn: completed");
                    return Ok(TurnOutcome::Completed);
                }
                "failed" => {
                    warn!(%run_id, polls, "run_turn: run failed");
                    return Ok(TurnOutcome::Failed);
                }
                other => {
                    debug!(%run_id, status = %other, polls, "run_turn: not terminal yet");
                }
            }

            if let Some(limit) = self.poll_limit
                && polls >= limit
            {
                return Err(TurnError::PollLimit { run_id, polls });
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::mock::ScriptedApi;

    fn driver(api: Arc<ScriptedApi>) -> TurnDriver {
        TurnDriver::new(api)
    }

    #[tokio::test(start_paused = true)]
    async fn test_completed_after_three_polls() {
        let api = Arc::new(ScriptedApi::new(&["queued", "in_progress", "completed"]));
        let outcome = driver(api.clone())
            .run_turn("thread_1", "asst_1", "hello")
            .await
            .unwrap();

        assert_eq!(outcome, TurnOutcome::Completed);
        assert_eq!(api.poll_count(), 3);
        assert_eq!(api.sent_messages(), vec!["hello".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_after_two_polls() {
        let api = Arc::new(ScriptedApi::new(&["queued", "failed"]));
        let outcome = driver(api.clone())
            .run_turn("thread_1", "asst_1", "hello")
            .await
            .unwrap();

        assert_eq!(outcome, TurnOutcome::Failed);
        assert_eq!(api.poll_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_immediate_completion_polls_once() {
        let api = Arc::new(ScriptedApi::new(&["completed"]));
        let outcome = driver(api.clone())
            .run_turn("thread_1", "asst_1", "hello")
            .await
            .unwrap();

        assert_eq!(outcome, TurnOutcome::Completed);
        assert_eq!(api.poll_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_statuses_keep_polling() {
        // Statuses outside the terminal set are "keep waiting", whatever
        // they are called
        let api = Arc::new(ScriptedApi::new(&["queued", "requires_action", "cancelling", "completed"]));
        let outcome = driver(api.clone())
            .run_turn("thread_1", "asst_1", "hello")
            .await
            .unwrap();

        assert_eq!(outcome, TurnOutcome::Completed);
        assert_eq!(api.poll_count(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_limit_stops_a_stuck_run() {
        let api = Arc::new(ScriptedApi::new(&["queued"; 10]));
        let err = driver(api.clone())
            .with_poll_limit(5)
            .run_turn("thread_1", "asst_1", "hello")
            .await
            .unwrap_err();

        assert!(matches!(err, TurnError::PollLimit { polls: 5, .. }));
        assert_eq!(api.poll_count(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_error_ends_the_turn() {
        // Script exhaustion surfaces as an extraction error from the mock
        let api = Arc::new(ScriptedApi::new(&["queued"]));
        let err = driver(api)
            .run_turn("thread_1", "asst_1", "hello")
            .await
            .unwrap_err();

        assert!(matches!(err, TurnError::Api(ApiError::Extraction { .. })));
    }
}
