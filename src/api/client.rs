//! AssistantApi trait definition

use async_trait::async_trait;
use serde_json::Value;

use super::{ApiError, AssistantProfile};

/// The six remote operations the chat session is built on
///
/// This is the seam between the run lifecycle machinery and the wire:
/// the session and turn driver only ever see this trait, so tests can
/// script statuses and message lists without a network.
#[async_trait]
pub trait AssistantApi: Send + Sync {
    /// Create a persistent assistant persona; returns its server id
    async fn create_assistant(&self, profile: &AssistantProfile) -> Result<String, ApiError>;

    /// Open a new conversation thread; returns its server id
    async fn create_thread(&self) -> Result<String, ApiError>;

    /// Post a user message to a thread
    async fn send_message(&self, thread_id: &str, text: &str) -> Result<(), ApiError>;

    /// Start a run on a thread against an assistant; returns the run id
    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<String, ApiError>;

    /// Fetch the current status string of a run
    async fn run_status(&self, thread_id: &str, run_id: &str) -> Result<String, ApiError>;

    /// Fetch the thread's message list, newest first as the server sends it
    async fn list_messages(&self, thread_id: &str) -> Result<Vec<Value>, ApiError>;
}

#[cfg(test)]
pub mod mock {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Scripted API for unit tests
    ///
    /// Run statuses are served from a fixed script, one per poll, and the
    /// poll count is observable so tests can assert exact cadence.
    pub struct ScriptedApi {
        statuses: Vec<String>,
        messages: Vec<Value>,
        poll_count: AtomicUsize,
        sent: Mutex<Vec<String>>,
    }

    impl ScriptedApi {
        pub fn new(statuses: &[&str]) -> Self {
            Self {
                statuses: statuses.iter().map(|s| s.to_string()).collect(),
                messages: Vec::new(),
                poll_count: AtomicUsize::new(0),
                sent: Mutex::new(Vec::new()),
            }
        }

        pub fn with_messages(mut self, messages: Vec<Value>) -> Self {
            self.messages = messages;
            self
        }

        pub fn poll_count(&self) -> usize {
            self.poll_count.load(Ordering::SeqCst)
        }

        pub fn sent_messages(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AssistantApi for ScriptedApi {
        async fn create_assistant(&self, _profile: &AssistantProfile) -> Result<String, ApiError> {
            Ok("asst_mock".to_string())
        }

        async fn create_thread(&self) -> Result<String, ApiError> {
            Ok("thread_mock".to_string())
        }

        async fn send_message(&self, _thread_id: &str, text: &str) -> Result<(), ApiError> {
            self.sent.lock().unwrap().push(text.to_string());
            Ok(())
        }

        async fn create_run(&self, _thread_id: &str, _assistant_id: &str) -> Result<String, ApiError> {
            Ok("run_mock".to_string())
        }

        async fn run_status(&self, _thread_id: &str, _run_id: &str) -> Result<String, ApiError> {
            let idx = self.poll_count.fetch_add(1, Ordering::SeqCst);
            self.statuses
                .get(idx)
                .cloned()
                .ok_or(ApiError::Extraction { field: "status", expected: "string" })
        }

        async fn list_messages(&self, _thread_id: &str) -> Result<Vec<Value>, ApiError> {
            Ok(self.messages.clone())
        }
    }
}
