//! Typed operations over the Assistants API
//!
//! Implements the [`AssistantApi`] trait on top of [`Transport`]. Each
//! operation is one HTTP call plus one field projection out of the
//! generic response; nothing here interprets statuses or message
//! content - that is the chat layer's job.

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::debug;

use super::extract::{array_field, str_field};
use super::{ApiError, AssistantApi, Transport};
use crate::config::Config;

/// Default instructions for the assistant persona created on first run
pub const DEFAULT_INSTRUCTIONS: &str = "GPT Assistant, your role is to be an informative and \
     effective assistant for users working within a Unix Terminal environment. Your goal is to \
     deliver concise yet comprehensive guidance to enhance the user's proficiency and efficiency \
     within the Unix terminal.";

/// Assistant-creation payload: model, display name, instructions, tools
#[derive(Debug, Clone, Serialize)]
pub struct AssistantProfile {
    pub model: String,
    pub name: String,
    pub instructions: String,
    pub tools: Vec<Value>,
}

impl AssistantProfile {
    /// Profile for the shell assistant persona, using the configured model
    pub fn from_config(config: &Config) -> Self {
        Self {
            model: config.model.clone(),
            name: "Shell Assistant".to_string(),
            instructions: DEFAULT_INSTRUCTIONS.to_string(),
            tools: vec![json!({"type": "code_interpreter"})],
        }
    }
}

/// Resource operations client for the OpenAI Assistants API
pub struct OpenAIAssistants {
    transport: Transport,
}

impl OpenAIAssistants {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Build a client straight from configuration
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Ok(Self::new(Transport::new(config)?))
    }
}

#[async_trait]
impl AssistantApi for OpenAIAssistants {
    async fn create_assistant(&self, profile: &AssistantProfile) -> Result<String, ApiError> {
        debug!(model = %profile.model, name = %profile.name, "create_assistant: called");
        let payload = serde_json::to_value(profile).map_err(ApiError::Encode)?;
        let response = self
            .transport
            .execute(Method::POST, "/assistants", Some(&payload))
            .await?;
        Ok(str_field(&response, "id")?.to_string())
    }

    async fn create_thread(&self) -> Result<String, ApiError> {
        debug!("create_thread: called");
        let response = self.transport.execute(Method::POST, "/threads", None).await?;
        Ok(str_field(&response, "id")?.to_string())
    }

    async fn send_message(&self, thread_id: &str, text: &str) -> Result<(), ApiError> {
        debug!(%thread_id, text_len = text.len(), "send_message: called");
        let payload = json!({
            "role": "user",
            "content": text,
        });
        self.transport
            .execute(Method::POST, &format!("/threads/{}/messages", thread_id), Some(&payload))
            .await?;
        Ok(())
    }

    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<String, ApiError> {
        debug!(%thread_id, %assistant_id, "create_run: called");
        let payload = json!({"assistant_id": assistant_id});
        let response = self
            .transport
            .execute(Method::POST, &format!("/threads/{}/runs", thread_id), Some(&payload))
            .await?;
        Ok(str_field(&response, "id")?.to_string())
    }

    async fn run_status(&self, thread_id: &str, run_id: &str) -> Result<String, ApiError> {
        debug!(%thread_id, %run_id, "run_status: called");
        let response = self
            .transport
            .execute(Method::GET, &format!("/threads/{}/runs/{}", thread_id, run_id), None)
            .await?;
        Ok(str_field(&response, "status")?.to_string())
    }

    async fn list_messages(&self, thread_id: &str) -> Result<Vec<Value>, ApiError> {
        debug!(%thread_id, "list_messages: called");
        let response = self
            .transport
            .execute(Method::GET, &format!("/threads/{}/messages", thread_id), None)
            .await?;
        Ok(array_field(&response, "data")?.to_vec())
    }
}
