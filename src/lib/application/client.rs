use super::agent::{Agent, AgentError, AgentOptions, AgentOutcome};
use super::tooling::{ToolServer, ToolServerError};
use crate::config::AppConfig;
use crate::model::ModelProvider;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub default_model: String,
    pub system_prompt: Option<String>,
    pub max_iterations: usize,
    pub max_concurrent_tool_calls: usize,
}

impl ClientConfig {
    pub fn new(default_model: impl Into<String>) -> Self {
        let defaults = AgentOptions::default();
        Self {
            default_model: default_model.into(),
            system_prompt: None,
            max_iterations: defaults.max_iterations,
            max_concurrent_tool_calls: defaults.max_concurrent_tool_calls,
        }
    }

    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            default_model: config.model.model.clone(),
            system_prompt: config.agent.system_prompt.clone(),
            max_iterations: config.agent.max_iterations,
            max_concurrent_tool_calls: config.agent.max_concurrent_tool_calls,
        }
    }

    fn agent_options(&self, model: Option<String>) -> AgentOptions {
        AgentOptions {
            model: model
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| self.default_model.clone()),
            system_prompt: self.system_prompt.clone(),
            max_iterations: self.max_iterations,
            max_concurrent_tool_calls: self.max_concurrent_tool_calls,
        }
    }
}

/// One stateless chat request. The credential is used for this request only.
#[derive(Default)]
pub struct ChatRequest {
    pub prompt: String,
    pub credential: String,
    pub model: Option<String>,
}

impl std::fmt::Debug for ChatRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatRequest")
            .field("prompt", &self.prompt)
            .field("credential", &"<redacted>")
            .field("model", &self.model)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },
    #[error(transparent)]
    Agent(#[from] AgentError),
}

impl ClientError {
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::InvalidRequest { .. } => "invalid_request",
            ClientError::Agent(err) => err.kind(),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Agent(err) if err.is_timeout())
    }

    pub fn user_message(&self) -> String {
        match self {
            ClientError::InvalidRequest { reason } => reason.clone(),
            ClientError::Agent(err) => err.user_message(),
        }
    }

    fn invalid(reason: &str) -> Self {
        ClientError::InvalidRequest {
            reason: reason.to_string(),
        }
    }
}

/// Entry point for the `chat` and `tools` operations.
pub struct BridgeClient<P: ModelProvider> {
    provider: Arc<P>,
    tool_server: Arc<dyn ToolServer>,
    config: ClientConfig,
}

impl<P: ModelProvider> BridgeClient<P> {
    pub fn new(provider: P, tool_server: Arc<dyn ToolServer>, config: ClientConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            tool_server,
            config,
        }
    }

    pub async fn chat(&self, request: ChatRequest) -> Result<AgentOutcome, ClientError> {
        if request.prompt.trim().is_empty() {
            return Err(ClientError::invalid("prompt must not be empty"));
        }
        if request.credential.trim().is_empty() {
            return Err(ClientError::invalid("credential must not be empty"));
        }

        let request_id = new_request_id();
        let options = self.config.agent_options(request.model);
        let span = info_span!("chat", request_id = request_id.as_str(), model = options.model.as_str());

        async move {
            info!(prompt_chars = request.prompt.chars().count(), "Chat request received");
            let agent = Agent::new(self.provider.clone(), self.tool_server.clone());
            match agent.run(request.prompt, &request.credential, &options).await {
                Ok(outcome) => {
                    info!(
                        status = ?outcome.status,
                        iterations = outcome.iterations,
                        "Chat request finished"
                    );
                    Ok(outcome)
                }
                Err(err) => {
                    error!(kind = err.kind(), error = %err, "Chat request failed");
                    Err(err.into())
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Raw `tools/list` envelope from the tool server.
    pub async fn tools(&self) -> Result<Value, ToolServerError> {
        self.tool_server.catalog().await
    }
}

fn new_request_id() -> String {
    Uuid::new_v4().to_string()
}
