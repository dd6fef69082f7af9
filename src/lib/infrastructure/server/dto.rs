use crate::agent::{AgentOutcome, AgentStatus, AgentStep};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct RestChatRequest {
    pub prompt: String,
    /// Model provider API key for this request only.
    #[serde(alias = "openai_api_key")]
    pub credential: String,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestChatResponse {
    /// Final model text, or `Max iterations reached` when the cap was hit.
    pub response: String,
    pub status: AgentStatus,
    pub iterations: usize,
    pub tool_steps: Vec<AgentStep>,
}

impl From<AgentOutcome> for RestChatResponse {
    fn from(outcome: AgentOutcome) -> Self {
        Self {
            response: outcome.response,
            status: outcome.status,
            iterations: outcome.iterations,
            tool_steps: outcome.steps,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}
