use crate::constants::{DEFAULT_MAX_CONCURRENT_TOOL_CALLS, DEFAULT_MAX_ITERATIONS, DEFAULT_MODEL};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone)]
pub struct AgentOptions {
    pub model: String,
    pub system_prompt: Option<String>,
    pub max_iterations: usize,
    pub max_concurrent_tool_calls: usize,
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            system_prompt: None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_concurrent_tool_calls: DEFAULT_MAX_CONCURRENT_TOOL_CALLS,
        }
    }
}

/// How the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    /// The model produced a final answer.
    Completed,
    /// The iteration cap stopped the loop.
    MaxIterationsReached,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AgentStep {
    pub round: usize,
    pub call_id: String,
    pub tool: String,
    pub success: bool,
}

#[derive(Debug, Clone)]
pub struct AgentOutcome {
    pub response: String,
    pub status: AgentStatus,
    /// Model rounds performed.
    pub iterations: usize,
    pub steps: Vec<AgentStep>,
}
