use crate::constants::{DEFAULT_MAX_CONCURRENT_TOOL_CALLS, DEFAULT_MAX_ITERATIONS};
use serde::Deserialize;

/// Agent loop limits and the optional system prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    pub max_iterations: usize,
    pub max_concurrent_tool_calls: usize,
    pub system_prompt: Option<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_concurrent_tool_calls: DEFAULT_MAX_CONCURRENT_TOOL_CALLS,
            system_prompt: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawAgent {
    pub max_iterations: Option<usize>,
    pub max_concurrent_tool_calls: Option<usize>,
    pub system_prompt: Option<String>,
}
