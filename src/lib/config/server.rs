use crate::constants::DEFAULT_TOOL_SERVER_TIMEOUT;
use serde::Deserialize;
use std::time::Duration;

/// Remote MCP tool server reached over JSON-RPC/HTTP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolServerConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl ToolServerConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: DEFAULT_TOOL_SERVER_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawToolServer {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}
