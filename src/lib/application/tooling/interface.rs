use async_trait::async_trait;
use serde_json::{Map, Value};

use super::error::ToolServerError;
use crate::domain::ToolDescriptor;

/// Outcome of a completed `tools/call` round trip.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    Success(Value),
    /// The server answered but reported a tool-level failure. The payload is
    /// the server's own error object, untouched.
    Failure(Value),
}

impl ToolOutput {
    pub fn payload(&self) -> &Value {
        match self {
            ToolOutput::Success(value) | ToolOutput::Failure(value) => value,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ToolOutput::Success(_))
    }
}

#[async_trait]
pub trait ToolRegistry: Send + Sync {
    /// Raw `tools/list` envelope as returned by the server.
    async fn catalog(&self) -> Result<Value, ToolServerError>;

    async fn list_tools(&self) -> Result<Vec<ToolDescriptor>, ToolServerError>;
}

#[async_trait]
pub trait ToolInvoker: Send + Sync {
    async fn invoke(
        &self,
        name: &str,
        arguments: Map<String, Value>,
    ) -> Result<ToolOutput, ToolServerError>;
}

/// Both halves of a remote tool server.
pub trait ToolServer: ToolRegistry + ToolInvoker {}

impl<T: ToolRegistry + ToolInvoker> ToolServer for T {}
