//! Model traits

use super::types::{ModelError, ModelRequest, ModelResponse};
use async_trait::async_trait;

/// A chat-completions capable model provider.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Send the transcript and tool specs, get back text or tool calls.
    async fn chat(&self, request: ModelRequest<'_>) -> Result<ModelResponse, ModelError>;
}
