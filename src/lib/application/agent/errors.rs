use crate::application::tooling::ToolServerError;
use crate::domain::TranscriptError;
use crate::model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("tool server unavailable: {0}")]
    UpstreamUnavailable(#[source] ToolServerError),
    #[error("tool server protocol error: {0}")]
    ProtocolError(#[source] ToolServerError),
    #[error("model provider unavailable: {0}")]
    ModelUnavailable(#[from] ModelError),
    #[error(transparent)]
    Transcript(#[from] TranscriptError),
}

impl From<ToolServerError> for AgentError {
    fn from(error: ToolServerError) -> Self {
        if error.is_unavailable() {
            AgentError::UpstreamUnavailable(error)
        } else {
            AgentError::ProtocolError(error)
        }
    }
}

impl AgentError {
    /// Stable machine-readable label for API responses.
    pub fn kind(&self) -> &'static str {
        match self {
            AgentError::UpstreamUnavailable(_) => "upstream_unavailable",
            AgentError::ProtocolError(_) => "protocol_error",
            AgentError::ModelUnavailable(_) => "model_unavailable",
            AgentError::Transcript(_) => "internal",
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, AgentError::UpstreamUnavailable(err) if err.is_timeout())
    }

    pub fn user_message(&self) -> String {
        match self {
            AgentError::UpstreamUnavailable(err) | AgentError::ProtocolError(err) => {
                err.user_message()
            }
            AgentError::ModelUnavailable(err) => err.user_message(),
            AgentError::Transcript(_) => {
                "The conversation reached an inconsistent state. Please retry the request."
                    .to_string()
            }
        }
    }
}

/// Raised while turning a model-emitted call into an invoker call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    #[error("malformed arguments for tool call '{call_id}' ({tool}): {reason}")]
    MalformedToolCall {
        call_id: String,
        tool: String,
        reason: String,
    },
}
