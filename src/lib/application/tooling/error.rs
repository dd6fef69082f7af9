use thiserror::Error;

/// Failures talking to the tool server.
///
/// Messages never contain the endpoint URL: it may carry credentials in its
/// query string and these errors end up in tool results shown to the model.
#[derive(Debug, Error)]
pub enum ToolServerError {
    #[error("tool server is unavailable: {reason}")]
    Unavailable { reason: String, timed_out: bool },
    #[error("tool server returned a malformed response: {reason}")]
    Protocol { reason: String },
    #[error("failed to build HTTP client for tool server: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl ToolServerError {
    /// Connect, send and body-read failures. JSON is parsed separately, so
    /// nothing reqwest reports here is a protocol error.
    pub(crate) fn from_transport(source: reqwest::Error) -> Self {
        let source = source.without_url();
        let reason = match source.status() {
            Some(status) => format!("HTTP {}", status.as_u16()),
            None => source.to_string(),
        };
        Self::Unavailable {
            reason,
            timed_out: source.is_timeout(),
        }
    }

    pub(crate) fn http_status(status: u16) -> Self {
        Self::Unavailable {
            reason: format!("HTTP {status}"),
            timed_out: false,
        }
    }

    pub(crate) fn protocol(reason: impl Into<String>) -> Self {
        Self::Protocol {
            reason: reason.into(),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. } | Self::HttpClient(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Unavailable { timed_out: true, .. })
    }

    pub fn user_message(&self) -> String {
        match self {
            ToolServerError::Unavailable {
                timed_out: true, ..
            } => "The tool server did not respond in time.".to_string(),
            ToolServerError::Unavailable { .. } | ToolServerError::HttpClient(_) => {
                "The tool server is currently unreachable.".to_string()
            }
            ToolServerError::Protocol { .. } => {
                "The tool server sent a response that could not be understood.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_do_not_mention_the_endpoint() {
        let err = ToolServerError::http_status(502);
        assert_eq!(err.to_string(), "tool server is unavailable: HTTP 502");
        assert!(err.is_unavailable());
        assert!(!err.is_timeout());
    }
}
