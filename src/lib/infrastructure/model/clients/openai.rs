//! OpenAI-compatible chat-completions client with function calling

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::base::HttpClientBase;
use crate::config::ModelConfig;
use crate::domain::ModelToolCall;
use crate::infrastructure::model::adapter::MessageAdapter;
use crate::infrastructure::model::traits::ModelProvider;
use crate::infrastructure::model::types::{
    ModelError, ModelRequest, ModelResponse, ModelToolSpec,
};

const PROVIDER_ID: &str = "openai";

/// OpenAI-compatible client (works with OpenAI, Azure-style proxies, Groq, etc.)
#[derive(Clone)]
pub struct OpenAIClient {
    base: HttpClientBase,
    api_path: String,
}

impl OpenAIClient {
    pub fn from_config(config: &ModelConfig) -> Result<Self, ModelError> {
        Ok(Self {
            base: HttpClientBase::new(
                PROVIDER_ID.to_string(),
                config.endpoint.clone(),
                config.timeout,
            )?,
            api_path: config.api_path.clone(),
        })
    }
}

#[async_trait]
impl ModelProvider for OpenAIClient {
    async fn chat(&self, request: ModelRequest<'_>) -> Result<ModelResponse, ModelError> {
        let url = self.base.build_url(&self.api_path);

        let payload = OpenAIRequest {
            model: request.model,
            messages: MessageAdapter::to_openai_format(request.turns),
            tools: request.tools,
        };

        info!(
            provider = self.base.id.as_str(),
            model = request.model,
            messages = request.turns.len(),
            tools = request.tools.len(),
            "Sending request to OpenAI-compatible provider"
        );

        let response: OpenAIResponse = self
            .base
            .post_with_bearer(&url, request.api_key, &payload)
            .await?;
        debug!("Received response from OpenAI-compatible provider");

        let message = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or_else(|| ModelError::invalid_response(&self.base.id, "missing choices"))?;

        let tool_calls = message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .map(|call| ModelToolCall {
                id: call.id,
                name: call.function.name,
                arguments: call.function.arguments,
            })
            .collect();

        Ok(ModelResponse {
            content: message.content,
            tool_calls,
        })
    }
}

#[derive(Serialize)]
struct OpenAIRequest<'a> {
    model: &'a str,
    messages: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "no_tools")]
    tools: &'a [ModelToolSpec],
}

// Some providers reject an empty `tools` array, so it is left out entirely.
fn no_tools(tools: &&[ModelToolSpec]) -> bool {
    tools.is_empty()
}

#[derive(Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
}

#[derive(Deserialize)]
struct OpenAIMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    tool_calls: Option<Vec<OpenAIToolCall>>,
}

#[derive(Deserialize)]
struct OpenAIToolCall {
    id: String,
    function: OpenAIFunctionCall,
}

#[derive(Deserialize)]
struct OpenAIFunctionCall {
    name: String,
    #[serde(default)]
    arguments: String,
}
