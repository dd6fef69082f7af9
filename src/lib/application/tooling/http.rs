//! JSON-RPC over HTTP client for a remote MCP tool server.
//!
//! One POST per request, no session state kept between calls. Servers that
//! answer with an SSE stream (streamable HTTP transport) are handled by
//! reading the last `data:` event.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::{Map, Value, json};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

use super::error::ToolServerError;
use super::interface::{ToolInvoker, ToolOutput, ToolRegistry};
use crate::config::ToolServerConfig;
use crate::domain::ToolDescriptor;
use crate::infrastructure::rpc::{RpcRequest, RpcResponse};

const ACCEPT_VALUE: &str = "application/json, text/event-stream";

pub struct HttpToolServer {
    endpoint: String,
    http: Client,
    id_counter: AtomicU64,
}

impl HttpToolServer {
    pub fn new(config: &ToolServerConfig) -> Result<Self, ToolServerError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ToolServerError::HttpClient)?;
        Ok(Self {
            endpoint: config.endpoint.clone(),
            http,
            id_counter: AtomicU64::new(1),
        })
    }

    async fn send_request(
        &self,
        method: &str,
        params: Option<Value>,
    ) -> Result<Value, ToolServerError> {
        let request = RpcRequest::new(self.next_id(), method, params);
        debug!(method, id = request.id, "Sending JSON-RPC request to tool server");

        let response = self
            .http
            .post(&self.endpoint)
            .header(ACCEPT, ACCEPT_VALUE)
            .json(&request)
            .send()
            .await
            .map_err(ToolServerError::from_transport)?;

        let status = response.status();
        let is_event_stream = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("text/event-stream"));
        let body = response
            .text()
            .await
            .map_err(ToolServerError::from_transport)?;

        if status.is_success() {
            return decode_body(&body, is_event_stream);
        }
        // Some servers pair a JSON-RPC error envelope with a 4xx/5xx status.
        match decode_body(&body, is_event_stream) {
            Ok(envelope) if envelope.get("error").is_some() => {
                warn!(
                    method,
                    status = status.as_u16(),
                    "Tool server answered with an error status and a JSON-RPC error"
                );
                Ok(envelope)
            }
            _ => Err(ToolServerError::http_status(status.as_u16())),
        }
    }

    fn next_id(&self) -> u64 {
        self.id_counter.fetch_add(1, Ordering::SeqCst)
    }
}

#[async_trait]
impl ToolRegistry for HttpToolServer {
    async fn catalog(&self) -> Result<Value, ToolServerError> {
        self.send_request("tools/list", None).await
    }

    async fn list_tools(&self) -> Result<Vec<ToolDescriptor>, ToolServerError> {
        let envelope = self.catalog().await?;
        Ok(parse_catalog(&envelope))
    }
}

#[async_trait]
impl ToolInvoker for HttpToolServer {
    async fn invoke(
        &self,
        name: &str,
        arguments: Map<String, Value>,
    ) -> Result<ToolOutput, ToolServerError> {
        let params = json!({ "name": name, "arguments": arguments });
        let raw = self.send_request("tools/call", Some(params)).await?;
        let envelope: RpcResponse = serde_json::from_value(raw)
            .map_err(|e| ToolServerError::protocol(format!("invalid JSON-RPC envelope: {e}")))?;
        interpret_call_response(name, envelope)
    }
}

/// Extract descriptors from a `tools/list` envelope.
///
/// A missing `result.tools` array yields an empty catalogue: a server with no
/// tools is valid, and the model can still answer directly.
pub fn parse_catalog(envelope: &Value) -> Vec<ToolDescriptor> {
    let Some(entries) = envelope
        .get("result")
        .and_then(|result| result.get("tools"))
        .and_then(Value::as_array)
    else {
        warn!("Tool catalogue response has no result.tools array; using an empty catalogue");
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let descriptor = ToolDescriptor::from_catalog_entry(entry);
            if descriptor.is_none() {
                warn!(%entry, "Skipping tool catalogue entry without a name");
            }
            descriptor
        })
        .collect()
}

fn interpret_call_response(
    tool: &str,
    envelope: RpcResponse,
) -> Result<ToolOutput, ToolServerError> {
    if let Some((code, message)) = envelope.error_summary() {
        warn!(tool, code, %message, "Tool server reported an error for tools/call");
    }
    match (envelope.result, envelope.error) {
        (_, Some(error)) => Ok(ToolOutput::Failure(error)),
        (Some(result), None) => {
            let flagged = result
                .get("isError")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            if flagged {
                Ok(ToolOutput::Failure(result))
            } else {
                Ok(ToolOutput::Success(result))
            }
        }
        (None, None) => Err(ToolServerError::protocol(
            "tools/call response carries neither result nor error",
        )),
    }
}

fn decode_body(body: &str, is_event_stream: bool) -> Result<Value, ToolServerError> {
    let payload = if is_event_stream {
        last_event_data(body)
            .ok_or_else(|| ToolServerError::protocol("event stream contained no data events"))?
    } else {
        body.trim().to_string()
    };

    serde_json::from_str(&payload)
        .map_err(|e| ToolServerError::protocol(format!("response body is not JSON: {e}")))
}

/// Data of the last event in an SSE body. Multi-line `data:` fields of one
/// event are joined with `\n`.
fn last_event_data(body: &str) -> Option<String> {
    let mut last = None;
    let mut current: Vec<&str> = Vec::new();
    for line in body.lines().chain(std::iter::once("")) {
        if line.is_empty() {
            if !current.is_empty() {
                last = Some(current.join("\n"));
                current.clear();
            }
        } else if let Some(data) = line.strip_prefix("data:") {
            current.push(data.strip_prefix(' ').unwrap_or(data));
        }
    }
    last.filter(|data| !data.trim().is_empty())
}
