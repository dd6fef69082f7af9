//! Concurrent execution of one batch of tool calls.
//!
//! Calls run on a bounded pool of in-flight futures. Each future is tagged
//! with its position in the batch and results are put back in that order,
//! so the transcript does not depend on completion order.

use super::translator::SchemaTranslator;
use crate::application::tooling::ToolInvoker;
use crate::domain::ModelToolCall;
use futures::stream::{self, StreamExt};
use serde_json::json;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchedCall {
    pub call_id: String,
    pub tool: String,
    pub success: bool,
    /// Serialized payload recorded as the tool-result turn.
    pub content: String,
}

pub async fn dispatch_batch<I>(
    invoker: &I,
    calls: &[ModelToolCall],
    concurrency: usize,
) -> Vec<DispatchedCall>
where
    I: ToolInvoker + ?Sized,
{
    let pending: Vec<_> = calls
        .iter()
        .enumerate()
        .map(|(index, call)| async move { (index, execute_call(invoker, call).await) })
        .collect();

    let mut tagged: Vec<(usize, DispatchedCall)> = stream::iter(pending)
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    tagged.sort_by_key(|(index, _)| *index);
    tagged.into_iter().map(|(_, result)| result).collect()
}

async fn execute_call<I>(invoker: &I, call: &ModelToolCall) -> DispatchedCall
where
    I: ToolInvoker + ?Sized,
{
    let request = match SchemaTranslator::from_model_call(call) {
        Ok(request) => request,
        Err(error) => {
            warn!(call_id = %call.id, tool = %call.name, %error, "Model emitted malformed tool call");
            return DispatchedCall {
                call_id: call.id.clone(),
                tool: call.name.clone(),
                success: false,
                content: error.to_tool_result().to_string(),
            };
        }
    };

    debug!(call_id = %request.id, tool = %request.name, "Invoking tool");
    match invoker.invoke(&request.name, request.arguments).await {
        Ok(output) => DispatchedCall {
            call_id: request.id,
            tool: request.name,
            success: output.is_success(),
            content: output.payload().to_string(),
        },
        Err(error) => {
            warn!(call_id = %request.id, tool = %request.name, %error, "Tool invocation failed");
            DispatchedCall {
                call_id: request.id,
                tool: request.name,
                success: false,
                content: json!({ "error": error.to_string() }).to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::tooling::{ToolOutput, ToolServerError};
    use async_trait::async_trait;
    use serde_json::{Map, Value};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Sleeps for `delay_ms` from the arguments, so later calls finish first.
    struct DelayedInvoker {
        in_flight: AtomicUsize,
        peak: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ToolInvoker for DelayedInvoker {
        async fn invoke(
            &self,
            name: &str,
            arguments: Map<String, Value>,
        ) -> Result<ToolOutput, ToolServerError> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            let delay = arguments.get("delay_ms").and_then(Value::as_u64).unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(delay)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            if name == "broken" {
                return Err(ToolServerError::Unavailable {
                    reason: "connection refused".into(),
                    timed_out: false,
                });
            }
            Ok(ToolOutput::Success(json!({ "tool": name, "delay": delay })))
        }
    }

    fn call(id: &str, name: &str, arguments: &str) -> ModelToolCall {
        ModelToolCall {
            id: id.into(),
            name: name.into(),
            arguments: arguments.into(),
        }
    }

    fn invoker() -> (DelayedInvoker, Arc<AtomicUsize>) {
        let peak = Arc::new(AtomicUsize::new(0));
        (
            DelayedInvoker {
                in_flight: AtomicUsize::new(0),
                peak: peak.clone(),
            },
            peak,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn results_follow_request_order_not_completion_order() {
        let (invoker, _) = invoker();
        let calls = vec![
            call("a", "slow", r#"{"delay_ms":300}"#),
            call("b", "medium", r#"{"delay_ms":200}"#),
            call("c", "fast", r#"{"delay_ms":10}"#),
        ];

        let results = dispatch_batch(&invoker, &calls, 3).await;
        let ids: Vec<_> = results.iter().map(|r| r.call_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert!(results.iter().all(|r| r.success));
    }

    #[tokio::test(start_paused = true)]
    async fn respects_concurrency_limit() {
        let (invoker, peak) = invoker();
        let calls: Vec<_> = (0..6)
            .map(|i| call(&format!("c{i}"), "tool", r#"{"delay_ms":50}"#))
            .collect();

        let results = dispatch_batch(&invoker, &calls, 2).await;
        assert_eq!(results.len(), 6);
        assert!(peak.load(Ordering::SeqCst) <= 2);
    }

    #[tokio::test]
    async fn isolates_failures_within_a_batch() {
        let (invoker, _) = invoker();
        let calls = vec![
            call("a", "broken", "{}"),
            call("b", "tool", "{not json"),
            call("c", "tool", "{}"),
        ];

        let results = dispatch_batch(&invoker, &calls, 4).await;
        assert_eq!(results.len(), 3);

        assert!(!results[0].success);
        assert!(results[0].content.contains("connection refused"));

        assert!(!results[1].success);
        let payload: Value = serde_json::from_str(&results[1].content).expect("json");
        assert!(
            payload["error"]
                .as_str()
                .is_some_and(|e| e.contains("malformed arguments"))
        );

        assert!(results[2].success);
    }
}
