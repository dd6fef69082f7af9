//! Message adapters - convert the transcript to provider message formats

use crate::domain::{ModelToolCall, Turn};
use serde_json::{Value, json};

/// Adapter for converting transcript turns to API message formats
pub struct MessageAdapter;

impl MessageAdapter {
    /// Convert turns to chat-completions messages.
    ///
    /// Assistant turns replay their tool calls with the original argument
    /// text; tool results carry the `tool_call_id` they answer.
    pub fn to_openai_format(turns: &[Turn]) -> Vec<Value> {
        turns
            .iter()
            .map(|turn| match turn {
                Turn::System { content } | Turn::User { content } => json!({
                    "role": turn.role().as_str(),
                    "content": content,
                }),
                Turn::Assistant {
                    content,
                    tool_calls,
                } => {
                    let mut message = json!({
                        "role": "assistant",
                        "content": content,
                    });
                    if !tool_calls.is_empty() {
                        message["tool_calls"] =
                            Value::Array(tool_calls.iter().map(Self::tool_call).collect());
                    }
                    message
                }
                Turn::ToolResult { call_id, content } => json!({
                    "role": "tool",
                    "tool_call_id": call_id,
                    "content": content,
                }),
            })
            .collect()
    }

    fn tool_call(call: &ModelToolCall) -> Value {
        json!({
            "id": call.id,
            "type": "function",
            "function": {
                "name": call.name,
                "arguments": call.arguments,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_tool_round_trip_turns() {
        let turns = vec![
            Turn::User {
                content: "weather?".into(),
            },
            Turn::Assistant {
                content: None,
                tool_calls: vec![ModelToolCall {
                    id: "call_1".into(),
                    name: "get_weather".into(),
                    arguments: r#"{"city":"Paris"}"#.into(),
                }],
            },
            Turn::ToolResult {
                call_id: "call_1".into(),
                content: r#"{"temp_c":18}"#.into(),
            },
        ];

        let messages = MessageAdapter::to_openai_format(&turns);
        assert_eq!(messages[0], json!({ "role": "user", "content": "weather?" }));
        assert_eq!(messages[1]["content"], Value::Null);
        assert_eq!(messages[1]["tool_calls"][0]["id"], "call_1");
        assert_eq!(
            messages[1]["tool_calls"][0]["function"]["arguments"],
            r#"{"city":"Paris"}"#
        );
        assert_eq!(
            messages[2],
            json!({ "role": "tool", "tool_call_id": "call_1", "content": r#"{"temp_c":18}"# })
        );
    }

    #[test]
    fn omits_empty_tool_call_list() {
        let turns = vec![Turn::Assistant {
            content: Some("hi".into()),
            tool_calls: Vec::new(),
        }];
        let messages = MessageAdapter::to_openai_format(&turns);
        assert!(messages[0].get("tool_calls").is_none());
    }
}
