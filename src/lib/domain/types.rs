use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
    Tool,
}

impl MessageRole {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
            MessageRole::Tool => "tool",
        }
    }
}

/// One entry of the tool server's catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ToolDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "inputSchema", default = "empty_schema")]
    #[schema(value_type = Object)]
    pub input_schema: Value,
}

fn empty_schema() -> Value {
    Value::Object(Map::new())
}

impl ToolDescriptor {
    /// Normalise a raw catalogue entry.
    ///
    /// Entries without a string `name` are rejected; a missing description
    /// becomes empty and a missing `inputSchema` becomes `{}`. The schema is
    /// otherwise copied as-is.
    pub fn from_catalog_entry(entry: &Value) -> Option<Self> {
        let name = entry.get("name").and_then(Value::as_str)?;
        let description = entry
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let input_schema = entry
            .get("inputSchema")
            .cloned()
            .unwrap_or_else(empty_schema);
        Some(Self {
            name: name.to_string(),
            description,
            input_schema,
        })
    }
}

/// A tool call exactly as the model emitted it, arguments still serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelToolCall {
    pub id: String,
    pub name: String,
    pub arguments: String,
}

/// A tool call with its arguments parsed, ready for the invoker.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCallRequest {
    pub id: String,
    pub name: String,
    pub arguments: Map<String, Value>,
}

/// One entry of the conversation transcript.
#[derive(Debug, Clone, PartialEq)]
pub enum Turn {
    System {
        content: String,
    },
    User {
        content: String,
    },
    Assistant {
        content: Option<String>,
        tool_calls: Vec<ModelToolCall>,
    },
    ToolResult {
        call_id: String,
        content: String,
    },
}

impl Turn {
    pub fn role(&self) -> MessageRole {
        match self {
            Turn::System { .. } => MessageRole::System,
            Turn::User { .. } => MessageRole::User,
            Turn::Assistant { .. } => MessageRole::Assistant,
            Turn::ToolResult { .. } => MessageRole::Tool,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalises_catalog_entry_defaults() {
        let entry = json!({ "name": "get_weather" });
        let descriptor = ToolDescriptor::from_catalog_entry(&entry).expect("descriptor");
        assert_eq!(descriptor.name, "get_weather");
        assert_eq!(descriptor.description, "");
        assert_eq!(descriptor.input_schema, json!({}));
    }

    #[test]
    fn keeps_schema_verbatim() {
        let schema = json!({ "type": "object", "properties": { "city": 42 } });
        let entry = json!({ "name": "odd", "description": "d", "inputSchema": schema });
        let descriptor = ToolDescriptor::from_catalog_entry(&entry).expect("descriptor");
        assert_eq!(descriptor.input_schema, schema);
    }

    #[test]
    fn rejects_entry_without_name() {
        assert!(ToolDescriptor::from_catalog_entry(&json!({ "description": "x" })).is_none());
        assert!(ToolDescriptor::from_catalog_entry(&json!({ "name": 7 })).is_none());
    }
}
