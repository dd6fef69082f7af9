//! Conversion between the tool server's descriptors and the model's
//! function-calling format.

use super::errors::TranslateError;
use crate::domain::{ModelToolCall, ToolCallRequest, ToolDescriptor};
use crate::model::{FunctionSpec, ModelToolSpec};
use serde_json::{Map, Value, json};

pub struct SchemaTranslator;

impl SchemaTranslator {
    /// Descriptor fields are copied structurally; schemas are not validated.
    pub fn to_model_format(descriptors: &[ToolDescriptor]) -> Vec<ModelToolSpec> {
        descriptors
            .iter()
            .map(|descriptor| ModelToolSpec {
                kind: "function".to_string(),
                function: FunctionSpec {
                    name: descriptor.name.clone(),
                    description: descriptor.description.clone(),
                    parameters: descriptor.input_schema.clone(),
                },
            })
            .collect()
    }

    /// Parse the model's argument text. Blank text means no arguments.
    pub fn from_model_call(call: &ModelToolCall) -> Result<ToolCallRequest, TranslateError> {
        let malformed = |reason: String| TranslateError::MalformedToolCall {
            call_id: call.id.clone(),
            tool: call.name.clone(),
            reason,
        };

        let arguments = if call.arguments.trim().is_empty() {
            Map::new()
        } else {
            match serde_json::from_str::<Value>(&call.arguments) {
                Ok(Value::Object(map)) => map,
                Ok(other) => {
                    return Err(malformed(format!(
                        "expected a JSON object, got {}",
                        json_kind(&other)
                    )));
                }
                Err(e) => return Err(malformed(e.to_string())),
            }
        };

        Ok(ToolCallRequest {
            id: call.id.clone(),
            name: call.name.clone(),
            arguments,
        })
    }
}

impl TranslateError {
    /// Payload recorded as the tool result so the model can correct itself.
    pub fn to_tool_result(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(arguments: &str) -> ModelToolCall {
        ModelToolCall {
            id: "call_1".into(),
            name: "get_weather".into(),
            arguments: arguments.into(),
        }
    }

    #[test]
    fn maps_descriptor_fields_verbatim() {
        let descriptors = vec![ToolDescriptor {
            name: "get_weather".into(),
            description: "Current weather".into(),
            input_schema: json!({ "type": "object", "properties": { "city": { "type": "string" } } }),
        }];

        let specs = SchemaTranslator::to_model_format(&descriptors);
        let encoded = serde_json::to_value(&specs).expect("encode");
        assert_eq!(
            encoded,
            json!([{
                "type": "function",
                "function": {
                    "name": "get_weather",
                    "description": "Current weather",
                    "parameters": { "type": "object", "properties": { "city": { "type": "string" } } }
                }
            }])
        );
    }

    #[test]
    fn malformed_schema_passes_through() {
        let descriptors = vec![ToolDescriptor {
            name: "weird".into(),
            description: String::new(),
            input_schema: json!("not a schema"),
        }];
        let specs = SchemaTranslator::to_model_format(&descriptors);
        assert_eq!(specs[0].function.parameters, json!("not a schema"));
    }

    #[test]
    fn parses_argument_text() {
        let request = SchemaTranslator::from_model_call(&call(r#"{"city":"Paris"}"#)).expect("ok");
        assert_eq!(request.id, "call_1");
        assert_eq!(request.arguments.get("city"), Some(&json!("Paris")));

        let request = SchemaTranslator::from_model_call(&call("  ")).expect("ok");
        assert!(request.arguments.is_empty());
    }

    #[test]
    fn rejects_unparseable_or_non_object_arguments() {
        let err = SchemaTranslator::from_model_call(&call(r#"{"city": "Par"#)).unwrap_err();
        assert!(matches!(err, TranslateError::MalformedToolCall { ref call_id, .. } if call_id == "call_1"));

        let err = SchemaTranslator::from_model_call(&call("[1,2]")).unwrap_err();
        assert!(err.to_string().contains("an array"));
        assert!(err.to_tool_result()["error"].as_str().is_some());
    }
}
