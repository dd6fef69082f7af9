//! Append-only conversation transcript for a single chat request.
//!
//! Every tool call issued by an assistant turn must be answered by exactly
//! one tool-result turn before anything else is appended.

use super::types::{ModelToolCall, Turn};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranscriptError {
    #[error("tool result for '{call_id}' does not answer a pending tool call")]
    UnexpectedToolResult { call_id: String },
    #[error("{count} tool call(s) from the previous assistant turn are still unanswered")]
    UnansweredCalls { count: usize },
}

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new(system_prompt: Option<&str>, prompt: impl Into<String>) -> Self {
        let mut turns = Vec::with_capacity(2);
        if let Some(system) = system_prompt.filter(|s| !s.trim().is_empty()) {
            turns.push(Turn::System {
                content: system.to_string(),
            });
        }
        turns.push(Turn::User {
            content: prompt.into(),
        });
        Self { turns }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn push_assistant(
        &mut self,
        content: Option<String>,
        tool_calls: Vec<ModelToolCall>,
    ) -> Result<(), TranscriptError> {
        let pending = self.outstanding_calls().len();
        if pending > 0 {
            return Err(TranscriptError::UnansweredCalls { count: pending });
        }
        self.turns.push(Turn::Assistant {
            content,
            tool_calls,
        });
        Ok(())
    }

    pub fn push_tool_result(
        &mut self,
        call_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<(), TranscriptError> {
        let call_id = call_id.into();
        if !self.outstanding_calls().contains(&call_id.as_str()) {
            return Err(TranscriptError::UnexpectedToolResult { call_id });
        }
        self.turns.push(Turn::ToolResult {
            call_id,
            content: content.into(),
        });
        Ok(())
    }

    /// Ids of calls in the latest assistant turn that have no result yet,
    /// in the order the model issued them.
    pub fn outstanding_calls(&self) -> Vec<&str> {
        let Some(position) = self
            .turns
            .iter()
            .rposition(|turn| matches!(turn, Turn::Assistant { .. }))
        else {
            return Vec::new();
        };

        let Turn::Assistant { tool_calls, .. } = &self.turns[position] else {
            return Vec::new();
        };

        let mut answered: Vec<&str> = self.turns[position + 1..]
            .iter()
            .filter_map(|turn| match turn {
                Turn::ToolResult { call_id, .. } => Some(call_id.as_str()),
                _ => None,
            })
            .collect();

        // Each result answers one call, so a repeated id needs one result per
        // occurrence.
        tool_calls
            .iter()
            .map(|call| call.id.as_str())
            .filter(|id| match answered.iter().position(|answer| answer == id) {
                Some(index) => {
                    answered.swap_remove(index);
                    false
                }
                None => true,
            })
            .collect()
    }

    /// True when the transcript may be sent to the model.
    pub fn is_settled(&self) -> bool {
        self.outstanding_calls().is_empty()
    }

    /// Number of assistant turns that requested tools.
    pub fn tool_rounds(&self) -> usize {
        self.turns
            .iter()
            .filter(|turn| {
                matches!(turn, Turn::Assistant { tool_calls, .. } if !tool_calls.is_empty())
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MessageRole;

    fn call(id: &str) -> ModelToolCall {
        ModelToolCall {
            id: id.into(),
            name: "get_weather".into(),
            arguments: "{}".into(),
        }
    }

    #[test]
    fn starts_with_system_and_user_turns() {
        let transcript = Transcript::new(Some("be brief"), "hello");
        let roles: Vec<_> = transcript.turns().iter().map(Turn::role).collect();
        assert_eq!(roles, vec![MessageRole::System, MessageRole::User]);

        let transcript = Transcript::new(Some("   "), "hello");
        assert_eq!(transcript.turns().len(), 1);
    }

    #[test]
    fn tracks_outstanding_calls_in_order() {
        let mut transcript = Transcript::new(None, "hi");
        transcript
            .push_assistant(None, vec![call("a"), call("b"), call("c")])
            .expect("assistant turn");
        transcript.push_tool_result("b", "{}").expect("result b");

        assert_eq!(transcript.outstanding_calls(), vec!["a", "c"]);
        assert!(!transcript.is_settled());

        transcript.push_tool_result("a", "{}").expect("result a");
        transcript.push_tool_result("c", "{}").expect("result c");
        assert!(transcript.is_settled());
        assert_eq!(transcript.tool_rounds(), 1);
    }

    #[test]
    fn rejects_uncorrelated_or_duplicate_results() {
        let mut transcript = Transcript::new(None, "hi");
        assert_eq!(
            transcript.push_tool_result("x", "{}"),
            Err(TranscriptError::UnexpectedToolResult {
                call_id: "x".into()
            })
        );

        transcript
            .push_assistant(None, vec![call("a")])
            .expect("assistant turn");
        transcript.push_tool_result("a", "{}").expect("first result");
        assert!(transcript.push_tool_result("a", "{}").is_err());
    }

    #[test]
    fn repeated_call_ids_need_one_result_each() {
        let mut transcript = Transcript::new(None, "hi");
        transcript
            .push_assistant(None, vec![call("dup"), call("dup")])
            .expect("assistant turn");
        assert_eq!(transcript.outstanding_calls(), vec!["dup", "dup"]);

        transcript.push_tool_result("dup", "{}").expect("first result");
        assert_eq!(transcript.outstanding_calls(), vec!["dup"]);
        transcript.push_tool_result("dup", "{}").expect("second result");
        assert!(transcript.is_settled());
        assert!(transcript.push_tool_result("dup", "{}").is_err());
    }

    #[test]
    fn counts_rounds_that_requested_tools() {
        let mut transcript = Transcript::new(None, "hi");
        transcript
            .push_assistant(None, vec![call("a")])
            .expect("first round");
        transcript.push_tool_result("a", "{}").expect("result a");
        transcript
            .push_assistant(None, vec![call("b"), call("c")])
            .expect("second round");
        transcript.push_tool_result("b", "{}").expect("result b");
        transcript.push_tool_result("c", "{}").expect("result c");
        transcript
            .push_assistant(Some("done".into()), Vec::new())
            .expect("final answer");
        assert_eq!(transcript.tool_rounds(), 2);
    }

    #[test]
    fn refuses_assistant_turn_while_calls_pending() {
        let mut transcript = Transcript::new(None, "hi");
        transcript
            .push_assistant(None, vec![call("a"), call("b")])
            .expect("assistant turn");
        assert_eq!(
            transcript.push_assistant(Some("done".into()), Vec::new()),
            Err(TranscriptError::UnansweredCalls { count: 2 })
        );
    }
}
