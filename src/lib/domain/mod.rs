//! Domain types shared by every layer: tool descriptors, tool calls and the
//! conversation transcript.

pub mod transcript;
pub mod types;

pub use transcript::{Transcript, TranscriptError};
pub use types::{MessageRole, ModelToolCall, ToolCallRequest, ToolDescriptor, Turn};
