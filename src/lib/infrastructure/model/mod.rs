//! Model infrastructure module
//!
//! # Structure
//! - `types` - Request, Response, Error and tool-spec types
//! - `traits` - ModelProvider trait
//! - `adapter` - transcript to chat-completions message conversion
//! - `clients` - HTTP client implementations

pub mod adapter;
pub mod clients;
pub mod traits;
pub mod types;

pub use clients::OpenAIClient;
pub use traits::ModelProvider;
pub use types::{FunctionSpec, ModelError, ModelRequest, ModelResponse, ModelToolSpec};
