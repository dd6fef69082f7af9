//! # Agent Module
//!
//! The tool-calling loop that sits between the model provider and the tool
//! server.
//!
//! ## Key Types
//!
//! - [`Agent`] - The loop itself
//! - [`SchemaTranslator`] - Descriptor and tool-call conversion
//! - [`AgentOptions`] - Model, system prompt and limits for one run
//! - [`AgentOutcome`] - Final text, status and per-call steps
//! - [`AgentError`] - Failures that abort a run
//!
//! ## Agent Loop
//!
//! 1. Fetch the tool catalogue and translate it for the model
//! 2. Send the transcript and tool specs to the model
//! 3. No tool calls: return the text
//! 4. Tool calls: run the batch, append one result per call, go to 2
//! 5. After `max_iterations` rounds: return the cap sentinel

mod dispatch;
mod errors;
mod models;
mod runner;
mod state;
mod translator;


pub use dispatch::{DispatchedCall, dispatch_batch};
pub use errors::{AgentError, TranslateError};
pub use models::{AgentOptions, AgentOutcome, AgentStatus, AgentStep};
pub use runner::Agent;
pub use translator::SchemaTranslator;
