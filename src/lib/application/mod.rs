//! # Application Module
//!
//! Request handling logic of the bridge.
//!
//! ## Submodules
//!
//! - [`client`] - `chat` and `tools` entry points used by the REST surface
//! - [`agent`] - the model/tool loop that answers a single prompt
//! - [`tooling`] - JSON-RPC client for the remote tool server

pub mod agent;
pub mod client;
pub mod tooling;
