//! # Configuration
//!
//! Loaded from `config/bridge.toml` (see [`CONFIG_PATH`]). String values may
//! reference environment variables as `${VAR}`; variables from `config/.env`
//! are loaded first.
//!
//! ```toml
//! [tool_server]
//! endpoint = "https://tools.example.com/mcp?user_id=${TOOL_USER_ID}"
//! timeout_secs = 30
//!
//! [model]
//! model = "gpt-4o"
//!
//! [agent]
//! max_iterations = 10
//! max_concurrent_tool_calls = 4
//!
//! [rest_server]
//! bind = "0.0.0.0:8000"
//! ```

pub mod agent;
pub mod app;
pub mod error;
pub mod loader;
pub mod provider;
pub mod rest;
pub mod server;

pub use crate::constants::CONFIG_PATH;

pub use agent::AgentConfig;
pub use app::AppConfig;
pub use error::ConfigError;
pub use provider::ModelConfig;
pub use rest::RestServerConfig;
pub use server::ToolServerConfig;
