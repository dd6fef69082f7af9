//! Application constants
//!
//! Single source of truth for paths and default values.

use std::time::Duration;

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/bridge.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Default chat-completions endpoint
pub const DEFAULT_MODEL_ENDPOINT: &str = "https://api.openai.com";

/// Default chat-completions path appended to the endpoint
pub const DEFAULT_MODEL_API_PATH: &str = "/v1/chat/completions";

/// Default model used when a request does not name one
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Default REST bind address
pub const DEFAULT_BIND: &str = "0.0.0.0:8000";

/// Upper bound on model rounds for a single chat request
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// Tool calls from one model response dispatched at the same time
pub const DEFAULT_MAX_CONCURRENT_TOOL_CALLS: usize = 4;

pub const DEFAULT_TOOL_SERVER_TIMEOUT: Duration = Duration::from_secs(30);

pub const DEFAULT_MODEL_TIMEOUT: Duration = Duration::from_secs(60);

/// Response text returned when the iteration cap stops the loop
pub const MAX_ITERATIONS_SENTINEL: &str = "Max iterations reached";
