//! # Model Provider Configuration
//!
//! The bridge talks to one chat-completions endpoint. The API key is not part
//! of the configuration: every chat request brings its own.

use crate::constants::{
    DEFAULT_MODEL, DEFAULT_MODEL_API_PATH, DEFAULT_MODEL_ENDPOINT, DEFAULT_MODEL_TIMEOUT,
};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    /// Base URL of the provider
    pub endpoint: String,
    /// Path appended to `endpoint` for chat completions
    pub api_path: String,
    /// Model used when a request does not name one
    pub model: String,
    pub timeout: Duration,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_MODEL_ENDPOINT.to_string(),
            api_path: DEFAULT_MODEL_API_PATH.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_MODEL_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawModel {
    pub endpoint: Option<String>,
    pub api_path: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
}
