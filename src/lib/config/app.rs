use super::agent::AgentConfig;
use super::error::ConfigError;
use super::provider::ModelConfig;
use super::rest::RestServerConfig;
use super::server::ToolServerConfig;
use std::path::Path;

/// Application configuration loaded from bridge.toml
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub tool_server: ToolServerConfig,
    pub model: ModelConfig,
    pub agent: AgentConfig,
    pub rest_server: RestServerConfig,
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Parse configuration from TOML text without touching the filesystem
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        super::loader::parse_config(content, Path::new("<inline>"))
    }
}
