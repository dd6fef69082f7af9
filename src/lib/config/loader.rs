use super::agent::{AgentConfig, RawAgent};
use super::error::ConfigError;
use super::provider::{ModelConfig, RawModel};
use super::rest::{RawRestServer, RestServerConfig};
use super::server::{RawToolServer, ToolServerConfig};
use crate::constants::{CONFIG_PATH, ENV_PATH};
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Once;
use std::time::Duration;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
pub(super) struct RawConfig {
    #[serde(default)]
    pub tool_server: RawToolServer,
    #[serde(default)]
    pub model: RawModel,
    #[serde(default)]
    pub agent: RawAgent,
    #[serde(default)]
    pub rest_server: RawRestServer,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load and validate configuration from a file path
pub fn load_config(path: Option<&Path>) -> Result<super::AppConfig, ConfigError> {
    ensure_env_loaded();
    let config_path = path.unwrap_or_else(|| Path::new(CONFIG_PATH));
    read_config(config_path)
}

fn read_config(path: &Path) -> Result<super::AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading bridge configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_config(&content, path)
}

pub(super) fn parse_config(content: &str, path: &Path) -> Result<super::AppConfig, ConfigError> {
    let parsed: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_and_build(parsed)
}

fn validate_and_build(parsed: RawConfig) -> Result<super::AppConfig, ConfigError> {
    let endpoint = parsed
        .tool_server
        .endpoint
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::MissingToolServerEndpoint)?;
    let mut tool_server = ToolServerConfig::new(expand("tool_server.endpoint", &endpoint)?);
    if let Some(secs) = parsed.tool_server.timeout_secs {
        tool_server = tool_server.with_timeout(positive_secs("tool_server.timeout_secs", secs)?);
    }

    let defaults = ModelConfig::default();
    let model = ModelConfig {
        endpoint: match parsed.model.endpoint {
            Some(value) => expand("model.endpoint", &value)?,
            None => defaults.endpoint,
        },
        api_path: parsed.model.api_path.unwrap_or(defaults.api_path),
        model: parsed
            .model
            .model
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.model),
        timeout: match parsed.model.timeout_secs {
            Some(secs) => positive_secs("model.timeout_secs", secs)?,
            None => defaults.timeout,
        },
    };

    let defaults = AgentConfig::default();
    let agent = AgentConfig {
        max_iterations: at_least_one(
            "agent.max_iterations",
            parsed.agent.max_iterations.unwrap_or(defaults.max_iterations),
        )?,
        max_concurrent_tool_calls: at_least_one(
            "agent.max_concurrent_tool_calls",
            parsed
                .agent
                .max_concurrent_tool_calls
                .unwrap_or(defaults.max_concurrent_tool_calls),
        )?,
        system_prompt: parsed
            .agent
            .system_prompt
            .map(|prompt| expand("agent.system_prompt", &prompt))
            .transpose()?,
    };

    let bind: SocketAddr =
        parsed
            .rest_server
            .bind
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddress {
                value: parsed.rest_server.bind.clone(),
            })?;
    let rest_server = RestServerConfig {
        bind,
        cors_origins: parsed.rest_server.cors_origins,
    };

    Ok(super::AppConfig {
        tool_server,
        model,
        agent,
        rest_server,
    })
}

fn expand(field: &'static str, value: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(|cow| cow.into_owned())
        .map_err(|e| ConfigError::InvalidValue {
            field,
            reason: e.to_string(),
        })
}

fn positive_secs(field: &'static str, secs: u64) -> Result<Duration, ConfigError> {
    if secs == 0 {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "timeout must be at least one second".to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}

fn at_least_one(field: &'static str, value: usize) -> Result<usize, ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::constants::{DEFAULT_MAX_CONCURRENT_TOOL_CALLS, DEFAULT_MAX_ITERATIONS};

    #[test]
    fn minimal_config_uses_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
[tool_server]
endpoint = "http://127.0.0.1:9000/mcp"
"#,
        )
        .expect("config");

        assert_eq!(config.tool_server.endpoint, "http://127.0.0.1:9000/mcp");
        assert_eq!(config.tool_server.timeout, Duration::from_secs(30));
        assert_eq!(config.model.model, "gpt-4o");
        assert_eq!(config.agent.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert_eq!(
            config.agent.max_concurrent_tool_calls,
            DEFAULT_MAX_CONCURRENT_TOOL_CALLS
        );
        assert_eq!(config.rest_server.bind.port(), 8000);
        assert!(config.agent.system_prompt.is_none());
    }

    #[test]
    fn tool_server_endpoint_is_required() {
        let result = AppConfig::from_toml_str("[model]\nmodel = \"gpt-4o-mini\"\n");
        assert!(matches!(result, Err(ConfigError::MissingToolServerEndpoint)));

        let result = AppConfig::from_toml_str("[tool_server]\nendpoint = \"  \"\n");
        assert!(matches!(result, Err(ConfigError::MissingToolServerEndpoint)));
    }

    #[test]
    fn expands_environment_variables_in_endpoint() {
        unsafe {
            std::env::set_var("BRIDGE_TEST_TOOL_USER", "user-42");
        }
        let config = AppConfig::from_toml_str(
            r#"
[tool_server]
endpoint = "https://tools.example.com/mcp?user_id=${BRIDGE_TEST_TOOL_USER}"
"#,
        )
        .expect("config");
        assert_eq!(
            config.tool_server.endpoint,
            "https://tools.example.com/mcp?user_id=user-42"
        );
        unsafe {
            std::env::remove_var("BRIDGE_TEST_TOOL_USER");
        }
    }

    #[test]
    fn undefined_variable_is_rejected() {
        let result = AppConfig::from_toml_str(
            "[tool_server]\nendpoint = \"${BRIDGE_TEST_SURELY_UNDEFINED_VAR}\"\n",
        );
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                field: "tool_server.endpoint",
                ..
            })
        ));
    }

    #[test]
    fn rejects_zero_iteration_cap() {
        let result = AppConfig::from_toml_str(
            "[tool_server]\nendpoint = \"http://x\"\n[agent]\nmax_iterations = 0\n",
        );
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                field: "agent.max_iterations",
                ..
            })
        ));
    }

    #[test]
    fn rejects_bad_bind_address() {
        let result = AppConfig::from_toml_str(
            "[tool_server]\nendpoint = \"http://x\"\n[rest_server]\nbind = \"nope\"\n",
        );
        assert!(matches!(result, Err(ConfigError::InvalidBindAddress { .. })));
    }
}
