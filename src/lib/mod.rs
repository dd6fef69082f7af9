pub mod application;
pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use application::{agent, client, tooling};
pub use cli::Cli;
pub use config::AppConfig;
pub use domain::types;
pub use infrastructure::{model, rpc, server};

use application::client::{BridgeClient, ClientConfig};
use application::tooling::{HttpToolServer, ToolServer};
use infrastructure::model::OpenAIClient;
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_tracing();
    info!("Starting mcp-bridge");
    debug!(config = ?cli.config, addr = ?cli.addr, "CLI arguments parsed");

    let config_path = cli.config.as_deref().map(Path::new);
    let mut file_config = AppConfig::load(config_path)?;
    if let Some(path) = config_path {
        info!(path = %path.display(), "Loaded configuration from file");
    } else {
        info!("Loaded configuration from default path");
    }
    apply_cli_overrides(&cli, &mut file_config);

    debug!(
        model = file_config.model.model.as_str(),
        max_iterations = file_config.agent.max_iterations,
        "Configuration resolved"
    );

    let provider = OpenAIClient::from_config(&file_config.model)?;
    let tool_server: Arc<dyn ToolServer> =
        Arc::new(HttpToolServer::new(&file_config.tool_server)?);
    let client = Arc::new(BridgeClient::new(
        provider,
        tool_server,
        ClientConfig::from_app_config(&file_config),
    ));

    let addr = file_config.rest_server.bind;
    info!(%addr, "Starting REST server");
    server::serve(client, addr, &file_config.rest_server.cors_origins).await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .init();
    });
}

fn apply_cli_overrides(cli: &Cli, config: &mut AppConfig) {
    if let Some(addr) = cli.addr {
        info!(%addr, "Overriding bind address based on CLI flag");
        config.rest_server.bind = addr;
    }
    if let Some(endpoint) = cli.tool_server.as_deref() {
        info!(endpoint, "Overriding tool server endpoint based on CLI flag");
        config.tool_server.endpoint = endpoint.to_string();
    }
}
