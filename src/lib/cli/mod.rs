use std::net::SocketAddr;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(
    name = "mcp-bridge",
    version,
    about = "REST bridge between an OpenAI-compatible model and a remote MCP tool server"
)]
pub struct Cli {
    /// Configuration file path (defaults to config/bridge.toml)
    #[arg(short, long)]
    pub config: Option<String>,
    /// REST API bind address, overrides `rest_server.bind`
    #[arg(long)]
    pub addr: Option<SocketAddr>,
    /// Tool server endpoint, overrides `tool_server.endpoint`
    #[arg(long)]
    pub tool_server: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "mcp-bridge",
            "--config",
            "custom.toml",
            "--addr",
            "127.0.0.1:9000",
            "--tool-server",
            "http://localhost:7000/mcp",
        ])
        .expect("valid arguments");
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
        assert_eq!(cli.addr, Some("127.0.0.1:9000".parse().expect("addr")));
        assert_eq!(cli.tool_server.as_deref(), Some("http://localhost:7000/mcp"));
    }

    #[test]
    fn rejects_bad_bind_address() {
        assert!(Cli::try_parse_from(["mcp-bridge", "--addr", "not-an-addr"]).is_err());
    }
}
