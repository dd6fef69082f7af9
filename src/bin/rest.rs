//! REST server entry point

use clap::Parser;
use mcp_tool_bridge::Cli;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    mcp_tool_bridge::run(Cli::parse()).await
}
