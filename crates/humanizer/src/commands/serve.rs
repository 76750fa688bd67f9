//! Serve command: run the MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::{info, instrument};

use humanizer_core::config::Config;

use crate::server::HumanizerServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Serve MCP requests on stdin/stdout until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input_bytes: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    let probabilities = config
        .humanizer_config()
        .context("invalid rewrite probability")?;
    let server = HumanizerServer::new(probabilities, config.humanize_options(), max_input_bytes)
        .with_default_seed(config.seed);

    info!(?max_input_bytes, seed = ?config.seed, "starting MCP server on stdio");
    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    let reason = service
        .waiting()
        .await
        .context("MCP server task failed")?;
    info!(?reason, "MCP server stopped");
    Ok(())
}
