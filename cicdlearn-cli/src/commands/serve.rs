//! HTTP server command
//!
//! Reads settings once, runs the startup step, then serves until
//! Ctrl+C or SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use cicdlearn_server::{ServerConfig, Service, Settings};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "APP_BIND_ADDR", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let settings = Settings::from_env().context("Invalid APP_* configuration")?;

    tracing::info!("Starting cicdlearn server on {}", args.bind);

    let service = Service::start(&settings)
        .await
        .context("Service startup failed")?;

    let config = ServerConfig { bind_addr: args.bind };

    // Blocks until shutdown; the pool is closed before this returns
    service.serve(&config).await.context("Server error")?;

    Ok(())
}
