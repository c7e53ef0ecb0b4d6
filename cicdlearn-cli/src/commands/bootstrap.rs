//! Bootstrap command: run the startup step without serving
//!
//! Opens the pool, ensures the `items` table, and shuts down again.
//! Exits non-zero when either store setting is malformed or Postgres
//! rejects the connection or the DDL.

use anyhow::{Context, Result};
use clap::Parser;

use cicdlearn_server::{Service, Settings};

/// Arguments for the bootstrap command
#[derive(Parser, Debug)]
pub struct BootstrapArgs {}

pub async fn run_bootstrap(_args: BootstrapArgs) -> Result<()> {
    let settings = Settings::from_env().context("Invalid APP_* configuration")?;

    let service = Service::start(&settings)
        .await
        .context("Service startup failed")?;
    service.stop().await;

    println!("items table ready");
    Ok(())
}
