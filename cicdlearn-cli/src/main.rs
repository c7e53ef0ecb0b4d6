//! cicdlearn CLI - runs the items/events HTTP API
//!
//! - `serve`: start the service, serve until Ctrl+C/SIGTERM, then close the pool
//! - `bootstrap`: run only the startup step (pool + `items` schema) and exit

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "cicdlearn",
    author,
    version,
    about = "Minimal HTTP API over PostgreSQL items and MongoDB events",
    long_about = "Serves /items from PostgreSQL and /events from MongoDB. Store locations \
                  come from APP_POSTGRES_URL, APP_MONGO_URL and APP_MONGO_DB (or a .env file)."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the items table if missing, then exit
    Bootstrap(commands::bootstrap::BootstrapArgs),
}

// Handlers only yield on I/O, so one thread serves every request
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let dotenv = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;
    config::report_dotenv(&dotenv);

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::Bootstrap(args) => commands::bootstrap::run_bootstrap(args).await,
    }
}
