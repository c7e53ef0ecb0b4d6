//! Environment loading for the binary

use std::path::PathBuf;

use tracing::{debug, info, warn};

/// Load `.env` from the current directory, if present.
///
/// Runs before argument parsing and tracing init so that `APP_BIND_ADDR`
/// and `RUST_LOG` can come from the file. dotenvy never overwrites
/// variables that are already set, so the real environment wins.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Log the outcome of [`load_dotenv`] once tracing is up.
pub fn report_dotenv(outcome: &Result<Option<PathBuf>, dotenvy::Error>) {
    match outcome {
        Ok(Some(path)) => info!("Loaded configuration from {}", path.display()),
        Ok(None) => debug!("No .env file found, using environment variables only"),
        // Not fatal: Settings validation rejects any value that matters
        Err(e) => warn!("Failed to load .env: {}", e),
    }
}
