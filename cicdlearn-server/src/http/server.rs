//! Axum server setup and service lifecycle
//!
//! Lifecycle: uninitialized -> starting -> serving -> stopping -> stopped
//!
//! - `Service::start` is the starting phase: open the pool, ensure the
//!   schema, build the MongoDB handle. Any failure aborts startup.
//! - `Service::serve` runs until SIGTERM/Ctrl+C, drains in-flight
//!   requests, then closes the pool.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use mongodb::Database;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::config::Settings;
use crate::db::{
    connect_mongo, create_pool, ensure_schema, EventStore, ItemStore, MongoEventRepo, PgItemRepo,
};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8000)
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemStore>,
    pub events: Arc<dyn EventStore>,
}

impl AppState {
    pub fn new(items: impl ItemStore + 'static, events: impl EventStore + 'static) -> Self {
        Self {
            items: Arc::new(items),
            events: Arc::new(events),
        }
    }
}

/// Build the application router with all routes.
///
/// CORS mirrors the request's origin, method and headers and allows
/// credentials, so any origin may call the API with cookies attached.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::items::router())
        .merge(routes::events::router())
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// A started service: pool open, schema ensured, MongoDB handle built.
pub struct Service {
    pool: PgPool,
    mongo: Database,
}

impl Service {
    /// Starting phase. Returns only once the service is ready to serve.
    ///
    /// The MongoDB handle is built here but never pinged, so an
    /// unreachable document store shows up on the first `/events` call.
    pub async fn start(settings: &Settings) -> Result<Self, StartupError> {
        tracing::info!("Service starting");

        let pool = create_pool(settings)
            .await
            .map_err(StartupError::Connect)?;

        if let Err(e) = ensure_schema(&pool).await {
            pool.close().await;
            return Err(StartupError::Schema(e));
        }

        let mongo = match connect_mongo(settings).await {
            Ok(db) => db,
            Err(e) => {
                pool.close().await;
                return Err(StartupError::DocumentStore(e));
            }
        };

        tracing::info!(
            pg_connections = pool.size(),
            mongo_db = %mongo.name(),
            "Service started"
        );
        Ok(Self { pool, mongo })
    }

    /// Assemble a service from already-open handles without running the
    /// schema step.
    pub fn from_parts(pool: PgPool, mongo: Database) -> Self {
        Self { pool, mongo }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Router wired to this service's stores.
    pub fn router(&self) -> Router {
        let state = AppState::new(
            PgItemRepo::new(self.pool.clone()),
            MongoEventRepo::new(&self.mongo),
        );
        build_router(state)
    }

    /// Bind `config.bind_addr` and serve until Ctrl+C or SIGTERM.
    pub async fn serve(self, config: &ServerConfig) -> Result<(), ServerError> {
        let listener = match TcpListener::bind(config.bind_addr).await {
            Ok(listener) => listener,
            Err(e) => {
                self.stop().await;
                return Err(ServerError::Io(e));
            }
        };

        self.serve_with_shutdown(listener, shutdown_signal()).await
    }

    /// Serve on `listener` until `signal` resolves, then close the pool.
    ///
    /// The pool is closed even when serving fails.
    pub async fn serve_with_shutdown<F>(
        self,
        listener: TcpListener,
        signal: F,
    ) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router();

        tracing::warn!("CORS: Permissive mode enabled - all origins allowed with credentials");
        if let Ok(addr) = listener.local_addr() {
            tracing::info!("Server listening on {}", addr);
        }

        let result = axum::serve(listener, app)
            .with_graceful_shutdown(signal)
            .await;

        self.stop().await;
        result.map_err(ServerError::Io)
    }

    /// Stopping phase: close the pool and drop the MongoDB handle.
    pub async fn stop(self) {
        tracing::info!("Service stopping, closing Postgres pool");
        self.pool.close().await;
        tracing::info!("Service stopped");
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Startup failure. The service never reaches the serving phase.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to create Postgres pool: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("failed to ensure items schema: {0}")]
    Schema(#[source] sqlx::Error),

    #[error("failed to build MongoDB client: {0}")]
    DocumentStore(#[source] mongodb::error::Error),
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    use crate::db::pool::connect_options;

    fn local_settings() -> Settings {
        Settings::from_lookup(|_| None).unwrap()
    }

    /// Service whose pool never connects unless a query runs.
    async fn lazy_service() -> Service {
        let settings = local_settings();
        let options = connect_options(&settings.postgres_dsn()).unwrap();
        let pool = PgPoolOptions::new().connect_lazy_with(options);
        let mongo = connect_mongo(&settings).await.unwrap();
        Service::from_parts(pool, mongo)
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 8000);
        assert!(config.bind_addr.ip().is_unspecified());
    }

    #[tokio::test]
    async fn start_fails_on_unparseable_dsn() {
        let settings = Settings::from_lookup(|name| match name {
            "APP_POSTGRES_URL" => Some("postgresql+asyncpg://app@localhost:notaport/app".into()),
            _ => None,
        })
        .unwrap();

        let err = Service::start(&settings).await.err().expect("startup must fail");
        assert!(matches!(err, StartupError::Connect(_)));
    }

    #[tokio::test]
    async fn serve_then_shutdown_closes_pool() {
        let service = lazy_service().await;
        let pool = service.pool().clone();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();

        let server = tokio::spawn(service.serve_with_shutdown(listener, async move {
            let _ = rx.await;
        }));

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.ends_with(r#"{"status":"ok"}"#));

        assert!(!pool.is_closed());
        tx.send(()).unwrap();
        server.await.unwrap().unwrap();
        assert!(pool.is_closed());
    }

    #[tokio::test]
    async fn stop_closes_pool() {
        let service = lazy_service().await;
        let pool = service.pool().clone();
        service.stop().await;
        assert!(pool.is_closed());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn start_against_live_stores() {
        let settings = Settings::from_env().expect("settings");
        let service = Service::start(&settings).await.expect("startup");
        assert!(service.pool().size() >= 1);
        service.stop().await;
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn start_fails_when_schema_cannot_be_created() {
        let mut settings = Settings::from_env().expect("settings");
        let sep = if settings.postgres_url.contains('?') { '&' } else { '?' };
        settings.postgres_url = format!(
            "{}{sep}options=-c%20default_transaction_read_only%3Don",
            settings.postgres_url
        );

        let err = Service::start(&settings).await.err().expect("startup must fail");
        assert!(matches!(err, StartupError::Schema(_)), "{err}");
    }
}
