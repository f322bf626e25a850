//! Readlist API Gateway
//!
//! The entry point for all reading-list requests.
//! Handles:
//! - Article procedures (create, list, toggle, delete)
//! - Health probes
//! - Observability (logging, metrics, tracing)

mod handlers;
mod middleware;
mod routes;

use metrics_exporter_prometheus::PrometheusBuilder;
use readlist_common::{
    articles::ArticleService,
    config::{AppConfig, ObservabilityConfig},
    db::{schema, DbPool},
    metrics,
};
use std::sync::Arc;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: DbPool,
    pub articles: ArticleService,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, db: DbPool) -> Self {
        let articles = ArticleService::from_pool(db.clone());
        Self { config, db, articles }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    // Initialize tracing
    init_tracing(&config.observability);

    info!("Starting Readlist API Gateway v{}", readlist_common::VERSION);

    // Initialize metrics
    let metrics_handle = if config.observability.metrics_enabled {
        let handle = PrometheusBuilder::new()
            .set_buckets(metrics::LATENCY_BUCKETS)?
            .install_recorder()?;
        metrics::register_metrics();
        Some(handle)
    } else {
        None
    };

    // Initialize database connection
    let db = DbPool::new(&config.database).await?;
    if config.database.auto_migrate {
        schema::ensure_schema(db.conn()).await?;
    }

    // Create app state
    let state = AppState::new(config.clone(), db.clone());

    // Build the router
    let app = routes::create_router(state, metrics_handle);

    // Start the server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    match tokio::time::timeout(config.shutdown_timeout(), db.close()).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::warn!(error = %e, "Failed to close database connections"),
        Err(_) => tracing::warn!("Timed out closing database connections"),
    }

    info!("Server shutdown complete");
    Ok(())
}

/// JSON or human-readable logs; RUST_LOG wins over the configured level
fn init_tracing(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if config.json_logging {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, starting shutdown..."),
        _ = terminate => info!("Received SIGTERM, starting shutdown..."),
    }
}
