//! qotd-scheduler: weekly question-of-the-day population service.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from TOML files, connects to PostgreSQL and applies
//! migrations, spawns the weekly population scheduler, and serves the
//! liveness endpoint until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qotd_scheduler::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use qotd_scheduler::jobs;
use qotd_scheduler::questions::ALL_QUESTIONS;
use qotd_scheduler::routes::create_router;
use qotd_scheduler::store::{postgres, PgQuestionStore};

/// qotd-scheduler: weekly question-of-the-day population service
#[derive(Parser, Debug)]
#[command(name = "qotd-scheduler", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "qotd_scheduler=debug,sqlx=warn")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load a .env file if present, for DATABASE_URL in development
    dotenvy::dotenv().ok();

    // Parse command line arguments
    let args = Args::parse();

    // Load configuration
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    match config.logging.format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new(&log_filter))
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        _ => tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new(&log_filter))
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }

    tracing::info!("Loaded configuration");

    // Connect to the database and apply migrations
    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| "DATABASE_URL must be set (environment or .env file)")?;

    let pool = postgres::create_pool(&database_url).await?;
    postgres::run_migrations(&pool).await?;
    tracing::info!("Database ready");

    let store = Arc::new(PgQuestionStore::new(pool));
    tracing::info!(
        candidates = ALL_QUESTIONS.len(),
        "Loaded candidate question list"
    );

    // Spawn the weekly population scheduler
    let cancel = CancellationToken::new();
    let scheduler = jobs::spawn(store, cancel.clone());

    // Create router
    let app = create_router();

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port)
        .parse()
        .expect("Invalid http.host or http.port in config");
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Stop the scheduler once the server has drained
    cancel.cancel();
    scheduler.await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Resolve when Ctrl+C or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
