//! Email Pattern Service binary.
//!
//! Loads configuration from the environment, selects the user store and
//! serves the HTTP API until interrupted.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use email_pattern_service::adapters::http::{build_router, UserAppState};
use email_pattern_service::adapters::memory::InMemoryUserRepository;
use email_pattern_service::adapters::postgres::{self, PostgresUserRepository};
use email_pattern_service::config::{AppConfig, ServerConfig, StoreBackend};
use email_pattern_service::ports::UserRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let repository: Arc<dyn UserRepository> = match config.database.backend {
        StoreBackend::Memory => {
            warn!("Using in-memory user store; records are lost on restart");
            Arc::new(InMemoryUserRepository::new())
        }
        StoreBackend::Postgres => {
            let pool = postgres::connect(&config.database).await?;
            if config.database.run_migrations {
                postgres::run_migrations(&pool).await?;
            }
            Arc::new(PostgresUserRepository::new(pool))
        }
    };

    let state = UserAppState::new(repository, config.import.max_rows);
    let app = build_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Server is running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured filter. Production logs are JSON.
fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let result = if server.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };

    if let Err(error) = result {
        eprintln!("Failed to install tracing subscriber: {error}");
    }
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
