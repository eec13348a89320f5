//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use papo_common::{AppConfig, AppError, StoreBackend};
use papo_db::{create_pool, ensure_schema, MemoryStore};
use papo_service::{spawn_sweeper, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = apply_middleware(
        create_router(),
        &config.cors,
        config.app.env.is_production(),
    );
    router.with_state(state)
}

/// Initialize the store and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let builder =
        ServiceContextBuilder::new().inactive_limit(config.presence.inactive_limit());

    let builder = match config.database.backend {
        StoreBackend::Postgres => {
            let url = config
                .database
                .url
                .clone()
                .ok_or_else(|| AppError::Config("DATABASE_URL is required".to_string()))?;

            info!("Connecting to PostgreSQL...");
            let db_config = papo_db::DatabaseConfig {
                url,
                max_connections: config.database.max_connections,
                min_connections: config.database.min_connections,
                ..Default::default()
            };
            let pool = create_pool(&db_config)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            ensure_schema(&pool)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            builder.pool(pool)
        }
        StoreBackend::Memory => {
            warn!("Using in-memory store; data is lost on restart");
            builder.store(Arc::new(MemoryStore::new()))
        }
    };

    let service_context = builder
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Serve `state` on an already bound listener until `shutdown` resolves
///
/// The inactivity sweeper runs for as long as the server does.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<(), AppError>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let sweeper = spawn_sweeper(
        state.shared_context(),
        state.config().presence.sweep_interval(),
    );
    let app = create_app(state);

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(AppError::from);

    sweeper.abort();
    info!("Inactivity sweeper stopped");

    result
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    // Create app state
    let state = create_app_state(config).await?;

    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    serve(listener, state, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
