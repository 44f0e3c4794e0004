//! RecruitFlow server binary.
//!
//! Main entry point that wires the crates together and starts the server.
//! The authorization gate wraps every route, so no handler runs before
//! the caller's identity, role, and onboarding status have been decided.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use recruitflow_auth::identity::JwtIdentityResolver;
use recruitflow_auth::profile::{CachedProfileLookup, PgProfileLookup, ProfileLookup};
use recruitflow_core::config::AppConfig;
use recruitflow_core::error::AppError;
use recruitflow_database::repositories::profile::ProfileRepository;

#[tokio::main]
async fn main() {
    let env = std::env::var("RECRUITFLOW_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting RecruitFlow v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db_pool = recruitflow_database::DatabasePool::connect(&config.database).await?;
    recruitflow_database::migration::run_migrations(db_pool.pool()).await?;

    // ── Step 2: Profile lookup (Postgres + cache) ────────────────
    let profile_repo = Arc::new(ProfileRepository::new(db_pool.pool().clone()));
    let pg_lookup: Arc<dyn ProfileLookup> = Arc::new(PgProfileLookup::new(profile_repo));
    let profile_lookup: Arc<dyn ProfileLookup> = if config.cache.enabled {
        Arc::new(CachedProfileLookup::new(pg_lookup, &config.cache))
    } else {
        pg_lookup
    };

    // ── Step 3: Identity resolution ──────────────────────────────
    let identity_resolver = Arc::new(JwtIdentityResolver::new(&config.auth));

    // ── Step 4: Build and start HTTP server ──────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state =
        recruitflow_api::AppState::new(Arc::new(config), identity_resolver, profile_lookup);
    let app = recruitflow_api::app::build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("RecruitFlow server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    db_pool.close().await;
    tracing::info!("RecruitFlow server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
