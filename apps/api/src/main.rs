use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobbridge_api::auth::AuthConfig;
use jobbridge_api::config::Config;
use jobbridge_api::db::create_pool;
use jobbridge_api::routes::build_router;
use jobbridge_api::state::AppState;
use jobbridge_api::store::{PgIdentityProvider, PgJobStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("jobbridge_api={}", &config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobBridge API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Identity and posting reads go through trait objects so tests can
    // drive the router without a live database.
    let state = AppState {
        auth: AuthConfig {
            jwt_secret: config.jwt_secret.clone(),
        },
        identity: Arc::new(PgIdentityProvider::new(db.clone())),
        jobs: Arc::new(PgJobStore::new(db)),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
