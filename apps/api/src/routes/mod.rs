pub mod health;

use axum::{routing::get, Router};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/ai/match", get(handlers::handle_ai_matches))
        .with_state(state)
}
