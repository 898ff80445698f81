use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::AuthConfig;
use crate::store::{IdentityProvider, JobStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthConfig,
    /// Resolves authenticated user ids to profile rows.
    pub identity: Arc<dyn IdentityProvider>,
    /// Bounded read of open postings. Default: `PgJobStore`.
    pub jobs: Arc<dyn JobStore>,
}

impl FromRef<AppState> for AuthConfig {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}
