//! Read-side boundaries for the matching pipeline.
//!
//! Both collaborators are trait objects held in `AppState` so the router can
//! be exercised in tests with in-memory implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::Job;
use crate::models::user::User;

/// Hard cap on postings fetched per request. Combined with newest-first
/// ordering this means older postings past the cap are never scored.
pub const MAX_CANDIDATES: i64 = 200;

/// Bounded read of open postings: approved, not expired, newest first.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn open_jobs(&self, now: DateTime<Utc>) -> Result<Vec<Job>, AppError>;
}

/// Resolves an authenticated user id to its profile row.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn find_user(&self, id: Uuid) -> Result<Option<User>, AppError>;
}

pub struct PgJobStore {
    pool: PgPool,
}

impl PgJobStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn open_jobs(&self, now: DateTime<Utc>) -> Result<Vec<Job>, AppError> {
        let jobs = sqlx::query_as::<_, Job>(
            "SELECT * FROM jobs \
             WHERE expiry_date >= $1 AND is_approved = TRUE \
             ORDER BY created_at DESC \
             LIMIT $2",
        )
        .bind(now)
        .bind(MAX_CANDIDATES)
        .fetch_all(&self.pool)
        .await?;

        Ok(jobs)
    }
}

pub struct PgIdentityProvider {
    pool: PgPool,
}

impl PgIdentityProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityProvider for PgIdentityProvider {
    async fn find_user(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }
}
