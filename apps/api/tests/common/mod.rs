#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;
use uuid::Uuid;

use jobbridge_api::auth::AuthConfig;
use jobbridge_api::errors::AppError;
use jobbridge_api::models::job::Job;
use jobbridge_api::models::user::User;
use jobbridge_api::state::AppState;
use jobbridge_api::store::{IdentityProvider, JobStore};

pub const TEST_SECRET: &str = "router-test-secret";

pub struct InMemoryUsers(pub Vec<User>);

#[async_trait]
impl IdentityProvider for InMemoryUsers {
    async fn find_user(&self, id: Uuid) -> Result<Option<User>, AppError> {
        Ok(self.0.iter().find(|u| u.id == id).cloned())
    }
}

pub struct InMemoryJobs(pub Vec<Job>);

#[async_trait]
impl JobStore for InMemoryJobs {
    async fn open_jobs(&self, _now: DateTime<Utc>) -> Result<Vec<Job>, AppError> {
        Ok(self.0.clone())
    }
}

/// Store that always fails, for exercising the 5xx path.
pub struct FailingJobs;

#[async_trait]
impl JobStore for FailingJobs {
    async fn open_jobs(&self, _now: DateTime<Utc>) -> Result<Vec<Job>, AppError> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}

pub fn test_state(users: Vec<User>, jobs: Arc<dyn JobStore>) -> AppState {
    AppState {
        auth: AuthConfig {
            jwt_secret: TEST_SECRET.to_string(),
        },
        identity: Arc::new(InMemoryUsers(users)),
        jobs,
    }
}

#[derive(Serialize)]
struct Claims {
    sub: Uuid,
    exp: usize,
}

/// `Authorization` header value for a token signed with the test secret.
pub fn bearer(user_id: Uuid) -> String {
    let claims = Claims {
        sub: user_id,
        exp: (Utc::now() + Duration::hours(1)).timestamp() as usize,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("token signing");
    format!("Bearer {token}")
}

pub fn seeker(skills: &[&str], country: &str, bio: &str) -> User {
    User {
        id: Uuid::new_v4(),
        name: "Amina Test".to_string(),
        email: "amina@example.com".to_string(),
        role: "job_seeker".to_string(),
        company_name: None,
        country: Some(country.to_string()),
        bio: Some(bio.to_string()),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        created_at: Utc::now(),
    }
}

pub fn employer() -> User {
    User {
        role: "employer".to_string(),
        company_name: Some("Acme Hiring".to_string()),
        ..seeker(&[], "", "")
    }
}

pub fn posting(
    title: &str,
    description: &str,
    location: &str,
    created_at: DateTime<Utc>,
) -> Job {
    Job {
        id: Uuid::new_v4(),
        title: title.to_string(),
        company_name: "Acme".to_string(),
        location: location.to_string(),
        job_type: "Full-Time".to_string(),
        salary_range: Some("Competitive".to_string()),
        description: description.to_string(),
        requirements: None,
        responsibilities: None,
        benefits: None,
        expiry_date: created_at + Duration::days(60),
        application_email: None,
        posted_by: Uuid::new_v4(),
        is_approved: true,
        created_at,
    }
}
