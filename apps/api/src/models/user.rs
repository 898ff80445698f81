use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered account. The matching pipeline only ever reads this row;
/// profile management mutates it elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// "job_seeker" | "employer" | "admin"
    pub role: String,
    pub company_name: Option<String>,
    pub country: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_job_seeker(&self) -> bool {
        self.role == "job_seeker"
    }
}
