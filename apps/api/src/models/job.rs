use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A job posting. Created and edited by employer-facing CRUD; the matching
/// pipeline reads only postings that are approved and not yet expired.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub company_name: String,
    pub location: String,
    /// "Full-Time" | "Part-Time" | "Contract" | "Internship" | "Remote"
    pub job_type: String,
    pub salary_range: Option<String>,
    pub description: String,
    pub requirements: Option<String>,
    pub responsibilities: Option<String>,
    pub benefits: Option<String>,
    /// Application deadline; a posting past this date is never a candidate.
    pub expiry_date: DateTime<Utc>,
    pub application_email: Option<String>,
    pub posted_by: Uuid,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}
