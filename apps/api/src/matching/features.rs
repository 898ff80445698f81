//! Per-posting signals, each bounded to [0, 1].

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::models::user::User;

const RECENCY_WINDOW_DAYS: f64 = 30.0;

/// Immutable, lower-cased snapshot of the seeker-side matching inputs,
/// taken once per request.
#[derive(Debug, Clone)]
pub struct SeekerProfile {
    pub skills: Vec<String>,
    pub country: String,
    pub bio: String,
}

impl SeekerProfile {
    pub fn from_user(user: &User) -> Self {
        Self {
            skills: user.skills.iter().map(|s| s.to_lowercase()).collect(),
            country: user.country.as_deref().unwrap_or("").to_lowercase(),
            bio: user.bio.as_deref().unwrap_or("").to_lowercase(),
        }
    }
}

/// `|matched skills| / max(|skills|, 1)`. An empty skill set scores 0,
/// never rewarding empty profiles and never dividing by zero.
pub fn skill_overlap(skills: &[String], posting_tokens: &HashSet<String>) -> f64 {
    if skills.is_empty() {
        return 0.0;
    }
    let matched = skills
        .iter()
        .filter(|s| posting_tokens.contains(s.as_str()))
        .count();
    matched as f64 / skills.len().max(1) as f64
}

/// Binary: 1 when the seeker's country appears as a substring of the
/// posting location. Empty country or location scores 0.
pub fn location_overlap(country: &str, location: &str) -> f64 {
    if country.is_empty() || location.is_empty() {
        return 0.0;
    }
    if location.to_lowercase().contains(country) {
        1.0
    } else {
        0.0
    }
}

/// Linear decay from 1 (posted now) to 0 at 30 days old, clamped.
/// Postings older than the window score 0 but are not excluded.
pub fn recency(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let days_old = (now - created_at).num_milliseconds() as f64 / 86_400_000.0;
    (1.0 - days_old / RECENCY_WINDOW_DAYS).clamp(0.0, 1.0)
}

/// Crude binary hint: 1 only when both the seeker's bio and the posting's
/// job type contain "remote". Known-weak signal, preserved as-is.
pub fn job_type_affinity(bio: &str, job_type: &str) -> f64 {
    if bio.contains("remote") && job_type.to_lowercase().contains("remote") {
        1.0
    } else {
        0.0
    }
}
