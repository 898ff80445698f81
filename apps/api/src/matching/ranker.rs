use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::matching::features::{
    job_type_affinity, location_overlap, recency, skill_overlap, SeekerProfile,
};
use crate::matching::tokenize::extract_tokens;
use crate::matching::weights::MATCH_WEIGHTS;
use crate::models::job::Job;

/// Result list is truncated to the best 20 postings.
pub const MAX_RESULTS: usize = 20;

/// Ephemeral pairing of a posting with its computed score. Never persisted;
/// lives only for one request/response cycle.
#[derive(Debug, Clone, Serialize)]
pub struct JobMatch {
    pub job: Job,
    pub score: f64,
}

/// Weighted sum of the four sub-scores, rounded to 4 decimal digits.
pub fn score_job(profile: &SeekerProfile, job: &Job, now: DateTime<Utc>) -> f64 {
    let text = format!(
        "{} {} {}",
        job.title,
        job.description,
        job.requirements.as_deref().unwrap_or("")
    );
    let tokens = extract_tokens(&text);

    let w = MATCH_WEIGHTS;
    let score = w.skills * skill_overlap(&profile.skills, &tokens)
        + w.location * location_overlap(&profile.country, &job.location)
        + w.recency * recency(job.created_at, now)
        + w.job_type * job_type_affinity(&profile.bio, &job.job_type);

    round4(score)
}

/// Scores every candidate, sorts best-first and truncates. The sort is
/// stable, so ties keep the fetch order (newest first).
pub fn rank_matches(profile: &SeekerProfile, jobs: Vec<Job>, now: DateTime<Utc>) -> Vec<JobMatch> {
    let mut matches: Vec<JobMatch> = jobs
        .into_iter()
        .map(|job| {
            let score = score_job(profile, &job, now);
            JobMatch { job, score }
        })
        .collect();

    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches.truncate(MAX_RESULTS);
    matches
}

fn round4(score: f64) -> f64 {
    (score * 10_000.0).round() / 10_000.0
}
