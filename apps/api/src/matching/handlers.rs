use axum::{extract::State, Json};
use chrono::Utc;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::matching::features::SeekerProfile;
use crate::matching::ranker::{rank_matches, JobMatch};
use crate::state::AppState;

/// GET /api/ai/match
///
/// Recommendations for the authenticated caller. Non-seeker roles get an
/// empty list, not an error; any store failure is fatal for the request.
pub async fn handle_ai_matches(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<JobMatch>>, AppError> {
    let user = state
        .identity
        .find_user(auth.user_id)
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !user.is_job_seeker() {
        return Ok(Json(Vec::new()));
    }

    let now = Utc::now();
    let jobs = state.jobs.open_jobs(now).await?;
    let profile = SeekerProfile::from_user(&user);

    Ok(Json(rank_matches(&profile, jobs, now)))
}
