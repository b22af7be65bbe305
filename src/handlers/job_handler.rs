use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::config::AppState;
use crate::dto::NewJobRequest;
use crate::interceptors::{AppError, AppResult, Created};
use crate::queue::{Job, JobFilter};

/// List every job: processed first, then pending
pub async fn list_jobs(State(state): State<AppState>) -> Json<Vec<Job>> {
    Json(state.jobs.list(JobFilter::All).await)
}

/// List jobs by status; unknown statuses list everything
pub async fn list_jobs_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Json<Vec<Job>> {
    Json(state.jobs.list(JobFilter::from_status(&status)).await)
}

/// Queue a batch of jobs. The credential is checked by
/// `require_credential` before this runs. A `null` body is an empty batch.
pub async fn submit_jobs(
    State(state): State<AppState>,
    payload: Result<Json<Option<Vec<NewJobRequest>>>, JsonRejection>,
) -> AppResult<Created> {
    let Json(requests) = payload.map_err(|e| AppError::MalformedBody(e.body_text()))?;
    let requests = requests.unwrap_or_default();

    let mut ids = Vec::with_capacity(requests.len());
    for request in requests {
        ids.push(state.jobs.submit(request.name, request.data).await);
    }

    tracing::info!("Queued {} job(s): {:?}", ids.len(), ids);
    Ok(Created::default())
}
