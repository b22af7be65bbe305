use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::config::AppState;
use crate::handlers::{health_check, list_jobs, list_jobs_by_status, submit_jobs};
use crate::middleware::require_credential;

/// Create API router
pub fn create_router(state: AppState) -> Router {
    // Health check route (outside /api/v1)
    let health_routes = Router::new()
        .route("/health", get(health_check));

    // Submission needs the credential; listing is public
    let submit = post(submit_jobs).route_layer(middleware::from_fn(require_credential));

    let job_routes = Router::new()
        .route("/jobs", get(list_jobs).merge(submit))
        .route("/jobs/:status", get(list_jobs_by_status));

    Router::new()
        .merge(health_routes)
        .nest("/api/v1", job_routes)
        .with_state(state)
}
