use crate::models::{now_rfc3339, HealthResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /health handler - Health check endpoint
///
/// All state is in memory, so a running process is always healthy. Reports
/// seconds elapsed since startup.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let uptime = state.started_at.elapsed().as_secs_f64();
    tracing::debug!("Health check passed (uptime {:.3}s)", uptime);

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            uptime,
            timestamp: now_rfc3339(),
        }),
    )
}
