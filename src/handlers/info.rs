use crate::models::ApiInfo;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/info handler - Service name, version and environment
#[utoipa::path(
    get,
    path = routes::API_INFO,
    responses(
        (status = 200, description = "Service information", body = ApiInfo)
    ),
    tag = "info"
)]
pub async fn info_handler(State(state): State<AppState>) -> (StatusCode, Json<ApiInfo>) {
    (
        StatusCode::OK,
        Json(ApiInfo {
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: state.config.environment.clone(),
        }),
    )
}
