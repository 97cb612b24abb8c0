use crate::error::{ApiError, ErrorResponse};
use crate::models::{CreateRouteRequest, Envelope};
use crate::route_store::DynamicRoute;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

/// GET /routes handler - List registered dynamic routes in registration order
#[utoipa::path(
    get,
    path = routes::DYNAMIC_ROUTES,
    responses(
        (status = 200, description = "All dynamic routes", body = Envelope<Vec<DynamicRoute>>)
    ),
    tag = "routes"
)]
pub async fn list_routes_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<Envelope<Vec<DynamicRoute>>>) {
    let routes = state.routes.list();
    tracing::debug!("Listed {} dynamic routes", routes.len());

    (StatusCode::OK, Json(Envelope::data(routes)))
}

/// POST /routes handler - Register a dynamic route
///
/// `path` and `target` are required; `desc` is optional. A path can only be
/// registered once.
#[utoipa::path(
    post,
    path = routes::DYNAMIC_ROUTES,
    request_body = CreateRouteRequest,
    responses(
        (status = 201, description = "Route registered", body = Envelope<DynamicRoute>),
        (status = 400, description = "Invalid body or missing path/target", body = ErrorResponse),
        (status = 409, description = "Path already registered", body = ErrorResponse)
    ),
    tag = "routes"
)]
pub async fn create_route_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateRouteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<DynamicRoute>>), ApiError> {
    let Json(request) = payload?;

    if request.path.is_empty() || request.target.is_empty() {
        tracing::warn!("Rejected dynamic route: path and target are required");
        return Err(ApiError::BadRequest("path and target are required".to_string()));
    }

    let route = state
        .routes
        .insert(request.path, request.target, request.desc)
        .inspect_err(|err| tracing::warn!("Rejected dynamic route: {}", err))?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::message("Route added", Some(route))),
    ))
}

/// DELETE /routes/{id} handler - Remove a dynamic route
///
/// The success envelope carries only a message; `data` is omitted.
#[utoipa::path(
    delete,
    path = routes::DYNAMIC_ROUTE_ITEM,
    params(
        ("id" = String, Path, description = "Integer route id")
    ),
    responses(
        (status = 200, description = "Route deleted", body = Envelope<DynamicRoute>),
        (status = 400, description = "Route id is not an integer", body = ErrorResponse),
        (status = 404, description = "Route not found", body = ErrorResponse)
    ),
    tag = "routes"
)]
pub async fn delete_route_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Envelope<DynamicRoute>>), ApiError> {
    let id = id_str
        .parse::<i64>()
        .map_err(|_| ApiError::InvalidRouteId(id_str.clone()))?;

    state.routes.delete(id)?;

    Ok((StatusCode::OK, Json(Envelope::message("Route deleted", None))))
}
