use crate::error::{ApiError, ErrorResponse};
use crate::models::{CreateUserRequest, Envelope, UserData, UserListData};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

/// GET /api/users handler - List all users
#[utoipa::path(
    get,
    path = routes::USERS,
    responses(
        (status = 200, description = "All users ordered by id", body = Envelope<UserListData>)
    ),
    tag = "users"
)]
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<Envelope<UserListData>>) {
    let users = state.users.list();
    let count = users.len();

    (StatusCode::OK, Json(Envelope::data(UserListData { users, count })))
}

/// GET /api/users/{id} handler - Retrieve a single user
///
/// An id that is not an integer can never match a user, so it is reported as
/// not found rather than as a bad request.
#[utoipa::path(
    get,
    path = routes::USER_ITEM,
    params(
        ("id" = String, Path, description = "Integer user id")
    ),
    responses(
        (status = 200, description = "User found", body = Envelope<UserData>),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Envelope<UserData>>), ApiError> {
    let user = id_str
        .parse::<i64>()
        .ok()
        .and_then(|id| state.users.get(id))
        .ok_or_else(|| ApiError::UserNotFound(id_str.clone()))?;

    Ok((StatusCode::OK, Json(Envelope::data(UserData { user }))))
}

/// POST /api/users handler - Create a user
///
/// The new user gets the next free id and is visible to later reads.
#[utoipa::path(
    post,
    path = routes::USERS,
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = Envelope<UserData>),
        (status = 400, description = "Invalid body or missing name/email", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn create_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<UserData>>), ApiError> {
    let Json(request) = payload?;

    if request.name.is_empty() || request.email.is_empty() {
        tracing::warn!("Rejected user creation: name and email are required");
        return Err(ApiError::BadRequest("name and email are required".to_string()));
    }

    let user = state.users.create(request.name, request.email);

    Ok((
        StatusCode::CREATED,
        Json(Envelope::message("User created", Some(UserData { user }))),
    ))
}
