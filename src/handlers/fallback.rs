use crate::error::ApiError;
use crate::models::{Envelope, ForwardedRoute};
use crate::state::AppState;
use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    Json,
};
use percent_encoding::percent_decode_str;
use std::borrow::Cow;

/// Fallback handler for any request no static route claims
///
/// Looks the percent-decoded request path up in the dynamic route table (exact
/// match, query string excluded). A hit returns a simulated forward naming the
/// target; no traffic is ever sent to it. Serves every method at every depth,
/// so it is described on the `routes` tag rather than as an OpenAPI path.
pub async fn fallback_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<(StatusCode, Json<Envelope<ForwardedRoute>>), ApiError> {
    let path = decoded_path(&uri);

    match state.routes.find_by_path(&path) {
        Some(route) => {
            tracing::info!(
                id = route.id,
                path = %route.path,
                target = %route.target,
                "Dynamic route matched, simulating forward"
            );
            Ok((
                StatusCode::OK,
                Json(Envelope::message(
                    "Matched dynamic route, simulated forward to target service",
                    Some(ForwardedRoute::from(route)),
                )),
            ))
        }
        None => {
            tracing::debug!(method = %method, path = %path, "No route matched");
            Err(ApiError::NoRoute {
                method: method.to_string(),
                path: path.into_owned(),
            })
        }
    }
}

/// Request path with percent-escapes decoded; the raw path if the result is not UTF-8
fn decoded_path(uri: &Uri) -> Cow<'_, str> {
    let raw = uri.path();
    percent_decode_str(raw)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(raw))
}
