pub mod dynamic_routes;
pub mod fallback;
pub mod health;
pub mod info;
pub mod root;
pub mod users;

pub use dynamic_routes::{create_route_handler, delete_route_handler, list_routes_handler};
pub use fallback::fallback_handler;
pub use health::health_handler;
pub use info::info_handler;
pub use root::root_handler;
pub use users::{create_user_handler, get_user_handler, list_users_handler};

#[cfg(test)]
pub(crate) mod test_util {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;

    use crate::app::build_router;
    use crate::state::{test_state, AppState};

    pub fn setup_test_app() -> (Router, AppState) {
        let state = test_state();
        (build_router(state.clone()), state)
    }

    pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    pub async fn send_json<T: DeserializeOwned>(
        app: &Router,
        request: Request<Body>,
    ) -> (StatusCode, T) {
        let (status, body) = send(app, request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    pub fn delete(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap()
    }
}
