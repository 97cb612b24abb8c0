use axum::{
    extract::Request,
    http::{header, Method},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Router,
};
use std::any::Any;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::error::ApiError;
use crate::handlers::{
    create_route_handler, create_user_handler, delete_route_handler, fallback_handler,
    get_user_handler, health_handler, info_handler, list_routes_handler, list_users_handler,
    root_handler,
};
use crate::routes;
use crate::state::AppState;

/// Build the application router: static endpoints first, everything else
/// goes to the dynamic route fallback.
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route(routes::ROOT, get(root_handler))
        .route(routes::HEALTH, get(health_handler))
        .route(routes::API_INFO, get(info_handler))
        .route(routes::USERS, get(list_users_handler).post(create_user_handler))
        .route(routes::USER_ITEM, get(get_user_handler))
        .route(
            routes::DYNAMIC_ROUTES,
            get(list_routes_handler).post(create_route_handler),
        )
        .route(routes::DYNAMIC_ROUTE_ITEM, delete(delete_route_handler))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .fallback(fallback_handler)
        // A known path with an unregistered method is still a miss.
        .method_not_allowed_fallback(fallback_handler);

    with_middleware(router).with_state(state)
}

/// Wrap a router in the shared middleware stack (outermost first)
fn with_middleware(router: Router<AppState>) -> Router<AppState> {
    router.layer(
        ServiceBuilder::new()
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(cors_layer())
            .layer(middleware::from_fn(log_request)),
    )
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
}

async fn log_request(request: Request, next: Next) -> Response {
    tracing::info!(method = %request.method(), path = %request.uri().path(), "Incoming request");
    tracing::debug!(headers = ?request.headers(), "Request headers");
    next.run(request).await
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::from(anyhow::anyhow!("handler panicked: {}", details)).into_response()
}
