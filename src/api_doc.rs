use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{
    ApiInfo, CreateRouteRequest, CreateUserRequest, ForwardedRoute, HealthResponse, RootData,
    UnmatchedRequest, UserData, UserListData,
};
use crate::route_store::DynamicRoute;
use crate::user_store::User;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "route-demo API",
        version = "0.1.0",
        description = "Demo service with an in-memory dynamic route table"
    ),
    paths(
        handlers::root::root_handler,
        handlers::health::health_handler,
        handlers::info::info_handler,
        handlers::users::list_users_handler,
        handlers::users::get_user_handler,
        handlers::users::create_user_handler,
        handlers::dynamic_routes::list_routes_handler,
        handlers::dynamic_routes::create_route_handler,
        handlers::dynamic_routes::delete_route_handler
    ),
    components(
        schemas(
            DynamicRoute,
            CreateRouteRequest,
            ForwardedRoute,
            UnmatchedRequest,
            User,
            CreateUserRequest,
            UserData,
            UserListData,
            RootData,
            HealthResponse,
            ApiInfo,
            ErrorResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "info", description = "Service and request information"),
        (name = "users", description = "Demo user operations"),
        (
            name = "routes",
            description = "Dynamic route table. Requests no static route claims (any method, \
                           any path) are matched exactly against registered paths: a hit \
                           returns 200 with ForwardedRoute, a miss 404 with UnmatchedRequest."
        )
    )
)]
pub struct ApiDoc;
