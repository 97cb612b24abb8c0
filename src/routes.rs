// Route path constants - single source of truth for all statically registered paths.
// Anything not listed here is handed to the dynamic route fallback.

pub const ROOT: &str = "/";
pub const HEALTH: &str = "/health";
pub const API_INFO: &str = "/api/info";
pub const USERS: &str = "/api/users";
pub const USER_ITEM: &str = "/api/users/{id}";
pub const DYNAMIC_ROUTES: &str = "/routes";
pub const DYNAMIC_ROUTE_ITEM: &str = "/routes/{id}";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
