use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::route_store::DynamicRoute;
use crate::user_store::User;

/// Current time as an RFC 3339 UTC timestamp
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Common response wrapper shared by every enveloped endpoint
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Envelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn data(data: T) -> Self {
        Self {
            message: None,
            data: Some(data),
            timestamp: now_rfc3339(),
            error: None,
        }
    }

    pub fn message(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            message: Some(message.into()),
            data,
            timestamp: now_rfc3339(),
            error: None,
        }
    }
}

/// Request body for registering a dynamic route
#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateRouteRequest {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub desc: String,
}

/// Payload returned when an unmatched request hits a registered dynamic route
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ForwardedRoute {
    pub path: String,
    pub target: String,
    pub desc: String,
}

impl From<DynamicRoute> for ForwardedRoute {
    fn from(route: DynamicRoute) -> Self {
        Self {
            path: route.path,
            target: route.target,
            desc: route.desc,
        }
    }
}

/// Payload attached to the 404 returned when no dynamic route matches
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnmatchedRequest {
    pub path: String,
    pub method: String,
}

/// Request body for creating a user
#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserListData {
    pub users: Vec<User>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserData {
    pub user: User,
}

/// Request echo returned by the root endpoint
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RootData {
    pub headers: BTreeMap<String, Vec<String>>,
    pub hostname: String,
    #[serde(rename = "remoteIP")]
    pub remote_ip: String,
}

/// Response type for health check endpoint
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Seconds since the process started
    pub uptime: f64,
    pub timestamp: String,
}

/// Response type for service info endpoint
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApiInfo {
    pub service: String,
    pub version: String,
    pub environment: String,
}
