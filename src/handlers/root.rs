use crate::models::{Envelope, RootData};
use crate::routes;
use axum::{
    extract::{ConnectInfo, Request},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use std::collections::BTreeMap;
use std::net::SocketAddr;

/// GET / handler - Echo request headers, host and client address
///
/// Useful for checking what a proxy in front of the service passes along.
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Request echo", body = Envelope<RootData>)
    ),
    tag = "info"
)]
pub async fn root_handler(request: Request) -> (StatusCode, Json<Envelope<RootData>>) {
    let headers = request.headers();
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    let data = RootData {
        headers: header_map(headers),
        hostname: headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .or_else(|| request.uri().authority().map(|a| a.to_string()))
            .unwrap_or_default(),
        remote_ip: client_ip(headers, peer),
    };

    (
        StatusCode::OK,
        Json(Envelope::message("Welcome to the route demo service!", Some(data))),
    )
}

fn header_map(headers: &HeaderMap) -> BTreeMap<String, Vec<String>> {
    let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in headers {
        map.entry(name.as_str().to_string())
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    map
}

/// Client address, preferring what a fronting proxy reports
fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty());

    let real_ip = headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|ip| !ip.is_empty());

    forwarded
        .or(real_ip)
        .map(str::to_string)
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_default()
}
