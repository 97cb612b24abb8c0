use crate::config::Config;
use crate::route_store::RouteStore;
use crate::user_store::UserDirectory;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteStore>,
    pub users: Arc<UserDirectory>,
    pub config: Arc<Config>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            routes: Arc::new(RouteStore::new()),
            users: Arc::new(UserDirectory::seeded()),
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    AppState::new(Config {
        environment: "test".to_string(),
        service_port: 3000,
        service_host: "0.0.0.0".to_string(),
    })
}
