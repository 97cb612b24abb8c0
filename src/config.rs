use std::env;
use anyhow::{Context, Result};

use crate::routes;

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let environment = env::var("NODE_ENV")
            .ok()
            .filter(|env| !env.is_empty())
            .unwrap_or_else(|| "development".to_string());

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            environment,
            service_port,
            service_host,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        let base = format!("http://{}", self.bind_addr());
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.environment);
        tracing::info!("  Service listening on: {}", base);
        tracing::info!("  Health check: {}{}", base, routes::HEALTH);
        tracing::info!("  API info: {}{}", base, routes::API_INFO);
        tracing::info!("  Users: {}{}", base, routes::USERS);
        tracing::info!("  Dynamic routes: {}{}", base, routes::DYNAMIC_ROUTES);
        tracing::info!("  API docs: {}{}", base, routes::SWAGGER_UI);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Tests in this module mutate process-wide environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env_vars() {
        unsafe {
            env::remove_var("NODE_ENV");
            env::remove_var("SERVICE_PORT");
            env::remove_var("SERVICE_HOST");
        }
    }

    #[test]
    fn test_config_with_all_vars() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();
        unsafe {
            env::set_var("NODE_ENV", "production");
            env::set_var("SERVICE_PORT", "8080");
            env::set_var("SERVICE_HOST", "127.0.0.1");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.environment, "production");
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "127.0.0.1");
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        clear_env_vars();
    }

    #[test]
    fn test_config_with_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();

        let config = Config::from_env().unwrap();

        assert_eq!(config.environment, "development");
        assert_eq!(config.service_port, 3000);
        assert_eq!(config.service_host, "0.0.0.0");
    }

    #[test]
    fn test_empty_environment_falls_back_to_development() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();
        unsafe {
            env::set_var("NODE_ENV", "");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.environment, "development");
        clear_env_vars();
    }

    #[test]
    fn test_invalid_port() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "not-a-number");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
        clear_env_vars();
    }

    #[test]
    fn test_port_out_of_range() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "99999");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        clear_env_vars();
    }
}
