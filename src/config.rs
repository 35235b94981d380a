use crate::{
    error::config::ConfigError,
    gateway::{DEFAULT_CLIENT_ID, DEFAULT_GATEWAY_URL},
};

pub struct Config {
    pub host: String,
    pub port: u16,
    pub gateway_url: String,
    pub gateway_client_id: String,
}

impl Config {
    /// Every key has a default, so an empty environment yields a working
    /// local configuration.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: format!("{:?} is not a valid port number", raw),
            })?,
            Err(_) => 3000,
        };

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            gateway_url: std::env::var("GATEWAY_URL")
                .unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string()),
            gateway_client_id: std::env::var("GATEWAY_CLIENT_ID")
                .unwrap_or_else(|_| DEFAULT_CLIENT_ID.to_string()),
        })
    }
}
