use crate::error::config::ConfigError;

static DEFAULT_LOG_LEVEL: &str = "info";

pub struct Config {
    pub database_url: String,
    pub database_max_connections: Option<u32>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let database_max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => Some(value.parse::<u32>().map_err(|e| {
                ConfigError::InvalidEnvValue {
                    var: "DATABASE_MAX_CONNECTIONS".to_string(),
                    reason: e.to_string(),
                }
            })?),
            Err(_) => None,
        };

        let log_level =
            std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            database_url,
            database_max_connections,
            log_level,
        })
    }
}
