use crate::error::config::ConfigError;

pub struct Config {
    pub bind_address: String,
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_address: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:8000".to_string()),
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
        })
    }
}
