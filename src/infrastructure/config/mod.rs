use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::error::{AppError, Result};

pub const ENV_PREFIX: &str = "CSV_NORMALIZER_";
pub const CONFIG_PATH_ENV: &str = "CSV_NORMALIZER_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "csv-normalizer.toml";

/// Server settings: defaults, then the TOML file, then `CSV_NORMALIZER_*`
/// environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Settings {
    #[validate(length(min = 1, message = "host must not be empty"))]
    pub host: String,

    #[validate(range(min = 1, message = "port must be > 0"))]
    pub port: u16,

    /// Default tracing filter when `RUST_LOG` is not set
    #[validate(length(min = 1, message = "log_level must not be empty"))]
    pub log_level: String,

    /// Maximum accepted JSON request body
    #[validate(range(min = 1, message = "payload_limit_bytes must be > 0"))]
    pub payload_limit_bytes: usize,

    /// Worker threads; actix-web picks one per core when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 512, message = "workers must be between 1 and 512"))]
    pub workers: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            payload_limit_bytes: 10 * 1024 * 1024,
            workers: None,
        }
    }
}

impl Settings {
    /// Load `.env`, then resolve and validate settings
    pub fn load() -> Result<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();
        Self::from_figment(Self::figment())
    }

    pub fn figment() -> Figment {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["config"]))
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let settings: Settings = figment
            .extract()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        settings
            .validate()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        Ok(settings)
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
