//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local runs.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL the JSON datasets are served from (e.g. `https://host/data`)
    pub data_base_url: String,
    /// Nominatim-compatible geocoding endpoint for place search
    pub geocoder_url: String,
    /// Budget for each dataset fetch; a slow auxiliary source is dropped
    pub fetch_timeout: Duration,
    /// Directory the rendered scene is written to
    pub output_dir: PathBuf,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            data_base_url: "http://localhost:5173/data".to_string(),
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            output_dir: PathBuf::from("dist"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(true)
    }

    /// Load configuration for place search, which never touches the data
    /// host; `DATA_BASE_URL` is optional here.
    pub fn search_from_env() -> Result<Self, ConfigError> {
        Self::load(false)
    }

    fn load(require_data_host: bool) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let fetch_timeout = match env::var("FETCH_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(ConfigError::Invalid("FETCH_TIMEOUT_SECS", raw))?,
            Err(_) => Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        };

        Ok(Self {
            data_base_url: match env::var("DATA_BASE_URL") {
                Ok(v) => v.trim().trim_end_matches('/').to_string(),
                Err(_) if require_data_host => return Err(ConfigError::Missing("DATA_BASE_URL")),
                Err(_) => String::new(),
            },
            geocoder_url: env::var("GEOCODER_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_GEOCODER_URL.to_string()),
            fetch_timeout,
            output_dir: env::var("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("dist")),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
