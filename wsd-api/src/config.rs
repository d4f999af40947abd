//! Endpoint configuration shared by the web app and the CLI.

use crate::error::ApiError;

/// Base URL of the destinations REST API.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api/v1";

/// Base URL of the public Nominatim instance used for reverse geocoding.
pub const DEFAULT_GEOCODER_BASE: &str = "https://nominatim.openstreetmap.org";

/// Sent on native builds; Nominatim rejects requests without one.
#[cfg(not(target_arch = "wasm32"))]
const USER_AGENT: &str = concat!("wsd-explorer/", env!("CARGO_PKG_VERSION"));

#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Where to send requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_base: String,
    pub geocoder_base: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_GEOCODER_BASE)
    }
}

impl ApiConfig {
    /// Build a config, trimming trailing slashes so paths join cleanly.
    pub fn new(api_base: &str, geocoder_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            geocoder_base: geocoder_base.trim_end_matches('/').to_string(),
        }
    }

    /// Config for the browser build. `WSD_API_BASE` and `WSD_GEOCODER_BASE`
    /// are read at compile time since there is no process environment in WASM.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("WSD_API_BASE").unwrap_or(DEFAULT_API_BASE),
            option_env!("WSD_GEOCODER_BASE").unwrap_or(DEFAULT_GEOCODER_BASE),
        )
    }
}

/// Build the reqwest client used for both the API and the geocoder.
pub fn build_http_client() -> Result<reqwest::Client, ApiError> {
    #[cfg(not(target_arch = "wasm32"))]
    let builder = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS));
    #[cfg(target_arch = "wasm32")]
    let builder = reqwest::Client::builder();

    Ok(builder.build()?)
}
