//! OSRM client configuration.
//!
//! Defaults point at the public demo server.  Override via environment
//! variables or explicit construction for a self-hosted instance or for
//! testing against a mock server.

use url::Url;

/// Configuration for connecting to an OSRM `route/v1` service.
#[derive(Clone, Debug)]
pub struct OsrmConfig {
    /// Service base URL.  Default: <https://router.project-osrm.org>
    pub base_url: Url,
    /// Routing profile segment of the request path (`driving`, `walking`…).
    pub profile: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Retry attempts on transport errors before the final try.
    pub max_retries: u32,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://router.project-osrm.org")
                .expect("static default URL"),
            profile: "driving".to_owned(),
            timeout_secs: 30,
            max_retries: 3,
        }
    }
}

impl OsrmConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults above.
    ///
    /// Variables:
    /// - `EVR_OSRM_URL` (default: `https://router.project-osrm.org`)
    /// - `EVR_OSRM_PROFILE` (default: `driving`)
    /// - `EVR_OSRM_TIMEOUT_SECS` (default: 30)
    /// - `EVR_OSRM_MAX_RETRIES` (default: 3)
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let base_url = match std::env::var("EVR_OSRM_URL") {
            Ok(raw) => Url::parse(&raw).map_err(|e| ConfigError::BadUrl(raw, e))?,
            Err(_) => defaults.base_url,
        };

        let timeout_secs = match std::env::var("EVR_OSRM_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::BadNumber("EVR_OSRM_TIMEOUT_SECS", raw))?,
            Err(_) => defaults.timeout_secs,
        };

        let max_retries = match std::env::var("EVR_OSRM_MAX_RETRIES") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::BadNumber("EVR_OSRM_MAX_RETRIES", raw))?,
            Err(_) => defaults.max_retries,
        };

        Ok(Self {
            base_url,
            profile: std::env::var("EVR_OSRM_PROFILE").unwrap_or(defaults.profile),
            timeout_secs,
            max_retries,
        })
    }
}

/// Configuration parsing failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL '{0}': {1}")]
    BadUrl(String, url::ParseError),

    #[error("invalid value for {0}: '{1}'")]
    BadNumber(&'static str, String),
}
