//! OSRM client error types.

/// Errors from OSRM route requests.
#[derive(Debug, thiserror::Error)]
pub enum OsrmError {
    /// HTTP transport error (after retries were exhausted).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },

    /// The service returned a non-2xx status.
    #[error("OSRM {endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The service answered but could not route between the points
    /// (`code` other than `"Ok"`, e.g. `NoRoute` or `NoSegment`).
    #[error("OSRM could not find a route: {0}")]
    NoRoute(String),

    /// Response body decoding failed.
    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        source: reqwest::Error,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

pub type OsrmResult<T> = Result<T, OsrmError>;
