//! `evr-osrm` — typed async client for the OSRM routing service.
//!
//! The toolkit's live routing path delegates road routing to an external
//! OSRM instance; this crate owns that boundary: request construction,
//! response decoding, timeout, and retry.  Everything it returns is already
//! converted to toolkit conventions ([`FetchedRoute`] with lat/lon points),
//! so no other crate needs to know the wire format.
//!
//! # Crate layout
//!
//! | Module     | Contents                                     |
//! |------------|----------------------------------------------|
//! | [`config`] | `OsrmConfig` — base URL, profile, timeouts   |
//! | [`types`]  | Wire types, `FetchedRoute`                   |
//! | [`error`]  | `OsrmError`, `OsrmResult<T>`                 |
//!
//! # Example
//!
//! ```no_run
//! use evr_core::GeoPoint;
//! use evr_osrm::{OsrmClient, OsrmConfig};
//!
//! # async fn demo() -> Result<(), evr_osrm::OsrmError> {
//! let client = OsrmClient::new(OsrmConfig::default())?;
//! let route = client
//!     .route(GeoPoint::new(28.6139, 77.2090), GeoPoint::new(28.6448, 77.2167))
//!     .await?;
//! println!("{} m in {} s", route.distance_m, route.duration_secs);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod types;

pub(crate) mod retry;

#[cfg(test)]
mod tests;

pub use config::OsrmConfig;
pub use error::{OsrmError, OsrmResult};
pub use types::FetchedRoute;

use std::time::Duration;

use evr_core::GeoPoint;

use crate::retry::retry_send;
use crate::types::RouteResponse;

/// OSRM `route/v1` client.
///
/// Cheap to clone; the inner `reqwest::Client` is reference-counted.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    http:   reqwest::Client,
    config: OsrmConfig,
}

impl OsrmClient {
    /// Create a client from configuration.  The request timeout is applied
    /// at the HTTP-client level and covers the whole request, per attempt.
    pub fn new(config: OsrmConfig) -> OsrmResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OsrmError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;
        Ok(Self { http, config })
    }

    /// Fetch a route between two points.
    ///
    /// Request shape: `{base}/route/v1/{profile}/{lon},{lat};{lon},{lat}`
    /// with `overview=full&geometries=geojson` — note the wire's lon-first
    /// coordinate order.
    ///
    /// Transport errors are retried with exponential backoff
    /// (`config.max_retries` attempts, then one final try); service-level
    /// failures are not.
    pub async fn route(&self, from: GeoPoint, to: GeoPoint) -> OsrmResult<FetchedRoute> {
        let endpoint = format!(
            "route/v1/{}/{},{};{},{}",
            self.config.profile, from.lon, from.lat, to.lon, to.lat
        );
        let url = self
            .config
            .base_url
            .join(&endpoint)
            .map_err(|e| OsrmError::Config(config::ConfigError::BadUrl(endpoint.clone(), e)))?;

        let response = retry_send(self.config.max_retries, || {
            self.http
                .get(url.clone())
                .query(&[("overview", "full"), ("geometries", "geojson")])
                .send()
        })
        .await
        .map_err(|e| OsrmError::Http {
            endpoint: endpoint.clone(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OsrmError::Api {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }

        let body: RouteResponse =
            response
                .json()
                .await
                .map_err(|e| OsrmError::Decode {
                    endpoint: endpoint.clone(),
                    source: e,
                })?;

        if body.code != "Ok" {
            return Err(OsrmError::NoRoute(body.code));
        }

        let first = body
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| OsrmError::NoRoute("empty routes array".into()))?;

        Ok(FetchedRoute::from(first))
    }
}
