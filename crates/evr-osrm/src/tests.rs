//! Unit tests for the OSRM client, run against a local mock server.

#[cfg(test)]
mod client {
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use evr_core::GeoPoint;

    use crate::{OsrmClient, OsrmConfig, OsrmError};

    fn test_config(server: &MockServer) -> OsrmConfig {
        OsrmConfig {
            base_url: Url::parse(&server.uri()).unwrap(),
            profile: "driving".to_owned(),
            timeout_secs: 5,
            max_retries: 0,
        }
    }

    fn ok_body() -> serde_json::Value {
        json!({
            "code": "Ok",
            "routes": [{
                "distance": 3200.0,
                "duration": 480.0,
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[77.25, 28.5], [77.375, 28.625], [77.5, 28.75]]
                }
            }]
        })
    }

    #[tokio::test]
    async fn happy_path_decodes_and_flips_coordinates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/route/v1/driving/77.25,28.5;77.5,28.75"))
            .and(query_param("overview", "full"))
            .and(query_param("geometries", "geojson"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
            .mount(&server)
            .await;

        let client = OsrmClient::new(test_config(&server)).unwrap();
        let route = client
            .route(GeoPoint::new(28.5, 77.25), GeoPoint::new(28.75, 77.5))
            .await
            .unwrap();

        assert_eq!(route.distance_m, 3200.0);
        assert_eq!(route.duration_secs, 480.0);
        // Wire order is lon,lat; domain order is lat,lon.
        assert_eq!(route.points[0], GeoPoint::new(28.5, 77.25));
        assert_eq!(route.points[2], GeoPoint::new(28.75, 77.5));
    }

    #[tokio::test]
    async fn non_ok_code_is_no_route() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"code": "NoRoute", "routes": []})),
            )
            .mount(&server)
            .await;

        let client = OsrmClient::new(test_config(&server)).unwrap();
        let result = client
            .route(GeoPoint::new(28.5, 77.25), GeoPoint::new(28.75, 77.5))
            .await;

        assert!(matches!(result, Err(OsrmError::NoRoute(code)) if code == "NoRoute"));
    }

    #[tokio::test]
    async fn server_error_surfaces_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("routing engine down"))
            .mount(&server)
            .await;

        let client = OsrmClient::new(test_config(&server)).unwrap();
        let result = client
            .route(GeoPoint::new(28.5, 77.25), GeoPoint::new(28.75, 77.5))
            .await;

        match result {
            Err(OsrmError::Api { status, body, .. }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "routing engine down");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = OsrmClient::new(test_config(&server)).unwrap();
        let result = client
            .route(GeoPoint::new(28.5, 77.25), GeoPoint::new(28.75, 77.5))
            .await;

        assert!(matches!(result, Err(OsrmError::Decode { .. })));
    }

    #[tokio::test]
    async fn empty_routes_array_is_no_route() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"code": "Ok", "routes": []})),
            )
            .mount(&server)
            .await;

        let client = OsrmClient::new(test_config(&server)).unwrap();
        let result = client
            .route(GeoPoint::new(28.5, 77.25), GeoPoint::new(28.75, 77.5))
            .await;

        assert!(matches!(result, Err(OsrmError::NoRoute(_))));
    }
}

#[cfg(test)]
mod config {
    use crate::OsrmConfig;

    #[test]
    fn defaults_point_at_public_server() {
        let cfg = OsrmConfig::default();
        assert_eq!(cfg.base_url.as_str(), "https://router.project-osrm.org/");
        assert_eq!(cfg.profile, "driving");
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.max_retries, 3);
    }
}
