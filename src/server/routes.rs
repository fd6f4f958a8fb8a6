//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::catalog::Listing;
use crate::error::Error;
use crate::resolve::Resolution;
use crate::server::state::AppState;

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/find-nearby", post(find_nearby_handler))
        .route("/api/status", get(status_handler))
        .route("/api/catalog", get(catalog_handler))
        .with_state(state)
}

/// Find-nearby request body
#[derive(Debug, Deserialize)]
pub struct FindNearbyRequest {
    /// The location reference: a map-share URL or Plus Code
    pub url: String,
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::InvalidInput(_) => "INVALID_INPUT",
            Error::NoCoordinateFound => "NO_COORDINATE_FOUND",
            Error::Geocode(_) => "GEOCODE_ERROR",
            Error::InvalidCoordinates(_) => "INVALID_COORDINATES",
            _ => "INTERNAL_ERROR",
        };
        // Geocoder detail stays in the logs; callers get the generic
        // resolution failure
        let error = match &err {
            Error::Geocode(detail) => {
                tracing::warn!("geocoding failed: {}", detail);
                Error::NoCoordinateFound.to_string()
            }
            _ => err.to_string(),
        };
        ApiError {
            error,
            code: code.to_string(),
        }
    }
}

/// Resolve a location reference and list nearby listings
///
/// POST /api/find-nearby
async fn find_nearby_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FindNearbyRequest>, JsonRejection>,
) -> Result<Json<Resolution>, ApiError> {
    // A body that doesn't deserialize (bad JSON, missing `url`) is a
    // malformed request, reported in the same JSON error shape
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!("malformed find-nearby body: {}", rejection);
        ApiError {
            error: "invalid request".to_string(),
            code: "INVALID_INPUT".to_string(),
        }
    })?;

    let resolution = state.resolver().resolve(&req.url).await.map_err(ApiError::from)?;
    Ok(Json(resolution))
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Number of catalog listings
    pub catalog_size: usize,
    /// Nearby radius in kilometers
    pub radius_km: f64,
    /// Geocoding provider in use
    pub geocoder: String,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_size: state.catalog.len(),
        radius_km: state.config.nearby.radius_km,
        geocoder: state.geocoder_name.to_string(),
    })
}

/// Catalog list response
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub listings: Vec<Listing>,
    pub count: usize,
}

/// List the catalog in use
///
/// GET /api/catalog
async fn catalog_handler(State(state): State<Arc<AppState>>) -> Json<CatalogResponse> {
    let listings = state.catalog.listings().to_vec();
    let count = listings.len();
    Json(CatalogResponse { listings, count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Config;
    use crate::geocode::testing::{FailingGeocoder, FixedGeocoder};
    use crate::geocode::Geocoder;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_state(geocoder: Arc<dyn Geocoder>) -> Arc<AppState> {
        Arc::new(AppState::with_parts(
            Config::default(),
            Arc::new(Catalog::builtin()),
            geocoder,
        ))
    }

    fn find_nearby_request(url: &str) -> Request<Body> {
        let body = serde_json::json!({ "url": url });
        Request::builder()
            .method("POST")
            .uri("/api/find-nearby")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let app = create_router(test_state(Arc::new(FailingGeocoder)));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let status: StatusResponse = serde_json::from_slice(&body).unwrap();

        assert!(status.running);
        assert_eq!(status.catalog_size, 2);
        assert_eq!(status.radius_km, 5.0);
    }

    #[tokio::test]
    async fn test_catalog_endpoint() {
        let app = create_router(test_state(Arc::new(FailingGeocoder)));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/catalog")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let catalog: CatalogResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(catalog.count, 2);
        assert_eq!(catalog.listings[0].title, "Kabarak University Town Campus");
    }

    #[tokio::test]
    async fn test_find_nearby_at_sign_url() {
        let app = create_router(test_state(Arc::new(FailingGeocoder)));

        let response = app
            .oneshot(find_nearby_request(
                "https://maps.google/maps/@-0.2838,36.0725,15z",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let resolution: Resolution = serde_json::from_slice(&body).unwrap();

        assert_eq!(resolution.lat, -0.2838);
        assert_eq!(resolution.lng, 36.0725);
        assert_eq!(resolution.nearby[0].id, 1);
        assert_eq!(resolution.nearby[0].distance_km, 0.0);
    }

    #[tokio::test]
    async fn test_find_nearby_via_fallback() {
        let geocoder = Arc::new(FixedGeocoder::single(-0.2736, 36.1121, "Hyrax Hill"));
        let app = create_router(test_state(geocoder));

        let response = app
            .oneshot(find_nearby_request(
                "https://maps.google/maps/place/Hyrax+Hill+Museum",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let resolution: Resolution = serde_json::from_slice(&body).unwrap();

        assert_eq!(resolution.lat, -0.2736);
        assert!(!resolution.nearby.is_empty());
    }

    #[tokio::test]
    async fn test_find_nearby_unresolvable() {
        let app = create_router(test_state(Arc::new(FailingGeocoder)));

        let response = app
            .oneshot(find_nearby_request("https://maps.google/maps/directions"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let err: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(err.code, "NO_COORDINATE_FOUND");
        assert_eq!(err.error, "could not extract or find coordinates");
    }

    #[tokio::test]
    async fn test_find_nearby_empty_input() {
        let app = create_router(test_state(Arc::new(FailingGeocoder)));

        let response = app.oneshot(find_nearby_request("   ")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let err: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(err.code, "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_find_nearby_malformed_body() {
        let app = create_router(test_state(Arc::new(FailingGeocoder)));

        // Valid JSON, but no "url" field
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/find-nearby")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let err: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(err.error, "invalid request");
        assert_eq!(err.code, "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_find_nearby_invalid_json() {
        let app = create_router(test_state(Arc::new(FailingGeocoder)));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/find-nearby")
                    .header("Content-Type", "application/json")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let err: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(err.error, "invalid request");
    }

    #[tokio::test]
    async fn test_find_nearby_geocoder_failure_is_generic() {
        let app = create_router(test_state(Arc::new(FailingGeocoder)));

        let response = app
            .oneshot(find_nearby_request("https://maps.google/maps/place/Nakuru"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let err: ApiError = serde_json::from_slice(&body).unwrap();

        // Provider detail is not passed through verbatim
        assert_eq!(err.code, "GEOCODE_ERROR");
        assert_eq!(err.error, "could not extract or find coordinates");
    }
}
