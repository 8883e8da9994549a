//! CORS layer for the browser frontend.

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

/// Build the CORS layer from configured origins. `*` allows any origin.
pub fn create_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();

    cors.allow_origin(origins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    fn app(origins: &[String]) -> Router {
        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(create_cors_layer(origins))
    }

    fn request(origin: &str) -> Request<Body> {
        Request::builder()
            .uri("/ping")
            .header("Origin", origin)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_wildcard_allows_any_origin() {
        let response = app(&["*".to_string()])
            .oneshot(request("https://anywhere.example"))
            .await
            .unwrap();

        assert_eq!(
            response.headers()["access-control-allow-origin"],
            HeaderValue::from_static("*")
        );
    }

    #[tokio::test]
    async fn test_specific_origins() {
        let origins = vec!["https://solar.example.com".to_string()];

        let response = app(&origins)
            .oneshot(request("https://solar.example.com"))
            .await
            .unwrap();
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "https://solar.example.com"
        );

        let response = app(&origins)
            .oneshot(request("https://evil.example"))
            .await
            .unwrap();
        assert!(response
            .headers()
            .get("access-control-allow-origin")
            .is_none());
    }
}
