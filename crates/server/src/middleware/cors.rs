//! # CORS Middleware
//!
//! Cross-origin request handling for the browser frontend. Origins are an
//! explicit allow-list; preflight (OPTIONS) requests are answered here.

use axum::{
    body::Body,
    extract::Request,
    http::{self, header::HeaderName, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// CORS configuration for the API
#[derive(Clone, Debug)]
pub struct CorsConfig {
    /// Allowed origins; `*` allows any, `*.domain` allows subdomains
    pub allowed_origins: Vec<String>,
    /// Allowed HTTP methods
    pub allowed_methods: Vec<http::Method>,
    /// Request headers the server will accept
    pub allowed_headers: Vec<String>,
    /// Whether to allow credentials
    pub allow_credentials: bool,
    /// Maximum age for preflight cache (seconds)
    pub max_age: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            // The dev frontend origin; production deployments override via env
            allowed_origins: vec!["http://localhost:5173".to_string()],
            allowed_methods: vec![
                http::Method::GET,
                http::Method::POST,
                http::Method::DELETE,
                http::Method::OPTIONS,
            ],
            allowed_headers: vec![
                "Content-Type".to_string(),
                "Authorization".to_string(),
                "Accept".to_string(),
            ],
            allow_credentials: true,
            max_age: 3600,
        }
    }
}

impl CorsConfig {
    /// Build the configuration from `WARREN_CORS_*` environment variables,
    /// falling back to the defaults per field.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            allowed_origins: std::env::var("WARREN_CORS_ALLOWED_ORIGINS")
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(defaults.allowed_origins),
            allowed_methods: std::env::var("WARREN_CORS_ALLOWED_METHODS")
                .map(|v| {
                    v.split(',')
                        .filter_map(|s| s.trim().parse().ok())
                        .collect()
                })
                .unwrap_or(defaults.allowed_methods),
            allowed_headers: std::env::var("WARREN_CORS_ALLOWED_HEADERS")
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(defaults.allowed_headers),
            allow_credentials: std::env::var("WARREN_CORS_ALLOW_CREDENTIALS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.allow_credentials),
            max_age: std::env::var("WARREN_CORS_MAX_AGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_age),
        }
    }
}

/// Check if an origin is allowed
fn is_origin_allowed(origin: &str, allowed_origins: &[String]) -> bool {
    allowed_origins.iter().any(|allowed| {
        if allowed == "*" {
            true
        }
        else if let Some(suffix) = allowed.strip_prefix('*') {
            origin.ends_with(suffix)
        }
        else {
            origin == allowed
        }
    })
}

/// Safely insert a header value, returning true on success
fn insert_header(headers: &mut http::HeaderMap, name: &str, value: &str) -> bool {
    if let (Ok(name), Ok(value)) = (
        name.parse::<HeaderName>(),
        value.parse::<http::HeaderValue>(),
    ) {
        headers.insert(name, value);
        true
    }
    else {
        tracing::warn!("Failed to insert header: {} = {}", name, value);
        false
    }
}

/// CORS middleware.
///
/// Answers preflight requests for allowed origins with the configured
/// methods/headers; adds `Access-Control-Allow-Origin` to regular responses.
pub async fn cors_middleware(request: Request, next: Next, config: CorsConfig) -> Response {
    let origin = request
        .headers()
        .get(http::header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    if request.method() == http::Method::OPTIONS {
        // Preflight
        if let Some(ref req_origin) = origin {
            if is_origin_allowed(req_origin, &config.allowed_origins) {
                let mut response = (StatusCode::NO_CONTENT, Body::empty()).into_response();
                let headers = response.headers_mut();

                insert_header(headers, "Access-Control-Allow-Origin", req_origin);

                let methods = config
                    .allowed_methods
                    .iter()
                    .map(|m| m.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                insert_header(headers, "Access-Control-Allow-Methods", &methods);

                insert_header(
                    headers,
                    "Access-Control-Allow-Headers",
                    &config.allowed_headers.join(", "),
                );

                if config.allow_credentials {
                    insert_header(headers, "Access-Control-Allow-Credentials", "true");
                }

                insert_header(
                    headers,
                    "Access-Control-Max-Age",
                    &config.max_age.to_string(),
                );

                return response;
            }
        }

        // Preflight from a disallowed origin
        return (StatusCode::FORBIDDEN, Body::empty()).into_response();
    }

    let mut response = next.run(request).await;

    if let Some(ref req_origin) = origin {
        if is_origin_allowed(req_origin, &config.allowed_origins) {
            let headers = response.headers_mut();
            insert_header(headers, "Access-Control-Allow-Origin", req_origin);
            if config.allow_credentials {
                insert_header(headers, "Access-Control-Allow-Credentials", "true");
            }
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        middleware::from_fn,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    use super::*;

    async fn dummy_handler() -> &'static str { "OK" }

    fn app_with(config: CorsConfig) -> Router {
        Router::new()
            .route("/test", get(dummy_handler))
            .layer(from_fn(move |req, next| {
                cors_middleware(req, next, config.clone())
            }))
    }

    #[tokio::test]
    async fn test_allowed_origin_gets_cors_headers() {
        let app = app_with(CorsConfig::default());

        let request = Request::builder()
            .uri("/test")
            .header("Origin", "http://localhost:5173")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "http://localhost:5173"
        );
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-credentials")
                .unwrap(),
            "true"
        );
    }

    #[tokio::test]
    async fn test_disallowed_origin_gets_no_cors_headers() {
        let app = app_with(CorsConfig::default());

        let request = Request::builder()
            .uri("/test")
            .header("Origin", "http://evil.example")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        // request still served, but without CORS headers the browser blocks it
        assert_eq!(response.status(), StatusCode::OK);
        assert!(!response
            .headers()
            .contains_key("access-control-allow-origin"));
    }

    #[tokio::test]
    async fn test_preflight_for_allowed_origin() {
        let app = app_with(CorsConfig::default());

        let request = Request::builder()
            .uri("/test")
            .method("OPTIONS")
            .header("Origin", "http://localhost:5173")
            .header("Access-Control-Request-Method", "POST")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let methods = response
            .headers()
            .get("access-control-allow-methods")
            .unwrap()
            .to_str()
            .unwrap();
        assert!(methods.contains("POST"));
        assert!(response
            .headers()
            .contains_key("access-control-allow-headers"));
    }

    #[tokio::test]
    async fn test_preflight_for_disallowed_origin_is_rejected() {
        let app = app_with(CorsConfig::default());

        let request = Request::builder()
            .uri("/test")
            .method("OPTIONS")
            .header("Origin", "http://evil.example")
            .header("Access-Control-Request-Method", "POST")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_wildcard_subdomain_matching() {
        let config = CorsConfig {
            allowed_origins: vec!["*.onrender.com".to_string()],
            ..Default::default()
        };
        assert!(is_origin_allowed(
            "https://warren-game.onrender.com",
            &config.allowed_origins
        ));
        assert!(!is_origin_allowed(
            "https://onrender.com.evil.example",
            &config.allowed_origins
        ));
    }
}
