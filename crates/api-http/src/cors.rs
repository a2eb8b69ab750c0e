//! Cross-origin policy shared by both transports.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

const ALLOWED_METHODS: [Method; 6] = [
    Method::GET,
    Method::HEAD,
    Method::PUT,
    Method::POST,
    Method::DELETE,
    Method::PATCH,
];

/// Build the CORS layer for a configured origin.
///
/// `*` allows any origin; otherwise a comma-separated list of exact origins.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, String> {
    let allow_origin = if origin.trim() == "*" {
        AllowOrigin::any()
    } else {
        let origins = origin
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(|o| {
                HeaderValue::from_str(o).map_err(|e| format!("Invalid CORS origin '{}': {}", o, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if origins.is_empty() {
            return Err("CORS origin must not be empty".to_string());
        }
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_wildcard_and_lists() {
        assert!(cors_layer("*").is_ok());
        assert!(cors_layer("http://localhost:3000").is_ok());
        assert!(cors_layer("http://a.example, http://b.example").is_ok());
    }

    #[test]
    fn test_rejects_empty_and_garbage() {
        assert!(cors_layer("").is_err());
        assert!(cors_layer(" , ").is_err());
        assert!(cors_layer("bad\norigin").is_err());
    }
}
