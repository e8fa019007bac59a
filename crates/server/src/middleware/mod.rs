//! HTTP middleware for the API surface.
//!
//! # Layers (bottom to top in Router)
//!
//! 1. `TraceLayer` (request tracing)
//! 2. CORS (allow-list from `ALLOWED_ORIGINS`)

pub mod auth;

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

pub use auth::RequireAdmin;

/// Build the CORS layer from the configured origin allow-list.
///
/// An empty list allows any origin (the development default); otherwise
/// only the exact listed origins are allowed. Entries that are not valid
/// header values are logged and skipped.
#[must_use]
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().map_or_else(
                |_| {
                    tracing::warn!(origin, "Ignoring unparseable ALLOWED_ORIGINS entry");
                    None
                },
                Some,
            )
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_accepts_origin_lists() {
        // Smoke: both shapes construct without panicking.
        let _ = cors_layer(&[]);
        let _ = cors_layer(&[
            "https://findeasy.example".to_string(),
            "not a header value\u{0}".to_string(),
        ]);
    }
}
