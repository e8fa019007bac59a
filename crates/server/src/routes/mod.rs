//! HTTP route handlers for the FindEasy API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /healthz                    - Liveness check
//!
//! # Public catalog
//! GET  /api/products               - List catalog
//! GET  /api/deals                  - Lowest-priced products
//! GET  /api/compare-prices?ids=a,b - Mock competitor prices
//! GET  /api/redirect?id=           - Resolve + log affiliate redirect
//!
//! # Checkout
//! POST /api/checkout               - Create order, select PSP
//! POST /api/webhooks/{provider}    - Payment webhook intake (stub)
//!
//! # Admin (x-admin-token header)
//! GET  /api/admin/settings         - Read settings
//! POST /api/admin/settings         - Update settings
//! GET  /api/admin/feeds            - List feeds
//! POST /api/admin/feeds/connect    - Register feed
//! POST /api/admin/feeds/pull       - Run ingestion
//! ```

pub mod admin;
pub mod catalog;
pub mod checkout;
pub mod redirect;
pub mod webhooks;

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    routing::{get, post},
};
use serde_json::{Value, json};

use crate::error::AppError;
use crate::state::AppState;

/// Create all routes for the server.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(healthz))
        .nest("/api", api_routes())
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(catalog::router())
        .route("/redirect", get(redirect::resolve))
        .route("/checkout", post(checkout::create))
        .nest("/admin", admin::router())
        .nest("/webhooks", webhooks::router())
}

/// Liveness health check endpoint.
///
/// Returns `{"ok": true}` if the server is running. Does not check storage.
async fn healthz() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// Unwrap a JSON body, turning deserialization failures (malformed JSON,
/// unknown fields, wrong types) into a `Validation` error with the
/// rejection's message.
pub(crate) fn json_input<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(AppError::Validation(rejection.body_text())),
    }
}
