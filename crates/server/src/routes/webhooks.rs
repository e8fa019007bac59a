//! Payment webhook intake routes.
//!
//! One route per known provider path segment; payloads are handed to the
//! configured [`PaymentWebhookHandler`] and acknowledged with 200. Unknown
//! providers 404.
//!
//! [`PaymentWebhookHandler`]: crate::services::webhooks::PaymentWebhookHandler

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::post,
};
use findeasy_core::WebhookProvider;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Create the webhook routes router.
pub fn router() -> Router<AppState> {
    Router::new().route("/{provider}", post(receive))
}

/// Accept a webhook payload from a payment provider.
///
/// # Errors
///
/// Returns `NotFound` for a provider outside iyzico/paytr/stripe.
pub async fn receive(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> Result<StatusCode> {
    let provider = match provider.as_str() {
        "iyzico" => WebhookProvider::Iyzico,
        "paytr" => WebhookProvider::Paytr,
        "stripe" => WebhookProvider::Stripe,
        _ => return Err(AppError::NotFound("webhook provider".to_string())),
    };

    state.webhooks().acknowledge(provider, &payload);
    Ok(StatusCode::OK)
}
