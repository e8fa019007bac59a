//! Checkout route handler.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::error::Result;
use crate::routes::json_input;
use crate::services::checkout::{self, CheckoutRequest, CheckoutSummary};
use crate::state::AppState;

/// Create an order from a cart, selecting the PSP by customer country.
///
/// # Errors
///
/// Returns a validation error naming the first failing field, or a store
/// error if the save fails.
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<Json<CheckoutSummary>> {
    let request = json_input(payload)?;
    let summary = checkout::checkout(state.store(), state.generator(), request).await?;
    Ok(Json(summary))
}
