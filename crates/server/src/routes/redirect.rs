//! Affiliate redirect route handler.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::error::Result;
use crate::services::redirect::{self, RedirectOutcome};
use crate::state::AppState;

/// Query parameters for redirect resolution.
#[derive(Debug, Deserialize)]
pub struct RedirectQuery {
    /// Product id to resolve. A missing id behaves like an unknown product.
    #[serde(default)]
    pub id: String,
}

/// Resolve a product to its outbound affiliate URL, logging the click.
///
/// Unknown products answer `{"url": null}` with status 200; the redirect
/// surface never 404s.
///
/// # Errors
///
/// Returns an error if persisting the click fails.
pub async fn resolve(
    State(state): State<AppState>,
    Query(query): Query<RedirectQuery>,
) -> Result<Json<RedirectOutcome>> {
    let outcome = redirect::resolve(state.store(), state.generator(), &query.id).await?;
    Ok(Json(outcome))
}
