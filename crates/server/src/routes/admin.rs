//! Admin route handlers: settings and feed management.
//!
//! Every handler takes the [`RequireAdmin`] extractor, so a missing or
//! wrong `x-admin-token` header rejects before any work happens.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use serde::Serialize;

use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::models::{Feed, Settings};
use crate::routes::json_input;
use crate::services::feeds::{self, ConnectFeedRequest};
use crate::services::settings::{self, SettingsPatch};
use crate::state::AppState;

/// Create the admin routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/settings", get(get_settings).post(update_settings))
        .route("/feeds", get(list_feeds))
        .route("/feeds/connect", post(connect_feed))
        .route("/feeds/pull", post(pull_feeds))
}

/// Read the current settings.
pub async fn get_settings(_admin: RequireAdmin, State(state): State<AppState>) -> Json<Settings> {
    Json(settings::get(state.store()).await)
}

/// Response for a settings update.
#[derive(Debug, Serialize)]
pub struct UpdateSettingsResponse {
    pub ok: bool,
    pub settings: Settings,
}

/// Apply a validated partial settings update.
///
/// # Errors
///
/// Returns a validation error for unknown fields or out-of-range values,
/// or a store error if the save fails.
pub async fn update_settings(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    payload: std::result::Result<Json<SettingsPatch>, JsonRejection>,
) -> Result<Json<UpdateSettingsResponse>> {
    let patch = json_input(payload)?;
    let merged = settings::update(state.store(), patch).await?;
    Ok(Json(UpdateSettingsResponse {
        ok: true,
        settings: merged,
    }))
}

/// List all registered feeds.
pub async fn list_feeds(_admin: RequireAdmin, State(state): State<AppState>) -> Json<Vec<Feed>> {
    Json(state.store().load().await.feeds)
}

/// Response for a feed registration.
#[derive(Debug, Serialize)]
pub struct ConnectFeedResponse {
    pub ok: bool,
    pub feed: Feed,
}

/// Register a merchant feed.
///
/// # Errors
///
/// Returns a validation error for an unknown feed type or unknown fields,
/// or a store error if the save fails.
pub async fn connect_feed(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    payload: std::result::Result<Json<ConnectFeedRequest>, JsonRejection>,
) -> Result<Json<ConnectFeedResponse>> {
    let request = json_input(payload)?;
    let feed = feeds::register(state.store(), state.generator(), request).await?;
    Ok(Json(ConnectFeedResponse { ok: true, feed }))
}

/// Response for an ingestion run.
#[derive(Debug, Serialize)]
pub struct PullFeedsResponse {
    pub ok: bool,
    pub added: bool,
    pub count: usize,
}

/// Pull every active feed into the catalog.
///
/// # Errors
///
/// Returns a store error if the save fails.
pub async fn pull_feeds(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<PullFeedsResponse>> {
    let count = feeds::pull(state.store(), state.generator()).await?;
    Ok(Json(PullFeedsResponse {
        ok: true,
        added: count > 0,
        count,
    }))
}
