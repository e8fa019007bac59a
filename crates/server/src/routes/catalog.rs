//! Public catalog route handlers.

use std::collections::BTreeMap;

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;

use crate::models::Product;
use crate::services::pricing::{self, ComparedPrice};
use crate::state::AppState;

/// Create the catalog routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(products))
        .route("/deals", get(deals))
        .route("/compare-prices", get(compare_prices))
}

/// List the full product catalog.
pub async fn products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.store().load().await.products)
}

/// The deals surface: lowest-priced products, gated by `deals_enabled`.
pub async fn deals(State(state): State<AppState>) -> Json<Vec<Product>> {
    let doc = state.store().load().await;
    Json(pricing::deals(&doc))
}

/// Query parameters for price comparison.
#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    /// Comma-separated product ids.
    #[serde(default)]
    pub ids: String,
}

/// Mock competitor price per requested product id.
pub async fn compare_prices(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> Json<BTreeMap<String, ComparedPrice>> {
    let doc = state.store().load().await;
    Json(pricing::compare_prices(&doc, &query.ids, state.generator()))
}
