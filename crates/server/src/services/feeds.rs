//! Feed registry and mock ETL ingestion.
//!
//! Registration validates the feed kind and mints an id; the pull operation
//! simulates an ETL cycle: for every active feed, transform two placeholder
//! records into catalog products, append them, and stamp the feed's pull
//! time. A production system would fetch the remote feed API where the
//! placeholders are synthesized; the validate → transform → append → stamp
//! shape would stay the same.

use findeasy_core::{FeedId, FeedKind, ProductId};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::Result;
use crate::models::{Feed, Product};
use crate::services::generators::Generator;
use crate::store::JsonStore;

/// Admin request to connect a feed. Unknown fields and unknown feed types
/// are rejected at deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ConnectFeedRequest {
    #[serde(rename = "type")]
    pub kind: FeedKind,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub partner_id: Option<String>,
}

/// Register a feed: mint an id, mark it active, persist, return the record.
///
/// # Errors
///
/// Returns an error if the save fails.
pub async fn register(
    store: &JsonStore,
    generator: &dyn Generator,
    request: ConnectFeedRequest,
) -> Result<Feed> {
    let feed = Feed {
        id: FeedId::new(format!("{}_{}", request.kind, generator.suffix(6))),
        kind: request.kind,
        base_url: request.base_url,
        tag: request.tag,
        partner_id: request.partner_id,
        active: true,
        last_pull: None,
    };

    let registered = feed.clone();
    store.update(move |doc| doc.feeds.push(registered)).await?;

    tracing::info!(feed = %feed.id, kind = %feed.kind, "feed connected");
    Ok(feed)
}

/// Pull every active feed, appending two placeholder products per feed and
/// stamping its `last_pull`. Returns the number of products added.
///
/// # Errors
///
/// Returns an error if the save fails.
pub async fn pull(store: &JsonStore, generator: &dyn Generator) -> Result<usize> {
    let added = store
        .update(|doc| {
            let mut added = 0;
            for feed in doc.feeds.iter_mut().filter(|f| f.active) {
                doc.products.push(mock_product(feed.kind, 'A', generator));
                doc.products.push(mock_product(feed.kind, 'B', generator));
                feed.last_pull = Some(generator.now());
                added += 2;
            }
            added
        })
        .await?;

    tracing::info!(added, "feed pull finished");
    Ok(added)
}

/// Synthesize one placeholder product for a feed kind.
fn mock_product(kind: FeedKind, variant: char, generator: &dyn Generator) -> Product {
    Product {
        id: ProductId::new(format!("prd_{}_{}", kind.id_tag(), generator.suffix(6))),
        title: format!("{kind} Product {variant}"),
        price: mock_price(generator.unit()),
        seller: format!("{kind}_seller"),
        image: format!("https://picsum.photos/seed/{}/600/400", generator.suffix(4)),
        source: kind.as_str().to_string(),
    }
}

/// Placeholder price: round(500 + unit * 3000), whole currency units.
#[allow(clippy::cast_possible_truncation)]
fn mock_price(unit: f64) -> Decimal {
    Decimal::from((500.0 + unit * 3000.0).round() as i64)
}
