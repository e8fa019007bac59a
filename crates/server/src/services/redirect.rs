//! Affiliate redirect resolution and click audit.
//!
//! Products carry a prefix-tagged `source` (`"amazon:<ASIN>"`,
//! `"booking:<hotelId>"`, or a bare feed tag). Affiliate sources resolve to
//! an outbound URL carrying the attribution parameter of the first matching
//! feed; everything else resolves to null. Every resolution of a known
//! product is logged as a [`RedirectClick`], URL or not, so the audit trail
//! covers dead links too.

use findeasy_core::{ClickId, FeedKind, ProductId};
use serde::Serialize;

use crate::error::Result;
use crate::models::{Feed, RedirectClick};
use crate::services::generators::Generator;
use crate::store::JsonStore;

/// Affiliate tag used when no `amazon_affiliate` feed is registered.
const DEFAULT_AMAZON_TAG: &str = "findeasy-20";
/// Partner id used when no `booking_affiliate` feed is registered.
const DEFAULT_BOOKING_PARTNER: &str = "XXXX";

/// Result of a redirect resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectOutcome {
    pub url: Option<String>,
}

/// Resolve a product id to an outbound affiliate URL and log the click.
///
/// An unknown product id returns a null URL without logging anything: there
/// is no product to attribute the click to.
///
/// # Errors
///
/// Returns an error if persisting the click fails.
pub async fn resolve(
    store: &JsonStore,
    generator: &dyn Generator,
    id: &str,
) -> Result<RedirectOutcome> {
    // Snapshot check first: unknown ids (bots, stale links) stay read-only.
    let doc = store.load().await;
    if !doc.products.iter().any(|p| p.id.as_str() == id) {
        return Ok(RedirectOutcome { url: None });
    }

    let product_id = ProductId::new(id);
    let click_id = ClickId::new(format!("clk_{}", generator.suffix(8)));
    let at = generator.now();

    let outcome = store
        .update(move |doc| {
            // The catalog is append-only, so the product seen in the
            // snapshot is still here under the lock.
            let url = doc
                .products
                .iter()
                .find(|p| p.id == product_id)
                .and_then(|p| outbound_url(&p.source, &doc.feeds));

            doc.redirects.push(RedirectClick {
                id: click_id,
                product_id,
                at,
                url: url.clone(),
            });

            RedirectOutcome { url }
        })
        .await?;

    Ok(outcome)
}

/// Build the outbound URL for a product source, if it is affiliate-linkable.
fn outbound_url(source: &str, feeds: &[Feed]) -> Option<String> {
    if let Some(asin) = source.strip_prefix("amazon:") {
        let tag = feed_param(feeds, FeedKind::AmazonAffiliate, |f| f.tag.as_deref())
            .unwrap_or(DEFAULT_AMAZON_TAG);
        Some(format!(
            "https://www.amazon.com/dp/{asin}/?tag={}",
            urlencoding::encode(tag)
        ))
    } else if let Some(hotel_id) = source.strip_prefix("booking:") {
        let partner = feed_param(feeds, FeedKind::BookingAffiliate, |f| f.partner_id.as_deref())
            .unwrap_or(DEFAULT_BOOKING_PARTNER);
        Some(format!(
            "https://www.booking.com/hotel/{hotel_id}.html?aid={}",
            urlencoding::encode(partner)
        ))
    } else {
        None
    }
}

/// The attribution parameter of the first feed of the given kind, skipping
/// empty values so a blank tag falls back to the default.
fn feed_param<'a>(
    feeds: &'a [Feed],
    kind: FeedKind,
    param: impl Fn(&'a Feed) -> Option<&'a str>,
) -> Option<&'a str> {
    feeds
        .iter()
        .find(|f| f.kind == kind)
        .and_then(param)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use findeasy_core::FeedId;
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::Product;
    use crate::services::generators::FixedGenerator;

    fn store_in(dir: &tempfile::TempDir) -> JsonStore {
        JsonStore::open(dir.path().join("db.json"))
    }

    fn product(id: &str, source: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: "Test".to_string(),
            price: Decimal::from(100),
            seller: "seller".to_string(),
            image: String::new(),
            source: source.to_string(),
        }
    }

    fn affiliate_feed(kind: FeedKind, tag: Option<&str>, partner_id: Option<&str>) -> Feed {
        Feed {
            id: FeedId::new(format!("{kind}_test01")),
            kind,
            base_url: None,
            tag: tag.map(String::from),
            partner_id: partner_id.map(String::from),
            active: true,
            last_pull: None,
        }
    }

    #[tokio::test]
    async fn test_amazon_without_feed_uses_default_tag_and_logs_click() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store
            .update(|doc| doc.products.push(product("prd_1", "amazon:B0TEST")))
            .await
            .unwrap();

        let generator = FixedGenerator::default();
        let outcome = resolve(&store, &generator, "prd_1").await.unwrap();

        let url = outcome.url.unwrap();
        assert_eq!(url, "https://www.amazon.com/dp/B0TEST/?tag=findeasy-20");

        let doc = store.load().await;
        assert_eq!(doc.redirects.len(), 1);
        let click = doc.redirects.first().unwrap();
        assert_eq!(click.product_id.as_str(), "prd_1");
        assert_eq!(click.id.as_str(), "clk_xxxxxxxx");
        assert_eq!(click.url.as_deref(), Some(url.as_str()));
    }

    #[tokio::test]
    async fn test_amazon_uses_registered_feed_tag() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store
            .update(|doc| {
                doc.products.push(product("prd_1", "amazon:B0TEST"));
                doc.feeds.push(affiliate_feed(
                    FeedKind::AmazonAffiliate,
                    Some("mytag 1"),
                    None,
                ));
            })
            .await
            .unwrap();

        let generator = FixedGenerator::default();
        let outcome = resolve(&store, &generator, "prd_1").await.unwrap();
        // tag is percent-encoded
        assert_eq!(
            outcome.url.as_deref(),
            Some("https://www.amazon.com/dp/B0TEST/?tag=mytag%201")
        );
    }

    #[tokio::test]
    async fn test_empty_feed_tag_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store
            .update(|doc| {
                doc.products.push(product("prd_1", "amazon:B0TEST"));
                doc.feeds
                    .push(affiliate_feed(FeedKind::AmazonAffiliate, Some(""), None));
            })
            .await
            .unwrap();

        let generator = FixedGenerator::default();
        let outcome = resolve(&store, &generator, "prd_1").await.unwrap();
        assert!(outcome.url.unwrap().contains("tag=findeasy-20"));
    }

    #[tokio::test]
    async fn test_booking_source_builds_hotel_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store
            .update(|doc| {
                doc.products.push(product("prd_2", "booking:grand-hotel"));
                doc.feeds.push(affiliate_feed(
                    FeedKind::BookingAffiliate,
                    None,
                    Some("98765"),
                ));
            })
            .await
            .unwrap();

        let generator = FixedGenerator::default();
        let outcome = resolve(&store, &generator, "prd_2").await.unwrap();
        assert_eq!(
            outcome.url.as_deref(),
            Some("https://www.booking.com/hotel/grand-hotel.html?aid=98765")
        );
    }

    #[tokio::test]
    async fn test_non_affiliate_source_logs_null_url_click() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store
            .update(|doc| doc.products.push(product("prd_3", "shopify")))
            .await
            .unwrap();

        let generator = FixedGenerator::default();
        let outcome = resolve(&store, &generator, "prd_3").await.unwrap();
        assert_eq!(outcome.url, None);

        let doc = store.load().await;
        assert_eq!(doc.redirects.len(), 1);
        assert_eq!(doc.redirects.first().unwrap().url, None);
    }

    #[tokio::test]
    async fn test_unknown_product_logs_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let generator = FixedGenerator::default();
        let outcome = resolve(&store, &generator, "ghost").await.unwrap();
        assert_eq!(outcome.url, None);
        assert!(store.load().await.redirects.is_empty());
    }
}
