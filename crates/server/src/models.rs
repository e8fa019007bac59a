//! Persisted entities and the `AppDocument` aggregate.
//!
//! Everything the service knows lives inside one [`AppDocument`], stored as
//! a single JSON file with top-level keys `settings, sellers, feeds,
//! products, orders, redirects`. Field names mirror the persisted wire
//! format: settings are snake_case, feeds and redirect clicks camelCase.

use chrono::{DateTime, Utc};
use findeasy_core::{
    ClickId, CountryCode, Email, FeedId, FeedKind, OrderId, OrderStatus, ProductId, Psp,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Validated key-value configuration gating pricing and deal behavior.
///
/// Commission rates are fractions in `[0, 1]`. `min_commission <=
/// default_commission` is deliberately not enforced; each bound is checked
/// individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub dynamic_pricing_enabled: bool,
    pub min_commission: Decimal,
    pub default_commission: Decimal,
    pub deals_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dynamic_pricing_enabled: true,
            min_commission: Decimal::new(3, 2),      // 0.03
            default_commission: Decimal::new(12, 2), // 0.12
            deals_enabled: true,
        }
    }
}

/// A configured external catalog source.
///
/// Created by admin action; only the pull operation mutates it afterwards
/// (stamping `last_pull`). Feeds are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    pub id: FeedId,
    #[serde(rename = "type")]
    pub kind: FeedKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<String>,
    pub active: bool,
    pub last_pull: Option<DateTime<Utc>>,
}

/// A catalog product. Created by feed pulls; append-only, never updated.
///
/// `source` is either `"<kind>:<externalId>"` for affiliate-linkable
/// products (e.g. `"amazon:B0TEST"`) or a bare feed-type tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub seller: String,
    pub image: String,
    pub source: String,
}

/// A line item inside an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub price: Decimal,
    pub seller: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// The customer attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub email: Email,
    pub country: CountryCode,
}

/// A persisted order. Append-only; webhooks never transition status today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<OrderItem>,
    pub amount: Decimal,
    pub currency: String,
    pub customer: Customer,
    pub psp: Psp,
    pub status: OrderStatus,
}

/// Audit record of one affiliate redirect resolution.
///
/// Appended for every resolution of a known product, whether or not an
/// outbound URL was produced (`url` is null for non-affiliate sources).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectClick {
    pub id: ClickId,
    pub product_id: ProductId,
    pub at: DateTime<Utc>,
    pub url: Option<String>,
}

/// The whole application state, persisted as one JSON document.
///
/// Every field defaults so partial or legacy documents still load.
/// `sellers` is carried opaquely: it exists in the document layout but no
/// operation reads or writes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppDocument {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub sellers: Vec<serde_json::Value>,
    #[serde(default)]
    pub feeds: Vec<Feed>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub redirects: Vec<RedirectClick>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert!(settings.dynamic_pricing_enabled);
        assert!(settings.deals_enabled);
        assert_eq!(settings.min_commission, Decimal::new(3, 2));
        assert_eq!(settings.default_commission, Decimal::new(12, 2));
    }

    #[test]
    fn test_empty_document_deserializes_with_defaults() {
        let doc: AppDocument = serde_json::from_str("{}").unwrap();
        assert_eq!(doc, AppDocument::default());
        assert!(doc.products.is_empty());
        assert!(doc.settings.deals_enabled);
    }

    #[test]
    fn test_feed_wire_format_is_camel_case() {
        let feed = Feed {
            id: FeedId::new("booking_affiliate_x1y2z3"),
            kind: FeedKind::BookingAffiliate,
            base_url: None,
            tag: None,
            partner_id: Some("12345".to_string()),
            active: true,
            last_pull: None,
        };

        let json = serde_json::to_value(&feed).unwrap();
        assert_eq!(json["type"], "booking_affiliate");
        assert_eq!(json["partnerId"], "12345");
        assert!(json["lastPull"].is_null());
        // absent optionals are omitted, matching the original document
        assert!(json.get("baseUrl").is_none());
    }

    #[test]
    fn test_redirect_click_wire_format() {
        let click = RedirectClick {
            id: ClickId::new("clk_ab12cd34"),
            product_id: ProductId::new("prd_AMA_x1"),
            at: Utc::now(),
            url: None,
        };

        let json = serde_json::to_value(&click).unwrap();
        assert_eq!(json["productId"], "prd_AMA_x1");
        assert!(json["url"].is_null());
    }

    #[test]
    fn test_price_persists_as_json_number() {
        let product = Product {
            id: ProductId::new("prd_SHO_a"),
            title: "shopify Product A".to_string(),
            price: Decimal::new(129_990, 2), // 1299.90
            seller: "shopify_seller".to_string(),
            image: "https://picsum.photos/seed/a/600/400".to_string(),
            source: "shopify".to_string(),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert!(json["price"].is_number());
    }
}
