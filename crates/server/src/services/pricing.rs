//! Deals surface and mock competitor price comparison.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{AppDocument, Product};
use crate::services::generators::Generator;

/// How many products the deals surface returns.
const DEALS_LIMIT: usize = 10;

/// The lowest-priced products, or nothing when deals are disabled.
///
/// "Lowest price" is the placeholder for real advantage scoring; the
/// `deals_enabled` toggle gates the whole surface.
#[must_use]
pub fn deals(doc: &AppDocument) -> Vec<Product> {
    if !doc.settings.deals_enabled {
        return Vec::new();
    }

    let mut products = doc.products.clone();
    products.sort_by(|a, b| a.price.cmp(&b.price));
    products.truncate(DEALS_LIMIT);
    products
}

/// A mock competitor price for one product id; null for unknown ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparedPrice {
    #[serde(rename = "sourcePrice")]
    pub source_price: Option<Decimal>,
}

/// Mock price comparison over a comma-separated id list.
///
/// Known products get their price jittered by ±10%; unknown ids map to a
/// null price so the caller can tell them apart.
#[must_use]
pub fn compare_prices(
    doc: &AppDocument,
    ids: &str,
    generator: &dyn Generator,
) -> BTreeMap<String, ComparedPrice> {
    ids.split(',')
        .filter(|id| !id.is_empty())
        .map(|id| {
            let source_price = doc
                .products
                .iter()
                .find(|p| p.id.as_str() == id)
                .map(|p| competitor_price(p.price, generator.unit()));
            (id.to_string(), ComparedPrice { source_price })
        })
        .collect()
}

/// Price with a jitter in [-10%, +10%], two decimals, floored at 1.
fn competitor_price(price: Decimal, unit: f64) -> Decimal {
    let factor = Decimal::from_f64_retain(0.9 + unit * 0.2).unwrap_or(Decimal::ONE);
    (price * factor).round_dp(2).max(Decimal::ONE)
}
