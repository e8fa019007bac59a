//! Merchant feed kinds.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The kind of external catalog source a feed is connected to.
///
/// Two merchant platforms (products pulled from a shop API) and two
/// affiliate networks (products link out with an attribution tag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedKind {
    Shopify,
    Woocommerce,
    AmazonAffiliate,
    BookingAffiliate,
}

impl FeedKind {
    /// All feed kinds, in registration-form order.
    pub const ALL: [Self; 4] = [
        Self::Shopify,
        Self::Woocommerce,
        Self::AmazonAffiliate,
        Self::BookingAffiliate,
    ];

    /// The wire name of this kind (matches the serde representation).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shopify => "shopify",
            Self::Woocommerce => "woocommerce",
            Self::AmazonAffiliate => "amazon_affiliate",
            Self::BookingAffiliate => "booking_affiliate",
        }
    }

    /// Short uppercase tag used in minted product ids (e.g. `prd_SHO_…`).
    #[must_use]
    pub const fn id_tag(self) -> &'static str {
        match self {
            Self::Shopify => "SHO",
            Self::Woocommerce => "WOO",
            Self::AmazonAffiliate => "AMA",
            Self::BookingAffiliate => "BOO",
        }
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&FeedKind::AmazonAffiliate).unwrap(),
            "\"amazon_affiliate\""
        );
        let kind: FeedKind = serde_json::from_str("\"booking_affiliate\"").unwrap();
        assert_eq!(kind, FeedKind::BookingAffiliate);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result = serde_json::from_str::<FeedKind>("\"ebay\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_id_tag_is_first_three_letters() {
        for kind in FeedKind::ALL {
            let expected: String = kind
                .as_str()
                .chars()
                .take(3)
                .map(|c| c.to_ascii_uppercase())
                .collect();
            assert_eq!(kind.id_tag(), expected);
        }
    }
}
