//! Payment service provider routing.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::CountryCode;

/// The payment service provider selected for an order.
///
/// Routing is currently a pure function of the customer's country: Turkish
/// customers go to the local providers, everyone else to Stripe. The enum is
/// the extension point for weighted routing, currency fallback, or
/// retry-on-decline later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Psp {
    /// Turkish local providers (iyzico or PayTR, picked at integration time).
    #[serde(rename = "iyzico/paytr")]
    IyzicoPaytr,
    #[serde(rename = "stripe")]
    Stripe,
}

impl Psp {
    /// Select the provider for a customer country.
    #[must_use]
    pub fn for_country(country: &CountryCode) -> Self {
        if country.as_str() == "TR" {
            Self::IyzicoPaytr
        } else {
            Self::Stripe
        }
    }

    /// The provider label (matches the serde representation).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IyzicoPaytr => "iyzico/paytr",
            Self::Stripe => "stripe",
        }
    }
}

impl fmt::Display for Psp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Providers that deliver payment webhooks.
///
/// `iyzico` and `paytr` are distinct webhook senders even though checkout
/// routes to them under one [`Psp`] label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebhookProvider {
    Iyzico,
    Paytr,
    Stripe,
}

impl WebhookProvider {
    /// The provider name as it appears in webhook route paths.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Iyzico => "iyzico",
            Self::Paytr => "paytr",
            Self::Stripe => "stripe",
        }
    }
}

impl fmt::Display for WebhookProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_turkey_routes_to_local_providers() {
        let tr = CountryCode::parse("tr").unwrap();
        assert_eq!(Psp::for_country(&tr), Psp::IyzicoPaytr);
    }

    #[test]
    fn test_everywhere_else_routes_to_stripe() {
        for code in ["US", "DE", "GB", "JP"] {
            let country = CountryCode::parse(code).unwrap();
            assert_eq!(Psp::for_country(&country), Psp::Stripe);
        }
    }

    #[test]
    fn test_psp_label_serialization() {
        assert_eq!(
            serde_json::to_string(&Psp::IyzicoPaytr).unwrap(),
            "\"iyzico/paytr\""
        );
        assert_eq!(serde_json::to_string(&Psp::Stripe).unwrap(), "\"stripe\"");
    }
}
