//! Payment webhook port.
//!
//! Checkout never initiates a real payment, so webhook intake is an
//! explicit no-op today: payloads are acknowledged and logged, no order
//! transitions. The trait is the seam where signature verification and
//! order-status transitions get wired when a PSP integration lands.

use findeasy_core::WebhookProvider;

/// Handles inbound payment-provider webhooks.
pub trait PaymentWebhookHandler: Send + Sync {
    /// Accept a webhook payload from the given provider.
    fn acknowledge(&self, provider: WebhookProvider, payload: &serde_json::Value);
}

/// Default handler: log and acknowledge, touch nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcknowledgeOnly;

impl PaymentWebhookHandler for AcknowledgeOnly {
    fn acknowledge(&self, provider: WebhookProvider, payload: &serde_json::Value) {
        tracing::info!(provider = %provider, %payload, "payment webhook received");
    }
}
