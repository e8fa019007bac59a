//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::generators::{Generator, SystemGenerator};
use crate::services::webhooks::{AcknowledgeOnly, PaymentWebhookHandler};
use crate::store::JsonStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// document store, configuration, and the injected ports.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    store: JsonStore,
    generator: Arc<dyn Generator>,
    webhooks: Arc<dyn PaymentWebhookHandler>,
}

impl AppState {
    /// Create the application state with the production ports (system
    /// clock/RNG, acknowledge-only webhook handler).
    #[must_use]
    pub fn new(config: ServerConfig, store: JsonStore) -> Self {
        Self::with_ports(
            config,
            store,
            Arc::new(SystemGenerator),
            Arc::new(AcknowledgeOnly),
        )
    }

    /// Create the application state with explicit ports. Used by tests to
    /// supply deterministic generators.
    #[must_use]
    pub fn with_ports(
        config: ServerConfig,
        store: JsonStore,
        generator: Arc<dyn Generator>,
        webhooks: Arc<dyn PaymentWebhookHandler>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                generator,
                webhooks,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the document store.
    #[must_use]
    pub fn store(&self) -> &JsonStore {
        &self.inner.store
    }

    /// Get a reference to the id/clock/randomness source.
    #[must_use]
    pub fn generator(&self) -> &dyn Generator {
        self.inner.generator.as_ref()
    }

    /// Get a reference to the payment webhook handler.
    #[must_use]
    pub fn webhooks(&self) -> &dyn PaymentWebhookHandler {
        self.inner.webhooks.as_ref()
    }
}
