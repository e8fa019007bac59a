//! Business logic behind the HTTP surface.
//!
//! Services operate on the [`crate::store::JsonStore`] and the injected
//! [`generators::Generator`] port; route handlers stay thin wrappers around them.

pub mod checkout;
pub mod feeds;
pub mod generators;
pub mod pricing;
pub mod redirect;
pub mod settings;
pub mod webhooks;
