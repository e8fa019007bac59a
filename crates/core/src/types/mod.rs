//! Core types for FindEasy.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod country;
pub mod email;
pub mod feed;
pub mod id;
pub mod psp;
pub mod status;

pub use country::{CountryCode, CountryCodeError};
pub use email::{Email, EmailError};
pub use feed::FeedKind;
pub use id::*;
pub use psp::{Psp, WebhookProvider};
pub use status::OrderStatus;
