//! FindEasy Core - Shared types library.
//!
//! This crate provides the domain types used across the FindEasy components:
//! - `server` - Public API and admin surface
//! - `integration-tests` - HTTP tests against a running server
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, country codes,
//!   feed kinds, order statuses, and PSP routing

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
