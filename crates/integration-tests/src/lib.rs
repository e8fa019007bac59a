//! Integration tests for FindEasy.
//!
//! These tests run against a live server and a real document file, so
//! they are `#[ignore]`d by default.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the server with a throwaway document
//! DB_PATH=/tmp/findeasy-test.json ADMIN_TOKEN=test-admin-token \
//!     cargo run -p findeasy-server
//!
//! # Run integration tests against it
//! FINDEASY_BASE_URL=http://localhost:3000 ADMIN_TOKEN=test-admin-token \
//!     cargo test -p findeasy-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `api` - End-to-end HTTP tests for the public, checkout, admin and
//!   webhook surfaces
