//! Integration tests for the Jade Shopping admin.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p jade-shopping-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `stock_workflow` - Adjustment request/approve flow against the
//!   inventory store
//! - `admin_access` - Login, route guard, and account lifecycle
//! - `list_screens` - Filter, pagination, and selection behavior shared by
//!   the list screens
//! - `session_snapshot` - Local persistence of session state
//!
//! Tests run against the built-in fixture gateways; no network or database
//! is required.
