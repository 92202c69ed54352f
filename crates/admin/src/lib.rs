//! Jade Shopping Admin library.
//!
//! This crate is the portable core of the Jade Shopping admin panel: the
//! domain records, the filtered-list view-model pattern every list screen
//! shares, per-domain state containers, and the gateway abstractions that
//! feed them. Rendering and routing live elsewhere; this crate owns state
//! and behavior so both can be tested without a UI.
//!
//! # Layout
//!
//! - [`models`] - Domain records, per-domain filter structs, input types
//! - [`query`] - Filter primitives (text search, date ranges) and pagination
//! - [`store`] - Per-domain state containers with load/error tracking
//! - [`gateway`] - Injectable data sources: fixtures and an optional remote
//!   admin directory
//! - [`services`] - Stock-adjustment approval workflow and auth/guard logic
//! - [`snapshot`] - Opportunistic local persistence of a partial state slice

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod query;
pub mod services;
pub mod snapshot;
pub mod store;
pub mod telemetry;

pub use error::AppError;
