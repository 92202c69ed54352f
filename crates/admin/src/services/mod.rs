//! Application services built on the state containers.

pub mod adjustments;
pub mod auth;

pub use adjustments::AdjustmentQueue;
pub use auth::{AccessDecision, check_access};
