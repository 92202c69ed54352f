//! Injectable data sources for the state containers.
//!
//! The legacy admin faked its network layer with inline timers resolving
//! canned data. Here each domain gets an async source trait; the containers
//! are generic over their source, so production code can plug in the remote
//! client and tests can plug in [`fixtures`] without any latency theater.

#![allow(async_fn_in_trait)]

pub mod fallback;
pub mod fixtures;
pub mod remote;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use jade_shopping_core::OrderId;

use crate::models::{
    AdminUser, AuditLog, Category, ContentBlock, InventoryItem, Order, OrderFilter,
    PaymentChannel, Role, Shipment,
};

pub use fallback::FallbackDirectory;
pub use fixtures::Fixtures;
pub use remote::RemoteDirectory;

/// Errors produced by data sources.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Transport-level failure reaching a remote source.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote answered with a non-success status.
    #[error("unexpected status {status} from {endpoint}")]
    UnexpectedStatus {
        /// HTTP status code received.
        status: u16,
        /// Endpoint path that was called.
        endpoint: String,
    },

    /// The response body did not match the expected shape.
    #[error("malformed response from {endpoint}: {message}")]
    MalformedResponse {
        /// Endpoint path that was called.
        endpoint: String,
        /// Decode failure detail.
        message: String,
    },

    /// The source is not configured or deliberately offline.
    #[error("source unavailable: {0}")]
    Unavailable(String),
}

/// Aggregate counts for the admin directory dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryStats {
    /// Total admin accounts.
    pub total: u64,
    /// Accounts with active status.
    pub active: u64,
    /// Accounts locked out.
    pub locked: u64,
}

/// Source of admin accounts.
///
/// Mirrors the three REST endpoints the legacy admin called best-effort:
/// the user list, aggregate stats, and the tag vocabulary.
pub trait AdminDirectory {
    /// Fetch all admin accounts.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the source cannot be reached or its
    /// response cannot be decoded.
    async fn fetch_admins(&self) -> Result<Vec<AdminUser>, GatewayError>;

    /// Fetch aggregate account counts.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] on transport or decode failure.
    async fn fetch_stats(&self) -> Result<DirectoryStats, GatewayError>;

    /// Fetch the tag vocabulary used to label admin accounts.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] on transport or decode failure.
    async fn fetch_tags(&self) -> Result<Vec<String>, GatewayError>;
}

/// Source of roles.
pub trait RoleSource {
    /// Fetch all roles.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the source fails.
    async fn fetch_roles(&self) -> Result<Vec<Role>, GatewayError>;
}

/// Source of category records.
pub trait CategorySource {
    /// Fetch the full category tree as a flat list.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the source fails.
    async fn fetch_categories(&self) -> Result<Vec<Category>, GatewayError>;
}

/// Source of inventory records.
pub trait InventorySource {
    /// Fetch all inventory records.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the source fails.
    async fn fetch_inventory(&self) -> Result<Vec<InventoryItem>, GatewayError>;
}

/// Source of shipment records.
pub trait ShipmentSource {
    /// Fetch all shipments.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the source fails.
    async fn fetch_shipments(&self) -> Result<Vec<Shipment>, GatewayError>;
}

/// The external order service, consumed as a black box.
pub trait OrderService {
    /// Fetch orders matching the given filter.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the service fails.
    async fn get_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>, GatewayError>;

    /// Fetch a single order by ID.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the service fails.
    async fn get_order_by_id(&self, id: OrderId) -> Result<Option<Order>, GatewayError>;
}

/// Source of payment channel configuration.
pub trait PaymentSource {
    /// Fetch all configured payment channels.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the source fails.
    async fn fetch_channels(&self) -> Result<Vec<PaymentChannel>, GatewayError>;
}

/// Source of content blocks.
pub trait ContentSource {
    /// Fetch all content blocks.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the source fails.
    async fn fetch_content(&self) -> Result<Vec<ContentBlock>, GatewayError>;
}

/// Source of audit log history.
pub trait AuditSource {
    /// Fetch recorded audit entries.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the source fails.
    async fn fetch_audit_logs(&self) -> Result<Vec<AuditLog>, GatewayError>;
}
