//! Domain records and their per-screen filter types.
//!
//! Records are flat attribute bags with UUID identifiers and UTC timestamps;
//! relationships are embedded IDs only. Each module also owns the filter
//! struct its list screen uses, in the same file as the record it selects.

pub mod admin_user;
pub mod audit;
pub mod category;
pub mod content;
pub mod inventory;
pub mod order;
pub mod payment;
pub mod role;
pub mod shipment;

pub use admin_user::{AdminFilter, AdminUser, CreateAdminInput, UpdateAdminInput};
pub use audit::{AuditFilter, AuditLog};
pub use category::{Category, CategoryFilter, CreateCategoryInput, UpdateCategoryInput};
pub use content::{ContentBlock, ContentFilter};
pub use inventory::{
    CreateAdjustmentInput, InventoryFilter, InventoryItem, StockAdjustment, available_stock,
    stock_status,
};
pub use order::{Order, OrderFilter};
pub use payment::{PaymentChannel, PaymentFilter};
pub use role::{Role, RoleFilter};
pub use shipment::{Shipment, ShipmentFilter, TrackingEvent};
