//! In-memory test-double sources with deterministic sample data.
//!
//! This is the canned data of the legacy admin, minus the fake latency: the
//! fixture gateway resolves immediately and always succeeds. Use
//! [`Unavailable`] to exercise failure paths.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use jade_shopping_core::{
    AdminRole, AdminStatus, AdminUserId, AuditLogId, CategoryId, ContentBlockId, ContentStatus,
    CurrencyCode, Email, FinancialStatus, FulfillmentStatus, InventoryItemId, OrderId,
    PaymentChannelId, Price, ProductId, RiskLevel, RoleId, ShipmentId, ShipmentStatus,
};

use crate::models::{
    AdminUser, AuditLog, Category, ContentBlock, InventoryItem, Order, OrderFilter,
    PaymentChannel, Role, Shipment, TrackingEvent,
};
use crate::query::Filter;

use super::{
    AdminDirectory, AuditSource, CategorySource, ContentSource, DirectoryStats, GatewayError,
    InventorySource, OrderService, PaymentSource, RoleSource, ShipmentSource,
};

/// Fixed reference instant so fixture data is stable across runs.
fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// The all-domains fixture gateway.
///
/// Records are rebuilt on every fetch, so mutations applied to a store never
/// leak back into the fixture data.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fixtures;

/// Sample admin accounts.
#[must_use]
pub fn sample_admins() -> Vec<AdminUser> {
    let t = base_time();
    let mk = |username: &str, full_name: &str, role, status, permissions: &[&str]| {
        let email = Email::parse(&format!("{username}@jadeshopping.example")).ok()?;
        Some(AdminUser {
            id: AdminUserId::generate(),
            username: username.to_string(),
            email,
            full_name: full_name.to_string(),
            role,
            status,
            permissions: permissions.iter().map(ToString::to_string).collect(),
            login_count: 12,
            last_login_at: Some(t),
            created_at: t,
            updated_at: t,
        })
    };
    [
        mk(
            "wei.zhang",
            "Wei Zhang",
            AdminRole::SuperAdmin,
            AdminStatus::Active,
            &[],
        ),
        mk(
            "mei.lin",
            "Mei Lin",
            AdminRole::Manager,
            AdminStatus::Active,
            &["inventory.view", "inventory.approve", "shipping.view"],
        ),
        mk(
            "jun.chen",
            "Jun Chen",
            AdminRole::Operator,
            AdminStatus::Active,
            &["inventory.view", "inventory.adjust"],
        ),
        mk(
            "audit.bot",
            "Audit Bot",
            AdminRole::Viewer,
            AdminStatus::Inactive,
            &["audit.view"],
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Sample roles.
#[must_use]
pub fn sample_roles() -> Vec<Role> {
    let t = base_time();
    let mk = |name: &str, description: &str, permissions: &[&str], members, builtin| Role {
        id: RoleId::generate(),
        name: name.to_string(),
        description: description.to_string(),
        permissions: permissions.iter().map(ToString::to_string).collect(),
        member_count: members,
        builtin,
        created_at: t,
        updated_at: t,
    };
    vec![
        mk("Super Admin", "Unrestricted access", &[], 1, true),
        mk(
            "Warehouse Lead",
            "Inventory approvals and shipping",
            &["inventory.view", "inventory.approve", "shipping.view"],
            2,
            false,
        ),
        mk(
            "Catalog Editor",
            "Categories and content",
            &["categories.edit", "content.edit"],
            3,
            false,
        ),
    ]
}

/// Sample category tree (flat, parent links only).
#[must_use]
pub fn sample_categories() -> Vec<Category> {
    let t = base_time();
    let mk = |name: &str, parent: Option<CategoryId>, level, sort, active, products| Category {
        id: CategoryId::generate(),
        name: name.to_string(),
        parent_id: parent,
        level,
        sort_order: sort,
        is_active: active,
        seo_title: Some(format!("{name} | Jade Shopping")),
        seo_keywords: vec![name.to_lowercase()],
        product_count: products,
        total_sales: Price::from_cents(i64::from(products) * 12_900, CurrencyCode::USD),
        created_at: t,
        updated_at: t,
    };

    let tea = mk("Tea", None, 1, 1, true, 42);
    let tea_id = tea.id;
    let ware = mk("Teaware", None, 1, 2, true, 18);
    vec![
        tea,
        mk("Oolong", Some(tea_id), 2, 1, true, 16),
        mk("Pu-erh", Some(tea_id), 2, 2, true, 11),
        mk("Seasonal", Some(tea_id), 2, 3, false, 0),
        ware,
    ]
}

/// Sample inventory records, including one low-stock and one out-of-stock.
#[must_use]
pub fn sample_inventory() -> Vec<InventoryItem> {
    let t = base_time();
    let mk = |sku: &str, name: &str, current, reserved, min_threshold, reorder| InventoryItem {
        id: InventoryItemId::generate(),
        product_id: ProductId::generate(),
        sku: sku.to_string(),
        product_name: name.to_string(),
        current_stock: current,
        reserved_stock: reserved,
        min_stock_threshold: min_threshold,
        reorder_point: reorder,
        version: 1,
        created_at: t,
        updated_at: t,
    };
    vec![
        mk("JD-TEA-001", "Jade Oolong Tea 100g", 120, 14, 40, 60),
        mk("JD-TEA-002", "Aged Pu-erh Cake 357g", 30, 2, 40, 50),
        mk("JD-WARE-001", "Celadon Gaiwan", 0, 0, 10, 15),
        mk("JD-WARE-002", "Glass Teapot 600ml", 75, 5, 20, 30),
    ]
}

/// Sample shipments with tracking histories.
#[must_use]
pub fn sample_shipments() -> Vec<Shipment> {
    let t = base_time();
    let event = |description: &str, location: &str, minutes: i64| TrackingEvent {
        description: description.to_string(),
        location: Some(location.to_string()),
        occurred_at: t + chrono::Duration::minutes(minutes),
    };
    vec![
        Shipment {
            id: ShipmentId::generate(),
            order_id: OrderId::generate(),
            carrier: "SF Express".to_string(),
            tracking_number: "SF1048572910".to_string(),
            status: ShipmentStatus::InTransit,
            destination: "Hangzhou, Zhejiang".to_string(),
            events: vec![
                event("Picked up", "Shenzhen", 0),
                event("Departed facility", "Shenzhen", 180),
            ],
            created_at: t,
            updated_at: t + chrono::Duration::minutes(180),
        },
        Shipment {
            id: ShipmentId::generate(),
            order_id: OrderId::generate(),
            carrier: "ZTO".to_string(),
            tracking_number: "ZT7730015526".to_string(),
            status: ShipmentStatus::Delivered,
            destination: "Chengdu, Sichuan".to_string(),
            events: vec![
                event("Picked up", "Guangzhou", 0),
                event("Arrived at hub", "Chengdu", 1440),
                event("Delivered", "Chengdu", 2100),
            ],
            created_at: t,
            updated_at: t + chrono::Duration::minutes(2100),
        },
    ]
}

/// Sample order summaries.
///
/// Order IDs are fixed constants rather than freshly generated: the order
/// service is queried by ID, so a detail lookup against the fixture gateway
/// must land on the same record the list returned.
#[must_use]
pub fn sample_orders() -> Vec<Order> {
    let t = base_time();
    let mk = |raw_id: u128, number: &str, customer: &str, financial, fulfillment, cents| Order {
        id: OrderId::new(uuid::Uuid::from_u128(raw_id)),
        order_number: number.to_string(),
        customer_name: customer.to_string(),
        financial_status: financial,
        fulfillment_status: fulfillment,
        total: Price::from_cents(cents, CurrencyCode::USD),
        placed_at: t,
    };
    vec![
        mk(
            0x4a44_1001,
            "JD-1001",
            "Hua Fang",
            FinancialStatus::Paid,
            FulfillmentStatus::Fulfilled,
            8_350,
        ),
        mk(
            0x4a44_1002,
            "JD-1002",
            "Omar Haddad",
            FinancialStatus::Paid,
            FulfillmentStatus::Unfulfilled,
            12_900,
        ),
        mk(
            0x4a44_1003,
            "JD-1003",
            "Sofia Reyes",
            FinancialStatus::Pending,
            FulfillmentStatus::Unfulfilled,
            4_150,
        ),
    ]
}

/// Sample payment channels.
#[must_use]
pub fn sample_payment_channels() -> Vec<PaymentChannel> {
    let t = base_time();
    let mk = |name: &str, code: &str, enabled, fee: &str, currencies: Vec<CurrencyCode>| {
        PaymentChannel {
            id: PaymentChannelId::generate(),
            name: name.to_string(),
            provider_code: code.to_string(),
            enabled,
            fee_rate: fee.parse::<Decimal>().unwrap_or_default(),
            supported_currencies: currencies,
            created_at: t,
            updated_at: t,
        }
    };
    vec![
        mk(
            "Alipay",
            "alipay",
            true,
            "0.006",
            vec![CurrencyCode::CNY, CurrencyCode::USD],
        ),
        mk("Card", "stripe", true, "0.029", vec![CurrencyCode::USD, CurrencyCode::EUR]),
        mk("Bank Transfer", "wire", false, "0", vec![CurrencyCode::USD]),
    ]
}

/// Sample content blocks.
#[must_use]
pub fn sample_content() -> Vec<ContentBlock> {
    let t = base_time();
    let mk = |slug: &str, title: &str, status, position| ContentBlock {
        id: ContentBlockId::generate(),
        slug: slug.to_string(),
        title: title.to_string(),
        body: format!("<h1>{title}</h1>"),
        status,
        position,
        publish_from: None,
        publish_until: None,
        created_at: t,
        updated_at: t,
    };
    vec![
        mk("spring-sale", "Spring Sale", ContentStatus::Published, 1),
        mk("brewing-guide", "Brewing Guide", ContentStatus::Published, 2),
        mk("autumn-preview", "Autumn Preview", ContentStatus::Draft, 3),
    ]
}

/// Sample audit history.
#[must_use]
pub fn sample_audit_logs() -> Vec<AuditLog> {
    let t = base_time();
    let actor = AdminUserId::generate();
    let mk = |action: &str, resource_type: &str, risk, minutes: i64| AuditLog {
        id: AuditLogId::generate(),
        action: action.to_string(),
        actor,
        actor_name: "wei.zhang".to_string(),
        resource_type: resource_type.to_string(),
        resource_id: "fixture".to_string(),
        risk_level: risk,
        detail: String::new(),
        recorded_at: t + chrono::Duration::minutes(minutes),
    };
    vec![
        mk("auth.login", "admin_user", RiskLevel::Low, 0),
        mk(
            "inventory.adjustment.approve",
            "inventory_item",
            RiskLevel::High,
            30,
        ),
        mk("admin.role.update", "role", RiskLevel::Critical, 60),
    ]
}

impl AdminDirectory for Fixtures {
    async fn fetch_admins(&self) -> Result<Vec<AdminUser>, GatewayError> {
        Ok(sample_admins())
    }

    async fn fetch_stats(&self) -> Result<DirectoryStats, GatewayError> {
        let admins = sample_admins();
        Ok(DirectoryStats {
            total: admins.len() as u64,
            active: admins
                .iter()
                .filter(|a| a.status == AdminStatus::Active)
                .count() as u64,
            locked: admins
                .iter()
                .filter(|a| a.status == AdminStatus::Locked)
                .count() as u64,
        })
    }

    async fn fetch_tags(&self) -> Result<Vec<String>, GatewayError> {
        Ok(vec![
            "warehouse".to_string(),
            "catalog".to_string(),
            "finance".to_string(),
        ])
    }
}

impl RoleSource for Fixtures {
    async fn fetch_roles(&self) -> Result<Vec<Role>, GatewayError> {
        Ok(sample_roles())
    }
}

impl CategorySource for Fixtures {
    async fn fetch_categories(&self) -> Result<Vec<Category>, GatewayError> {
        Ok(sample_categories())
    }
}

impl InventorySource for Fixtures {
    async fn fetch_inventory(&self) -> Result<Vec<InventoryItem>, GatewayError> {
        Ok(sample_inventory())
    }
}

impl ShipmentSource for Fixtures {
    async fn fetch_shipments(&self) -> Result<Vec<Shipment>, GatewayError> {
        Ok(sample_shipments())
    }
}

impl OrderService for Fixtures {
    async fn get_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>, GatewayError> {
        // The real order service filters server-side; fixtures do the same
        // so callers see identical shapes either way.
        Ok(sample_orders()
            .into_iter()
            .filter(|o| filter.matches(o))
            .collect())
    }

    async fn get_order_by_id(&self, id: OrderId) -> Result<Option<Order>, GatewayError> {
        Ok(sample_orders().into_iter().find(|o| o.id == id))
    }
}

impl PaymentSource for Fixtures {
    async fn fetch_channels(&self) -> Result<Vec<PaymentChannel>, GatewayError> {
        Ok(sample_payment_channels())
    }
}

impl ContentSource for Fixtures {
    async fn fetch_content(&self) -> Result<Vec<ContentBlock>, GatewayError> {
        Ok(sample_content())
    }
}

impl AuditSource for Fixtures {
    async fn fetch_audit_logs(&self) -> Result<Vec<AuditLog>, GatewayError> {
        Ok(sample_audit_logs())
    }
}

/// A source that always fails, for exercising error paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl Unavailable {
    fn err<T>() -> Result<T, GatewayError> {
        Err(GatewayError::Unavailable("fixture offline".to_string()))
    }
}

impl AdminDirectory for Unavailable {
    async fn fetch_admins(&self) -> Result<Vec<AdminUser>, GatewayError> {
        Self::err()
    }

    async fn fetch_stats(&self) -> Result<DirectoryStats, GatewayError> {
        Self::err()
    }

    async fn fetch_tags(&self) -> Result<Vec<String>, GatewayError> {
        Self::err()
    }
}

impl InventorySource for Unavailable {
    async fn fetch_inventory(&self) -> Result<Vec<InventoryItem>, GatewayError> {
        Self::err()
    }
}

impl ShipmentSource for Unavailable {
    async fn fetch_shipments(&self) -> Result<Vec<Shipment>, GatewayError> {
        Self::err()
    }
}

impl OrderService for Unavailable {
    async fn get_orders(&self, _filter: &OrderFilter) -> Result<Vec<Order>, GatewayError> {
        Self::err()
    }

    async fn get_order_by_id(&self, _id: OrderId) -> Result<Option<Order>, GatewayError> {
        Self::err()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::stock_status;
    use jade_shopping_core::StockStatus;

    #[tokio::test]
    async fn test_fixture_inventory_covers_every_status() {
        let items = Fixtures.fetch_inventory().await.unwrap();
        let statuses: Vec<StockStatus> = items.iter().map(stock_status).collect();
        assert!(statuses.contains(&StockStatus::Normal));
        assert!(statuses.contains(&StockStatus::LowStock));
        assert!(statuses.contains(&StockStatus::OutOfStock));
    }

    #[tokio::test]
    async fn test_stats_count_active_accounts() {
        let stats = Fixtures.fetch_stats().await.unwrap();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 3);
        assert_eq!(stats.locked, 0);
    }

    #[tokio::test]
    async fn test_order_ids_are_stable_across_fetches() {
        let listed = Fixtures.get_orders(&OrderFilter::default()).await.unwrap();
        let first = listed.first().unwrap().clone();

        let found = Fixtures.get_order_by_id(first.id).await.unwrap().unwrap();
        assert_eq!(found.order_number, first.order_number);
        assert_eq!(found.customer_name, first.customer_name);
    }

    #[tokio::test]
    async fn test_unavailable_always_errors() {
        let err = Unavailable.fetch_admins().await.unwrap_err();
        assert!(matches!(err, GatewayError::Unavailable(_)));
    }
}
