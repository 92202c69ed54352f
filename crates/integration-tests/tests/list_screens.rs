//! Integration tests for the behavior shared by the list screens:
//! filtering, pagination, selection, and the load flag.

#![allow(clippy::unwrap_used)]

use jade_shopping_admin::AppError;
use jade_shopping_admin::gateway::fixtures::Unavailable;
use jade_shopping_admin::gateway::{FallbackDirectory, Fixtures};
use jade_shopping_admin::models::{AdminFilter, InventoryFilter, ShipmentFilter, TrackingEvent};
use jade_shopping_admin::query::{Page, TextSearch};
use jade_shopping_admin::store::{
    AdminStore, CategoryStore, InventoryStore, LoadState, PaymentStore, ShipmentStore,
};
use jade_shopping_core::{AdminStatus, ShipmentStatus, StockStatus};

// =============================================================================
// Filtering
// =============================================================================

#[tokio::test]
async fn test_filters_combine_and_preserve_order() {
    let mut admins = AdminStore::new(Fixtures);
    admins.refresh().await.unwrap();

    admins.set_filter(AdminFilter {
        search: TextSearch::new("jadeshopping.example"),
        status: Some(AdminStatus::Active),
        ..AdminFilter::default()
    });

    let view = admins.view(Page::first());
    // Fixtures carry three active accounts; the inactive bot is excluded.
    assert_eq!(view.page.total, 3);
    let usernames: Vec<&str> = view.page.items.iter().map(|a| a.username.as_str()).collect();
    assert_eq!(usernames, ["wei.zhang", "mei.lin", "jun.chen"]);
}

#[tokio::test]
async fn test_clearing_the_filter_restores_the_full_list() {
    let mut admins = AdminStore::new(Fixtures);
    admins.refresh().await.unwrap();

    admins.set_filter(AdminFilter {
        search: TextSearch::new("no-such-admin"),
        ..AdminFilter::default()
    });
    assert_eq!(admins.view(Page::first()).page.total, 0);

    admins.set_filter(AdminFilter::default());
    assert_eq!(admins.view(Page::first()).page.total, 4);
}

#[tokio::test]
async fn test_inventory_filters_on_the_derived_badge() {
    let mut inventory = InventoryStore::new(Fixtures);
    inventory.refresh().await.unwrap();

    inventory.set_filter(InventoryFilter {
        status: Some(StockStatus::OutOfStock),
        ..InventoryFilter::default()
    });
    let view = inventory.view(Page::first());
    assert_eq!(view.page.total, 1);
    assert_eq!(view.page.items.first().unwrap().sku, "JD-WARE-001");

    // The badge is derived, so raising the stock moves the item out of the
    // filtered view without touching the filter.
    let item = view.page.items.first().unwrap().clone();
    inventory.commit_stock(item.id, item.version, 50).unwrap();
    assert_eq!(inventory.view(Page::first()).page.total, 0);
}

// =============================================================================
// Pagination
// =============================================================================

#[tokio::test]
async fn test_small_pages_partition_the_collection() {
    let mut inventory = InventoryStore::new(Fixtures);
    inventory.refresh().await.unwrap();

    let first = inventory.view(Page::new(1, 3));
    let second = inventory.view(Page::new(2, 3));
    assert_eq!(first.page.items.len(), 3);
    assert_eq!(second.page.items.len(), 1);
    assert_eq!(first.page.total_pages, 2);
    assert!(first.page.has_next());
    assert!(second.page.has_prev());

    let mut all: Vec<String> = first.page.items.into_iter().map(|i| i.sku).collect();
    all.extend(second.page.items.into_iter().map(|i| i.sku));
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 4);
}

#[tokio::test]
async fn test_page_past_the_end_is_empty_not_an_error() {
    let mut inventory = InventoryStore::new(Fixtures);
    inventory.refresh().await.unwrap();

    let view = inventory.view(Page::new(99, 20));
    assert!(view.page.items.is_empty());
    assert_eq!(view.page.total, 4);
}

// =============================================================================
// Load flag
// =============================================================================

#[tokio::test]
async fn test_failed_refresh_is_never_stuck_loading() {
    let mut admins = AdminStore::new(Unavailable);
    let err = admins.refresh().await.unwrap_err();
    assert!(matches!(err, AppError::Gateway(_)));

    let view = admins.view(Page::first());
    assert!(!view.load.is_loading());
    assert!(matches!(view.load, LoadState::Failed(_)));
}

#[tokio::test]
async fn test_fallback_directory_serves_fixtures_when_remote_is_down() {
    let mut admins = AdminStore::new(FallbackDirectory::new(Unavailable, Fixtures));
    admins.refresh().await.unwrap();

    let view = admins.view(Page::first());
    assert_eq!(view.page.total, 4);
    assert_eq!(view.load, LoadState::Loaded);
}

// =============================================================================
// Selection
// =============================================================================

#[tokio::test]
async fn test_bulk_selection_toggles_and_clears() {
    let mut admins = AdminStore::new(Fixtures);
    admins.refresh().await.unwrap();

    let ids: Vec<_> = admins
        .view(Page::first())
        .page
        .items
        .iter()
        .map(|a| a.id)
        .collect();

    for id in &ids {
        assert!(admins.toggle_selected(*id));
    }
    assert_eq!(admins.selection().len(), ids.len());

    // Toggling again deselects.
    assert!(!admins.toggle_selected(*ids.first().unwrap()));
    assert_eq!(admins.selection().len(), ids.len() - 1);
}

// =============================================================================
// Domain rules reachable from the screens
// =============================================================================

#[tokio::test]
async fn test_category_with_children_cannot_be_deleted() {
    let mut categories = CategoryStore::new(Fixtures);
    categories.refresh().await.unwrap();

    let tea = categories
        .view(Page::first())
        .page
        .items
        .into_iter()
        .find(|c| c.name == "Tea")
        .unwrap();

    let err = categories.delete(tea.id).unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    assert!(categories.find(tea.id).is_some());
}

#[tokio::test]
async fn test_delivered_shipment_cannot_regress() {
    let mut shipments = ShipmentStore::new(Fixtures);
    shipments.refresh().await.unwrap();

    let id = shipments.view(Page::first()).page.items.first().unwrap().id;
    shipments.set_status(id, ShipmentStatus::Delivered).unwrap();

    let err = shipments
        .set_status(id, ShipmentStatus::InTransit)
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn test_tracking_events_keep_insertion_order() {
    let mut shipments = ShipmentStore::new(Fixtures);
    shipments.refresh().await.unwrap();

    shipments.set_filter(ShipmentFilter {
        search: TextSearch::new("SF1048572910"),
        ..ShipmentFilter::default()
    });
    let shipment = shipments
        .view(Page::first())
        .page
        .items
        .first()
        .unwrap()
        .clone();
    let before = shipment.events.len();

    shipments
        .record_event(
            shipment.id,
            TrackingEvent {
                description: "Out for delivery".to_string(),
                location: Some("Hangzhou".to_string()),
                occurred_at: chrono::Utc::now(),
            },
        )
        .unwrap();

    let after = shipments.find(shipment.id).unwrap();
    assert_eq!(after.events.len(), before + 1);
    assert_eq!(
        after.events.last().unwrap().description,
        "Out for delivery"
    );
}

#[tokio::test]
async fn test_payment_channel_double_toggle_restores() {
    let mut payments = PaymentStore::new(Fixtures);
    payments.refresh().await.unwrap();

    let channel = payments.view(Page::first()).page.items.first().unwrap().clone();
    let flipped = payments.toggle_enabled(channel.id).unwrap();
    assert_ne!(flipped, channel.enabled);
    let restored = payments.toggle_enabled(channel.id).unwrap();
    assert_eq!(restored, channel.enabled);
}
