//! Data table component types.
//!
//! These types define the configuration for the reusable list-screen
//! tables. The legacy admin hardcoded column lists and filter panels in
//! each screen; here every screen builds one of these configs and the
//! column picker persists its choices through the session snapshot keyed
//! by `table_id`.

use serde::{Deserialize, Serialize};

/// Column definition for a data table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableColumn {
    /// Unique key for the column.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
    /// Whether the column is sortable.
    pub sortable: bool,
    /// Whether the column is visible by default.
    pub default_visible: bool,
}

impl TableColumn {
    /// Create a new sortable column.
    #[must_use]
    pub fn sortable(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: true,
            default_visible: true,
        }
    }

    /// Create a new non-sortable column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: false,
            default_visible: true,
        }
    }

    /// Set whether the column is visible by default.
    #[must_use]
    pub const fn visible(mut self, visible: bool) -> Self {
        self.default_visible = visible;
        self
    }
}

/// Filter type for data tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    /// Text input filter.
    Text,
    /// Single-select dropdown.
    Select,
    /// Multi-select checkboxes.
    MultiSelect,
    /// Date range picker.
    DateRange,
}

/// Filter definition for a data table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableFilter {
    /// Filter parameter key.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Filter type.
    pub filter_type: FilterType,
    /// Placeholder text (for text inputs).
    pub placeholder: Option<String>,
    /// Available options (for select/multiselect).
    pub options: Vec<FilterOption>,
}

/// Option for select/multiselect filters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOption {
    /// Option value.
    pub value: String,
    /// Display label.
    pub label: String,
}

impl FilterOption {
    /// Create a new filter option.
    #[must_use]
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

impl TableFilter {
    /// Create a text filter.
    #[must_use]
    pub fn text(key: &str, label: &str, placeholder: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            filter_type: FilterType::Text,
            placeholder: Some(placeholder.to_string()),
            options: vec![],
        }
    }

    /// Create a select filter.
    #[must_use]
    pub fn select(key: &str, label: &str, options: Vec<FilterOption>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            filter_type: FilterType::Select,
            placeholder: None,
            options,
        }
    }

    /// Create a multi-select filter.
    #[must_use]
    pub fn multi_select(key: &str, label: &str, options: Vec<FilterOption>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            filter_type: FilterType::MultiSelect,
            placeholder: None,
            options,
        }
    }

    /// Create a date range filter.
    #[must_use]
    pub fn date_range(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            filter_type: FilterType::DateRange,
            placeholder: None,
            options: vec![],
        }
    }
}

/// Bulk action definition for data tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkAction {
    /// Action key (passed to event handler).
    pub key: String,
    /// Display label.
    pub label: String,
    /// Whether this is a destructive action.
    pub destructive: bool,
}

impl BulkAction {
    /// Create a new bulk action.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            destructive: false,
        }
    }

    /// Mark this action as destructive.
    #[must_use]
    pub const fn destructive(mut self) -> Self {
        self.destructive = true;
        self
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataTableConfig {
    /// Unique table identifier, also the snapshot key for column prefs.
    pub table_id: String,
    /// Column definitions.
    pub columns: Vec<TableColumn>,
    /// Filter definitions.
    pub filters: Vec<TableFilter>,
    /// Bulk action definitions.
    pub bulk_actions: Vec<BulkAction>,
    /// Search placeholder text.
    pub search_placeholder: String,
    /// Title for empty state.
    pub empty_title: String,
    /// Description for empty state.
    pub empty_description: Option<String>,
    /// Whether to show bulk action bar.
    pub has_bulk_actions: bool,
    /// Whether to show filter panel.
    pub has_filters: bool,
    /// Whether to show column picker.
    pub has_column_picker: bool,
}

impl DataTableConfig {
    /// Create a new data table configuration.
    #[must_use]
    pub fn new(table_id: &str) -> Self {
        Self {
            table_id: table_id.to_string(),
            columns: vec![],
            filters: vec![],
            bulk_actions: vec![],
            search_placeholder: "Search...".to_string(),
            empty_title: "No records found".to_string(),
            empty_description: None,
            has_bulk_actions: false,
            has_filters: false,
            has_column_picker: true,
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Add a filter.
    #[must_use]
    pub fn filter(mut self, filter: TableFilter) -> Self {
        self.has_filters = true;
        self.filters.push(filter);
        self
    }

    /// Add a bulk action.
    #[must_use]
    pub fn bulk_action(mut self, action: BulkAction) -> Self {
        self.has_bulk_actions = true;
        self.bulk_actions.push(action);
        self
    }

    /// Set search placeholder.
    #[must_use]
    pub fn search_placeholder(mut self, placeholder: &str) -> Self {
        self.search_placeholder = placeholder.to_string();
        self
    }

    /// Set empty state configuration.
    #[must_use]
    pub fn empty_state(mut self, title: &str, description: Option<&str>) -> Self {
        self.empty_title = title.to_string();
        self.empty_description = description.map(ToString::to_string);
        self
    }

    /// Get default visible columns.
    #[must_use]
    pub fn default_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.default_visible)
            .map(|c| c.key.clone())
            .collect()
    }
}

/// Build the admin users table configuration.
#[must_use]
pub fn admins_table_config() -> DataTableConfig {
    DataTableConfig::new("admins")
        .column(TableColumn::sortable("username", "Username"))
        .column(TableColumn::new("full_name", "Name"))
        .column(TableColumn::new("email", "Email").visible(false))
        .column(TableColumn::new("role", "Role"))
        .column(TableColumn::new("status", "Status"))
        .column(TableColumn::sortable("last_login", "Last Login").visible(false))
        .column(TableColumn::sortable("created", "Created").visible(false))
        .filter(TableFilter::multi_select(
            "role",
            "Role",
            vec![
                FilterOption::new("super_admin", "Super Admin"),
                FilterOption::new("admin", "Admin"),
                FilterOption::new("manager", "Manager"),
                FilterOption::new("operator", "Operator"),
                FilterOption::new("viewer", "Viewer"),
            ],
        ))
        .filter(TableFilter::select(
            "status",
            "Status",
            vec![
                FilterOption::new("active", "Active"),
                FilterOption::new("inactive", "Inactive"),
                FilterOption::new("locked", "Locked"),
            ],
        ))
        .filter(TableFilter::date_range("created_at", "Created Date"))
        .bulk_action(BulkAction::new("deactivate", "Deactivate"))
        .bulk_action(BulkAction::new("delete", "Delete").destructive())
        .search_placeholder("Search admins by username, name, or email...")
        .empty_state("No admins found", Some("Try adjusting your search or filters"))
}

/// Build the inventory table configuration.
#[must_use]
pub fn inventory_table_config() -> DataTableConfig {
    DataTableConfig::new("inventory")
        .column(TableColumn::sortable("sku", "SKU"))
        .column(TableColumn::new("product", "Product"))
        .column(TableColumn::sortable("current_stock", "On Hand"))
        .column(TableColumn::new("reserved", "Reserved").visible(false))
        .column(TableColumn::new("available", "Available"))
        .column(TableColumn::new("status", "Status"))
        .column(TableColumn::new("threshold", "Low-Stock Threshold").visible(false))
        .filter(TableFilter::multi_select(
            "status",
            "Stock Status",
            vec![
                FilterOption::new("normal", "Normal"),
                FilterOption::new("low_stock", "Low Stock"),
                FilterOption::new("out_of_stock", "Out of Stock"),
            ],
        ))
        .filter(TableFilter::select(
            "needs_reorder",
            "Needs Reorder",
            vec![
                FilterOption::new("true", "Yes"),
                FilterOption::new("false", "No"),
            ],
        ))
        .bulk_action(BulkAction::new("request_adjustment", "Request Adjustment"))
        .search_placeholder("Search by SKU or product name...")
        .empty_state("No inventory items", None)
}

/// Build the shipments table configuration.
#[must_use]
pub fn shipments_table_config() -> DataTableConfig {
    DataTableConfig::new("shipments")
        .column(TableColumn::sortable("tracking_number", "Tracking #"))
        .column(TableColumn::new("carrier", "Carrier"))
        .column(TableColumn::new("order", "Order"))
        .column(TableColumn::new("status", "Status"))
        .column(TableColumn::sortable("shipped", "Shipped").visible(false))
        .filter(TableFilter::multi_select(
            "status",
            "Status",
            vec![
                FilterOption::new("pending", "Pending"),
                FilterOption::new("in_transit", "In Transit"),
                FilterOption::new("delivered", "Delivered"),
                FilterOption::new("failed", "Failed"),
            ],
        ))
        .filter(TableFilter::date_range("shipped_at", "Shipped Date"))
        .search_placeholder("Search by tracking number or carrier...")
        .empty_state("No shipments found", None)
}
