//! Reusable UI component configuration.

pub mod data_table;

pub use data_table::{
    BulkAction, DataTableConfig, FilterOption, FilterType, TableColumn, TableFilter,
};
