//! Filtering and pagination primitives shared by every list screen.
//!
//! Each domain defines its own filter struct (next to its model) from these
//! building blocks; the contract is always the same: predicates AND
//! together, the empty filter is the identity, and filtering never reorders
//! the collection.

pub mod filter;
pub mod page;

pub use filter::{DateRange, Filter, TextSearch};
pub use page::{Page, Paged};
