//! Read-only derived views over a batch of inventory records.
//!
//! Every function takes the record slice as explicit input and returns new
//! values; nothing here mutates its argument or keeps state between calls.

pub mod expiry;
pub mod filters;
pub mod groups;
pub mod totals;

/// Default quantity threshold for the low-stock views.
pub const LOW_STOCK_THRESHOLD: f64 = 10.0;

pub use expiry::parse_expiry;
pub use filters::{critical_stock, expiring, expiring_as_of, low_stock, low_stock_default};
pub use groups::{CategoryGroup, NO_VENDOR, UNCATEGORIZED, VendorGroup, by_category, by_vendor};
pub use totals::{InventoryTotals, totals};
