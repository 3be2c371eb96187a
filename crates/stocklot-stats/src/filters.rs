//! Filtered record views: low stock, critical stock, expiring batches.

use chrono::{Local, Months, NaiveDate};
use tracing::debug;

use stocklot_model::InventoryRecord;

use crate::LOW_STOCK_THRESHOLD;
use crate::expiry::parse_expiry;

/// Items with quantity in `(0, threshold]`, ordered by ascending quantity.
/// Ties keep their original relative order.
pub fn low_stock(items: &[InventoryRecord], threshold: f64) -> Vec<InventoryRecord> {
    let mut result: Vec<InventoryRecord> = items
        .iter()
        .filter(|item| item.qoh_all_batches > 0.0 && item.qoh_all_batches <= threshold)
        .cloned()
        .collect();
    result.sort_by(|a, b| a.qoh_all_batches.total_cmp(&b.qoh_all_batches));
    result
}

/// [`low_stock`] with the default threshold of 10.
pub fn low_stock_default(items: &[InventoryRecord]) -> Vec<InventoryRecord> {
    low_stock(items, LOW_STOCK_THRESHOLD)
}

/// Items at or below their reorder level, ordered by ascending quantity.
/// A reorder level of zero means "not configured" and never matches.
/// Zero-quantity items belong to the out-of-stock bucket and are not
/// repeated here.
pub fn critical_stock(items: &[InventoryRecord]) -> Vec<InventoryRecord> {
    let mut result: Vec<InventoryRecord> = items
        .iter()
        .filter(|item| {
            item.reorder_level > 0.0
                && item.qoh_all_batches > 0.0
                && item.qoh_all_batches <= item.reorder_level
        })
        .cloned()
        .collect();
    result.sort_by(|a, b| a.qoh_all_batches.total_cmp(&b.qoh_all_batches));
    result
}

/// Batches expiring within `months_ahead` months of today's local date.
pub fn expiring(items: &[InventoryRecord], months_ahead: u32) -> Vec<InventoryRecord> {
    expiring_as_of(items, months_ahead, Local::now().date_naive())
}

/// Batches whose `"Mon-YY"` expiry falls within `[today, today +
/// months_ahead months]`, both ends inclusive. Only batches with a
/// non-empty expiry and a non-zero batch-wise quantity are considered;
/// unparseable expiry strings exclude the record rather than failing.
pub fn expiring_as_of(
    items: &[InventoryRecord],
    months_ahead: u32,
    today: NaiveDate,
) -> Vec<InventoryRecord> {
    let Some(horizon) = today.checked_add_months(Months::new(months_ahead)) else {
        return Vec::new();
    };
    items
        .iter()
        .filter(|item| {
            if item.batch_expiry_date.is_empty() || item.qoh_batch_wise == 0.0 {
                return false;
            }
            match parse_expiry(&item.batch_expiry_date) {
                Some(expiry) => expiry >= today && expiry <= horizon,
                None => {
                    debug!(
                        id = %item.id,
                        expiry = %item.batch_expiry_date,
                        "skipping record with unparseable expiry"
                    );
                    false
                }
            }
        })
        .cloned()
        .collect()
}
