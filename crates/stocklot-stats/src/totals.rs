//! Whole-batch aggregate counters.

use stocklot_model::InventoryRecord;

use crate::LOW_STOCK_THRESHOLD;

/// Aggregate view over one imported batch.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryTotals {
    pub total_items: usize,
    /// Sum of quantity on hand across all batches.
    pub total_stock: f64,
    /// Sum of after-tax selling price times quantity on hand.
    pub total_value: f64,
    /// Items with quantity in `(0, 10]`.
    pub low_stock_items: usize,
    /// Items at or below their configured reorder level.
    pub critical_items: usize,
    pub out_of_stock_items: usize,
}

pub fn totals(items: &[InventoryRecord]) -> InventoryTotals {
    InventoryTotals {
        total_items: items.len(),
        total_stock: items.iter().map(|item| item.qoh_all_batches).sum(),
        total_value: items
            .iter()
            .map(|item| item.inventory_after_tax_selling_price * item.qoh_all_batches)
            .sum(),
        low_stock_items: items
            .iter()
            .filter(|item| {
                item.qoh_all_batches > 0.0 && item.qoh_all_batches <= LOW_STOCK_THRESHOLD
            })
            .count(),
        critical_items: items
            .iter()
            .filter(|item| item.reorder_level > 0.0 && item.qoh_all_batches <= item.reorder_level)
            .count(),
        out_of_stock_items: items
            .iter()
            .filter(|item| item.qoh_all_batches == 0.0)
            .count(),
    }
}
