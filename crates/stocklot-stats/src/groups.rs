//! Category and vendor grouping.

use std::collections::HashMap;

use stocklot_model::InventoryRecord;

/// Fallback group name for records without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";
/// Fallback group name for records without a vendor.
pub const NO_VENDOR: &str = "No Vendor";

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGroup {
    pub name: String,
    pub count: usize,
    /// Sum of after-tax selling price times quantity on hand.
    pub total_value: f64,
    pub items: Vec<InventoryRecord>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorGroup {
    pub name: String,
    pub item_count: usize,
    /// Sum of after-tax buying price times quantity on hand.
    pub total_value: f64,
    pub items: Vec<InventoryRecord>,
}

/// Groups records by category, `"Uncategorized"` when the field is empty.
/// Groups appear in order of first appearance.
pub fn by_category(items: &[InventoryRecord]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for item in items {
        let name = if item.category.is_empty() {
            UNCATEGORIZED
        } else {
            item.category.as_str()
        };
        let slot = *index.entry(name.to_string()).or_insert_with(|| {
            groups.push(CategoryGroup {
                name: name.to_string(),
                count: 0,
                total_value: 0.0,
                items: Vec::new(),
            });
            groups.len() - 1
        });
        let group = &mut groups[slot];
        group.count += 1;
        group.total_value += item.inventory_after_tax_selling_price * item.qoh_all_batches;
        group.items.push(item.clone());
    }
    groups
}

/// Groups records by vendor, `"No Vendor"` when the field is empty, sorted
/// by descending stock value at buying prices. Ties keep the order in which
/// the vendors were first seen.
pub fn by_vendor(items: &[InventoryRecord]) -> Vec<VendorGroup> {
    let mut groups: Vec<VendorGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for item in items {
        let name = if item.vendor_name.is_empty() {
            NO_VENDOR
        } else {
            item.vendor_name.as_str()
        };
        let slot = *index.entry(name.to_string()).or_insert_with(|| {
            groups.push(VendorGroup {
                name: name.to_string(),
                item_count: 0,
                total_value: 0.0,
                items: Vec::new(),
            });
            groups.len() - 1
        });
        let group = &mut groups[slot];
        group.item_count += 1;
        group.total_value += item.inventory_after_tax_buying_price * item.qoh_all_batches;
        group.items.push(item.clone());
    }
    groups.sort_by(|a, b| b.total_value.total_cmp(&a.total_value));
    groups
}
