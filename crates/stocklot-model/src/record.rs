#![deny(unsafe_code)]

use std::collections::BTreeMap;

/// One data line of a delimited import file, keyed by the header captions
/// found in the file itself.
///
/// Keys are whatever the source file declares; nothing about the schema is
/// fixed at this stage. Values for headers beyond the end of a short row
/// default to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: BTreeMap<String, String>,
}

impl RawRow {
    /// Zips a parsed header sequence against a parsed value sequence
    /// positionally. Duplicate headers keep the last value.
    pub fn from_header_values(headers: &[String], values: &[String]) -> Self {
        let mut cells = BTreeMap::new();
        for (index, header) in headers.iter().enumerate() {
            let value = values.get(index).cloned().unwrap_or_default();
            cells.insert(header.clone(), value);
        }
        Self { cells }
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells.get(header).map(String::as_str)
    }

    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(header.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A normalized batch-inventory record.
///
/// Every field is independent; there is no referential integrity between
/// records and no uniqueness enforced on `batch_no` or `code`. Records are
/// immutable once produced by normalization.
///
/// `batch_expiry_date` stays as the raw `"Mon-YY"` text from the source
/// file; interpretation happens only inside the expiry filter.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    /// Batch-local identifier: `INV` plus a zero-padded five-digit counter.
    pub id: String,
    pub name: String,
    pub category: String,
    pub code: String,
    pub batch_maintenance: String,
    pub batch_no: String,
    pub batch_expiry_date: String,
    pub qoh_batch_wise: f64,
    pub qoh_all_batches: f64,
    pub batch_tax_name: String,
    pub batch_buying_price: f64,
    pub batch_after_tax_buying_price: f64,
    pub batch_selling_price: f64,
    pub batch_after_tax_selling_price: f64,
    pub batch_type: String,
    pub inventory_tax: String,
    pub inventory_buying_price: f64,
    pub inventory_after_tax_buying_price: f64,
    pub inventory_selling_price: f64,
    pub inventory_after_tax_selling_price: f64,
    pub vendor_name: String,
    pub reorder_level: f64,
    pub target_level: f64,
    pub formulation: String,
    pub pack_name: String,
    pub pack_size: String,
    pub has_generics: String,
    pub has_protocol: String,
    pub commission_rate: String,
    pub org_name: String,
}

impl InventoryRecord {
    /// Formats a batch-local record identifier from a 1-based sequence
    /// number: `format_id(7)` is `"INV00007"`.
    pub fn format_id(sequence: usize) -> String {
        format!("INV{sequence:05}")
    }
}

impl Default for InventoryRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            category: String::new(),
            code: String::new(),
            batch_maintenance: String::new(),
            batch_no: String::new(),
            batch_expiry_date: String::new(),
            qoh_batch_wise: 0.0,
            qoh_all_batches: 0.0,
            batch_tax_name: String::new(),
            batch_buying_price: 0.0,
            batch_after_tax_buying_price: 0.0,
            batch_selling_price: 0.0,
            batch_after_tax_selling_price: 0.0,
            batch_type: String::new(),
            inventory_tax: String::new(),
            inventory_buying_price: 0.0,
            inventory_after_tax_buying_price: 0.0,
            inventory_selling_price: 0.0,
            inventory_after_tax_selling_price: 0.0,
            vendor_name: String::new(),
            reorder_level: 0.0,
            target_level: 0.0,
            formulation: String::new(),
            pack_name: String::new(),
            pack_size: String::new(),
            has_generics: "No".to_string(),
            has_protocol: "No".to_string(),
            commission_rate: "0.00%".to_string(),
            org_name: String::new(),
        }
    }
}
