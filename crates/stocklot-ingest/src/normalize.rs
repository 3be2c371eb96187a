//! Mapping of raw rows onto typed inventory records.
//!
//! The known source column captions are enumerated here rather than looked
//! up dynamically; unknown headers in the source file are ignored and
//! missing known headers fall back to their documented defaults. Numeric
//! coercion never fails: empty or non-numeric input becomes `0`, so a batch
//! import with dirty cells still produces a full record set.

use stocklot_model::{InventoryRecord, RawRow};

/// Known column captions of the batch inventory export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    Name,
    Category,
    Code,
    BatchMaintenance,
    BatchNo,
    BatchExpiryDate,
    QohBatchWise,
    QohAllBatches,
    BatchTaxName,
    BatchBuyingPrice,
    BatchAfterTaxBuyingPrice,
    BatchSellingPrice,
    BatchAfterTaxSellingPrice,
    BatchType,
    InventoryTax,
    InventoryBuyingPrice,
    InventoryAfterTaxBuyingPrice,
    InventorySellingPrice,
    InventoryAfterTaxSellingPrice,
    VendorName,
    ReorderLevel,
    TargetLevel,
    Formulation,
    PackName,
    PackSize,
    HasGenerics,
    HasProtocol,
    CommissionRate,
    OrgName,
}

impl HeaderField {
    /// The exact caption used by the source file for this field.
    pub fn caption(self) -> &'static str {
        match self {
            Self::Name => "Inventory Name",
            Self::Category => "Inventory Category",
            Self::Code => "Code",
            Self::BatchMaintenance => "Batch Maintenance",
            Self::BatchNo => "Batch No.",
            Self::BatchExpiryDate => "Batch Expiry Date",
            Self::QohBatchWise => "QOH - Batch Wise",
            Self::QohAllBatches => "QOH - All Batches",
            Self::BatchTaxName => "Batch Tax Name",
            Self::BatchBuyingPrice => "Batch Buying Price",
            Self::BatchAfterTaxBuyingPrice => "Batch (After Tax) Buying Price",
            Self::BatchSellingPrice => "Batch Selling Price",
            Self::BatchAfterTaxSellingPrice => "Batch (After Tax) Selling Price",
            Self::BatchType => "Batch Type",
            Self::InventoryTax => "Inventory Tax",
            Self::InventoryBuyingPrice => "Inventory Buying Price",
            Self::InventoryAfterTaxBuyingPrice => "Inventory (After Tax) Buying Price",
            Self::InventorySellingPrice => "Inventory Selling Price",
            Self::InventoryAfterTaxSellingPrice => "Inventory (After Tax) Selling Price",
            Self::VendorName => "Vendor Name",
            Self::ReorderLevel => "ReOrder Level (Qty)",
            Self::TargetLevel => "Target Level (Qty)",
            Self::Formulation => "Formulation",
            Self::PackName => "Pack Name",
            Self::PackSize => "Pack Size",
            Self::HasGenerics => "Has Generics",
            Self::HasProtocol => "Has Protocol",
            Self::CommissionRate => "Commission Rate",
            Self::OrgName => "OrgName",
        }
    }
}

fn text(row: &RawRow, field: HeaderField) -> String {
    row.get(field.caption()).unwrap_or_default().to_string()
}

fn text_or(row: &RawRow, field: HeaderField, fallback: &str) -> String {
    match row.get(field.caption()) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => fallback.to_string(),
    }
}

/// Lenient numeric coercion: missing, empty, non-numeric, and NaN cells all
/// become `0`. Bad numerics are a data-quality fact of bulk exports, not an
/// import failure.
fn number(row: &RawRow, field: HeaderField) -> f64 {
    row.get(field.caption())
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| !value.is_nan())
        .unwrap_or(0.0)
}

/// Builds one normalized record from a raw row.
///
/// `sequence` is the caller-maintained 1-based position of the record in
/// the batch; it is threaded explicitly so normalization stays pure.
pub fn normalize_row(row: &RawRow, sequence: usize) -> InventoryRecord {
    InventoryRecord {
        id: InventoryRecord::format_id(sequence),
        name: text(row, HeaderField::Name),
        category: text(row, HeaderField::Category),
        code: text(row, HeaderField::Code),
        batch_maintenance: text(row, HeaderField::BatchMaintenance),
        batch_no: text(row, HeaderField::BatchNo),
        batch_expiry_date: text(row, HeaderField::BatchExpiryDate),
        qoh_batch_wise: number(row, HeaderField::QohBatchWise),
        qoh_all_batches: number(row, HeaderField::QohAllBatches),
        batch_tax_name: text(row, HeaderField::BatchTaxName),
        batch_buying_price: number(row, HeaderField::BatchBuyingPrice),
        batch_after_tax_buying_price: number(row, HeaderField::BatchAfterTaxBuyingPrice),
        batch_selling_price: number(row, HeaderField::BatchSellingPrice),
        batch_after_tax_selling_price: number(row, HeaderField::BatchAfterTaxSellingPrice),
        batch_type: text(row, HeaderField::BatchType),
        inventory_tax: text(row, HeaderField::InventoryTax),
        inventory_buying_price: number(row, HeaderField::InventoryBuyingPrice),
        inventory_after_tax_buying_price: number(row, HeaderField::InventoryAfterTaxBuyingPrice),
        inventory_selling_price: number(row, HeaderField::InventorySellingPrice),
        inventory_after_tax_selling_price: number(row, HeaderField::InventoryAfterTaxSellingPrice),
        vendor_name: text(row, HeaderField::VendorName),
        reorder_level: number(row, HeaderField::ReorderLevel),
        target_level: number(row, HeaderField::TargetLevel),
        formulation: text(row, HeaderField::Formulation),
        pack_name: text(row, HeaderField::PackName),
        pack_size: text(row, HeaderField::PackSize),
        has_generics: text_or(row, HeaderField::HasGenerics, "No"),
        has_protocol: text_or(row, HeaderField::HasProtocol, "No"),
        commission_rate: text_or(row, HeaderField::CommissionRate, "0.00%"),
        org_name: text(row, HeaderField::OrgName),
    }
}

/// Normalizes a batch of raw rows, assigning sequential ids starting at 1.
pub fn normalize_rows(rows: &[RawRow]) -> Vec<InventoryRecord> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| normalize_row(row, index + 1))
        .collect()
}
