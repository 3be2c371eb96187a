//! File-level import entry points.

use std::path::Path;

use tracing::info;

use stocklot_model::{InventoryRecord, Result};

use crate::document::parse_document;
use crate::normalize::normalize_rows;

/// Parses and normalizes a complete in-memory import payload.
pub fn import_records(text: &str) -> Result<Vec<InventoryRecord>> {
    let rows = parse_document(text)?;
    let records = normalize_rows(&rows);
    info!(records = records.len(), "imported inventory batch");
    Ok(records)
}

/// Reads an import file and normalizes its contents.
///
/// Non-UTF-8 bytes are replaced rather than rejected; exports from legacy
/// tooling occasionally carry stray encoding artifacts.
pub fn import_file(path: &Path) -> Result<Vec<InventoryRecord>> {
    let bytes = std::fs::read(path)?;
    import_records(&String::from_utf8_lossy(&bytes))
}
