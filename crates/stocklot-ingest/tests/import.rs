//! End-to-end import tests over in-memory payloads and files.

use std::io::Write;

use proptest::prelude::*;

use stocklot_ingest::{TAB, import_file, import_records, parse_delimited_line};
use stocklot_model::IngestError;

const HEADER: &str = "Inventory Name\tInventory Category\tCode\tQOH - Batch Wise\tQOH - All Batches\tVendor Name\tReOrder Level (Qty)";

fn payload(data_lines: &[&str]) -> String {
    let mut text = String::from(HEADER);
    for line in data_lines {
        text.push('\n');
        text.push_str(line);
    }
    text
}

#[test]
fn well_formed_input_yields_one_record_per_row() {
    let text = payload(&[
        "Serum A\tSkin\tSKU1\t4\t12\tAcme\t5",
        "Serum B\tSkin\tSKU2\t2\t3\tAcme\t5",
        "Shampoo\tHair\tSKU3\t1\t7\tGlow\t2",
    ]);
    let records = import_records(&text).expect("import");
    assert_eq!(records.len(), 3);
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["INV00001", "INV00002", "INV00003"]);
    assert_eq!(records[2].name, "Shampoo");
    assert_eq!(records[2].qoh_all_batches, 7.0);
}

#[test]
fn quoted_tab_stays_inside_one_field() {
    let text = "X\tY\tZ\na\t\"b\tc\"\td";
    let rows = stocklot_ingest::parse_document(text).expect("parse");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("X"), Some("a"));
    assert_eq!(rows[0].get("Y"), Some("b\tc"));
    assert_eq!(rows[0].get("Z"), Some("d"));
}

#[test]
fn ids_are_assigned_after_row_dropping() {
    // The malformed middle line must not consume a sequence number.
    let text = payload(&[
        "Serum A\tSkin\tSKU1\t4\t12\tAcme\t5",
        "\t\t\t\t\t\t",
        "Serum B\tSkin\tSKU2\t2\t3\tAcme\t5",
    ]);
    let records = import_records(&text).expect("import");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].id, "INV00002");
    assert_eq!(records[1].name, "Serum B");
}

#[test]
fn header_only_file_fails_with_format_error() {
    let error = import_records(HEADER).expect_err("no data rows");
    assert!(matches!(error, IngestError::Format));
}

#[test]
fn missing_trailing_fields_default() {
    let text = payload(&["Serum A\tSkin"]);
    let records = import_records(&text).expect("import");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].code, "");
    assert_eq!(records[0].qoh_all_batches, 0.0);
    assert_eq!(records[0].has_generics, "No");
}

#[test]
fn import_file_reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{}", payload(&["Serum A\tSkin\tSKU1\t4\t12\tAcme\t5"])).expect("write");
    let records = import_file(file.path()).expect("import file");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].vendor_name, "Acme");
}

#[test]
fn import_file_missing_path_is_io_error() {
    let error = import_file(std::path::Path::new("/nonexistent/stock.tsv"))
        .expect_err("missing file");
    assert!(matches!(error, IngestError::Io(_)));
}

#[test]
fn full_header_row_round_trips_every_field() {
    let headers = [
        "Inventory Name",
        "Inventory Category",
        "Code",
        "Batch Maintenance",
        "Batch No.",
        "Batch Expiry Date",
        "QOH - Batch Wise",
        "QOH - All Batches",
        "Batch Tax Name",
        "Batch Buying Price",
        "Batch (After Tax) Buying Price",
        "Batch Selling Price",
        "Batch (After Tax) Selling Price",
        "Batch Type",
        "Inventory Tax",
        "Inventory Buying Price",
        "Inventory (After Tax) Buying Price",
        "Inventory Selling Price",
        "Inventory (After Tax) Selling Price",
        "Vendor Name",
        "ReOrder Level (Qty)",
        "Target Level (Qty)",
        "Formulation",
        "Pack Name",
        "Pack Size",
        "Has Generics",
        "Has Protocol",
        "Commission Rate",
        "OrgName",
    ];
    let values = [
        "Hyaluronic Serum",
        "Skin Care",
        "SKU42",
        "Yes",
        "B-1207",
        "Feb-30",
        "4",
        "12.5",
        "GST 18%",
        "100",
        "118",
        "200",
        "236",
        "Purchased",
        "GST 18%",
        "95",
        "112.1",
        "190",
        "224.2",
        "Acme Pharma",
        "5",
        "20",
        "Serum",
        "Bottle",
        "30ml",
        "Yes",
        "No",
        "2.50%",
        "Glow Clinic",
    ];
    let text = format!("{}\n{}", headers.join("\t"), values.join("\t"));
    let records = import_records(&text).expect("import");
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.id, "INV00001");
    assert_eq!(record.name, "Hyaluronic Serum");
    assert_eq!(record.category, "Skin Care");
    assert_eq!(record.code, "SKU42");
    assert_eq!(record.batch_maintenance, "Yes");
    assert_eq!(record.batch_no, "B-1207");
    assert_eq!(record.batch_expiry_date, "Feb-30");
    assert_eq!(record.qoh_batch_wise, 4.0);
    assert_eq!(record.qoh_all_batches, 12.5);
    assert_eq!(record.batch_tax_name, "GST 18%");
    assert_eq!(record.batch_buying_price, 100.0);
    assert_eq!(record.batch_after_tax_buying_price, 118.0);
    assert_eq!(record.batch_selling_price, 200.0);
    assert_eq!(record.batch_after_tax_selling_price, 236.0);
    assert_eq!(record.batch_type, "Purchased");
    assert_eq!(record.inventory_tax, "GST 18%");
    assert_eq!(record.inventory_buying_price, 95.0);
    assert_eq!(record.inventory_after_tax_buying_price, 112.1);
    assert_eq!(record.inventory_selling_price, 190.0);
    assert_eq!(record.inventory_after_tax_selling_price, 224.2);
    assert_eq!(record.vendor_name, "Acme Pharma");
    assert_eq!(record.reorder_level, 5.0);
    assert_eq!(record.target_level, 20.0);
    assert_eq!(record.formulation, "Serum");
    assert_eq!(record.pack_name, "Bottle");
    assert_eq!(record.pack_size, "30ml");
    assert_eq!(record.has_generics, "Yes");
    assert_eq!(record.has_protocol, "No");
    assert_eq!(record.commission_rate, "2.50%");
    assert_eq!(record.org_name, "Glow Clinic");
}

proptest! {
    #[test]
    fn joined_fields_round_trip_through_the_line_parser(
        fields in prop::collection::vec("[a-z0-9]{1,8}", 1..6)
    ) {
        let line = fields.join("\t");
        prop_assert_eq!(parse_delimited_line(&line, TAB), fields);
    }
}
