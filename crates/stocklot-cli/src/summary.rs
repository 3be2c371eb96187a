//! Table rendering for the report subcommands.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use stocklot_model::InventoryRecord;
use stocklot_stats::{CategoryGroup, InventoryTotals, VendorGroup};

pub fn print_totals(totals: &InventoryTotals) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Items"), Cell::new(totals.total_items)]);
    table.add_row(vec![
        Cell::new("Total stock"),
        Cell::new(format_quantity(totals.total_stock)),
    ]);
    table.add_row(vec![
        Cell::new("Total value"),
        Cell::new(format_money(totals.total_value)),
    ]);
    table.add_row(vec![
        Cell::new("Low stock"),
        warn_cell(totals.low_stock_items),
    ]);
    table.add_row(vec![
        Cell::new("Critical"),
        alert_cell(totals.critical_items),
    ]);
    table.add_row(vec![
        Cell::new("Out of stock"),
        alert_cell(totals.out_of_stock_items),
    ]);
    println!("{table}");
}

pub fn print_records(records: &[InventoryRecord]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Category"),
        header_cell("Vendor"),
        header_cell("Batch"),
        header_cell("Expiry"),
        header_cell("QOH"),
        header_cell("Reorder"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 6, CellAlignment::Right);
    align_column(&mut table, 7, CellAlignment::Right);
    for record in records {
        table.add_row(vec![
            Cell::new(&record.id).fg(Color::Blue),
            Cell::new(&record.name),
            Cell::new(&record.category),
            Cell::new(&record.vendor_name),
            Cell::new(&record.batch_no),
            Cell::new(&record.batch_expiry_date),
            Cell::new(format_quantity(record.qoh_all_batches)),
            Cell::new(format_quantity(record.reorder_level)),
        ]);
    }
    println!("{table}");
    println!("{} item(s)", records.len());
}

pub fn print_categories(groups: &[CategoryGroup]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Items"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for group in groups {
        table.add_row(vec![
            Cell::new(&group.name),
            Cell::new(group.count),
            Cell::new(format_money(group.total_value)),
        ]);
    }
    println!("{table}");
}

pub fn print_vendors(groups: &[VendorGroup]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Vendor"),
        header_cell("Items"),
        header_cell("Stock value"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for group in groups {
        table.add_row(vec![
            Cell::new(&group.name),
            Cell::new(group.item_count),
            Cell::new(format_money(group.total_value)),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn warn_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn alert_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

pub fn format_money(value: f64) -> String {
    format!("{value:.2}")
}

pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
