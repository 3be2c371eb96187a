use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info};

use stocklot_ingest::import_file;
use stocklot_model::InventoryRecord;
use stocklot_stats::{by_category, by_vendor, critical_stock, expiring, low_stock, totals};

use crate::cli::{ExpiringArgs, ExportArgs, FileArgs, LowStockArgs};
use crate::summary::{print_categories, print_records, print_totals, print_vendors};

fn load(args: &FileArgs) -> Result<Vec<InventoryRecord>> {
    let records = import_file(&args.file)
        .with_context(|| format!("import {}", args.file.display()))?;
    debug!(records = records.len(), file = %args.file.display(), "loaded import file");
    Ok(records)
}

pub fn run_stats(args: &FileArgs) -> Result<()> {
    let records = load(args)?;
    print_totals(&totals(&records));
    println!();
    println!("By category:");
    print_categories(&by_category(&records));
    println!();
    println!("By vendor:");
    print_vendors(&by_vendor(&records));
    Ok(())
}

pub fn run_low_stock(args: &LowStockArgs) -> Result<()> {
    let records = load(&args.file)?;
    print_records(&low_stock(&records, args.threshold));
    Ok(())
}

pub fn run_critical(args: &FileArgs) -> Result<()> {
    let records = load(args)?;
    print_records(&critical_stock(&records));
    Ok(())
}

pub fn run_expiring(args: &ExpiringArgs) -> Result<()> {
    let records = load(&args.file)?;
    print_records(&expiring(&records, args.months));
    Ok(())
}

pub fn run_categories(args: &FileArgs) -> Result<()> {
    let records = load(args)?;
    print_categories(&by_category(&records));
    Ok(())
}

pub fn run_vendors(args: &FileArgs) -> Result<()> {
    let records = load(args)?;
    print_vendors(&by_vendor(&records));
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let records = load(&args.file)?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&records).context("serialize records")?
    } else {
        serde_json::to_string(&records).context("serialize records")?
    };
    match &args.out {
        Some(path) => {
            let mut file = std::fs::File::create(path)
                .with_context(|| format!("create {}", path.display()))?;
            file.write_all(json.as_bytes())
                .with_context(|| format!("write {}", path.display()))?;
            file.write_all(b"\n")
                .with_context(|| format!("write {}", path.display()))?;
            info!(records = records.len(), path = %path.display(), "exported records");
        }
        None => println!("{json}"),
    }
    Ok(())
}
