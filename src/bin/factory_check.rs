//! Prints a readiness verdict for every factory category.
//!
//! Read-only companion to `factory-status`: counts `.rs`/`.md` files per
//! category directory and writes nothing to disk.

use anyhow::Result;
use factory_status::{InspectorConfig, catalog, check_catalog, logging};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    logging::init();

    println!("🔍 فحص حالة المصانع...");
    let config = InspectorConfig::default();
    for report in check_catalog(&config, catalog()) {
        println!("{report}");
    }
    Ok(())
}
