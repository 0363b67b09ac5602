//! Basic debug log usage example
//!
//! Demonstrates category prefixes, sequence payloads, the shorthand handle
//! and the formatting macros.
//!
//! Run with: cargo run --example basic_usage

use debug_log_system::prelude::*;
use debug_log_system::{dlog, elog, wlog};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Debug Log System - Basic Usage Example ===\n");

    let store = Arc::new(
        LogStore::builder()
            .app_name("BasicDemo")
            .enabled(true)
            .use_colors(true)
            .build(),
    );

    println!("1. One entry per category:");
    for category in LogCategory::ALL {
        store.log(format!("category {}", category), category);
    }

    println!("\n2. Sequence and multi-line payloads:");
    store.log(vec!["GET", "/orders", "200"], LogCategory::Response);
    store.log(vec![LogPayload::from("user"), LogPayload::from(42)], LogCategory::User);
    store.log("header\nfirst detail\nsecond detail", LogCategory::Info);

    println!("\n3. Shorthand handle and macros:");
    let log = DebugLog::new(Arc::clone(&store)).with_local_output(true);
    log.log("plain message");
    log.warn("disk almost full");
    log.error(vec!["status", "500"]);
    dlog!(log, LogCategory::Package; "Shipped {} parcels", 3);
    wlog!(log, "Retry {} of {}", 2, 5);
    elog!(log, "Lost connection to {}", "db-1");

    println!("\n4. Disabling the store:");
    store.configure(false);
    store.log("never recorded", LogCategory::Highlight);
    store.configure(true);

    println!("\n5. Stored history ({} entries):", store.entry_count());
    for (i, entry) in store.entries().iter().enumerate().take(5) {
        println!("  [{}] {}", i, entry);
    }

    let metrics = store.metrics();
    println!(
        "\nMetrics: logged={} suppressed={}",
        metrics.entries_logged(),
        metrics.suppressed()
    );

    println!("\n=== Example completed successfully ===");
    Ok(())
}
