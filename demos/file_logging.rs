//! Per-run log file example
//!
//! Demonstrates the file-logging preference, reading the current run's log
//! back, listing earlier runs and preparing an export draft.
//!
//! Run with: cargo run --example file_logging

use debug_log_system::export::{prepare_export, ExportOptions};
use debug_log_system::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Debug Log System - File Logging Example ===\n");

    let documents = std::env::temp_dir().join("debug_log_system_demo");
    let preferences = Arc::new(InMemoryPreferences::new());

    let store = LogStore::builder()
        .app_name("FileDemo")
        .enabled(true)
        .console_echo(false)
        .documents_dir(&documents)
        .preferences(preferences.clone())
        .build();

    println!("1. File logging off: entries stay in memory");
    store.log("memory only", LogCategory::Info);
    println!("   logs() = {:?}", store.logs());

    println!("\n2. Switching the '{}' preference on", DEBUG_LOG_KEY);
    preferences.set_bool(DEBUG_LOG_KEY, true);
    store.log("first line on disk", LogCategory::Start);
    store.log(vec!["order", "1234", "paid"], LogCategory::Success);
    store.log("multi\nline", LogCategory::Request);

    if let Some(path) = store.active_file_path() {
        println!("   Writing to {}", path.display());
    }

    println!("\n3. Current run's file:");
    if let Some(logs) = store.logs() {
        for line in logs.lines() {
            println!("   | {}", line);
        }
    }

    println!("\n4. Log files on disk:");
    let files = store.list_all_log_files();
    for name in &files {
        println!("   - {}", name);
    }

    let options = ExportOptions::for_file_count(files.len());
    println!("\n5. Export choices: {:?}", options.choices);
    if let Some(selection) = options.choices.first() {
        let draft = prepare_export(
            &store,
            *selection,
            &MailSettings::new("Debug logs", "dev@example.com"),
        );
        println!(
            "   Draft with {} attachment(s), {} deletable after sending",
            draft.attachments.len(),
            draft.deletable.len()
        );
    }

    println!("\nIn-memory history:");
    for entry in store.entries() {
        println!("   {}", entry);
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
