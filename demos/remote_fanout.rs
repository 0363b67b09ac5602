//! Remote fan-out example
//!
//! Demonstrates relaying one message to several backends, failure
//! collection, and call-site capture through `remote_log!`.
//!
//! Run with: cargo run --example remote_fanout

use debug_log_system::prelude::*;
use debug_log_system::remote_log;
use std::sync::Arc;

/// Prints records the way a telemetry agent would receive them
struct StdoutBackend {
    name: &'static str,
}

impl RemoteBackend for StdoutBackend {
    fn name(&self) -> &str {
        self.name
    }

    fn log(&self, record: &LogRecord) -> std::result::Result<(), BackendError> {
        println!("   [{}] {}", self.name, record);
        Ok(())
    }
}

/// Rejects critical records, as an over-quota collector might
struct QuotaBackend;

impl RemoteBackend for QuotaBackend {
    fn name(&self) -> &str {
        "quota"
    }

    fn log(&self, record: &LogRecord) -> std::result::Result<(), BackendError> {
        match record.severity {
            Severity::Critical => Err(BackendError::new("quota exceeded")),
            Severity::Debug => Ok(()),
        }
    }
}

fn main() -> Result<()> {
    println!("=== Debug Log System - Remote Fan-out Example ===\n");

    let fanout = Arc::new(
        LoggerFanout::builder()
            .backend(StdoutBackend { name: "crash-reporter" })
            .backend(QuotaBackend)
            .backend(StdoutBackend { name: "analytics" })
            .build(),
    );
    println!("Backends: {:?}\n", fanout.backend_names());

    println!("1. Debug record reaches every backend:");
    fanout.debug("app launched")?;

    println!("\n2. Macro captures file, module and line:");
    remote_log!(fanout, "cart has {} items", 3)?;

    println!("\n3. Critical record with one failing backend:");
    if let Err(e) = remote_log!(fanout, Severity::Critical; "payment failed") {
        println!("   -> {}", e);
    }

    println!("\n4. Shorthand handle logs locally and forwards:");
    let store = Arc::new(LogStore::builder().enabled(true).build());
    let log = DebugLog::new(Arc::clone(&store))
        .with_remote(Arc::clone(&fanout))
        .with_local_output(true);
    log.log_remote("checkout finished", Severity::Debug);

    println!(
        "\nRecords sent: {}, backend failures: {}",
        fanout.records_sent(),
        fanout.backend_failures()
    );

    println!("\n=== Example completed successfully ===");
    Ok(())
}
