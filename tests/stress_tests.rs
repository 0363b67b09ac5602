//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - No entries are lost when many threads log at once
//! - Memory and file keep the same order under contention
//! - Observers see every entry exactly once
//! - Fan-out counters stay consistent under concurrent dispatch

use debug_log_system::prelude::*;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 8;
const PER_THREAD: usize = 250;

#[test]
fn test_concurrent_logging_loses_nothing() {
    let store = Arc::new(LogStore::builder().enabled(true).console_echo(false).build());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    store.log(format!("t{}-{}", t, i), LogCategory::None);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let entries = store.entries();
    assert_eq!(entries.len(), THREADS * PER_THREAD);

    let unique: HashSet<_> = entries.iter().collect();
    assert_eq!(unique.len(), THREADS * PER_THREAD, "duplicate entries");

    // Per-thread order is preserved even though threads interleave
    for t in 0..THREADS {
        let tag = format!("t{}-", t);
        let seq: Vec<usize> = entries
            .iter()
            .filter_map(|e| e.rsplit(' ').next())
            .filter_map(|m| m.strip_prefix(&tag))
            .map(|n| n.parse().expect("numeric suffix"))
            .collect();
        assert_eq!(seq, (0..PER_THREAD).collect::<Vec<_>>());
    }
}

#[test]
fn test_concurrent_memory_and_file_order_match() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = Arc::new(
        LogStore::builder()
            .app_name("Stress")
            .enabled(true)
            .console_echo(false)
            .documents_dir(temp_dir.path())
            .preferences(Arc::new(InMemoryPreferences::with_file_logging()))
            .build(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    store.log(format!("w{}-{}", t, i), LogCategory::Request);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    // The open notice is memory-only
    let in_memory: Vec<String> = store
        .entries()
        .into_iter()
        .filter(|e| e.starts_with(LogCategory::Request.prefix()))
        .collect();
    let logs = store.logs().expect("file logging is active");
    let in_file: Vec<&str> = logs.lines().collect();

    assert_eq!(in_memory.len(), THREADS * PER_THREAD);
    assert_eq!(in_file, in_memory);
    assert_eq!(store.list_all_log_files().len(), 1);
}

#[test]
fn test_concurrent_observers_see_every_entry() {
    let store = Arc::new(LogStore::builder().enabled(true).console_echo(false).build());
    let seen = Arc::new(AtomicUsize::new(0));
    let seen_clone = Arc::clone(&seen);
    store.subscribe(move |_event: &LogAdded| {
        seen_clone.fetch_add(1, Ordering::Relaxed);
    });
    let channel = store.subscribe_channel();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    store.log(vec![format!("obs{}", t), i.to_string()], LogCategory::Test);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    assert_eq!(seen.load(Ordering::Relaxed), THREADS * PER_THREAD);
    assert_eq!(channel.try_iter().count(), THREADS * PER_THREAD);
}

#[test]
fn test_toggle_while_logging() {
    let store = Arc::new(LogStore::builder().enabled(true).console_echo(false).build());

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for i in 0..2_000 {
                store.log(format!("toggle {}", i), LogCategory::None);
            }
        })
    };
    let toggler = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for i in 0..200 {
                store.configure(i % 2 == 0);
            }
            store.configure(true);
        })
    };
    writer.join().expect("writer panicked");
    toggler.join().expect("toggler panicked");

    let metrics = store.metrics();
    assert_eq!(
        metrics.entries_logged() + metrics.suppressed(),
        2_000,
        "every call is either recorded or suppressed"
    );
    assert_eq!(store.entry_count() as u64, metrics.entries_logged());
}

#[test]
fn test_concurrent_fanout_dispatch() {
    struct Counting(Arc<AtomicUsize>);

    impl RemoteBackend for Counting {
        fn name(&self) -> &str {
            "counting"
        }

        fn log(&self, _record: &LogRecord) -> std::result::Result<(), BackendError> {
            self.0.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }
    }

    struct Flaky;

    impl RemoteBackend for Flaky {
        fn name(&self) -> &str {
            "flaky"
        }

        fn log(&self, record: &LogRecord) -> std::result::Result<(), BackendError> {
            if record.message.ends_with('0') {
                Err(BackendError::new("dropped"))
            } else {
                Ok(())
            }
        }
    }

    let delivered = Arc::new(AtomicUsize::new(0));
    let fanout = Arc::new(
        LoggerFanout::builder()
            .backend(Counting(Arc::clone(&delivered)))
            .backend(Flaky)
            .build(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let fanout = Arc::clone(&fanout);
            thread::spawn(move || {
                let mut errors = 0;
                for i in 0..PER_THREAD {
                    if fanout.debug(format!("f{}-{}", t, i)).is_err() {
                        errors += 1;
                    }
                }
                errors
            })
        })
        .collect();
    let errors: usize = handles
        .into_iter()
        .map(|h| h.join().expect("dispatch thread panicked"))
        .sum();

    assert_eq!(delivered.load(Ordering::Relaxed), THREADS * PER_THREAD);
    assert_eq!(fanout.records_sent(), (THREADS * PER_THREAD) as u64);
    assert_eq!(errors, THREADS * PER_THREAD / 10);
    assert_eq!(fanout.backend_failures(), errors as u64);
}
