//! Integration test: process-wide facility lifecycle
//!
//! Reference-counted initialize/shutdown, the never-initialized degradation
//! path, and forced teardown. A single test keeps the ordering deterministic,
//! since every assertion depends on process-global state.

use std::sync::Arc;

use multilog::{Component, LogError, Logger, MemorySink, Severity};

#[test]
fn lifecycle_refcount_and_forced_shutdown() {
    // Never initialized: get distinguishes this from "deliberately unset"...
    assert!(!multilog::is_initialized());
    assert!(multilog::thread_log_get().is_none());

    // ...and set reports the failure instead of silently dropping it.
    let logger = Logger::new(Severity::Info).expect("logger creation");
    let (sink, entries) = MemorySink::new();
    let log = logger.create_log_with_sink(Box::new(sink));
    assert!(matches!(
        multilog::thread_log_set(Arc::clone(&log)),
        Err(LogError::NotInitialized)
    ));

    // Emission still works uninitialized, degrading to raw stdout.
    multilog::log_info!("diagnosable before initialize");

    // Two independent users initialize; one balanced shutdown keeps the
    // facility alive for the other.
    multilog::initialize().expect("first initialize");
    multilog::initialize().expect("second initialize");
    assert!(multilog::is_initialized());

    multilog::shutdown(false);
    assert!(multilog::is_initialized());

    multilog::shutdown(false);
    assert!(!multilog::is_initialized());

    // Third round: forced shutdown bypasses the count and clears globals.
    multilog::initialize().expect("reinitialize");
    multilog::initialize().expect("reinitialize again");
    multilog::set_global_log(Some(Arc::clone(&log)));
    multilog::level_set_global(Component::Generic, Severity::Debug);
    multilog::thread_log_set(Arc::clone(&log)).expect("thread log set");

    multilog::log_thread!(Severity::Debug, "captured before forced shutdown");
    assert_eq!(entries.lock().unwrap().len(), 1);

    multilog::shutdown(true);
    assert!(!multilog::is_initialized());
    assert!(multilog::global_log().is_none());

    // The facility is uninitialized again: resolution reports None even
    // though this thread's slot was never explicitly cleared.
    assert!(multilog::thread_log_get().is_none());

    // And emission is back on the raw stdout path, not the captured log.
    multilog::log_info!("after forced shutdown");
    assert_eq!(entries.lock().unwrap().len(), 1);
}
