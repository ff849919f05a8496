//! Integration tests: sampled / conditional logging
//!
//! A call-site counter gates emission to every Nth occurrence; the
//! "occurred [K] times" annotation appears only when N > 1.

use std::sync::{Arc, Mutex};

use multilog::{LogHandle, Logger, MemorySink, Severity};

fn capture_log(logger: &Logger) -> (LogHandle, Arc<Mutex<Vec<String>>>) {
    let (sink, entries) = MemorySink::new();
    (logger.create_log_with_sink(Box::new(sink)), entries)
}

#[test]
fn thread_routed_every_fifth_occurrence() {
    multilog::initialize().expect("initialize");
    let logger = Logger::new(Severity::Info).expect("logger creation");
    let (log, entries) = capture_log(&logger);
    multilog::thread_log_set(Arc::clone(&log)).expect("thread log set");

    for i in 0..12 {
        multilog::log_thread_when!(Severity::Warning, true, 5, "hot path event {i}");
    }
    multilog::thread_log_unset();

    let entries = entries.lock().unwrap();
    let messages: Vec<&String> = entries
        .iter()
        .filter(|entry| entry.contains("hot path event"))
        .collect();
    let annotations: Vec<&String> = entries
        .iter()
        .filter(|entry| entry.contains("has occurred ["))
        .collect();

    // Occurrences 1, 6 and 11 are due; each carries its annotation.
    assert_eq!(messages.len(), 3);
    assert!(messages[0].contains("hot path event 0"));
    assert!(messages[1].contains("hot path event 5"));
    assert!(messages[2].contains("hot path event 10"));

    assert_eq!(annotations.len(), 3);
    assert!(annotations[0].contains("occurred [1] times"));
    assert!(annotations[1].contains("occurred [6] times"));
    assert!(annotations[2].contains("occurred [11] times"));
}

#[test]
fn interval_of_one_emits_every_time_without_annotation() {
    multilog::initialize().expect("initialize");
    let logger = Logger::new(Severity::Info).expect("logger creation");
    let (log, entries) = capture_log(&logger);
    multilog::thread_log_set(Arc::clone(&log)).expect("thread log set");

    for _ in 0..4 {
        multilog::log_thread_when!(Severity::Info, true, 1, "always emitted");
    }
    multilog::thread_log_unset();

    let entries = entries.lock().unwrap();
    assert_eq!(entries.len(), 4);
    assert!(entries.iter().all(|entry| entry.contains("always emitted")));
    assert!(!entries.iter().any(|entry| entry.contains("has occurred")));
}

#[test]
fn false_condition_never_touches_the_counter() {
    multilog::initialize().expect("initialize");
    let logger = Logger::new(Severity::Info).expect("logger creation");
    let (log, entries) = capture_log(&logger);
    multilog::thread_log_set(Arc::clone(&log)).expect("thread log set");

    for _ in 0..10 {
        multilog::log_thread_when!(Severity::Info, false, 1, "never emitted");
    }

    // The condition holds again: the first true occurrence is number 1.
    multilog::log_thread_when!(Severity::Info, true, 5, "first true occurrence");
    multilog::thread_log_unset();

    let entries = entries.lock().unwrap();
    assert!(!entries.iter().any(|entry| entry.contains("never emitted")));
    assert!(entries
        .iter()
        .any(|entry| entry.contains("first true occurrence")));
}

#[test]
fn global_variant_targets_the_global_log() {
    multilog::initialize().expect("initialize");
    let logger = Logger::new(Severity::Info).expect("logger creation");
    let (global, entries) = capture_log(&logger);
    multilog::set_global_log(Some(Arc::clone(&global)));

    for _ in 0..6 {
        multilog::log_when!(Severity::Error, true, 3, "global sampled event");
    }
    multilog::set_global_log(None);

    let entries = entries.lock().unwrap();
    let messages = entries
        .iter()
        .filter(|entry| entry.contains("global sampled event"))
        .count();
    assert_eq!(messages, 2); // occurrences 1 and 4
}
