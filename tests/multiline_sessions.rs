//! Integration tests: multiline sessions
//!
//! A session is gated once at begin; disabled sessions cost nothing, enabled
//! sessions flush their whole buffer as exactly one write, and taking the
//! raw buffer suppresses the flush (mirrors the original unit test for a
//! disabled component).

use std::sync::{Arc, Mutex};

use multilog::{Component, LogHandle, Logger, MemorySink, MultilineSession, Severity};

fn capture_log(default_level: Severity) -> (Logger, LogHandle, Arc<Mutex<Vec<String>>>) {
    let logger = Logger::new(default_level).expect("logger creation");
    let (sink, entries) = MemorySink::new();
    let handle = logger.create_log_with_sink(Box::new(sink));
    (logger, handle, entries)
}

#[test]
fn disabled_component_yields_no_buffer_and_no_output() {
    let (_logger, log, entries) = capture_log(Severity::Debug);
    log.component_enable(Component::EndpointManager, false);

    let mut session = MultilineSession::begin(
        Some(&log),
        Component::EndpointManager,
        Severity::Error,
        Some("some_function"),
        123,
    );
    session.append(format_args!("this is a multiline message"));
    session.end();

    // Second session on the same disabled component: the raw buffer is
    // unavailable, matching "buffer is None iff disabled".
    let mut session = MultilineSession::begin(
        Some(&log),
        Component::EndpointManager,
        Severity::Error,
        Some("some_function"),
        123,
    );
    session.append(format_args!("this is another multiline message"));
    let buffer = session.take_buffer();
    session.end();

    assert!(buffer.is_none());
    assert!(entries.lock().unwrap().is_empty());
}

#[test]
fn three_lines_arrive_as_one_write() {
    let (_logger, log, entries) = capture_log(Severity::Info);

    let mut session = MultilineSession::begin(
        Some(&log),
        Component::Generic,
        Severity::Info,
        Some("dump_table"),
        55,
    );
    session.append(format_args!("routing table ({} rules):", 2));
    session.append(format_args!("  rule {}", 1));
    session.append(format_args!("  rule {}", 2));
    assert_eq!(session.line_count(), 3);
    session.end();

    let entries = entries.lock().unwrap();
    assert_eq!(entries.len(), 1, "three appends must produce one write");
    assert!(entries[0].contains("routing table (2 rules):\n  rule 1\n  rule 2"));
    assert!(entries[0].contains("[dump_table:55]"));
}

#[test]
fn taken_buffer_suppresses_end_flush() {
    let (_logger, log, entries) = capture_log(Severity::Info);

    let mut session =
        MultilineSession::begin(Some(&log), Component::Generic, Severity::Info, None, 0);
    session.append(format_args!("embedded elsewhere"));
    let buffer = session.take_buffer().expect("enabled session has a buffer");
    session.end();

    assert_eq!(buffer, "embedded elsewhere\n");
    assert!(entries.lock().unwrap().is_empty());
}

#[test]
fn interleaved_single_line_writers_never_split_a_session() {
    let (_logger, log, entries) = capture_log(Severity::Info);

    // Writers on other threads hammer the same log while a session is open.
    let stop = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let mut writers = Vec::new();
    for worker in 0..4 {
        let log = Arc::clone(&log);
        let stop = Arc::clone(&stop);
        writers.push(std::thread::spawn(move || {
            while !stop.load(std::sync::atomic::Ordering::Relaxed) {
                multilog::emit(
                    Some(&log),
                    Component::Generic,
                    Severity::Info,
                    None,
                    format_args!("single line from worker {worker}"),
                );
            }
        }));
    }

    let mut session =
        MultilineSession::begin(Some(&log), Component::Generic, Severity::Info, None, 0);
    session.append(format_args!("block line a"));
    session.append(format_args!("block line b"));
    session.append(format_args!("block line c"));
    session.end();

    stop.store(true, std::sync::atomic::Ordering::Relaxed);
    for writer in writers {
        writer.join().unwrap();
    }

    // Exactly one captured entry contains the whole block, uninterrupted.
    let entries = entries.lock().unwrap();
    let blocks: Vec<&String> = entries
        .iter()
        .filter(|entry| entry.contains("block line"))
        .collect();
    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].contains("block line a\nblock line b\nblock line c"));
}

#[test]
fn thread_routed_session_via_macro() {
    multilog::initialize().expect("initialize");
    let (_logger, log, entries) = capture_log(Severity::Info);
    multilog::thread_log_set(Arc::clone(&log)).expect("thread log set");

    let mut session = multilog::multiline_begin!(Severity::Info);
    session.append(format_args!("first"));
    session.append(format_args!("second"));
    session.end();

    let entries = entries.lock().unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].contains("first\nsecond"));
    assert!(entries[0].contains("multiline_sessions"));

    multilog::thread_log_unset();
    multilog::shutdown(false);
}
