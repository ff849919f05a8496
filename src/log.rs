// SPDX-License-Identifier: Apache-2.0 OR MIT
// Log destination: per-component filter tables and the serialized write path

use std::io::Write;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex};

use crate::component::{Component, COMPONENT_COUNT};
use crate::config::{LogConfig, LogDestination};
use crate::error::Result;
use crate::facility;
use crate::severity::Severity;
use crate::sink::{FileSink, LogSink, StdoutSink};

/// Maximum length of a rendered single-line log entry, in bytes.
/// Oversize entries are truncated at a char boundary, never split.
pub const MAX_LOG_LINE_LENGTH: usize = 1024;

/// Table slot value meaning "no setting here, fall back"
pub(crate) const UNSET: u8 = u8::MAX;

/// Shared handle to a log destination.
///
/// Handles are cheap to clone and may be held by any thread. Destruction
/// ([`Logger::destroy_log`]) flushes the sink synchronously; callers must
/// ensure no writer is inside the log's write path at that point.
///
/// [`Logger::destroy_log`]: crate::Logger::destroy_log
pub type LogHandle = Arc<Log>;

/// Originating function name and source line for a log message.
///
/// Optional at every call site: omitting it suppresses the provenance suffix
/// in the rendered line.
#[derive(Debug, Clone, Copy)]
pub struct Provenance<'a> {
    pub function: &'a str,
    pub line: u32,
}

impl<'a> Provenance<'a> {
    pub const fn new(function: &'a str, line: u32) -> Self {
        Self { function, line }
    }
}

/// Per-component filter state: an enable tri-state and a minimum severity.
///
/// Every slot is a single `AtomicU8`, so each mutation is one atomic store
/// and readers never observe a torn state. `UNSET` slots fall back to the
/// global tables (per-log settings override global ones).
pub(crate) struct FilterTable {
    enabled: [AtomicU8; COMPONENT_COUNT],
    levels: [AtomicU8; COMPONENT_COUNT],
}

impl FilterTable {
    pub(crate) const fn new() -> Self {
        #[allow(clippy::declare_interior_mutable_const)]
        const UNSET_SLOT: AtomicU8 = AtomicU8::new(UNSET);
        Self {
            enabled: [UNSET_SLOT; COMPONENT_COUNT],
            levels: [UNSET_SLOT; COMPONENT_COUNT],
        }
    }

    pub(crate) fn set_enabled(&self, component: Component, enable: bool) {
        self.enabled[component.index()].store(enable as u8, Ordering::Relaxed);
    }

    pub(crate) fn enabled(&self, component: Component) -> Option<bool> {
        match self.enabled[component.index()].load(Ordering::Relaxed) {
            UNSET => None,
            0 => Some(false),
            _ => Some(true),
        }
    }

    pub(crate) fn set_level(&self, component: Component, level: Severity) {
        self.levels[component.index()].store(level.as_u8(), Ordering::Relaxed);
    }

    pub(crate) fn level(&self, component: Component) -> Option<Severity> {
        Severity::from_u8(self.levels[component.index()].load(Ordering::Relaxed))
    }

    pub(crate) fn clear_enabled(&self, component: Component) {
        self.enabled[component.index()].store(UNSET, Ordering::Relaxed);
    }

    pub(crate) fn clear_level(&self, component: Component) {
        self.levels[component.index()].store(UNSET, Ordering::Relaxed);
    }

    /// Reset every slot to UNSET
    pub(crate) fn clear(&self) {
        for slot in self.enabled.iter().chain(self.levels.iter()) {
            slot.store(UNSET, Ordering::Relaxed);
        }
    }
}

/// One addressable logging destination.
///
/// Holds a sink behind a write lock, the per-component filter tables, and the
/// default severity inherited from the owning [`Logger`]. Writes to a single
/// log are totally ordered by the write lock; writes to different logs are
/// unordered relative to each other.
///
/// [`Logger`]: crate::Logger
pub struct Log {
    config: LogConfig,
    filters: FilterTable,
    writer: Mutex<Box<dyn LogSink>>,
    is_file: bool,
    default_level: Severity,
}

impl Log {
    pub(crate) fn from_config(config: LogConfig, default_level: Severity) -> Result<Self> {
        let (sink, is_file): (Box<dyn LogSink>, bool) = match &config.destination {
            LogDestination::Console => (Box::new(StdoutSink::new()), false),
            LogDestination::File(path) => (Box::new(FileSink::create(path)?), true),
        };

        Ok(Self {
            config,
            filters: FilterTable::new(),
            writer: Mutex::new(sink),
            is_file,
            default_level,
        })
    }

    pub(crate) fn from_sink(sink: Box<dyn LogSink>, default_level: Severity) -> Self {
        let is_file = sink.is_file();
        Self {
            config: LogConfig::console(),
            filters: FilterTable::new(),
            writer: Mutex::new(sink),
            is_file,
            default_level,
        }
    }

    /// Creation-time configuration of this log
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// True if this log writes to an exclusively-owned file
    pub fn is_file(&self) -> bool {
        self.is_file
    }

    /// Enable or disable a component on this log.
    ///
    /// Takes effect atomically from the next write's perspective and is safe
    /// to call concurrently with writers.
    pub fn component_enable(&self, component: Component, enable: bool) {
        self.filters.set_enabled(component, enable);
    }

    /// Set the minimum severity to emit for a component on this log.
    pub fn level_set(&self, component: Component, level: Severity) {
        self.filters.set_level(component, level);
    }

    /// Report whether a component is currently enabled, without side effects.
    ///
    /// Per-log setting wins; otherwise the global table; otherwise enabled.
    pub fn component_is_enabled(&self, component: Component) -> bool {
        self.filters
            .enabled(component)
            .or_else(|| facility::global_component_enabled(component))
            .unwrap_or(true)
    }

    /// Effective minimum severity for a component.
    ///
    /// Per-log setting wins; otherwise the global table; otherwise this log's
    /// default severity.
    pub fn level_for(&self, component: Component) -> Severity {
        self.filters
            .level(component)
            .or_else(|| facility::global_level(component))
            .unwrap_or(self.default_level)
    }

    /// A message at (component, severity) is emitted iff the component is
    /// enabled and the severity is at or above the effective threshold.
    pub fn is_enabled(&self, component: Component, severity: Severity) -> bool {
        self.component_is_enabled(component) && severity >= self.level_for(component)
    }

    /// Write one already-rendered entry under the write lock.
    ///
    /// Sink failures are swallowed: the emission path never reports errors
    /// to the caller.
    pub(crate) fn write_entry(&self, severity: Severity, entry: &str) {
        {
            let mut sink = self.writer.lock().unwrap();
            let _ = sink.write_entry(entry);
        }
        if facility::stderr_mirrors(severity) {
            let stderr = std::io::stderr();
            let mut stderr = stderr.lock();
            let _ = writeln!(stderr, "{}", entry.trim_end_matches('\n'));
        }
    }

    /// Flush the sink
    pub fn flush(&self) {
        let mut sink = self.writer.lock().unwrap();
        let _ = sink.flush();
    }
}

impl std::fmt::Debug for Log {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Log")
            .field("config", &self.config)
            .field("is_file", &self.is_file)
            .field("default_level", &self.default_level)
            .finish()
    }
}

/// Render one entry: timestamp, severity, component, optional provenance.
pub(crate) fn render(
    component: Component,
    severity: Severity,
    provenance: Option<Provenance<'_>>,
    args: std::fmt::Arguments<'_>,
) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");
    let mut entry = match provenance {
        Some(p) => format!(
            "[{timestamp}] [{severity}] [{component}] [{}:{}] {args}",
            p.function, p.line
        ),
        None => format!("[{timestamp}] [{severity}] [{component}] {args}"),
    };

    // Multiline payloads are capped per line at append time instead.
    if !entry.contains('\n') && entry.len() > MAX_LOG_LINE_LENGTH {
        let mut end = MAX_LOG_LINE_LENGTH;
        while !entry.is_char_boundary(end) {
            end -= 1;
        }
        entry.truncate(end);
    }
    entry
}

/// Core emission entry point.
///
/// With no handle, the rendered line goes directly to stdout with no
/// filtering, preserving a best-effort diagnostic path before initialization.
/// Otherwise the (component, severity) gate is checked first; a filtered-out
/// message is a no-op with no side effects.
pub fn emit(
    handle: Option<&LogHandle>,
    component: Component,
    severity: Severity,
    provenance: Option<Provenance<'_>>,
    args: std::fmt::Arguments<'_>,
) {
    match handle {
        Some(log) => {
            if !log.is_enabled(component, severity) {
                return;
            }
            let entry = render(component, severity, provenance, args);
            log.write_entry(severity, &entry);
        }
        None => {
            let entry = render(component, severity, provenance, args);
            let stdout = std::io::stdout();
            let mut stdout = stdout.lock();
            let _ = writeln!(stdout, "{}", entry.trim_end_matches('\n'));
        }
    }
}
