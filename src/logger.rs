// SPDX-License-Identifier: Apache-2.0 OR MIT
// Logger: factory and owner of logs, unit of bulk teardown

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::config::LogConfig;
use crate::error::Result;
use crate::facility;
use crate::log::{Log, LogHandle};
use crate::severity::Severity;
use crate::sink::LogSink;

/// Owner and factory of one or more [`Log`]s.
///
/// Logs created through a logger inherit its default severity as their
/// baseline threshold. Dropping the logger destroys every log it still owns,
/// flushing file sinks first. Multiple independent loggers may coexist
/// (e.g. for test isolation).
pub struct Logger {
    default_level: Severity,
    logs: Mutex<Vec<LogHandle>>,
}

impl Logger {
    /// Create a logger with the given default severity.
    pub fn new(default_level: Severity) -> Result<Self> {
        Ok(Self {
            default_level,
            logs: Mutex::new(Vec::new()),
        })
    }

    /// Default severity applied to logs created by this logger
    pub fn default_level(&self) -> Severity {
        self.default_level
    }

    /// Create a log from a configuration record.
    ///
    /// A file destination is opened (created/truncated) here; failure is a
    /// creation error, never deferred to the first write.
    pub fn create_log(&self, config: &LogConfig) -> Result<LogHandle> {
        let log = Arc::new(Log::from_config(config.clone(), self.default_level)?);
        facility::register_log(&log);
        self.logs.lock().unwrap().push(Arc::clone(&log));
        Ok(log)
    }

    /// Create a file log, or a console log when `path` is absent or empty.
    pub fn create_file_log(&self, path: Option<&Path>) -> Result<LogHandle> {
        let config = match path {
            Some(p) if !p.as_os_str().is_empty() => LogConfig::file(p),
            _ => LogConfig::console(),
        };
        self.create_log(&config)
    }

    /// Create a log backed by a caller-provided sink (e.g. a capture sink
    /// for tests, or an application-defined destination).
    pub fn create_log_with_sink(&self, sink: Box<dyn LogSink>) -> LogHandle {
        let log = Arc::new(Log::from_sink(sink, self.default_level));
        facility::register_log(&log);
        self.logs.lock().unwrap().push(Arc::clone(&log));
        log
    }

    /// Destroy a log: flush its sink synchronously and release this logger's
    /// ownership of it.
    ///
    /// Callers must guarantee no thread is inside the log's write path; the
    /// handle value must not be used for new writes after this returns. The
    /// file itself closes once the last outstanding handle clone drops.
    pub fn destroy_log(&self, handle: &LogHandle) {
        handle.flush();
        facility::unregister_log(handle);
        self.logs
            .lock()
            .unwrap()
            .retain(|log| !Arc::ptr_eq(log, handle));
    }

    /// Number of logs this logger still owns
    pub fn log_count(&self) -> usize {
        self.logs.lock().unwrap().len()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        // Cascade destruction of every log not independently destroyed.
        let logs = std::mem::take(&mut *self.logs.lock().unwrap());
        for log in &logs {
            log.flush();
            facility::unregister_log(log);
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("default_level", &self.default_level)
            .field("log_count", &self.log_count())
            .finish()
    }
}
