// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Process-wide logging facility with multiple independent destinations.
//!
//! A [`Logger`] owns one or more [`Log`]s, each with its own sink (console
//! or exclusively-owned file), per-component enable flags, and per-component
//! severity thresholds. Messages route to the right log without explicit
//! parameter passing through a per-thread association
//! ([`thread_log_set`]/[`thread_log_get`]), falling back to a process-global
//! log and finally to raw stdout so diagnostics survive early startup and
//! late shutdown.
//!
//! Filter tables are plain atomics read on every emission, so the hot path
//! takes no lock until a message actually passes the gate; the write itself
//! is serialized per log, which also makes [`MultilineSession`] blocks
//! atomic with respect to other writers of the same log. The sampling macros
//! ([`log_when!`], [`log_thread_when!`]) bound log volume on hot paths with
//! one static counter per call site.
//!
//! ```no_run
//! use multilog::{LogConfig, Logger, Severity};
//!
//! multilog::initialize()?;
//! let logger = Logger::new(Severity::Info)?;
//! let log = logger.create_log(&LogConfig::console())?;
//! multilog::set_global_log(Some(log));
//!
//! multilog::log_info!("facility up, default level {}", logger.default_level());
//! multilog::shutdown(false);
//! # Ok::<(), multilog::LogError>(())
//! ```

mod component;
mod config;
mod error;
mod facility;
mod log;
mod logger;
#[macro_use]
mod macros;
mod multiline;
mod sample;
mod severity;
mod sink;
mod thread_log;

pub use component::{Component, COMPONENT_COUNT};
pub use config::{LogConfig, LogDestination};
pub use error::{LogError, Result};
pub use facility::{
    component_enable_clear_global, component_enable_global, flush_all_file_logs, global_log,
    initialize, is_initialized, level_clear_global, level_set_global, set_global_log, shutdown,
    stderr_enable,
};
pub use log::{emit, Log, LogHandle, Provenance, MAX_LOG_LINE_LENGTH};
pub use logger::Logger;
pub use multiline::MultilineSession;
pub use sample::SampleCounter;
pub use severity::Severity;
pub use sink::{FileSink, LogSink, MemorySink, StderrSink, StdoutSink};
pub use thread_log::{thread_log_get, thread_log_set, thread_log_unset};
