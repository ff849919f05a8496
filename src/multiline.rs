// SPDX-License-Identifier: Apache-2.0 OR MIT
// Multiline sessions: accumulate lines, flush as one atomic log entry

use std::fmt::Write as _;

use crate::component::Component;
use crate::log::{self, LogHandle, Provenance, MAX_LOG_LINE_LENGTH};
use crate::severity::Severity;

/// An in-progress multi-line log message.
///
/// The whole session is gated once at [`begin`]: when the (component,
/// severity) pair is filtered out, no buffer is allocated and every
/// subsequent [`append`] is a guaranteed-cheap no-op. An enabled session
/// performs exactly one serialized write of the accumulated buffer when
/// ended, so the block can never interleave with other threads' writes to
/// the same log.
///
/// The session is exclusively owned by the thread that began it. Dropping an
/// unended session flushes it, so early-return paths lose nothing; call
/// [`end`] to flush at a chosen point.
///
/// [`begin`]: MultilineSession::begin
/// [`append`]: MultilineSession::append
/// [`end`]: MultilineSession::end
pub struct MultilineSession {
    enabled: bool,
    log: Option<LogHandle>,
    component: Component,
    severity: Severity,
    function: Option<String>,
    line: u32,
    line_count: usize,
    buffer: String,
    consumed: bool,
    ended: bool,
}

impl MultilineSession {
    /// Begin a multiline message, deciding once whether this whole session
    /// is enabled.
    ///
    /// With no handle the session targets raw stdout and is always enabled,
    /// matching single-line emission before initialization.
    pub fn begin(
        handle: Option<&LogHandle>,
        component: Component,
        severity: Severity,
        function: Option<&str>,
        line: u32,
    ) -> Self {
        let enabled = match handle {
            Some(log) => log.is_enabled(component, severity),
            None => true,
        };

        Self {
            enabled,
            log: handle.cloned(),
            component,
            severity,
            function: function.map(str::to_owned),
            line,
            line_count: 0,
            // String::new() does not allocate; a disabled session never will.
            buffer: String::new(),
            consumed: false,
            ended: false,
        }
    }

    /// True when the session passed the filter gate at begin time
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of lines appended so far
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Format one line and append it (with its own newline) to the buffer.
    pub fn append(&mut self, args: std::fmt::Arguments<'_>) {
        if !self.enabled || self.ended {
            return;
        }

        let start = self.buffer.len();
        let _ = writeln!(self.buffer, "{args}");

        // Cap each appended line; the final entry is written unsplit.
        let written = self.buffer.len() - start;
        if written > MAX_LOG_LINE_LENGTH {
            let mut end = start + MAX_LOG_LINE_LENGTH - 1;
            while !self.buffer.is_char_boundary(end) {
                end -= 1;
            }
            self.buffer.truncate(end);
            self.buffer.push('\n');
        }
        self.line_count += 1;
    }

    /// Take the raw accumulated buffer to write it through a different path.
    ///
    /// Marks the session as consumed, so ending it performs no write of its
    /// own. Returns None when the session is disabled.
    pub fn take_buffer(&mut self) -> Option<String> {
        if !self.enabled || self.ended {
            return None;
        }
        self.consumed = true;
        Some(std::mem::take(&mut self.buffer))
    }

    /// End the session: one serialized write of the whole buffer when the
    /// session is enabled and was not consumed, then release resources.
    pub fn end(mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        if self.ended {
            return;
        }
        self.ended = true;

        if self.enabled && !self.consumed && self.line_count > 0 {
            let text = self.buffer.trim_end_matches('\n');
            let provenance = self
                .function
                .as_deref()
                .map(|function| Provenance::new(function, self.line));
            log::emit(
                self.log.as_ref(),
                self.component,
                self.severity,
                provenance,
                format_args!("{text}"),
            );
        }
        self.buffer = String::new();
    }
}

impl Drop for MultilineSession {
    fn drop(&mut self) {
        self.finish();
    }
}
