// SPDX-License-Identifier: Apache-2.0 OR MIT
// Output sinks - console streams, exclusively-owned files, in-memory capture

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::LogError;

/// Output sink for rendered log entries
///
/// A sink holds no concurrency logic of its own; the owning [`Log`] serializes
/// access through its write lock.
///
/// [`Log`]: crate::Log
pub trait LogSink: Send {
    /// Write one rendered entry. The entry may contain embedded newlines
    /// (multiline messages); the sink appends a terminating newline if the
    /// entry does not already end with one.
    fn write_entry(&mut self, entry: &str) -> io::Result<()>;

    /// Flush any buffered output
    fn flush(&mut self) -> io::Result<()>;

    /// True for file-backed sinks; used by flush-all and forced shutdown
    fn is_file(&self) -> bool {
        false
    }
}

fn write_terminated(writer: &mut impl Write, entry: &str) -> io::Result<()> {
    if entry.ends_with('\n') {
        writer.write_all(entry.as_bytes())
    } else {
        writeln!(writer, "{entry}")
    }
}

/// Standard output sink
pub struct StdoutSink {
    stdout: io::Stdout,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for StdoutSink {
    fn write_entry(&mut self, entry: &str) -> io::Result<()> {
        write_terminated(&mut self.stdout, entry)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

/// Standard error sink
pub struct StderrSink {
    stderr: io::Stderr,
}

impl StderrSink {
    pub fn new() -> Self {
        Self {
            stderr: io::stderr(),
        }
    }
}

impl Default for StderrSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for StderrSink {
    fn write_entry(&mut self, entry: &str) -> io::Result<()> {
        write_terminated(&mut self.stderr, entry)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stderr.flush()
    }
}

/// Exclusively-owned file sink
///
/// The file is created (or truncated) when the sink is constructed; failure
/// to open is reported at creation time, never deferred to the first write.
pub struct FileSink {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl FileSink {
    /// Open (create/truncate) the target path for this sink.
    pub fn create(path: &Path) -> Result<Self, LogError> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .map_err(|source| LogError::SinkOpen {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    /// Path this sink writes to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileSink {
    fn write_entry(&mut self, entry: &str) -> io::Result<()> {
        write_terminated(&mut self.writer, entry)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn is_file(&self) -> bool {
        true
    }
}

/// In-memory capture sink
///
/// Records each entry as one element, so tests can assert on write counts
/// (e.g. that a whole multiline message arrived as a single write).
pub struct MemorySink {
    entries: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Create a sink together with a shared handle to the captured entries.
    pub fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                entries: Arc::clone(&entries),
            },
            entries,
        )
    }
}

impl LogSink for MemorySink {
    fn write_entry(&mut self, entry: &str) -> io::Result<()> {
        self.entries.lock().unwrap().push(entry.to_string());
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_captures_entries() {
        let (mut sink, entries) = MemorySink::new();
        sink.write_entry("first").unwrap();
        sink.write_entry("second").unwrap();

        let entries = entries.lock().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], "first");
        assert_eq!(entries[1], "second");
    }

    #[test]
    fn test_file_sink_create_and_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.log");

        let mut sink = FileSink::create(&path).unwrap();
        assert!(sink.is_file());
        assert_eq!(sink.path(), path);

        sink.write_entry("hello file").unwrap();
        sink.flush().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "hello file\n");
    }

    #[test]
    fn test_file_sink_open_failure_is_creation_error() {
        let result = FileSink::create(Path::new("/nonexistent-dir/test.log"));
        assert!(matches!(result, Err(LogError::SinkOpen { .. })));
    }

    #[test]
    fn test_embedded_newline_not_doubled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("multi.log");

        let mut sink = FileSink::create(&path).unwrap();
        sink.write_entry("line one\nline two\n").unwrap();
        sink.flush().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "line one\nline two\n");
    }
}
