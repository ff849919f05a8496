// SPDX-License-Identifier: Apache-2.0 OR MIT
// Log creation configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Where a log writes its entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogDestination {
    /// Standard output
    Console,
    /// Exclusively-owned file at the given path
    File(PathBuf),
}

/// Configuration record for creating a [`Log`]
///
/// The connection name is purely associative: it tags a log that belongs to
/// one connection, with no behavioral coupling.
///
/// [`Log`]: crate::Log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    pub destination: LogDestination,
    pub connection_name: Option<String>,
}

impl LogConfig {
    /// Console (stdout) destination
    pub fn console() -> Self {
        Self {
            destination: LogDestination::Console,
            connection_name: None,
        }
    }

    /// File destination at the given path
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self {
            destination: LogDestination::File(path.as_ref().to_path_buf()),
            connection_name: None,
        }
    }

    /// Tag this log with an owning connection name
    pub fn with_connection(mut self, name: impl Into<String>) -> Self {
        self.connection_name = Some(name.into());
        self
    }
}
