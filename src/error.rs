// SPDX-License-Identifier: Apache-2.0 OR MIT
// Error types for the logging facility

use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by creation and configuration operations.
///
/// The emission path never reports errors: a failed sink write is swallowed
/// so that logging cannot destabilize the calling application.
#[derive(Debug, Error)]
pub enum LogError {
    /// The process-wide facility has not been initialized
    #[error("logging facility is not initialized")]
    NotInitialized,

    /// A file sink could not be opened at log creation time
    #[error("failed to open log file {path:?}: {source}")]
    SinkOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A raw severity value that does not map to a known level
    #[error("invalid severity value {0}")]
    InvalidSeverity(u8),

    /// A raw component value that does not map to a known component
    #[error("invalid component value {0}")]
    InvalidComponent(u8),
}

pub type Result<T> = std::result::Result<T, LogError>;
