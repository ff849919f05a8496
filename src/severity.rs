// SPDX-License-Identifier: Apache-2.0 OR MIT
// Severity levels for log messages

use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// Log severity levels (0-6, higher is more severe)
///
/// A message passes the severity gate when its severity is at or above the
/// configured threshold for its component.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Debug-level messages (verbose internal traces)
    Debug = 0,
    /// Detailed informational messages
    Verbose = 1,
    /// Informational (normal operation)
    Info = 2,
    /// Warning conditions (suspicious but recoverable)
    Warning = 3,
    /// Error conditions (operation failed)
    Error = 4,
    /// Critical conditions (subsystem failure)
    Critical = 5,
    /// Fatal conditions (process unusable)
    Fatal = 6,
}

impl Severity {
    /// Get severity level as u8 (0-6)
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Get severity name as static string
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Verbose => "VERBOSE",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
            Severity::Fatal => "FATAL",
        }
    }

    /// Create from u8 value (returns None if invalid)
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Severity::Debug),
            1 => Some(Severity::Verbose),
            2 => Some(Severity::Info),
            3 => Some(Severity::Warning),
            4 => Some(Severity::Error),
            5 => Some(Severity::Critical),
            6 => Some(Severity::Fatal),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = LogError;

    fn try_from(value: u8) -> Result<Self, LogError> {
        Severity::from_u8(value).ok_or(LogError::InvalidSeverity(value))
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Debug < Severity::Verbose);
        assert!(Severity::Verbose < Severity::Info);
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Critical);
        assert!(Severity::Critical < Severity::Fatal);
    }

    #[test]
    fn test_severity_values() {
        assert_eq!(Severity::Debug.as_u8(), 0);
        assert_eq!(Severity::Fatal.as_u8(), 6);
    }

    #[test]
    fn test_severity_from_u8() {
        assert_eq!(Severity::from_u8(0), Some(Severity::Debug));
        assert_eq!(Severity::from_u8(6), Some(Severity::Fatal));
        assert_eq!(Severity::from_u8(7), None);
    }

    #[test]
    fn test_severity_try_from_invalid() {
        assert!(matches!(
            Severity::try_from(42),
            Err(LogError::InvalidSeverity(42))
        ));
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(format!("{}", Severity::Debug), "DEBUG");
        assert_eq!(format!("{}", Severity::Warning), "WARNING");
    }
}
