// SPDX-License-Identifier: Apache-2.0 OR MIT
// Log components (subsystem identifiers used for independent filtering)

use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// Number of components; sizes the fixed per-component filter tables.
pub const COMPONENT_COUNT: usize = 6;

/// Logging component - identifies which subsystem generated the log message
///
/// Each component can be enabled/disabled and given a minimum severity
/// independently, per log and globally.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    /// Uncategorized messages; the default for call sites without a component
    Generic = 0,
    /// Payload configuration parsing and validation
    PayloadConfig = 1,
    /// Performance counters and timing reports
    PerformanceMetrics = 2,
    /// Connection probe state machine
    Probe = 3,
    /// Endpoint lifecycle management
    EndpointManager = 4,
    /// Test harness and fixtures
    Test = 5,
}

impl Component {
    /// All components, in table order
    pub const ALL: [Component; COMPONENT_COUNT] = [
        Component::Generic,
        Component::PayloadConfig,
        Component::PerformanceMetrics,
        Component::Probe,
        Component::EndpointManager,
        Component::Test,
    ];

    /// Get component code as u8
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Index into the per-component filter tables
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Get component name as static string
    pub const fn as_str(self) -> &'static str {
        match self {
            Component::Generic => "Generic",
            Component::PayloadConfig => "PayloadConfig",
            Component::PerformanceMetrics => "PerformanceMetrics",
            Component::Probe => "Probe",
            Component::EndpointManager => "EndpointManager",
            Component::Test => "Test",
        }
    }

    /// Create from u8 value (returns None if invalid)
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Component::Generic),
            1 => Some(Component::PayloadConfig),
            2 => Some(Component::PerformanceMetrics),
            3 => Some(Component::Probe),
            4 => Some(Component::EndpointManager),
            5 => Some(Component::Test),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Component {
    type Error = LogError;

    fn try_from(value: u8) -> Result<Self, LogError> {
        Component::from_u8(value).ok_or(LogError::InvalidComponent(value))
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
