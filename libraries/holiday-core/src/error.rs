//! Core error types for HolidayDuino tooling

use thiserror::Error;

/// Result type alias using `HolidayError`
pub type Result<T> = std::result::Result<T, HolidayError>;

/// Terminal, operator-visible failures.
///
/// Every variant maps to a distinct process exit code (see [`HolidayError::exit_code`]).
/// The display strings are what the tools print, so they carry the raw device
/// response for the operator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HolidayError {
    /// The serial device node does not exist
    #[error("Device {0} not found")]
    DeviceNotFound(String),

    /// The identity reply does not start with the expected tag
    #[error("Unexpected response: {0}")]
    ProtocolMismatch(String),

    /// Version is not in the table and no frequency was reported inline
    #[error("Unknown: {0}")]
    UnknownVersion(String),

    /// Frequency resolved to something other than 16 or 20 MHz
    #[error("Unable to determine frequency: {0}")]
    UndeterminedFrequency(String),

    /// No bootloader baud rate is known for this version
    #[error("Unable to determine baud rate: {0}")]
    UndeterminedBaudRate(String),
}

impl HolidayError {
    /// Process exit code reported for this failure
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::DeviceNotFound(_) => 1,
            Self::ProtocolMismatch(_) => 2,
            Self::UnknownVersion(_) => 3,
            Self::UndeterminedFrequency(_) => 4,
            Self::UndeterminedBaudRate(_) => 5,
        }
    }

    /// Create a device-not-found error
    pub fn device_not_found(path: impl Into<String>) -> Self {
        Self::DeviceNotFound(path.into())
    }

    /// Create a protocol mismatch error
    pub fn protocol_mismatch(response: impl Into<String>) -> Self {
        Self::ProtocolMismatch(response.into())
    }
}
