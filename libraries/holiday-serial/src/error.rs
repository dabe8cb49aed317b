//! Error types for the serial transport

use thiserror::Error;

/// Result type for serial operations
pub type Result<T> = std::result::Result<T, SerialError>;

/// Errors that can occur while talking to a board
#[derive(Error, Debug)]
pub enum SerialError {
    /// Device node missing (reported with the core taxonomy)
    #[error(transparent)]
    Device(#[from] holiday_core::HolidayError),

    /// Port could not be opened or reconfigured
    #[error("Failed to open {path} at {baud_rate} baud: {source}")]
    Open {
        path: String,
        baud_rate: u32,
        #[source]
        source: serialport::Error,
    },

    /// Port driver error
    #[error("Serial port error: {0}")]
    Port(#[from] serialport::Error),

    /// Read or write failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
