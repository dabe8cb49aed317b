//! Line-oriented link to a board

use crate::error::Result;

/// Minimal request/response channel to a HolidayDuino.
///
/// Commands are short ASCII strings; replies are single newline-terminated
/// lines. Implementations bound every read with a timeout.
#[cfg_attr(test, mockall::automock)]
pub trait DeviceLink {
    /// Discard anything already buffered from the device
    fn clear_input(&mut self) -> Result<()>;

    /// Write a command without any terminator
    fn send(&mut self, command: &str) -> Result<()>;

    /// Read one line, including its terminator if one arrived.
    ///
    /// Returns an empty string when the timeout expires before any byte.
    fn read_line(&mut self) -> Result<String>;

    /// Reconfigure the open link to another baud rate
    fn switch_baud_rate(&mut self, baud_rate: u32) -> Result<()>;
}
