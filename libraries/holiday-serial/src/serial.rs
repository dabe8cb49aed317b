// holiday-serial/src/serial.rs
//
// DeviceLink over a real serial port

use serialport::{ClearBuffer, DataBits, FlowControl, Parity, SerialPort, StopBits};
use std::io::{ErrorKind, Read, Write};
use std::path::Path;
use std::time::Duration;

use crate::error::{Result, SerialError};
use crate::link::DeviceLink;

/// Baud rate the firmware listens at
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Baud rate tried when the board stays silent at the default rate
pub const FALLBACK_BAUD_RATE: u32 = 57_600;

/// Read timeout per byte
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Where and how to open the port
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSettings {
    /// Device node, e.g. `/dev/ttySP1`
    pub path: String,
    pub baud_rate: u32,
    pub timeout: Duration,
}

impl LinkSettings {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            baud_rate: DEFAULT_BAUD_RATE,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Check that the device node exists before trying to open it
pub fn device_present(path: &str) -> holiday_core::Result<()> {
    if Path::new(path).exists() {
        Ok(())
    } else {
        Err(holiday_core::HolidayError::device_not_found(path))
    }
}

/// 8N1 serial link with no flow control
pub struct SerialLink {
    settings: LinkSettings,
    port: Box<dyn SerialPort>,
}

impl std::fmt::Debug for SerialLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialLink")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl SerialLink {
    /// Open the port described by `settings`
    pub fn open(settings: LinkSettings) -> Result<Self> {
        let port = open_port(&settings)?;
        tracing::debug!(
            "Opened {} at {} baud",
            settings.path,
            settings.baud_rate
        );
        Ok(Self { settings, port })
    }
}

fn open_port(settings: &LinkSettings) -> Result<Box<dyn SerialPort>> {
    serialport::new(settings.path.as_str(), settings.baud_rate)
        .timeout(settings.timeout)
        .data_bits(DataBits::Eight)
        .flow_control(FlowControl::None)
        .parity(Parity::None)
        .stop_bits(StopBits::One)
        .open()
        .map_err(|source| SerialError::Open {
            path: settings.path.clone(),
            baud_rate: settings.baud_rate,
            source,
        })
}

impl DeviceLink for SerialLink {
    fn clear_input(&mut self) -> Result<()> {
        self.port.clear(ClearBuffer::Input)?;
        Ok(())
    }

    fn send(&mut self, command: &str) -> Result<()> {
        tracing::debug!("-> {:?}", command);
        self.port.write_all(command.as_bytes())?;
        self.port.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = Vec::new();
        let mut byte = [0u8; 1];

        loop {
            match self.port.read(&mut byte) {
                Ok(0) => break,
                Ok(_) => {
                    line.push(byte[0]);
                    if byte[0] == b'\n' {
                        break;
                    }
                }
                Err(e) if e.kind() == ErrorKind::TimedOut => break,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        let line = String::from_utf8_lossy(&line).into_owned();
        tracing::debug!("<- {:?}", line);
        Ok(line)
    }

    fn switch_baud_rate(&mut self, baud_rate: u32) -> Result<()> {
        self.port.set_baud_rate(baud_rate)?;
        self.settings.baud_rate = baud_rate;
        tracing::debug!("Switched {} to {} baud", self.settings.path, baud_rate);
        Ok(())
    }
}
