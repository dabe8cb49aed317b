//! Firmware target types produced by the version resolver
//!
//! These serialize for reports, e.g. `{"status":"up_to_date","version":"05"}`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Crystal frequency the board runs at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClockFrequency {
    /// 16 MHz (first hardware generation)
    #[serde(rename = "16")]
    Mhz16,
    /// 20 MHz
    #[serde(rename = "20")]
    Mhz20,
}

impl ClockFrequency {
    /// Token used on the wire and in image filenames
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mhz16 => "16",
            Self::Mhz20 => "20",
        }
    }
}

impl fmt::Display for ClockFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClockFrequency {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "16" => Ok(Self::Mhz16),
            "20" => Ok(Self::Mhz20),
            _ => Err(()),
        }
    }
}

/// Everything the uploader needs to flash a device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedFirmwareTarget {
    /// Version currently running on the device
    pub version: String,
    /// Clock frequency the image was built for
    pub frequency: ClockFrequency,
    /// Bootloader baud rate
    pub baud_rate: u32,
    /// Image to flash, e.g. `HolidayDuino05-20.hex`
    pub image_filename: String,
}

/// Outcome of a successful resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    /// Device already runs the latest firmware
    UpToDate {
        /// Version the device reported
        version: String,
    },
    /// Device needs flashing with the given target
    Upgrade(ResolvedFirmwareTarget),
}

impl Resolution {
    /// The upgrade target, if one is needed
    pub fn target(&self) -> Option<&ResolvedFirmwareTarget> {
        match self {
            Self::UpToDate { .. } => None,
            Self::Upgrade(target) => Some(target),
        }
    }
}
