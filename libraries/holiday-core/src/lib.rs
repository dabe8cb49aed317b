//! HolidayDuino Core
//!
//! Identity parsing and firmware version resolution for HolidayDuino boards.
//!
//! This crate has no I/O. The serial transport lives in `holiday-serial` and
//! the operator tools in `holiday-cli`.
//!
//! # Architecture
//!
//! ```text
//! "HolidayDuino03\r\n" ──► DeviceIdentity ──► Generation ──► Resolution
//!                                                            ├─ UpToDate
//!                                                            └─ Upgrade(ResolvedFirmwareTarget)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod resolver;
pub mod types;

pub use error::{HolidayError, Result};
pub use resolver::{
    Generation, ResolverConfig, VersionResolver, DEFAULT_LATEST_VERSION, DEFAULT_TAG,
    IMAGE_PREFIX, LEGACY_BAUD_RATE, OPTIBOOT_BAUD_RATE,
};
pub use types::{ClockFrequency, DeviceIdentity, Resolution, ResolvedFirmwareTarget};
