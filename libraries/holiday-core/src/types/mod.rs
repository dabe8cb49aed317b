//! Domain types for HolidayDuino firmware handling

pub mod firmware;
pub mod identity;

pub use firmware::{ClockFrequency, Resolution, ResolvedFirmwareTarget};
pub use identity::DeviceIdentity;
