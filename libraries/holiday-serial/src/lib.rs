//! Serial transport for HolidayDuino boards
//!
//! - [`DeviceLink`]: line-oriented request/response channel
//! - [`SerialLink`]: `DeviceLink` over a real port (8N1, 1 s timeout)
//! - [`HolidayDuino`]: identity query with baud fallback, globe count, latch
//!
//! # Example
//!
//! ```no_run
//! use holiday_serial::{HolidayDuino, LinkSettings, SerialLink};
//!
//! let link = SerialLink::open(LinkSettings::new("/dev/ttySP1"))?;
//! let mut board = HolidayDuino::new(link);
//! println!("{}", board.query_identity()?);
//! # Ok::<(), holiday_serial::SerialError>(())
//! ```

#![forbid(unsafe_code)]

mod error;
mod link;
mod serial;
mod session;

pub use error::{Result, SerialError};
pub use link::DeviceLink;
pub use serial::{
    device_present, LinkSettings, SerialLink, DEFAULT_BAUD_RATE, DEFAULT_TIMEOUT,
    FALLBACK_BAUD_RATE,
};
pub use session::{HolidayDuino, IDENTITY_QUERY, LATCH};
