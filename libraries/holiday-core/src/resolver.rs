//! Firmware version resolution
//!
//! Maps the identity a HolidayDuino reports to the firmware image and
//! bootloader baud rate needed to bring it up to the latest version.
//!
//! # Hardware generations
//!
//! ```text
//! version   frequency   bootloader              baud
//! 01        16 MHz      Duemilanove             57600
//! 02..04    20 MHz      optiboot                115200
//! later     inline      optiboot                115200
//! ```
//!
//! Versions after 04 are expected to report their frequency inline
//! (`HolidayDuino06-20`). A later version without one cannot be resolved.
//!
//! # Example
//!
//! ```
//! use holiday_core::{ClockFrequency, Resolution, ResolverConfig, VersionResolver};
//!
//! let resolver = VersionResolver::new(ResolverConfig::default());
//!
//! let resolution = resolver.resolve("HolidayDuino01").unwrap();
//! let target = resolution.target().unwrap();
//! assert_eq!(target.frequency, ClockFrequency::Mhz16);
//! assert_eq!(target.baud_rate, 57600);
//! assert_eq!(target.image_filename, "HolidayDuino05-16.hex");
//!
//! let resolution = resolver.resolve("HolidayDuino05-20").unwrap();
//! assert!(matches!(resolution, Resolution::UpToDate { .. }));
//! ```

use crate::error::{HolidayError, Result};
use crate::types::{ClockFrequency, DeviceIdentity, Resolution, ResolvedFirmwareTarget};

/// Tag every identity reply starts with
pub const DEFAULT_TAG: &str = "HolidayDuino";

/// Prefix of every firmware image filename, independent of the reply tag
pub const IMAGE_PREFIX: &str = "HolidayDuino";

/// Firmware version shipped with this release of the tools
pub const DEFAULT_LATEST_VERSION: &str = "05";

/// Baud rate of the Duemilanove bootloader on version 01 boards
pub const LEGACY_BAUD_RATE: u32 = 57_600;

/// Baud rate of the optiboot bootloader on version 02 and later
pub const OPTIBOOT_BAUD_RATE: u32 = 115_200;

/// Resolver inputs that change between releases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Literal prefix of the identity reply
    pub tag: String,
    /// Latest firmware version available for flashing
    pub latest_version: String,
    /// Bootloader baud rate for versions after 04
    pub later_baud_rate: Option<u32>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
            latest_version: DEFAULT_LATEST_VERSION.to_string(),
            later_baud_rate: Some(OPTIBOOT_BAUD_RATE),
        }
    }
}

/// Hardware generation a reported version belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generation<'a> {
    /// Already running the latest firmware
    Latest,
    /// First boards: 16 MHz, legacy bootloader
    V01,
    /// 20 MHz boards with optiboot
    V02To04,
    /// Later version that reported its frequency token inline
    OtherKnownFrequency(&'a str),
    /// Later version with no frequency token
    Unresolvable,
}

impl<'a> Generation<'a> {
    /// Classify an identity against the latest version.
    ///
    /// Order matters: the latest version wins over the legacy table, and the
    /// legacy table wins over any inline frequency.
    pub fn classify(identity: &'a DeviceIdentity, latest_version: &str) -> Self {
        let version = identity.version.as_str();
        if version == latest_version {
            return Self::Latest;
        }

        match (version, identity.frequency.as_deref()) {
            ("01", _) => Self::V01,
            ("02" | "03" | "04", _) => Self::V02To04,
            (_, None | Some("")) => Self::Unresolvable,
            (_, Some(frequency)) => Self::OtherKnownFrequency(frequency),
        }
    }

    /// Frequency token and baud rate for this generation.
    ///
    /// Returns `None` for generations that produce no flashing parameters.
    fn parameters(self, later_baud_rate: Option<u32>) -> Option<(&'a str, Option<u32>)> {
        match self {
            Self::Latest | Self::Unresolvable => None,
            Self::V01 => Some(("16", Some(LEGACY_BAUD_RATE))),
            Self::V02To04 => Some(("20", Some(OPTIBOOT_BAUD_RATE))),
            Self::OtherKnownFrequency(frequency) => {
                Some((frequency, later_baud_rate.filter(|baud| *baud > 0)))
            }
        }
    }
}

/// Decides whether a device needs an upgrade and with what parameters
#[derive(Debug, Clone, Default)]
pub struct VersionResolver {
    config: ResolverConfig,
}

impl VersionResolver {
    /// Create a resolver for the given release
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Resolve a raw identity reply.
    ///
    /// # Errors
    /// - `ProtocolMismatch` if the reply does not start with the tag
    /// - `UnknownVersion` for a later version with no inline frequency
    /// - `UndeterminedFrequency` if the frequency is not 16 or 20
    /// - `UndeterminedBaudRate` if no baud rate is known
    pub fn resolve(&self, raw: &str) -> Result<Resolution> {
        let identity = DeviceIdentity::parse(raw, &self.config.tag)?;
        self.resolve_identity(&identity)
    }

    /// Resolve an already parsed identity
    pub fn resolve_identity(&self, identity: &DeviceIdentity) -> Result<Resolution> {
        let generation = Generation::classify(identity, &self.config.latest_version);
        tracing::debug!(
            "Identity {} classified as {:?}",
            identity.raw,
            generation
        );

        if generation == Generation::Latest {
            return Ok(Resolution::UpToDate {
                version: identity.version.clone(),
            });
        }

        let (frequency, baud_rate) = generation
            .parameters(self.config.later_baud_rate)
            .ok_or_else(|| HolidayError::UnknownVersion(identity.raw.clone()))?;

        let frequency: ClockFrequency = frequency
            .parse()
            .map_err(|()| HolidayError::UndeterminedFrequency(identity.raw.clone()))?;

        let baud_rate =
            baud_rate.ok_or_else(|| HolidayError::UndeterminedBaudRate(identity.raw.clone()))?;

        Ok(Resolution::Upgrade(ResolvedFirmwareTarget {
            version: identity.version.clone(),
            frequency,
            baud_rate,
            image_filename: self.image_filename(frequency),
        }))
    }

    /// Filename of the latest image built for `frequency`.
    ///
    /// Always starts with [`IMAGE_PREFIX`], whatever tag the board replies with.
    pub fn image_filename(&self, frequency: ClockFrequency) -> String {
        format!(
            "{}{}-{}.hex",
            IMAGE_PREFIX, self.config.latest_version, frequency
        )
    }
}
