//! Parsed reply to the `?` identity query

use crate::error::{HolidayError, Result};

/// Identity reported by a HolidayDuino, e.g. `HolidayDuino05-20`.
///
/// The reply is the tag literal followed by a version token. When the token
/// contains exactly one `-`, the part after it is the clock frequency. Tokens
/// with more segments are kept whole as the version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceIdentity {
    /// Reply with surrounding whitespace removed
    pub raw: String,
    /// Version code, e.g. `05`
    pub version: String,
    /// Frequency token reported inline, if any (not validated here)
    pub frequency: Option<String>,
}

impl DeviceIdentity {
    /// Parse a raw reply, requiring it to start with `tag`.
    ///
    /// # Errors
    /// Returns `ProtocolMismatch` when the reply does not start with `tag`.
    pub fn parse(raw: &str, tag: &str) -> Result<Self> {
        let raw = raw.trim();
        let token = raw
            .strip_prefix(tag)
            .ok_or_else(|| HolidayError::protocol_mismatch(raw))?;

        let segments: Vec<&str> = token.split('-').collect();
        let (version, frequency) = match segments.as_slice() {
            [version, frequency] => ((*version).to_string(), Some((*frequency).to_string())),
            _ => (token.to_string(), None),
        };

        Ok(Self {
            raw: raw.to_string(),
            version,
            frequency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAG: &str = "HolidayDuino";

    #[test]
    fn splits_inline_frequency() {
        let id = DeviceIdentity::parse("HolidayDuino05-20", TAG).unwrap();
        assert_eq!(id.version, "05");
        assert_eq!(id.frequency.as_deref(), Some("20"));
    }

    #[test]
    fn bare_version_has_no_frequency() {
        let id = DeviceIdentity::parse("HolidayDuino03", TAG).unwrap();
        assert_eq!(id.version, "03");
        assert_eq!(id.frequency, None);
    }

    #[test]
    fn strips_line_terminator() {
        let id = DeviceIdentity::parse("HolidayDuino01\r\n", TAG).unwrap();
        assert_eq!(id.raw, "HolidayDuino01");
        assert_eq!(id.version, "01");
    }

    #[test]
    fn trailing_dash_yields_empty_frequency() {
        let id = DeviceIdentity::parse("HolidayDuino06-", TAG).unwrap();
        assert_eq!(id.version, "06");
        assert_eq!(id.frequency.as_deref(), Some(""));
    }

    #[test]
    fn extra_segments_stay_in_version() {
        let id = DeviceIdentity::parse("HolidayDuino06-20-b", TAG).unwrap();
        assert_eq!(id.version, "06-20-b");
        assert_eq!(id.frequency, None);
    }

    #[test]
    fn rejects_missing_tag() {
        let err = DeviceIdentity::parse("Arduino05", TAG).unwrap_err();
        assert_eq!(err, HolidayError::ProtocolMismatch("Arduino05".into()));
    }

    #[test]
    fn rejects_empty_reply() {
        let err = DeviceIdentity::parse("", TAG).unwrap_err();
        assert!(matches!(err, HolidayError::ProtocolMismatch(_)));
    }
}
