//! Country code types.

use std::fmt;

/// Error returned when parsing an invalid country code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid country code: {reason}")]
pub struct InvalidCountryCode {
    reason: &'static str,
}

/// A two-letter country code as reported by the geocoder (ISO 3166-1 alpha-2).
///
/// Codes are always 2 uppercase ASCII letters. Any `CountryCode` value is
/// valid by construction.
///
/// # Examples
///
/// ```
/// use groundstation_mapper::domain::CountryCode;
///
/// let us = CountryCode::parse("US").unwrap();
/// assert_eq!(us.as_str(), "US");
/// assert_eq!(us.to_lowercase(), "us");
///
/// assert!(CountryCode::parse("us").is_err());
/// assert!(CountryCode::parse("USA").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    /// Parse a country code from a string.
    ///
    /// The input must be exactly 2 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidCountryCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 2 {
            return Err(InvalidCountryCode {
                reason: "must be exactly 2 characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidCountryCode {
                reason: "must be uppercase ASCII letters A-Z",
            });
        }

        Ok(CountryCode([bytes[0], bytes[1]]))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Returns the lowercased code, as used in flag icon file names.
    pub fn to_lowercase(&self) -> String {
        self.as_str().to_ascii_lowercase()
    }
}

impl fmt::Debug for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CountryCode({})", self.as_str())
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn roundtrip(s in "[A-Z]{2}") {
            let code = CountryCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        #[test]
        fn lowercase_rejected(s in "[a-z]{2}") {
            prop_assert!(CountryCode::parse(&s).is_err());
        }

        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,1}|[A-Z]{3,8}") {
            prop_assert!(CountryCode::parse(&s).is_err());
        }
    }
}
