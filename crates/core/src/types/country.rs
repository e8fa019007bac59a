//! Two-letter country code type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`CountryCode`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum CountryCodeError {
    /// The input is not exactly two characters.
    #[error("country must be exactly 2 letters")]
    WrongLength,
    /// The input contains non-ASCII-alphabetic characters.
    #[error("country must contain only letters")]
    NotAlphabetic,
}

/// An ISO 3166-1 alpha-2 country code, stored uppercase.
///
/// Input is normalized to uppercase on parse, so `"tr"` and `"TR"` produce
/// the same value. No registry lookup is performed; any two ASCII letters
/// are accepted.
///
/// ## Examples
///
/// ```
/// use findeasy_core::CountryCode;
///
/// let tr = CountryCode::parse("tr").unwrap();
/// assert_eq!(tr.as_str(), "TR");
/// assert!(CountryCode::parse("TUR").is_err());
/// assert!(CountryCode::parse("T1").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    /// Parse a `CountryCode` from a string, normalizing to uppercase.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly two ASCII letters.
    pub fn parse(s: &str) -> Result<Self, CountryCodeError> {
        if s.chars().count() != 2 {
            return Err(CountryCodeError::WrongLength);
        }
        if !s.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CountryCodeError::NotAlphabetic);
        }
        Ok(Self(s.to_ascii_uppercase()))
    }

    /// Returns the country code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CountryCode {
    type Err = CountryCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
