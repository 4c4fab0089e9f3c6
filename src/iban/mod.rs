//! IBAN normalization and validation.
//!
//! Raw account numbers arrive with arbitrary spacing and casing, so all
//! construction goes through [`normalize`]: strip whitespace, uppercase,
//! then validate the country code and country-specific length against
//! the ISO 13616 [`registry`].
//!
//! # Example
//!
//! ```rust
//! use girocode::iban;
//!
//! let iban = iban::normalize("at61 1904 3002 3457 3201")?;
//! assert_eq!(iban.as_str(), "AT611904300234573201");
//! assert_eq!(iban.country_code(), "AT");
//! # Ok::<(), girocode::iban::IbanError>(())
//! ```

pub mod registry;

use serde::{Deserialize, Serialize};

use registry::required_length;

// -- Validating Deserialize for Iban ------------------------------------------

impl<'de> Deserialize<'de> for Iban {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        normalize(&raw).map_err(serde::de::Error::custom)
    }
}

/// A normalized, validated IBAN.
///
/// Values of this type are always uppercase, free of whitespace, start
/// with a registered country code, and have the exact length that country
/// prescribes. Serializes as a plain string; deserialization re-runs
/// [`normalize`], so stored values with spacing or lowercase are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Iban(String);

impl Iban {
    /// The IBAN as a plain string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two-letter country code prefix.
    pub fn country_code(&self) -> &str {
        // Normalized IBANs always start with a two-letter ASCII country code.
        &self.0[..2]
    }
}

impl std::fmt::Display for Iban {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Iban {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Iban {
    type Err = IbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}

/// Normalize a raw IBAN string and validate it against the registry.
///
/// Strips all whitespace (leading, trailing, and interior) and uppercases
/// the remainder. The country code is checked first, then the length, so
/// an unrecognized country never reports a length mismatch.
///
/// # Errors
///
/// Returns [`IbanError::InvalidCountry`] if the first two characters are
/// not a registered IBAN country, or [`IbanError::InvalidLength`] if the
/// length differs from what that country prescribes.
pub fn normalize(raw: &str) -> Result<Iban, IbanError> {
    let iban: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let country: String = iban.chars().take(2).collect();
    let Some(expected) = required_length(&country) else {
        return Err(IbanError::InvalidCountry { iban, country });
    };

    let actual = iban.chars().count();
    if actual != expected {
        return Err(IbanError::InvalidLength {
            iban,
            country,
            actual,
            expected,
        });
    }

    Ok(Iban(iban))
}

/// Reasons an IBAN fails validation.
///
/// Both variants carry the already-normalized input so callers can report
/// exactly what was checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IbanError {
    /// The first two characters are not a registered IBAN country code.
    InvalidCountry {
        /// The normalized input that was rejected.
        iban: String,
        /// The offending prefix (may be shorter than two characters).
        country: String,
    },
    /// The length does not match what the country prescribes.
    InvalidLength {
        /// The normalized input that was rejected.
        iban: String,
        /// The registered country code.
        country: String,
        /// Character count of the rejected input.
        actual: usize,
        /// Length the country prescribes.
        expected: usize,
    },
}

impl std::fmt::Display for IbanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IbanError::InvalidCountry { country, .. } => {
                write!(f, "IBAN country code \"{}\" is invalid", country)
            }
            IbanError::InvalidLength {
                country,
                actual,
                expected,
                ..
            } => {
                write!(
                    f,
                    "invalid IBAN length ({}), an IBAN for {} has to be {} characters long",
                    actual, country, expected
                )
            }
        }
    }
}

impl std::error::Error for IbanError {}
