//! Phone number normalization and validation.
//!
//! A valid number, once stripped of formatting, is digit-only, starts
//! with the Brazilian country code 55, and has 12 to 15 digits. The
//! canonical form doubles as the uniqueness key for duplicate detection
//! in the calling layer.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Country calling code every stored number must carry.
pub const COUNTRY_CODE: &str = "55";
/// Minimum digit count of a canonical number, country code included.
pub const MIN_DIGITS: usize = 12;
/// Maximum digit count of a canonical number.
pub const MAX_DIGITS: usize = 15;

/// Canonical directory-number form: digit-only, starting with 55.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Why a raw phone number was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneError {
    #[error("phone number is empty")]
    EmptyNumber,
    #[error("phone number must start with country code {COUNTRY_CODE}")]
    MissingCountryCode,
    #[error("phone number must have {MIN_DIGITS} to {MAX_DIGITS} digits, got {0}")]
    InvalidLength(usize),
}

/// ## Summary
/// Strips every non-digit character from `raw` and validates the result
/// into a canonical [`PhoneNumber`].
///
/// ## Errors
/// - [`PhoneError::EmptyNumber`] when nothing is left after stripping.
/// - [`PhoneError::MissingCountryCode`] when the digits do not start
///   with 55.
/// - [`PhoneError::InvalidLength`] when the digit count is outside 12..=15.
pub fn validate(raw: &str) -> Result<PhoneNumber, PhoneError> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(PhoneError::EmptyNumber);
    }
    if !digits.starts_with(COUNTRY_CODE) {
        return Err(PhoneError::MissingCountryCode);
    }
    if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits.len()) {
        return Err(PhoneError::InvalidLength(digits.len()));
    }
    Ok(PhoneNumber(digits))
}
