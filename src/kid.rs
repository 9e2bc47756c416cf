//! KID numbers (kundeidentifikasjonsnummer), the payment reference on
//! Norwegian giro payments.
//!
//! A KID is 1-24 digits followed by one control digit computed with either
//! MOD10 or MOD11. Under MOD11 the control digit may be `-`, which banks
//! accept as a valid KID.
//!
//! # Example
//!
//! ```
//! use norsk_nummer::kid::*;
//!
//! assert_eq!(make_kid_number("234567", KidMode::Mod10).unwrap(), "2345676");
//! assert_eq!(make_kid_number("40", KidMode::Mod11).unwrap(), "40-");
//! assert!(verify_kid_number("2345676", KidMode::Mod10));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checksum::{
    MOD10_WEIGHTS, MOD11_WEIGHTS, NumberError, Result, mod10_control_digit, mod11_control_digit,
    validate_base, verify_by_rebuild,
};

/// Shortest accepted KID base.
pub const KID_MIN_LENGTH: usize = 1;
/// Longest accepted KID base.
pub const KID_MAX_LENGTH: usize = 24;

/// Checksum used for the KID control digit.
///
/// Serializes as `"MOD10"` / `"MOD11"`; deserializes through [`FromStr`], so
/// stored names are case-insensitive like everywhere else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum KidMode {
    /// Luhn, weights `[2, 1]`.
    #[default]
    #[serde(rename = "MOD10")]
    Mod10,
    /// Weights `[2, 3, 4, 5, 6, 7]`; the control digit may be `-`.
    #[serde(rename = "MOD11")]
    Mod11,
}

impl KidMode {
    /// Canonical upper-case name.
    pub fn name(self) -> &'static str {
        match self {
            KidMode::Mod10 => "MOD10",
            KidMode::Mod11 => "MOD11",
        }
    }
}

impl fmt::Display for KidMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KidMode {
    type Err = NumberError;

    /// Case-insensitive: `"mod11"` and `"MOD11"` are the same mode.
    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("MOD10") {
            Ok(KidMode::Mod10)
        } else if s.eq_ignore_ascii_case("MOD11") {
            Ok(KidMode::Mod11)
        } else {
            Err(NumberError::InvalidMode { mode: s.into() })
        }
    }
}

impl TryFrom<String> for KidMode {
    type Error = NumberError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Make a KID number by appending a control digit to `value`.
///
/// # Errors
/// [`NumberError::Length`] unless `value` is 1-24 characters,
/// [`NumberError::NotAnInteger`] unless it is all digits.
pub fn make_kid_number(value: &str, mode: KidMode) -> Result<String> {
    validate_base(value, KID_MIN_LENGTH, KID_MAX_LENGTH)?;
    let control = match mode {
        KidMode::Mod10 => mod10_control_digit(value, MOD10_WEIGHTS),
        KidMode::Mod11 => mod11_control_digit(value, MOD11_WEIGHTS),
    };
    Ok(format!("{value}{control}"))
}

/// Like [`make_kid_number`], with the mode given by name.
///
/// # Errors
/// Additionally [`NumberError::InvalidMode`] for an unknown mode name. The
/// value is validated first.
pub fn make_kid_number_named(value: &str, mode: &str) -> Result<String> {
    validate_base(value, KID_MIN_LENGTH, KID_MAX_LENGTH)?;
    make_kid_number(value, mode.parse()?)
}

/// Verify a KID number. Never fails; malformed input is simply `false`.
pub fn verify_kid_number(value: &str, mode: KidMode) -> bool {
    verify_by_rebuild(value, 1, |base| make_kid_number(base, mode))
}

/// Like [`verify_kid_number`], with the mode given by name. An unknown mode
/// verifies nothing.
pub fn verify_kid_number_named(value: &str, mode: &str) -> bool {
    verify_by_rebuild(value, 1, |base| make_kid_number_named(base, mode))
}
