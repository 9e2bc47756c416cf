//! Conventional display grouping for complete numbers.
//!
//! Only the shape (length and digits) is checked here, not the control
//! digits. Use the `verify_*` functions for that.

use crate::checksum::{Result, validate_base};

/// Split `value` into groups of the given sizes joined by `separator`.
/// The sizes must add up to the length of `value`.
fn group(value: &str, sizes: &[usize], separator: &str) -> String {
    let mut parts = Vec::with_capacity(sizes.len());
    let mut start = 0;
    for size in sizes {
        parts.push(&value[start..start + size]);
        start += size;
    }
    parts.join(separator)
}

/// Format an 11-digit account number as `XXXX.XX.XXXXX`.
///
/// ```
/// assert_eq!(norsk_nummer::format_account_number("86011117947").unwrap(), "8601.11.17947");
/// ```
#[cfg(feature = "account-number")]
pub fn format_account_number(value: &str) -> Result<String> {
    validate_base(value, 11, 11)?;
    Ok(group(value, &[4, 2, 5], "."))
}

/// Format a 9-digit organisation number as `XXX XXX XXX`.
#[cfg(feature = "organisation-number")]
pub fn format_organisation_number(value: &str) -> Result<String> {
    validate_base(value, 9, 9)?;
    Ok(group(value, &[3, 3, 3], " "))
}

/// Format an 11-digit birth number as `DDMMYY NNNNN`.
#[cfg(feature = "birth-number")]
pub fn format_birth_number(value: &str) -> Result<String> {
    validate_base(value, 11, 11)?;
    Ok(group(value, &[6, 5], " "))
}
