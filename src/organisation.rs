//! Organisation numbers (organisasjonsnummer) from the Brønnøysund Register
//! Centre: eight digits and one MOD11 control digit.

use crate::checksum::{
    MOD11_WEIGHTS, Result, mod11_control_digit, validate_base, validate_control_digit,
    verify_by_rebuild,
};

/// Length of an organisation number without its control digit.
pub const ORGANISATION_NUMBER_BASE_LENGTH: usize = 8;

/// Make a 9-digit organisation number from an 8-digit base.
///
/// # Errors
/// Length and format errors for a bad base;
/// [`NumberError::InvalidControlDigit`](crate::NumberError::InvalidControlDigit)
/// when the control digit would be `-`.
pub fn make_organisation_number(value: &str) -> Result<String> {
    validate_base(
        value,
        ORGANISATION_NUMBER_BASE_LENGTH,
        ORGANISATION_NUMBER_BASE_LENGTH,
    )?;
    let control = validate_control_digit(mod11_control_digit(value, MOD11_WEIGHTS))?;
    Ok(format!("{value}{control}"))
}

/// Verify an organisation number. Never fails; malformed input is `false`.
pub fn verify_organisation_number(value: &str) -> bool {
    verify_by_rebuild(value, 1, make_organisation_number)
}
