//! Birth numbers (fødselsnummer).
//!
//! Nine digits (DDMMYY date plus a three-digit individual number) followed by
//! two MOD11 control digits. The second control digit covers the first, so
//! they are computed in sequence.

use crate::checksum::{
    MOD11_WEIGHTS, Result, mod11_control_digit, validate_base, validate_control_digit,
    verify_by_rebuild,
};

/// Length of a birth number without its control digits.
pub const BIRTH_NUMBER_BASE_LENGTH: usize = 9;

/// Weights for the first control digit (k1), rightmost digit first.
pub const BIRTH_NUMBER_K1_WEIGHTS: &[u32] = &[2, 5, 4, 9, 8, 1, 6, 7, 3];

/// Make an 11-digit birth number from a 9-digit base.
///
/// # Errors
/// [`NumberError::Length`](crate::NumberError::Length) or
/// [`NumberError::NotAnInteger`](crate::NumberError::NotAnInteger) for a bad
/// base, and [`NumberError::InvalidControlDigit`](crate::NumberError::InvalidControlDigit)
/// when either control digit would be `-`. Such bases are never issued.
pub fn make_birth_number(value: &str) -> Result<String> {
    validate_base(value, BIRTH_NUMBER_BASE_LENGTH, BIRTH_NUMBER_BASE_LENGTH)?;
    let first = validate_control_digit(mod11_control_digit(value, BIRTH_NUMBER_K1_WEIGHTS))?;
    let with_first = format!("{value}{first}");
    let second = validate_control_digit(mod11_control_digit(&with_first, MOD11_WEIGHTS))?;
    Ok(format!("{with_first}{second}"))
}

/// Verify a birth number. Never fails; malformed input is `false`.
pub fn verify_birth_number(value: &str) -> bool {
    verify_by_rebuild(value, 2, make_birth_number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::NumberError;

    #[test]
    fn known_birth_number() {
        assert_eq!(make_birth_number("311299567").unwrap(), "31129956715");
        assert!(verify_birth_number("31129956715"));
    }

    #[test]
    fn rejected_first_control_digit() {
        assert_eq!(
            make_birth_number("000000021"),
            Err(NumberError::InvalidControlDigit)
        );
    }

    #[test]
    fn rejected_second_control_digit() {
        // k1 = 9, then 9*2 + 4*3 + 1*4 = 34 ≡ 1 (mod 11)
        assert_eq!(
            make_birth_number("000000014"),
            Err(NumberError::InvalidControlDigit)
        );
    }

    #[test]
    fn wrong_control_digits() {
        assert!(!verify_birth_number("31129956716"));
        assert!(!verify_birth_number("31129956705"));
        assert!(!verify_birth_number("3112995671-"));
    }

    #[test]
    fn wrong_length() {
        assert!(!verify_birth_number("3112995671"));
        assert!(!verify_birth_number("311299567150"));
        assert!(!verify_birth_number(""));
    }
}
