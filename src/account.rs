//! Bank account numbers (kontonummer): ten digits and one MOD11 control digit.

use crate::checksum::{
    MOD11_WEIGHTS, Result, mod11_control_digit, validate_base, validate_control_digit,
    verify_by_rebuild,
};

/// Length of an account number without its control digit.
pub const ACCOUNT_NUMBER_BASE_LENGTH: usize = 10;

/// Make an 11-digit account number from a 10-digit base.
///
/// # Errors
/// Length and format errors for a bad base;
/// [`NumberError::InvalidControlDigit`](crate::NumberError::InvalidControlDigit)
/// when the control digit would be `-`.
pub fn make_account_number(value: &str) -> Result<String> {
    validate_base(value, ACCOUNT_NUMBER_BASE_LENGTH, ACCOUNT_NUMBER_BASE_LENGTH)?;
    let control = validate_control_digit(mod11_control_digit(value, MOD11_WEIGHTS))?;
    Ok(format!("{value}{control}"))
}

/// Verify an account number. Never fails; malformed input is `false`.
pub fn verify_account_number(value: &str) -> bool {
    verify_by_rebuild(value, 1, make_account_number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::NumberError;

    #[test]
    fn known_account_numbers() {
        assert_eq!(make_account_number("1234567890").unwrap(), "12345678903");
        assert_eq!(make_account_number("8601111794").unwrap(), "86011117947");
    }

    #[test]
    fn rejected_control_digit() {
        assert_eq!(
            make_account_number("0000002001"),
            Err(NumberError::InvalidControlDigit)
        );
        assert!(!verify_account_number("0000002001-"));
    }

    #[test]
    fn off_by_one_digit() {
        assert!(verify_account_number("86011117947"));
        assert!(!verify_account_number("86011117948"));
        assert!(!verify_account_number("86011117937"));
    }
}
