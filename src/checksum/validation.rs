//! Input shape checks shared by every identifier.

use super::engine::ControlDigit;
use super::error::{NumberError, Result};

/// Check that `value` is between `min` and `max` characters long, inclusive.
pub fn validate_length(value: &str, min: usize, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(NumberError::Length {
            value: value.into(),
            min,
            max,
        });
    }
    Ok(())
}

/// Check that `value` is a non-empty string of ASCII digits.
pub fn validate_integer(value: &str) -> Result<()> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumberError::NotAnInteger {
            value: value.into(),
        });
    }
    Ok(())
}

/// Check a freshly computed control digit; identifiers other than KID
/// cannot carry the rejection symbol.
pub fn validate_control_digit(digit: ControlDigit) -> Result<u8> {
    match digit {
        ControlDigit::Digit(d) if d <= 9 => Ok(d),
        _ => {
            tracing::debug!(%digit, "rejected control digit");
            Err(NumberError::InvalidControlDigit)
        }
    }
}

/// Length first, then content.
pub(crate) fn validate_base(value: &str, min: usize, max: usize) -> Result<()> {
    validate_length(value, min, max)
        .and_then(|()| validate_integer(value))
        .inspect_err(|err| tracing::debug!(value, %err, "rejected input"))
}

/// Strip the trailing `count` characters, or `None` if there are not enough.
fn split_base(value: &str, count: usize) -> Option<&str> {
    if count == 0 {
        return Some(value);
    }
    let (cut, _) = value.char_indices().rev().nth(count - 1)?;
    Some(&value[..cut])
}

/// Verify by rebuilding from the candidate's base and comparing.
///
/// Any error from `make` counts as a failed verification.
pub(crate) fn verify_by_rebuild(
    value: &str,
    control_digits: usize,
    make: impl FnOnce(&str) -> Result<String>,
) -> bool {
    let Some(base) = split_base(value, control_digits) else {
        tracing::debug!(value, "too short to carry control digits");
        return false;
    };
    match make(base) {
        Ok(rebuilt) => rebuilt == value,
        Err(err) => {
            tracing::debug!(value, %err, "verification rejected");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_base_by_characters() {
        assert_eq!(split_base("12345", 1), Some("1234"));
        assert_eq!(split_base("12345", 2), Some("123"));
        assert_eq!(split_base("1", 1), Some(""));
        assert_eq!(split_base("", 1), None);
        assert_eq!(split_base("1", 2), None);
        assert_eq!(split_base("12ø", 1), Some("12"));
        assert_eq!(split_base("øø", 1), Some("ø"));
    }

    #[test]
    fn rebuild_errors_collapse_to_false() {
        assert!(!verify_by_rebuild("123", 1, |_| Err(NumberError::InvalidControlDigit)));
        assert!(verify_by_rebuild("123", 1, |base| Ok(format!("{base}3"))));
        assert!(!verify_by_rebuild("123", 1, |base| Ok(format!("{base}4"))));
    }

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(validate_length("1", 1, 24).is_ok());
        assert!(validate_length(&"1".repeat(24), 1, 24).is_ok());
        assert!(validate_length("", 1, 24).is_err());
        assert!(validate_length(&"1".repeat(25), 1, 24).is_err());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(validate_length("ææ", 2, 2).is_ok());
    }

    #[test]
    fn integer_accepts_leading_zeros() {
        assert!(validate_integer("000").is_ok());
    }

    #[test]
    fn integer_rejects_empty_sign_and_letters() {
        assert!(validate_integer("").is_err());
        assert!(validate_integer("-1").is_err());
        assert!(validate_integer("+1").is_err());
        assert!(validate_integer("12a").is_err());
        assert!(validate_integer(" 12").is_err());
        assert!(validate_integer("١٢").is_err());
    }

    #[test]
    fn control_digit_rejection() {
        assert_eq!(validate_control_digit(ControlDigit::Digit(7)), Ok(7));
        assert_eq!(
            validate_control_digit(ControlDigit::Rejected),
            Err(NumberError::InvalidControlDigit)
        );
        assert_eq!(
            validate_control_digit(ControlDigit::Digit(10)),
            Err(NumberError::InvalidControlDigit)
        );
    }

    #[test]
    fn base_checks_length_before_content() {
        assert!(matches!(
            validate_base("abc", 9, 9),
            Err(NumberError::Length { .. })
        ));
        assert!(matches!(
            validate_base("abcdefghi", 9, 9),
            Err(NumberError::NotAnInteger { .. })
        ));
    }
}
