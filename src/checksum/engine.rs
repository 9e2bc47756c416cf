//! Weighted-digit checksums (MOD10 and MOD11).
//!
//! Both families walk the digits from right to left, multiply each digit by a
//! cyclically repeated weight and sum the results. They differ only in how a
//! product is reduced before summing and how the total maps to a control digit.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::NumberError;

/// Symbol used for an undefined MOD11 control digit.
pub const REJECTION_SYMBOL: char = '-';

/// Default weights for MOD10 (Luhn).
pub const MOD10_WEIGHTS: &[u32] = &[2, 1];

/// Default weights for MOD11.
pub const MOD11_WEIGHTS: &[u32] = &[2, 3, 4, 5, 6, 7];

/// A computed control digit.
///
/// MOD11 has no digit for a weighted sum congruent to 10; that case is
/// [`ControlDigit::Rejected`] and displays as `-`. Build digits with
/// [`ControlDigit::digit`]; a `Digit` above 9 is not a control digit and is
/// treated like `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ControlDigitRepr")]
pub enum ControlDigit {
    /// A decimal digit 0-9.
    Digit(u8),
    /// No valid digit exists for this input.
    Rejected,
}

/// Unchecked wire form, validated on the way in.
#[derive(Deserialize)]
enum ControlDigitRepr {
    Digit(u8),
    Rejected,
}

impl TryFrom<ControlDigitRepr> for ControlDigit {
    type Error = NumberError;

    fn try_from(repr: ControlDigitRepr) -> Result<Self, Self::Error> {
        match repr {
            ControlDigitRepr::Digit(d) => {
                ControlDigit::digit(d).ok_or(NumberError::InvalidControlDigit)
            }
            ControlDigitRepr::Rejected => Ok(ControlDigit::Rejected),
        }
    }
}

impl ControlDigit {
    /// A numeric control digit, or `None` unless `d` is 0-9.
    pub fn digit(d: u8) -> Option<Self> {
        (d <= 9).then_some(ControlDigit::Digit(d))
    }

    /// The display character (`'0'..='9'` or `'-'`).
    pub fn as_char(self) -> char {
        match self {
            ControlDigit::Digit(d) => char::from_digit(d.into(), 10).unwrap_or(REJECTION_SYMBOL),
            ControlDigit::Rejected => REJECTION_SYMBOL,
        }
    }

    /// Whether this is a numeric digit 0-9.
    pub fn is_digit(self) -> bool {
        matches!(self, ControlDigit::Digit(d) if d <= 9)
    }
}

impl fmt::Display for ControlDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Multiply each digit by its weight (rightmost digit gets `weights[0]`),
/// pass the product through `transform` and sum.
///
/// Products are computed in `u64` and the sum saturates, so caller-supplied
/// weights never overflow. Non-digit characters are skipped; callers
/// validate first.
pub fn weighted_sum(value: &str, weights: &[u32], transform: fn(u64) -> u64) -> u64 {
    value
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .zip(weights.iter().cycle())
        .map(|(digit, &weight)| transform(u64::from(digit) * u64::from(weight)))
        .fold(0, u64::saturating_add)
}

/// Shared skeleton: weighted sum, then map the total to a control digit.
fn control_digit(
    value: &str,
    weights: &[u32],
    transform: fn(u64) -> u64,
    finish: fn(u64) -> ControlDigit,
) -> ControlDigit {
    finish(weighted_sum(value, weights, transform))
}

fn sum_of_digits(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

fn identity(n: u64) -> u64 {
    n
}

fn finish_mod10(total: u64) -> ControlDigit {
    ControlDigit::Digit(((10 - total % 10) % 10) as u8)
}

fn finish_mod11(total: u64) -> ControlDigit {
    match 11 - total % 11 {
        11 => ControlDigit::Digit(0),
        10 => ControlDigit::Rejected,
        d => ControlDigit::Digit(d as u8),
    }
}

/// MOD10 control digit: each product is reduced to the sum of its digits,
/// the result is `(10 - total mod 10) mod 10`. Never [`ControlDigit::Rejected`].
pub fn mod10_control_digit(value: &str, weights: &[u32]) -> ControlDigit {
    let digit = control_digit(value, weights, sum_of_digits, finish_mod10);
    tracing::trace!(value, %digit, "mod10 control digit");
    digit
}

/// MOD11 control digit: `11 - total mod 11`, where 11 maps to 0 and
/// 10 maps to [`ControlDigit::Rejected`].
pub fn mod11_control_digit(value: &str, weights: &[u32]) -> ControlDigit {
    let digit = control_digit(value, weights, identity, finish_mod11);
    tracing::trace!(value, %digit, "mod11 control digit");
    digit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_sum_reduction() {
        assert_eq!(sum_of_digits(0), 0);
        assert_eq!(sum_of_digits(9), 9);
        assert_eq!(sum_of_digits(18), 9);
        assert_eq!(sum_of_digits(63), 9);
    }

    #[test]
    fn weights_cycle_from_the_right() {
        // 7*2 + 6*1 + 5*2 = 30
        assert_eq!(weighted_sum("567", &[2, 1], identity), 30);
        // 14 -> 5, 6, 10 -> 1
        assert_eq!(weighted_sum("567", &[2, 1], sum_of_digits), 12);
    }

    #[test]
    fn leading_zeros_do_not_shift_positions() {
        assert_eq!(
            weighted_sum("00012", MOD11_WEIGHTS, identity),
            weighted_sum("12", MOD11_WEIGHTS, identity)
        );
    }

    #[test]
    fn long_inputs_do_not_lose_precision() {
        let value = "9".repeat(24);
        // 12 * (18 -> 9) + 12 * 9
        assert_eq!(weighted_sum(&value, MOD10_WEIGHTS, sum_of_digits), 216);
    }

    #[test]
    fn empty_weights_sum_to_zero() {
        assert_eq!(weighted_sum("123", &[], identity), 0);
    }

    #[test]
    fn mod10_known_values() {
        assert_eq!(mod10_control_digit("234567", MOD10_WEIGHTS), ControlDigit::Digit(6));
        assert_eq!(mod10_control_digit("0", MOD10_WEIGHTS), ControlDigit::Digit(0));
        assert_eq!(mod10_control_digit("7992739871", MOD10_WEIGHTS), ControlDigit::Digit(3));
    }

    #[test]
    fn mod11_known_values() {
        assert_eq!(mod11_control_digit("1234567890", MOD11_WEIGHTS), ControlDigit::Digit(3));
        assert_eq!(mod11_control_digit("31", MOD11_WEIGHTS), ControlDigit::Digit(0));
        assert_eq!(mod11_control_digit("40", MOD11_WEIGHTS), ControlDigit::Rejected);
    }

    #[test]
    fn huge_weights_do_not_overflow() {
        assert_eq!(weighted_sum("9", &[u32::MAX], identity), 9 * u64::from(u32::MAX));
        // 2^32 ≡ 4 (mod 11), so 9 * (2^32 - 1) ≡ 5
        assert_eq!(mod11_control_digit("9", &[u32::MAX]), ControlDigit::Digit(6));
        assert!(mod10_control_digit(&"9".repeat(24), &[u32::MAX]).is_digit());
    }

    #[test]
    fn checked_digit_constructor() {
        assert_eq!(ControlDigit::digit(0), Some(ControlDigit::Digit(0)));
        assert_eq!(ControlDigit::digit(9), Some(ControlDigit::Digit(9)));
        assert_eq!(ControlDigit::digit(10), None);
        assert_eq!(ControlDigit::digit(250), None);
    }

    #[test]
    fn out_of_range_digit_is_not_displayed_as_a_digit() {
        assert_eq!(ControlDigit::Digit(10).to_string(), "-");
        assert_eq!(ControlDigit::Digit(250).as_char(), REJECTION_SYMBOL);
        assert!(!ControlDigit::Digit(10).is_digit());
        assert!(ControlDigit::Digit(9).is_digit());
    }

    #[test]
    fn display_uses_rejection_symbol() {
        assert_eq!(ControlDigit::Digit(4).to_string(), "4");
        assert_eq!(ControlDigit::Rejected.to_string(), "-");
        assert!(!ControlDigit::Rejected.is_digit());
    }
}
