//! Checksum engine, input validation and errors.
//!
//! Everything the identifier modules build on. The engine works on digit
//! strings directly and never converts them to integers, so leading zeros
//! and inputs longer than any integer type are handled exactly.

mod engine;
mod error;
mod validation;

pub use engine::{
    ControlDigit, MOD10_WEIGHTS, MOD11_WEIGHTS, REJECTION_SYMBOL, mod10_control_digit,
    mod11_control_digit, weighted_sum,
};
pub use error::*;
pub use validation::*;
