//! # norsk-nummer
//!
//! Make and verify official Norwegian numbers: KID (payment reference),
//! fødselsnummer (birth number), kontonummer (bank account number) and
//! organisasjonsnummer (organisation number).
//!
//! Every number is a string of ASCII digits with one or two trailing control
//! digits computed by a weighted MOD10 or MOD11 checksum. Values stay strings
//! throughout, so leading zeros and 24-digit KIDs are handled exactly.
//!
//! ## Quick Start
//!
//! ```rust
//! use norsk_nummer::*;
//!
//! assert_eq!(make_kid_number("234567", KidMode::Mod10).unwrap(), "2345676");
//! assert_eq!(make_account_number("1234567890").unwrap(), "12345678903");
//! assert_eq!(make_birth_number("311299567").unwrap(), "31129956715");
//!
//! assert!(verify_organisation_number("123456785"));
//! assert!(!verify_organisation_number("123456786"));
//!
//! let err = make_kid_number("abc", KidMode::Mod10).unwrap_err();
//! assert_eq!(err.to_string(), "Value \"abc\" was not an integer.");
//! ```
//!
//! `make_*` functions return a [`Result`](checksum::Result); `verify_*`
//! functions return a plain `bool` and never fail, whatever the input.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `kid` | KID numbers, MOD10 and MOD11 |
//! | `birth-number` | Fødselsnummer |
//! | `account-number` | Kontonummer |
//! | `organisation-number` | Organisasjonsnummer |
//! | `all` (default) | Everything, plus [`NumberKind`] |
//!
//! The checksum engine in [`checksum`] is always available.
//!
//! ## Logging
//!
//! Rejections are reported through [`tracing`] at `debug` level and computed
//! control digits at `trace` level. No subscriber is installed by this crate.

pub mod checksum;

#[cfg(feature = "kid")]
pub mod kid;

#[cfg(feature = "birth-number")]
pub mod birth;

#[cfg(feature = "account-number")]
pub mod account;

#[cfg(feature = "organisation-number")]
pub mod organisation;

#[cfg(any(
    feature = "birth-number",
    feature = "account-number",
    feature = "organisation-number"
))]
pub mod format;

#[cfg(all(
    feature = "kid",
    feature = "birth-number",
    feature = "account-number",
    feature = "organisation-number"
))]
mod kind;

// Re-export the public surface at crate root for convenience
pub use crate::checksum::{ControlDigit, NumberError};

#[cfg(feature = "kid")]
pub use kid::{
    KidMode, make_kid_number, make_kid_number_named, verify_kid_number, verify_kid_number_named,
};

#[cfg(feature = "birth-number")]
pub use birth::{make_birth_number, verify_birth_number};

#[cfg(feature = "account-number")]
pub use account::{make_account_number, verify_account_number};

#[cfg(feature = "organisation-number")]
pub use organisation::{make_organisation_number, verify_organisation_number};

#[cfg(feature = "account-number")]
pub use format::format_account_number;
#[cfg(feature = "birth-number")]
pub use format::format_birth_number;
#[cfg(feature = "organisation-number")]
pub use format::format_organisation_number;

#[cfg(all(
    feature = "kid",
    feature = "birth-number",
    feature = "account-number",
    feature = "organisation-number"
))]
pub use kind::NumberKind;
