//! The four identifier kinds as one enum, for callers that pick the kind at
//! runtime (e.g. from a form field or a config file).

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::account::{ACCOUNT_NUMBER_BASE_LENGTH, make_account_number, verify_account_number};
use crate::birth::{BIRTH_NUMBER_BASE_LENGTH, make_birth_number, verify_birth_number};
use crate::checksum::Result;
use crate::kid::{KID_MAX_LENGTH, KID_MIN_LENGTH, KidMode, make_kid_number, verify_kid_number};
use crate::organisation::{
    ORGANISATION_NUMBER_BASE_LENGTH, make_organisation_number, verify_organisation_number,
};

/// A Norwegian number kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumberKind {
    /// KID payment reference with the given checksum.
    Kid(KidMode),
    /// Fødselsnummer.
    BirthNumber,
    /// Kontonummer.
    AccountNumber,
    /// Organisasjonsnummer.
    OrganisationNumber,
}

impl NumberKind {
    /// Every kind, with KID in its default mode.
    pub const ALL: [NumberKind; 4] = [
        NumberKind::Kid(KidMode::Mod10),
        NumberKind::BirthNumber,
        NumberKind::AccountNumber,
        NumberKind::OrganisationNumber,
    ];

    /// Accepted length of the base value, inclusive.
    pub fn base_length(self) -> RangeInclusive<usize> {
        match self {
            NumberKind::Kid(_) => KID_MIN_LENGTH..=KID_MAX_LENGTH,
            NumberKind::BirthNumber => BIRTH_NUMBER_BASE_LENGTH..=BIRTH_NUMBER_BASE_LENGTH,
            NumberKind::AccountNumber => ACCOUNT_NUMBER_BASE_LENGTH..=ACCOUNT_NUMBER_BASE_LENGTH,
            NumberKind::OrganisationNumber => {
                ORGANISATION_NUMBER_BASE_LENGTH..=ORGANISATION_NUMBER_BASE_LENGTH
            }
        }
    }

    /// Number of control digits appended to the base.
    pub fn control_digits(self) -> usize {
        match self {
            NumberKind::BirthNumber => 2,
            _ => 1,
        }
    }

    /// Make a number of this kind from its base value.
    pub fn make(self, value: &str) -> Result<String> {
        match self {
            NumberKind::Kid(mode) => make_kid_number(value, mode),
            NumberKind::BirthNumber => make_birth_number(value),
            NumberKind::AccountNumber => make_account_number(value),
            NumberKind::OrganisationNumber => make_organisation_number(value),
        }
    }

    /// Verify a complete number of this kind.
    pub fn verify(self, value: &str) -> bool {
        match self {
            NumberKind::Kid(mode) => verify_kid_number(value, mode),
            NumberKind::BirthNumber => verify_birth_number(value),
            NumberKind::AccountNumber => verify_account_number(value),
            NumberKind::OrganisationNumber => verify_organisation_number(value),
        }
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberKind::Kid(mode) => write!(f, "KID ({mode})"),
            NumberKind::BirthNumber => f.write_str("birth number"),
            NumberKind::AccountNumber => f.write_str("account number"),
            NumberKind::OrganisationNumber => f.write_str("organisation number"),
        }
    }
}
