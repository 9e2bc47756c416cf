use thiserror::Error;

/// Errors that can occur when making a Norwegian number.
///
/// The `verify_*` functions never return these; any error collapses to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NumberError {
    /// The input length is outside the accepted inclusive range.
    #[error(
        "Invalid value length for \"{value}\". Must be from {min} to {max} characters, inclusive."
    )]
    Length {
        /// The rejected input.
        value: String,
        /// Shortest accepted length.
        min: usize,
        /// Longest accepted length.
        max: usize,
    },

    /// The input contains something other than ASCII digits, or is empty.
    #[error("Value \"{value}\" was not an integer.")]
    NotAnInteger {
        /// The rejected input.
        value: String,
    },

    /// A computed MOD11 control digit came out as the rejection symbol `-`.
    #[error("Rejected due to invalid control digit.")]
    InvalidControlDigit,

    /// The KID mode name is neither `MOD10` nor `MOD11`.
    #[error("Invalid mode \"{mode}\".")]
    InvalidMode {
        /// The mode name as given by the caller.
        mode: String,
    },
}

impl NumberError {
    /// Whether this is a format error: non-digit input or a non-numeric
    /// computed control digit.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            NumberError::NotAnInteger { .. } | NumberError::InvalidControlDigit
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NumberError>;
