use serde::Serialize;
use thiserror::Error;

/// A single reason an IBAN failed validation.
///
/// The `Display` output is the human-readable message shown to users.
/// Variants are listed in the order the validator checks them.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ValidationError {
    /// Input is not 2 letters, 2 digits, then alphanumeric characters.
    #[error(
        "IBAN must start with 2 letters, followed by 2 digits, then alphanumeric characters"
    )]
    Format,

    /// Overall length is outside the range any country uses.
    #[error("IBAN length must be between {min} and {max} characters", min = crate::core::MIN_IBAN_LENGTH, max = crate::core::MAX_IBAN_LENGTH)]
    LengthBounds {
        /// Length of the normalized input.
        actual: usize,
    },

    /// The 2-letter prefix is not in the registry.
    #[error("Country code '{code}' is not supported")]
    UnsupportedCountry {
        /// The prefix taken from the input (may be shorter than 2 characters).
        code: String,
    },

    /// Length differs from the fixed length of the matched country.
    #[error("IBAN for {country} must be exactly {expected} characters long")]
    CountryLength {
        /// Display name of the matched country.
        country: &'static str,
        /// The country's IBAN length.
        expected: usize,
        /// Length of the normalized input.
        actual: usize,
    },

    /// Character classes do not follow the country's layout.
    #[error("IBAN format is incorrect for {country}")]
    Structure {
        /// Display name of the matched country.
        country: &'static str,
    },

    /// MOD-97-10 remainder is not 1.
    #[error("IBAN check digits are invalid")]
    ChecksumInvalid,

    /// The checksum could not be computed at all.
    #[error("Unable to validate check digits")]
    ChecksumUnavailable {
        /// Why the checksum engine refused the input.
        reason: String,
    },
}

impl ValidationError {
    /// Stable snake_case identifier for the error kind (e.g. "checksum_invalid").
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Format => "format",
            Self::LengthBounds { .. } => "length_bounds",
            Self::UnsupportedCountry { .. } => "unsupported_country",
            Self::CountryLength { .. } => "country_length",
            Self::Structure { .. } => "structure",
            Self::ChecksumInvalid => "checksum_invalid",
            Self::ChecksumUnavailable { .. } => "checksum_unavailable",
        }
    }
}

/// Errors from the MOD-97-10 engine when its input precondition is violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ChecksumError {
    /// Fewer than the 4 characters of country code and check digits.
    #[error("input too short: need at least 4 characters, got {0}")]
    TooShort(usize),

    /// A character outside `0-9` / `A-Z`.
    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Zero-based character position in the input.
        position: usize,
    },

    /// Country code passed to check-digit computation is not 2 letters.
    #[error("country code must be 2 uppercase letters, got '{0}'")]
    InvalidCountryCode(String),
}

/// Errors from compiling a structure pattern such as `DE2!n8!n10!n`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PatternError {
    /// The pattern does not begin with a 2-letter country code.
    #[error("pattern '{0}' must start with a 2-letter country code")]
    MissingCountryPrefix(String),

    /// A token is not of the form `<count>!<class>`.
    #[error("malformed token at offset {offset} in pattern '{pattern}'")]
    MalformedToken {
        /// The full pattern.
        pattern: String,
        /// Byte offset where parsing failed.
        offset: usize,
    },

    /// The character class letter is not `n`, `a` or `c`.
    #[error("unknown character class '{class}' in pattern '{pattern}'")]
    UnknownClass {
        /// The full pattern.
        pattern: String,
        /// The unrecognized class letter.
        class: char,
    },

    /// A token has a count of zero.
    #[error("zero-length token in pattern '{0}'")]
    ZeroCount(String),

    /// The pattern has no tokens after the country code.
    #[error("pattern '{0}' has no segments")]
    Empty(String),
}

/// Errors that can occur when constructing an [`Iban`](super::Iban).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IbanError {
    /// One or more validation rules failed.
    #[error("invalid IBAN: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
}

impl IbanError {
    /// The validation errors that caused the rejection.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::Invalid(errors) => errors,
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            ValidationError::LengthBounds { actual: 3 }.to_string(),
            "IBAN length must be between 15 and 34 characters"
        );
        assert_eq!(
            ValidationError::CountryLength {
                country: "Germany",
                expected: 22,
                actual: 21,
            }
            .to_string(),
            "IBAN for Germany must be exactly 22 characters long"
        );
        assert_eq!(
            ValidationError::UnsupportedCountry { code: "ZZ".into() }.to_string(),
            "Country code 'ZZ' is not supported"
        );
    }

    #[test]
    fn iban_error_joins_messages() {
        let err = IbanError::Invalid(vec![
            ValidationError::Structure { country: "Italy" },
            ValidationError::ChecksumInvalid,
        ]);
        assert_eq!(
            err.to_string(),
            "invalid IBAN: IBAN format is incorrect for Italy; IBAN check digits are invalid"
        );
        assert_eq!(err.errors().len(), 2);
    }

    #[test]
    fn kinds_are_stable() {
        assert_eq!(ValidationError::Format.kind(), "format");
        assert_eq!(
            ValidationError::ChecksumUnavailable {
                reason: String::new()
            }
            .kind(),
            "checksum_unavailable"
        );
    }
}
