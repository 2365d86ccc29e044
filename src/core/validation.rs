use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::checksum::mod97_check;
use super::countries::{self, CountryRule, MAX_IBAN_LENGTH, MIN_IBAN_LENGTH};
use super::error::ValidationError;
use super::format::{electronic_format, format_iban};

/// 2 letters, 2 digits, then at least one alphanumeric. ASCII classes only.
static COARSE_FORMAT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}[0-9]{2}[A-Z0-9]+$").ok());

/// Result of validating one IBAN candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    /// True iff `errors` is empty.
    pub is_valid: bool,
    /// The input with whitespace removed and letters uppercased.
    pub normalized: String,
    /// The registry entry for the input's country code, when recognized.
    ///
    /// Set as soon as the code is found, even if later checks fail.
    pub country: Option<&'static CountryRule>,
    /// Every failed check, in pipeline order.
    pub errors: Vec<ValidationError>,
    /// Grouped display form; only present when valid.
    pub formatted: Option<String>,
}

impl ValidationOutcome {
    /// Human-readable message for each error, in order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Whether an error of the given kind was reported.
    pub fn has_error(&self, kind: &str) -> bool {
        self.errors.iter().any(|e| e.kind() == kind)
    }
}

/// Validate an IBAN candidate against its country's rules and the
/// MOD-97-10 checksum.
///
/// Whitespace anywhere in `raw` is ignored and letters are uppercased
/// before checking. All failing checks are reported, with one exception:
/// when the country code is not in the registry, the country-specific
/// checks (exact length, structure, checksum) are skipped.
///
/// This never panics and never returns an error; problems are data in
/// [`ValidationOutcome::errors`].
///
/// ```
/// use ibankit::{validate, ValidationError};
///
/// let outcome = validate("ZZ1234567890123");
/// assert!(!outcome.is_valid);
/// assert!(outcome.country.is_none());
/// assert_eq!(
///     outcome.errors,
///     vec![ValidationError::UnsupportedCountry { code: "ZZ".into() }]
/// );
/// ```
pub fn validate(raw: &str) -> ValidationOutcome {
    let normalized = electronic_format(raw);
    let mut errors = Vec::new();

    if !matches_coarse_format(&normalized) {
        tracing::trace!(input = %normalized, "coarse format check failed");
        errors.push(ValidationError::Format);
    }

    let len = normalized.chars().count();
    if !(MIN_IBAN_LENGTH..=MAX_IBAN_LENGTH).contains(&len) {
        tracing::trace!(input = %normalized, len, "length out of bounds");
        errors.push(ValidationError::LengthBounds { actual: len });
    }

    let code: String = normalized.chars().take(2).collect();
    let Some(country) = countries::lookup(&code) else {
        tracing::debug!(input = %normalized, code = %code, "unsupported country code");
        errors.push(ValidationError::UnsupportedCountry { code });
        return ValidationOutcome {
            is_valid: false,
            normalized,
            country: None,
            errors,
            formatted: None,
        };
    };

    if len != country.length {
        tracing::trace!(input = %normalized, len, expected = country.length, "country length mismatch");
        errors.push(ValidationError::CountryLength {
            country: country.name,
            expected: country.length,
            actual: len,
        });
    }

    if !country.matches(&normalized) {
        tracing::trace!(input = %normalized, structure = country.structure, "structure mismatch");
        errors.push(ValidationError::Structure {
            country: country.name,
        });
    }

    match mod97_check(&normalized) {
        Ok(1) => {}
        Ok(remainder) => {
            tracing::trace!(input = %normalized, remainder, "checksum mismatch");
            errors.push(ValidationError::ChecksumInvalid);
        }
        Err(e) => {
            tracing::debug!(input = %normalized, error = %e, "checksum unavailable");
            errors.push(ValidationError::ChecksumUnavailable {
                reason: e.to_string(),
            });
        }
    }

    let is_valid = errors.is_empty();
    tracing::debug!(
        input = %normalized,
        country = country.code,
        is_valid,
        errors = errors.len(),
        "validated IBAN"
    );

    ValidationOutcome {
        is_valid,
        formatted: is_valid.then(|| format_iban(&normalized)),
        normalized,
        country: Some(country),
        errors,
    }
}

/// Shorthand for `validate(raw).is_valid`.
pub fn is_valid(raw: &str) -> bool {
    validate(raw).is_valid
}

fn matches_coarse_format(normalized: &str) -> bool {
    COARSE_FORMAT
        .as_ref()
        .is_some_and(|re| re.is_match(normalized))
}
