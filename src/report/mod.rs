//! JSON rendering for consumers outside Rust.
//!
//! A front end can call [`validate`](crate::validate) and hand the
//! rendered outcome to its own presentation layer. Error entries carry a
//! machine-readable `kind`, their fields, and the human-readable `message`.
//!
//! # Example
//!
//! ```
//! use ibankit::report::outcome_to_json;
//!
//! let json = outcome_to_json(&ibankit::validate("GB34BUKB20201555555555")).unwrap();
//! assert!(json.contains("\"kind\":\"checksum_invalid\""));
//! ```

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::core::{CountryRule, ValidationError, ValidationOutcome};

/// Errors from rendering a report.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    /// serde_json failed to encode the value.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct ErrorEntry<'a> {
    #[serde(flatten)]
    error: &'a ValidationError,
    message: String,
}

#[derive(Serialize)]
struct OutcomeReport<'a> {
    is_valid: bool,
    normalized: &'a str,
    country: Option<&'a CountryRule>,
    errors: Vec<ErrorEntry<'a>>,
    formatted: Option<&'a str>,
}

#[derive(Serialize)]
struct CountryEntry<'a> {
    #[serde(flatten)]
    rule: &'a CountryRule,
    formatted_example: String,
}

/// Render an outcome as a compact JSON object.
pub fn outcome_to_json(outcome: &ValidationOutcome) -> Result<String, ReportError> {
    Ok(serde_json::to_string(&outcome_report(outcome))?)
}

/// Render an outcome as a [`serde_json::Value`].
pub fn outcome_to_value(outcome: &ValidationOutcome) -> Result<Value, ReportError> {
    Ok(serde_json::to_value(outcome_report(outcome))?)
}

/// Render registry entries as a pretty-printed JSON array.
///
/// Each entry adds `formatted_example`, the example in grouped form.
pub fn countries_to_json(rules: &[CountryRule]) -> Result<String, ReportError> {
    let entries: Vec<CountryEntry<'_>> = rules
        .iter()
        .map(|rule| CountryEntry {
            rule,
            formatted_example: rule.formatted_example(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

fn outcome_report(outcome: &ValidationOutcome) -> OutcomeReport<'_> {
    OutcomeReport {
        is_valid: outcome.is_valid,
        normalized: &outcome.normalized,
        country: outcome.country,
        errors: outcome
            .errors
            .iter()
            .map(|error| ErrorEntry {
                error,
                message: error.to_string(),
            })
            .collect(),
        formatted: outcome.formatted.as_deref(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{all, lookup, validate};

    #[test]
    fn valid_outcome() {
        let value = outcome_to_value(&validate("GB33BUKB20201555555555")).unwrap();
        assert_eq!(value["is_valid"], true);
        assert_eq!(value["country"]["code"], "GB");
        assert_eq!(value["country"]["sepa"], true);
        assert_eq!(value["formatted"], "GB33 BUKB 2020 1555 5555 55");
        assert_eq!(value["errors"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn errors_carry_kind_and_message() {
        let value = outcome_to_value(&validate("DE7551210800124512619")).unwrap();
        let errors = value["errors"].as_array().unwrap();
        assert_eq!(errors[0]["kind"], "country_length");
        assert_eq!(errors[0]["expected"], 22);
        assert_eq!(errors[0]["actual"], 21);
        assert_eq!(
            errors[0]["message"],
            "IBAN for Germany must be exactly 22 characters long"
        );
        assert_eq!(value["formatted"], Value::Null);
    }

    #[test]
    fn unsupported_country_has_null_country() {
        let value = outcome_to_value(&validate("ZZ1234567890123")).unwrap();
        assert_eq!(value["country"], Value::Null);
        assert_eq!(value["errors"][0]["code"], "ZZ");
    }

    #[test]
    fn country_listing() {
        let json = countries_to_json(all()).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), all().len());
        assert_eq!(entries[0]["code"], "AD");
        assert_eq!(entries[0]["formatted_example"], "AD14 0008 0001 0012 3456 7890");
    }

    #[test]
    fn country_listing_excludes_matcher() {
        let rule = lookup("GB").unwrap();
        let json = countries_to_json(std::slice::from_ref(rule)).unwrap();
        assert!(!json.contains("matcher"));
        assert!(json.contains("\"structure\": \"GB2!n4!a6!n8!n\""));
    }
}
