//! Validated IBAN newtype.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use super::countries::CountryRule;
use super::error::IbanError;
use super::format::format_iban;
use super::validation::validate;

/// An IBAN that passed every check, stored in compact electronic form.
///
/// Construct with [`Iban::parse`], `str::parse` or `TryFrom<&str>`. Once
/// constructed the value cannot change. Deserialization re-runs validation
/// so invalid data cannot enter through untrusted input.
///
/// `Display` prints the grouped form; `Deref<Target = str>` and
/// serialization use the compact form.
#[derive(Debug, Clone)]
pub struct Iban {
    value: String,
    country: &'static CountryRule,
}

impl Iban {
    /// Validate and normalize `raw`.
    pub fn parse(raw: &str) -> Result<Self, IbanError> {
        let outcome = validate(raw);
        match outcome.country {
            Some(country) if outcome.is_valid => Ok(Self {
                value: outcome.normalized,
                country,
            }),
            _ => Err(IbanError::Invalid(outcome.errors)),
        }
    }

    /// Compact form, e.g. "GB33BUKB20201555555555".
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Registry entry of the issuing country.
    pub fn country(&self) -> &'static CountryRule {
        self.country
    }

    /// ISO 3166-1 alpha-2 country code.
    pub fn country_code(&self) -> &str {
        &self.value[..2]
    }

    /// The 2 check digits.
    pub fn check_digits(&self) -> &str {
        &self.value[2..4]
    }

    /// Basic Bank Account Number: everything after the check digits.
    pub fn bban(&self) -> &str {
        &self.value[4..]
    }

    /// Whether the issuing country is in the SEPA area.
    pub fn is_sepa(&self) -> bool {
        self.country.sepa
    }

    /// Grouped display form, e.g. "GB33 BUKB 2020 1555 5555 55".
    pub fn formatted(&self) -> String {
        format_iban(&self.value)
    }

    /// Consume into the compact string.
    pub fn into_string(self) -> String {
        self.value
    }
}

impl PartialEq for Iban {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Iban {}

impl Hash for Iban {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for Iban {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Iban {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl Deref for Iban {
    type Target = str;
    fn deref(&self) -> &str {
        &self.value
    }
}

impl AsRef<str> for Iban {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Iban {
    type Err = IbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Iban {
    type Error = IbanError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<Iban> for String {
    fn from(iban: Iban) -> Self {
        iban.value
    }
}

impl Serialize for Iban {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for Iban {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}
