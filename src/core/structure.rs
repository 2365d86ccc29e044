//! Compiler for the compact IBAN structure notation.
//!
//! A structure pattern is the 2-letter country code followed by tokens
//! `<count>!<class>`, e.g. `GB2!n4!a6!n8!n`:
//!
//! | Class | Matches |
//! |-------|---------|
//! | `n` | ASCII digit |
//! | `a` | uppercase ASCII letter |
//! | `c` | uppercase ASCII letter or digit |
//!
//! The first token always describes the 2 check digits. Compiling a
//! pattern yields a [`Structure`], which is the matcher the validator
//! runs against normalized input.

use std::fmt;

use serde::Serialize;

use super::error::PatternError;

/// Character class of a structure segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    /// `n`: `0-9`.
    Digit,
    /// `a`: `A-Z`.
    Upper,
    /// `c`: `A-Z` or `0-9`.
    Alphanumeric,
}

impl CharClass {
    /// Parse the single-letter class code used in structure patterns.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'n' => Some(Self::Digit),
            'a' => Some(Self::Upper),
            'c' => Some(Self::Alphanumeric),
            _ => None,
        }
    }

    /// The single-letter class code.
    pub fn code(self) -> char {
        match self {
            Self::Digit => 'n',
            Self::Upper => 'a',
            Self::Alphanumeric => 'c',
        }
    }

    /// Whether `b` belongs to this class.
    pub fn accepts(self, b: u8) -> bool {
        match self {
            Self::Digit => b.is_ascii_digit(),
            Self::Upper => b.is_ascii_uppercase(),
            Self::Alphanumeric => b.is_ascii_digit() || b.is_ascii_uppercase(),
        }
    }

    fn regex_class(self) -> &'static str {
        match self {
            Self::Digit => "[0-9]",
            Self::Upper => "[A-Z]",
            Self::Alphanumeric => "[A-Z0-9]",
        }
    }
}

/// A fixed-width run of one character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Segment {
    /// Number of characters in the run.
    pub count: usize,
    /// Allowed characters.
    pub class: CharClass,
}

/// A compiled structure pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Structure {
    country: String,
    segments: Vec<Segment>,
}

impl Structure {
    /// Compile a pattern such as `DE2!n8!n10!n`.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let bytes = pattern.as_bytes();
        if bytes.len() < 2 || !bytes[..2].iter().all(u8::is_ascii_uppercase) {
            return Err(PatternError::MissingCountryPrefix(pattern.into()));
        }

        let mut segments = Vec::new();
        let mut pos = 2;
        while pos < bytes.len() {
            let start = pos;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            // need digits, '!', and a class letter
            if pos == start || pos + 1 >= bytes.len() || bytes[pos] != b'!' {
                return Err(PatternError::MalformedToken {
                    pattern: pattern.into(),
                    offset: start,
                });
            }
            let count: usize =
                pattern[start..pos]
                    .parse()
                    .map_err(|_| PatternError::MalformedToken {
                        pattern: pattern.into(),
                        offset: start,
                    })?;
            if count == 0 {
                return Err(PatternError::ZeroCount(pattern.into()));
            }
            let code = char::from(bytes[pos + 1]);
            let class = CharClass::from_code(code).ok_or_else(|| PatternError::UnknownClass {
                pattern: pattern.into(),
                class: code,
            })?;
            segments.push(Segment { count, class });
            pos += 2;
        }

        if segments.is_empty() {
            return Err(PatternError::Empty(pattern.into()));
        }

        Ok(Self {
            country: pattern[..2].to_string(),
            segments,
        })
    }

    /// The literal country prefix.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Segments following the country prefix, check digits first.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Total IBAN length described, including the country prefix.
    pub fn len(&self) -> usize {
        self.segments
            .iter()
            .fold(self.country.len(), |acc, s| acc.saturating_add(s.count))
    }

    /// Always false: a compiled structure has at least the country prefix.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `candidate` (normalized, compact) follows this layout exactly.
    pub fn matches(&self, candidate: &str) -> bool {
        let bytes = candidate.as_bytes();
        if bytes.len() != self.len() || !bytes.starts_with(self.country.as_bytes()) {
            return false;
        }
        let mut rest = &bytes[self.country.len()..];
        for seg in &self.segments {
            let (run, tail) = rest.split_at(seg.count);
            if !run.iter().all(|&b| seg.class.accepts(b)) {
                return false;
            }
            rest = tail;
        }
        true
    }

    /// Equivalent anchored regular expression, e.g. `^GB[0-9]{2}[A-Z]{4}...$`.
    pub fn regex_source(&self) -> String {
        let mut out = format!("^{}", self.country);
        for seg in &self.segments {
            out.push_str(seg.class.regex_class());
            out.push_str(&format!("{{{}}}", seg.count));
        }
        out.push('$');
        out
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.country)?;
        for seg in &self.segments {
            write!(f, "{}!{}", seg.count, seg.class.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Structure {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
