//! ISO 7064 MOD-97-10 checksum as used by IBAN.
//!
//! The country code and check digits are moved to the end, every letter is
//! expanded to two decimal digits (`A` = 10 ... `Z` = 35), and the
//! resulting numeral is reduced modulo 97. The numeral can reach 68 digits,
//! so it is never materialized: digits stream into a buffer of at most 9
//! digits which is folded back to its remainder whenever it fills up.
//! A valid IBAN leaves remainder 1.

use super::error::ChecksumError;

/// Digits buffered before folding. 9 decimal digits always fit in a u64
/// with room for the next append.
const FOLD_AT: u32 = 9;

/// Streaming remainder of a decimal numeral modulo 97.
#[derive(Debug, Default)]
struct Mod97 {
    value: u64,
    digits: u32,
}

impl Mod97 {
    fn push_digit(&mut self, digit: u8) {
        self.value = self.value * 10 + u64::from(digit);
        self.digits += 1;
        if self.digits >= FOLD_AT {
            self.value %= 97;
            self.digits = if self.value >= 10 { 2 } else { 1 };
        }
    }

    fn push_char(&mut self, b: u8) {
        match b {
            b'0'..=b'9' => self.push_digit(b - b'0'),
            _ => {
                let value = b - b'A' + 10;
                self.push_digit(value / 10);
                self.push_digit(value % 10);
            }
        }
    }

    fn finish(self) -> u8 {
        // < 97, fits
        (self.value % 97) as u8
    }
}

/// Compute the MOD-97-10 remainder of a normalized IBAN.
///
/// `iban` must be compact and uppercase with at least 4 characters
/// (country code and check digits). The result is in `0..=96`; a valid
/// IBAN yields 1.
///
/// # Examples
///
/// ```
/// use ibankit::mod97_check;
///
/// assert_eq!(mod97_check("GB33BUKB20201555555555"), Ok(1));
/// assert_ne!(mod97_check("GB34BUKB20201555555555"), Ok(1));
/// assert!(mod97_check("GB3").is_err());
/// ```
pub fn mod97_check(iban: &str) -> Result<u8, ChecksumError> {
    let count = iban.chars().count();
    if count < 4 {
        return Err(ChecksumError::TooShort(count));
    }
    if let Some((position, ch)) = iban
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_digit() && !c.is_ascii_uppercase())
    {
        return Err(ChecksumError::InvalidCharacter { ch, position });
    }

    // ASCII only from here on, so byte offsets equal char offsets.
    let bytes = iban.as_bytes();
    let mut acc = Mod97::default();
    for &b in bytes[4..].iter().chain(&bytes[..4]) {
        acc.push_char(b);
    }
    Ok(acc.finish())
}

/// Compute the 2 check digits for a country code and BBAN.
///
/// The BBAN is the country-specific remainder of the IBAN after the
/// country code and check digits, e.g. `"BUKB20201555555555"`.
///
/// ```
/// use ibankit::compute_check_digits;
///
/// assert_eq!(compute_check_digits("GB", "BUKB20201555555555").unwrap(), "33");
/// ```
pub fn compute_check_digits(country: &str, bban: &str) -> Result<String, ChecksumError> {
    if country.len() != 2 || !country.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(ChecksumError::InvalidCountryCode(country.into()));
    }
    let remainder = mod97_check(&format!("{country}00{bban}"))?;
    Ok(format!("{:02}", 98 - remainder))
}
