//! Display formatting and registry search helpers.

use super::countries::{self, CountryRule};

/// Characters per display group.
const GROUP: usize = 4;

/// Compact electronic form: whitespace removed, uppercased.
///
/// This is the form the validator checks and the form to store.
pub fn electronic_format(iban: &str) -> String {
    iban.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Canonical grouped display form: groups of 4 separated by single spaces.
///
/// Existing whitespace is dropped first, so the result is the same for the
/// compact and any spaced rendering of the same IBAN. Case is preserved.
///
/// ```
/// use ibankit::format_iban;
///
/// assert_eq!(format_iban("GB33BUKB20201555555555"), "GB33 BUKB 2020 1555 5555 55");
/// assert_eq!(format_iban("GB33 BUKB2020 15555555 55"), "GB33 BUKB 2020 1555 5555 55");
/// ```
pub fn format_iban(iban: &str) -> String {
    let compact: Vec<char> = iban.chars().filter(|c| !c.is_whitespace()).collect();
    let mut out = String::with_capacity(compact.len() + compact.len() / GROUP);
    for (i, group) in compact.chunks(GROUP).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.extend(group);
    }
    out
}

/// Countries whose name or code contains `query`, ignoring case.
///
/// An empty query lists the whole registry.
pub fn search_countries(query: &str) -> Vec<&'static CountryRule> {
    countries::search(query)
}

/// The whole registry in stable order.
pub fn list_countries() -> &'static [CountryRule] {
    countries::all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_of_four() {
        assert_eq!(format_iban("NO8330001234567"), "NO83 3000 1234 567");
        assert_eq!(format_iban("BE71096123456769"), "BE71 0961 2345 6769");
    }

    #[test]
    fn short_inputs() {
        assert_eq!(format_iban(""), "");
        assert_eq!(format_iban("   "), "");
        assert_eq!(format_iban("AB"), "AB");
        assert_eq!(format_iban("ABCD"), "ABCD");
        assert_eq!(format_iban("ABCDE"), "ABCD E");
    }

    #[test]
    fn idempotent() {
        let once = format_iban("DE75512108001245126199");
        assert_eq!(format_iban(&once), once);
    }

    #[test]
    fn mixed_whitespace() {
        assert_eq!(
            format_iban("\tde75 5121\n0800 12451261 99 "),
            "de75 5121 0800 1245 1261 99"
        );
    }

    #[test]
    fn electronic() {
        assert_eq!(
            electronic_format(" de75 5121 0800 1245 1261 99\n"),
            "DE75512108001245126199"
        );
    }

    #[test]
    fn list_and_search_delegate() {
        assert_eq!(list_countries().len(), search_countries("").len());
        assert_eq!(search_countries("GERMANY")[0].code, "DE");
    }
}
