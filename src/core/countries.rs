//! Registry of per-country IBAN rules.
//!
//! One entry per country that issues IBANs, sorted by ISO 3166-1 alpha-2
//! code. The table is the single source of truth: each rule's structure
//! matcher is compiled from its pattern string on first use and cached.

use std::sync::OnceLock;

use serde::Serialize;

use super::error::PatternError;
use super::structure::Structure;

/// Shortest IBAN length issued by any country.
pub const MIN_IBAN_LENGTH: usize = 15;
/// Longest IBAN length permitted by ISO 13616.
pub const MAX_IBAN_LENGTH: usize = 34;

/// IBAN rules for one country.
#[derive(Debug, Serialize)]
pub struct CountryRule {
    /// ISO 3166-1 alpha-2 code (e.g. "DE").
    pub code: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Total IBAN length in characters.
    pub length: usize,
    /// Structure pattern covering the whole IBAN (e.g. "DE2!n8!n10!n").
    pub structure: &'static str,
    /// A valid sample IBAN.
    pub example: &'static str,
    /// Member of the Single Euro Payments Area.
    pub sepa: bool,
    #[serde(skip)]
    matcher: OnceLock<Result<Structure, PatternError>>,
}

impl CountryRule {
    const fn new(
        code: &'static str,
        name: &'static str,
        length: usize,
        structure: &'static str,
        example: &'static str,
        sepa: bool,
    ) -> Self {
        Self {
            code,
            name,
            length,
            structure,
            example,
            sepa,
            matcher: OnceLock::new(),
        }
    }

    /// The matcher compiled from [`structure`](Self::structure).
    pub fn compiled(&self) -> Result<&Structure, &PatternError> {
        self.matcher
            .get_or_init(|| {
                let compiled = Structure::parse(self.structure);
                if let Err(e) = &compiled {
                    tracing::warn!(code = self.code, error = %e, "structure pattern failed to compile");
                }
                compiled
            })
            .as_ref()
    }

    /// Whether `candidate` (normalized, compact) follows this country's layout.
    ///
    /// A rule whose pattern does not compile matches nothing.
    pub fn matches(&self, candidate: &str) -> bool {
        self.compiled().is_ok_and(|s| s.matches(candidate))
    }

    /// The example in grouped display form (e.g. "GB33 BUKB 2020 ...").
    pub fn formatted_example(&self) -> String {
        super::format::format_iban(self.example)
    }
}

impl PartialEq for CountryRule {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
            && self.name == other.name
            && self.length == other.length
            && self.structure == other.structure
            && self.example == other.example
            && self.sepa == other.sepa
    }
}

impl Eq for CountryRule {}

/// Look up the rule for an exact, uppercase 2-letter country code.
pub fn lookup(code: &str) -> Option<&'static CountryRule> {
    COUNTRIES
        .binary_search_by(|rule| rule.code.cmp(code))
        .ok()
        .map(|i| &COUNTRIES[i])
}

/// Check whether `code` is a country that issues IBANs.
pub fn is_supported_country(code: &str) -> bool {
    lookup(code).is_some()
}

/// All rules, sorted by country code.
pub fn all() -> &'static [CountryRule] {
    &COUNTRIES
}

/// Rules whose name or code contains `query`, ignoring case.
///
/// An empty query matches every rule. Order follows [`all`].
pub fn search(query: &str) -> Vec<&'static CountryRule> {
    let needle = query.to_lowercase();
    COUNTRIES
        .iter()
        .filter(|rule| {
            rule.name.to_lowercase().contains(&needle)
                || rule.code.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Rules for SEPA member countries.
pub fn sepa_countries() -> impl Iterator<Item = &'static CountryRule> {
    COUNTRIES.iter().filter(|rule| rule.sepa)
}

/// Sorted by code for binary search.
static COUNTRIES: [CountryRule; 108] = [
    CountryRule::new("AD", "Andorra", 24, "AD2!n4!n4!n12!c", "AD1400080001001234567890", true),
    CountryRule::new("AE", "United Arab Emirates", 23, "AE2!n3!n16!n", "AE460090000000123456789", false),
    CountryRule::new("AL", "Albania", 28, "AL2!n8!n16!c", "AL35202111090000000001234567", true),
    CountryRule::new("AO", "Angola", 25, "AO2!n21!n", "AO06004400006729503010102", false),
    CountryRule::new("AT", "Austria", 20, "AT2!n5!n11!n", "AT483200000012345864", true),
    CountryRule::new("AZ", "Azerbaijan", 28, "AZ2!n4!a20!c", "AZ77VTBA00000000001234567890", false),
    CountryRule::new("BA", "Bosnia and Herzegovina", 20, "BA2!n3!n3!n8!n2!n", "BA393385804800211234", false),
    CountryRule::new("BE", "Belgium", 16, "BE2!n3!n7!n2!n", "BE71096123456769", true),
    CountryRule::new("BF", "Burkina Faso", 28, "BF2!n2!c22!n", "BF42BF0840101300463574000390", false),
    CountryRule::new("BG", "Bulgaria", 22, "BG2!n4!a6!n8!c", "BG18RZBB91550123456789", true),
    CountryRule::new("BH", "Bahrain", 22, "BH2!n4!a14!c", "BH02CITI00001077181611", false),
    CountryRule::new("BI", "Burundi", 27, "BI2!n5!n5!n11!n2!n", "BI1320001100010000123456789", false),
    CountryRule::new("BJ", "Benin", 28, "BJ2!n2!c22!n", "BJ66BJ0610100100144390000769", false),
    CountryRule::new("BR", "Brazil", 29, "BR2!n8!n5!n10!n1!a1!c", "BR1500000000000010932840814P2", false),
    CountryRule::new("BY", "Belarus", 28, "BY2!n4!c4!n16!c", "BY86AKBB10100000002966000000", false),
    CountryRule::new("CH", "Switzerland", 21, "CH2!n5!n12!c", "CH5604835012345678009", true),
    CountryRule::new("CI", "Ivory Coast", 28, "CI2!n24!c", "CI93CI0080111301134291200589", false),
    CountryRule::new("CM", "Cameroon", 27, "CM2!n23!n", "CM2110002000300277976315008", false),
    CountryRule::new("CR", "Costa Rica", 22, "CR2!n4!n14!n", "CR23015108410026012345", false),
    CountryRule::new("CV", "Cape Verde", 25, "CV2!n21!n", "CV64000500000020108215144", false),
    CountryRule::new("CY", "Cyprus", 28, "CY2!n3!n5!n16!c", "CY21002001950000357001234567", true),
    CountryRule::new("CZ", "Czech Republic", 24, "CZ2!n4!n6!n10!n", "CZ5508000000001234567899", true),
    CountryRule::new("DE", "Germany", 22, "DE2!n8!n10!n", "DE75512108001245126199", true),
    CountryRule::new("DJ", "Djibouti", 27, "DJ2!n23!n", "DJ2110002010010409943020008", false),
    CountryRule::new("DK", "Denmark", 18, "DK2!n4!n9!n1!n", "DK9520000123456789", true),
    CountryRule::new("DO", "Dominican Republic", 28, "DO2!n4!c20!n", "DO22ACAU00000000000123456789", false),
    CountryRule::new("DZ", "Algeria", 26, "DZ2!n22!n", "DZ580002100001113000000570", false),
    CountryRule::new("EE", "Estonia", 20, "EE2!n2!n2!n11!n1!n", "EE471000001020145685", true),
    CountryRule::new("EG", "Egypt", 29, "EG2!n4!n4!n17!n", "EG800002000156789012345180002", false),
    CountryRule::new("ES", "Spain", 24, "ES2!n4!n4!n1!n1!n10!n", "ES7921000813610123456789", true),
    CountryRule::new("FI", "Finland", 18, "FI2!n6!n7!n1!n", "FI1410093000123458", true),
    CountryRule::new("FK", "Falkland Islands", 18, "FK2!n2!a12!n", "FK12SC987654321098", false),
    CountryRule::new("FO", "Faroe Islands", 18, "FO2!n4!n9!n1!n", "FO9264600123456789", false),
    CountryRule::new("FR", "France", 27, "FR2!n5!n5!n11!c2!n", "FR7630006000011234567890189", true),
    CountryRule::new("GA", "Gabon", 27, "GA2!n23!n", "GA2140021010032001890020126", false),
    CountryRule::new("GB", "United Kingdom", 22, "GB2!n4!a6!n8!n", "GB33BUKB20201555555555", true),
    CountryRule::new("GE", "Georgia", 22, "GE2!n2!a16!n", "GE60NB0000000123456789", false),
    CountryRule::new("GI", "Gibraltar", 23, "GI2!n4!a15!c", "GI56XAPO000001234567890", true),
    CountryRule::new("GL", "Greenland", 18, "GL2!n4!n9!n1!n", "GL8964710123456789", false),
    CountryRule::new("GR", "Greece", 27, "GR2!n3!n4!n16!c", "GR9608100010000001234567890", true),
    CountryRule::new("GT", "Guatemala", 28, "GT2!n4!c20!c", "GT20AGRO00000000001234567890", false),
    CountryRule::new("GW", "Guinea-Bissau", 25, "GW2!n2!c19!n", "GW04GW1430010181800637601", false),
    CountryRule::new("HN", "Honduras", 28, "HN2!n4!a20!n", "HN54PISA00000000000000123124", false),
    CountryRule::new("HR", "Croatia", 21, "HR2!n7!n10!n", "HR1723600001101234565", true),
    CountryRule::new("HU", "Hungary", 28, "HU2!n3!n4!n1!n15!n1!n", "HU93116000060000000012345676", true),
    CountryRule::new("IE", "Ireland", 22, "IE2!n4!a6!n8!n", "IE64IRCE92050112345678", true),
    CountryRule::new("IL", "Israel", 23, "IL2!n3!n3!n13!n", "IL170108000000012612345", false),
    CountryRule::new("IQ", "Iraq", 23, "IQ2!n4!a15!n", "IQ20CBIQ861800101010500", false),
    CountryRule::new("IR", "Iran", 26, "IR2!n22!n", "IR710570029971601460641001", false),
    CountryRule::new("IS", "Iceland", 26, "IS2!n4!n2!n6!n10!n", "IS750001121234563108962099", true),
    CountryRule::new("IT", "Italy", 27, "IT2!n1!a5!n5!n12!c", "IT60X0542811101000000123456", true),
    CountryRule::new("JO", "Jordan", 30, "JO2!n4!a4!n18!c", "JO71CBJO0000000000001234567890", false),
    CountryRule::new("KM", "Comoros", 27, "KM2!n23!n", "KM4600005000010010904400137", false),
    CountryRule::new("KW", "Kuwait", 30, "KW2!n4!a22!c", "KW81CBKU0000000000001234560101", false),
    CountryRule::new("KZ", "Kazakhstan", 20, "KZ2!n3!n13!c", "KZ244350000012344567", false),
    CountryRule::new("LB", "Lebanon", 28, "LB2!n4!n20!c", "LB92000700000000123123456123", false),
    CountryRule::new("LC", "Saint Lucia", 32, "LC2!n4!a24!c", "LC14BOSL123456789012345678901234", false),
    CountryRule::new("LI", "Liechtenstein", 21, "LI2!n5!n12!c", "LI7408806123456789012", true),
    CountryRule::new("LT", "Lithuania", 20, "LT2!n5!n11!n", "LT601010012345678901", true),
    CountryRule::new("LU", "Luxembourg", 20, "LU2!n3!n13!c", "LU120010001234567891", true),
    CountryRule::new("LV", "Latvia", 21, "LV2!n4!a13!c", "LV97HABA0012345678910", true),
    CountryRule::new("LY", "Libya", 25, "LY2!n21!n", "LY38021001000000123456789", false),
    CountryRule::new("MA", "Morocco", 28, "MA2!n24!n", "MA64011519000001205000534921", false),
    CountryRule::new("MC", "Monaco", 27, "MC2!n5!n5!n11!c2!n", "MC5810096180790123456789085", true),
    CountryRule::new("MD", "Moldova", 24, "MD2!n2!c18!c", "MD21EX000000000001234567", true),
    CountryRule::new("ME", "Montenegro", 22, "ME2!n3!n13!n2!n", "ME25505000012345678951", true),
    CountryRule::new("MG", "Madagascar", 27, "MG2!n23!n", "MG4600005030071289421016045", false),
    CountryRule::new("MK", "North Macedonia", 19, "MK2!n3!n10!c2!n", "MK07200002785123453", true),
    CountryRule::new("ML", "Mali", 28, "ML2!n24!c", "ML13ML0160120102600100668497", false),
    CountryRule::new("MN", "Mongolia", 20, "MN2!n16!n", "MN580050099123456789", false),
    CountryRule::new("MR", "Mauritania", 27, "MR2!n5!n5!n11!n2!n", "MR1300020001010000123456753", false),
    CountryRule::new("MT", "Malta", 31, "MT2!n4!a5!n18!c", "MT31MALT01100000000000000000123", true),
    CountryRule::new("MU", "Mauritius", 30, "MU2!n4!a2!n2!n12!n3!n3!a", "MU43BOMM0101123456789101000MUR", false),
    CountryRule::new("MZ", "Mozambique", 25, "MZ2!n21!n", "MZ59000301080016367102371", false),
    CountryRule::new("NE", "Niger", 28, "NE2!n2!a22!n", "NE58NE0380100100130305000268", false),
    CountryRule::new("NI", "Nicaragua", 28, "NI2!n4!a20!n", "NI79BAMC00000000000003123123", false),
    CountryRule::new("NL", "Netherlands", 18, "NL2!n4!a10!n", "NL02ABNA0123456789", true),
    CountryRule::new("NO", "Norway", 15, "NO2!n4!n6!n1!n", "NO8330001234567", true),
    CountryRule::new("OM", "Sultanate of Oman", 23, "OM2!n3!n16!c", "OM040280000012345678901", false),
    CountryRule::new("PK", "Pakistan", 24, "PK2!n4!a16!c", "PK36SCBL0000001123456702", false),
    CountryRule::new("PL", "Poland", 28, "PL2!n8!n16!c", "PL10105000997603123456789123", true),
    CountryRule::new("PS", "Palestine", 29, "PS2!n4!a21!c", "PS92PALS000000000400123456702", false),
    CountryRule::new("PT", "Portugal", 25, "PT2!n4!n4!n11!n2!n", "PT50002700000001234567833", true),
    CountryRule::new("QA", "Qatar", 29, "QA2!n4!a21!c", "QA54QNBA000000000000693123456", false),
    CountryRule::new("RO", "Romania", 24, "RO2!n4!a16!c", "RO66BACX0000001234567890", true),
    CountryRule::new("RS", "Serbia", 22, "RS2!n3!n13!n2!n", "RS35105008123123123173", true),
    CountryRule::new("RU", "Russia", 33, "RU2!n9!n5!n15!n", "RU0204452560040702810412345678901", false),
    CountryRule::new("SA", "Saudi Arabia", 24, "SA2!n2!n18!c", "SA4420000001234567891234", false),
    CountryRule::new("SC", "Seychelles", 31, "SC2!n4!a2!n2!n16!n3!a", "SC74MCBL01031234567890123456USD", false),
    CountryRule::new("SD", "Sudan", 18, "SD2!n14!n", "SD8811123456789012", false),
    CountryRule::new("SE", "Sweden", 24, "SE2!n3!n16!n1!n", "SE7280000810340009783242", true),
    CountryRule::new("SI", "Slovenia", 19, "SI2!n5!n8!n2!n", "SI56192001234567892", true),
    CountryRule::new("SK", "Slovakia", 24, "SK2!n4!n6!n10!n", "SK8975000000000012345671", true),
    CountryRule::new("SM", "San Marino", 27, "SM2!n1!a5!n5!n12!c", "SM76P0854009812123456789123", true),
    CountryRule::new("SN", "Senegal", 28, "SN2!n2!a22!n", "SN08SN0100152000048500003035", false),
    CountryRule::new("SO", "Somalia", 23, "SO2!n19!n", "SO061000001123123456789", false),
    CountryRule::new("ST", "Sao Tome and Principe", 25, "ST2!n21!n", "ST23000200000289355710148", false),
    CountryRule::new("SV", "El Salvador", 28, "SV2!n4!a20!n", "SV43ACAT00000000000000123123", false),
    CountryRule::new("TD", "Chad", 27, "TD2!n23!n", "TD8960002000010271091600153", false),
    CountryRule::new("TG", "Togo", 28, "TG2!n2!a22!n", "TG53TG0090604310346500400070", false),
    CountryRule::new("TL", "Timor-Leste", 23, "TL2!n19!n", "TL380010012345678910106", false),
    CountryRule::new("TN", "Tunisia", 24, "TN2!n2!n3!n13!n2!n", "TN5904018104004942712345", false),
    CountryRule::new("TR", "Turkey", 26, "TR2!n5!n1!c16!c", "TR320010009999901234567890", false),
    CountryRule::new("UA", "Ukraine", 29, "UA2!n6!n19!c", "UA903052992990004149123456789", false),
    CountryRule::new("VA", "Holy See (Vatican)", 22, "VA2!n18!n", "VA59001123000012345678", true),
    CountryRule::new("VG", "British Virgin Islands", 24, "VG2!n4!a16!n", "VG07ABVI0000000123456789", false),
    CountryRule::new("XK", "Kosovo", 20, "XK2!n4!n10!n2!n", "XK051212012345678906", false),
    CountryRule::new("YE", "Yemen", 30, "YE2!n4!a22!c", "YE09CBKU0000000000001234560101", false),
];
