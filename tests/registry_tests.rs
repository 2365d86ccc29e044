use ibankit::*;

// ---------------------------------------------------------------------------
// Dataset self-consistency
// ---------------------------------------------------------------------------

#[test]
fn every_example_validates() {
    for rule in list_countries() {
        let outcome = validate(rule.example);
        assert!(
            outcome.is_valid,
            "{} example {} rejected: {:?}",
            rule.code, rule.example, outcome.errors
        );
        assert_eq!(outcome.country.unwrap().code, rule.code);
    }
}

#[test]
fn every_example_has_remainder_one() {
    for rule in list_countries() {
        assert_eq!(mod97_check(rule.example), Ok(1), "{}", rule.code);
    }
}

#[test]
fn every_example_check_digits_recomputed() {
    for rule in list_countries() {
        let cd = compute_check_digits(rule.code, &rule.example[4..]).unwrap();
        assert_eq!(cd, rule.example[2..4], "{}", rule.code);
    }
}

#[test]
fn codes_are_unique() {
    let mut codes: Vec<_> = list_countries().iter().map(|r| r.code).collect();
    let before = codes.len();
    codes.dedup();
    assert_eq!(codes.len(), before);
}

#[test]
fn codes_are_two_uppercase_letters() {
    for rule in list_countries() {
        assert_eq!(rule.code.len(), 2);
        assert!(rule.code.bytes().all(|b| b.is_ascii_uppercase()), "{}", rule.code);
        assert!(!rule.name.is_empty());
    }
}

#[test]
fn structure_patterns_begin_with_code_and_check_digits() {
    for rule in list_countries() {
        assert!(
            rule.structure.starts_with(&format!("{}2!n", rule.code)),
            "{}: {}",
            rule.code,
            rule.structure
        );
        let compiled: Structure = rule.structure.parse().unwrap();
        assert_eq!(compiled.len(), rule.length, "{}", rule.code);
        assert_eq!(compiled.to_string(), rule.structure);
    }
}

#[test]
fn regex_source_matches_examples() {
    for rule in list_countries() {
        let re = regex::Regex::new(&rule.compiled().unwrap().regex_source()).unwrap();
        assert!(re.is_match(rule.example), "{}", rule.code);
    }
}

#[test]
fn lengths_within_bounds() {
    let min = list_countries().iter().map(|r| r.length).min().unwrap();
    let max = list_countries().iter().map(|r| r.length).max().unwrap();
    assert_eq!(min, MIN_IBAN_LENGTH); // Norway
    assert!(max <= MAX_IBAN_LENGTH);
}

// ---------------------------------------------------------------------------
// Lookup & search
// ---------------------------------------------------------------------------

#[test]
fn lookup_known() {
    let de = lookup("DE").unwrap();
    assert_eq!(de.name, "Germany");
    assert_eq!(de.length, 22);
    assert_eq!(de.structure, "DE2!n8!n10!n");
    assert_eq!(de.example, "DE75512108001245126199");
    assert!(de.sepa);
}

#[test]
fn lookup_absent_is_none() {
    assert!(lookup("US").is_none());
    assert!(lookup("Z").is_none());
    assert!(lookup("").is_none());
}

#[test]
fn lookup_is_case_sensitive() {
    assert!(lookup("gb").is_none());
}

#[test]
fn list_is_stable() {
    let a: Vec<_> = list_countries().iter().map(|r| r.code).collect();
    let b: Vec<_> = list_countries().iter().map(|r| r.code).collect();
    assert_eq!(a, b);
    assert_eq!(a.first(), Some(&"AD"));
    assert_eq!(a.last(), Some(&"YE"));
}

#[test]
fn search_case_insensitive() {
    let upper: Vec<_> = search_countries("KINGDOM").iter().map(|r| r.code).collect();
    let lower: Vec<_> = search_countries("kingdom").iter().map(|r| r.code).collect();
    assert_eq!(upper, vec!["GB"]);
    assert_eq!(upper, lower);
}

#[test]
fn search_by_code() {
    let hits: Vec<_> = search_countries("gb").iter().map(|r| r.code).collect();
    assert_eq!(hits, vec!["GB"]);
}

#[test]
fn search_substring_in_name() {
    let hits: Vec<_> = search_countries("ina").iter().map(|r| r.code).collect();
    assert_eq!(hits, vec!["BA", "BF"]);
}

#[test]
fn search_preserves_registry_order() {
    let hits: Vec<_> = search_countries("a").iter().map(|r| r.code).collect();
    let mut sorted = hits.clone();
    sorted.sort_unstable();
    assert_eq!(hits, sorted);
}

#[test]
fn search_empty_is_full_listing() {
    assert_eq!(search_countries("").len(), list_countries().len());
}

#[test]
fn sepa_membership() {
    let sepa: Vec<_> = sepa_countries().map(|r| r.code).collect();
    for code in ["DE", "FR", "GB", "CH", "NO", "SM", "VA"] {
        assert!(sepa.contains(&code), "{code}");
    }
    for code in ["BR", "TR", "SA", "RU"] {
        assert!(!sepa.contains(&code), "{code}");
    }
}
