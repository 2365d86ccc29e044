#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic, and the outcome must be self-consistent.
        let outcome = ibankit::validate(s);
        assert_eq!(outcome.is_valid, outcome.errors.is_empty());
        assert_eq!(outcome.is_valid, outcome.formatted.is_some());
    }
});
