#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Compiling arbitrary patterns must not panic, and a compiled
        // pattern must survive a print/parse cycle.
        if let Ok(structure) = ibankit::Structure::parse(s) {
            assert_eq!(ibankit::Structure::parse(&structure.to_string()), Ok(structure));
        }
    }
});
