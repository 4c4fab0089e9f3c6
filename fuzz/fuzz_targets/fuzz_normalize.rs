#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic; errors are fine, panics are bugs.
        if let Ok(iban) = girocode::iban::normalize(s) {
            assert_eq!(iban.country_code().len(), 2);
            assert!(!iban.as_str().chars().any(char::is_whitespace));
            // Accepted output must normalize to itself.
            assert!(girocode::iban::normalize(iban.as_str()).is_ok());
        }
    }
});
