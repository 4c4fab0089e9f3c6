#![no_main]

use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

fuzz_target!(|data: &[u8]| {
    if let Ok(template) = std::str::from_utf8(data) {
        let order = girocode::assemble::OrderSnapshot::new("100000001", Decimal::ONE)
            .customer("John", "Doe");
        let expanded = girocode::assemble::expand_reference_template(template, &order);
        // These fixed values cannot recombine into a placeholder, so every
        // token must be gone no matter what the template looks like.
        assert!(!expanded.contains("%orderNumber%"));
        assert!(!expanded.contains("%firstName%"));
        assert!(!expanded.contains("%lastName%"));
    }
});
