//! IBAN length registry per ISO 13616 country.
//!
//! Each IBAN country prescribes a fixed total length. The registry
//! covers all countries currently participating in the IBAN scheme.

/// Look up the prescribed IBAN length for an ISO 3166-1 alpha-2 country code.
///
/// Returns `None` for countries that do not participate in the IBAN scheme.
/// Codes are matched case-sensitively against the uppercase registry.
pub fn required_length(country: &str) -> Option<usize> {
    IBAN_LENGTHS
        .binary_search_by_key(&country, |&(code, _)| code)
        .ok()
        .map(|i| IBAN_LENGTHS[i].1)
}

/// Prescribed IBAN lengths by country code (87 entries).
/// Sorted by country code for binary search.
pub static IBAN_LENGTHS: &[(&str, usize)] = &[
    ("AD", 24),
    ("AE", 23),
    ("AL", 28),
    ("AT", 20),
    ("AZ", 28),
    ("BA", 20),
    ("BE", 16),
    ("BG", 22),
    ("BH", 22),
    ("BI", 27),
    ("BR", 29),
    ("BY", 28),
    ("CH", 21),
    ("CR", 22),
    ("CY", 28),
    ("CZ", 24),
    ("DE", 22),
    ("DJ", 27),
    ("DK", 18),
    ("DO", 28),
    ("EE", 20),
    ("EG", 29),
    ("ES", 24),
    ("FI", 18),
    ("FK", 18),
    ("FO", 18),
    ("FR", 27),
    ("GB", 22),
    ("GE", 22),
    ("GI", 23),
    ("GL", 18),
    ("GR", 27),
    ("GT", 28),
    ("HR", 21),
    ("HU", 28),
    ("IE", 22),
    ("IL", 23),
    ("IQ", 23),
    ("IS", 26),
    ("IT", 27),
    ("JO", 30),
    ("KW", 30),
    ("KZ", 20),
    ("LB", 28),
    ("LC", 32),
    ("LI", 21),
    ("LT", 20),
    ("LU", 20),
    ("LV", 21),
    ("LY", 25),
    ("MC", 27),
    ("MD", 24),
    ("ME", 22),
    ("MK", 19),
    ("MN", 20),
    ("MR", 27),
    ("MT", 31),
    ("MU", 30),
    ("NI", 28),
    ("NL", 18),
    ("NO", 15),
    ("OM", 23),
    ("PK", 24),
    ("PL", 28),
    ("PS", 29),
    ("PT", 25),
    ("QA", 29),
    ("RO", 24),
    ("RS", 22),
    ("RU", 33),
    ("SA", 24),
    ("SC", 31),
    ("SD", 18),
    ("SE", 24),
    ("SI", 19),
    ("SK", 24),
    ("SM", 27),
    ("SO", 23),
    ("ST", 25),
    ("SV", 28),
    ("TL", 23),
    ("TN", 24),
    ("TR", 26),
    ("UA", 29),
    ("VA", 22),
    ("VG", 24),
    ("XK", 20),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_lengths() {
        assert_eq!(required_length("DE"), Some(22));
        assert_eq!(required_length("AT"), Some(20));
        assert_eq!(required_length("NO"), Some(15));
        assert_eq!(required_length("LC"), Some(32));
        assert_eq!(required_length("RU"), Some(33));
    }

    #[test]
    fn unknown_countries() {
        assert_eq!(required_length("ZZ"), None);
        assert_eq!(required_length(""), None);
        assert_eq!(required_length("DEU"), None);
        assert_eq!(required_length("de"), None);
    }

    #[test]
    fn list_is_sorted() {
        for window in IBAN_LENGTHS.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "country codes not sorted: {} >= {}",
                window[0].0,
                window[1].0
            );
        }
    }

    #[test]
    fn list_count() {
        assert_eq!(IBAN_LENGTHS.len(), 87);
    }
}
