//! Property-based tests and edge case tests for the girocode crate.
//!
//! Run with: `cargo test --test proptest_tests`

#![cfg(feature = "core")]

use girocode::assemble::{
    FIRST_NAME_TOKEN, LAST_NAME_TOKEN, ORDER_NUMBER_TOKEN, OrderSnapshot, PaymentConfig,
    PaymentConfigBuilder, ReferenceType, check_prerequisites, expand_reference_template,
};
use girocode::epc::{EpcPayload, EpcPayloadBuilder, MAX_AMOUNT, MIN_AMOUNT};
use girocode::iban::registry::{IBAN_LENGTHS, required_length};
use girocode::iban::{Iban, IbanError, normalize};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn sample_iban() -> Iban {
    normalize("AT611904300234573201").unwrap()
}

fn base_config() -> PaymentConfig {
    PaymentConfigBuilder::new("ACME GmbH", "AT61 1904 3002 3457 3201")
        .reference_type(ReferenceType::Creditor)
        .build()
}

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Pick a random (country, length) entry from the IBAN registry.
fn arb_registry_entry() -> impl Strategy<Value = (&'static str, usize)> {
    (0..IBAN_LENGTHS.len()).prop_map(|i| IBAN_LENGTHS[i])
}

/// Generate a well-formed IBAN: a registered country code followed by a
/// digit tail of the prescribed length.
fn arb_valid_iban() -> impl Strategy<Value = String> {
    arb_registry_entry().prop_flat_map(|(country, length)| {
        prop::collection::vec(0u8..10, length - 2).prop_map(move |digits| {
            let mut iban = String::from(country);
            for digit in digits {
                iban.push(char::from(b'0' + digit));
            }
            iban
        })
    })
}

/// Mangle a well-formed IBAN with interleaved whitespace and lowercased
/// letters, keeping the account number itself intact. Yields the pair
/// (clean, mangled).
fn arb_mangled_iban() -> impl Strategy<Value = (String, String)> {
    arb_valid_iban().prop_flat_map(|clean| {
        let length = clean.len();
        (
            Just(clean),
            prop::collection::vec(
                prop_oneof![Just(""), Just(" "), Just("  "), Just("\t"), Just("\u{a0}")],
                length + 1,
            ),
            prop::collection::vec(any::<bool>(), length),
        )
            .prop_map(move |(clean, gaps, lowered)| {
                let mut mangled = String::new();
                for (i, c) in clean.chars().enumerate() {
                    mangled.push_str(gaps[i]);
                    mangled.push(if lowered[i] { c.to_ascii_lowercase() } else { c });
                }
                mangled.push_str(gaps[length]);
                (clean, mangled)
            })
    })
}

/// Build a valid payload with a random amount and a random mix of the
/// optional elements.
fn arb_payload() -> impl Strategy<Value = EpcPayload> {
    (
        1u64..=99_999_999_999u64,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(cents, with_bic, with_purpose, use_reference, with_information)| {
                let amount = Decimal::new(cents as i64, 2);
                let mut builder = EpcPayloadBuilder::new("ACME GmbH", sample_iban(), amount);
                if with_bic {
                    builder = builder.bic("GIBAATWWXXX");
                }
                if with_purpose {
                    builder = builder.purpose("GDDS");
                }
                builder = if use_reference {
                    builder.remittance_reference("100000001")
                } else {
                    builder.remittance_text("Invoice 100000001")
                };
                if with_information {
                    builder = builder.information("Scan with your banking app");
                }
                builder.build().unwrap()
            },
        )
}

/// Assemble a reference template from literal fragments and placeholder
/// tokens in random order.
fn arb_template() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(ORDER_NUMBER_TOKEN.to_string()),
            Just(FIRST_NAME_TOKEN.to_string()),
            Just(LAST_NAME_TOKEN.to_string()),
            "[A-Za-z0-9 .,:-]{0,8}",
        ],
        0..8,
    )
    .prop_map(|parts| parts.concat())
}

// ── Property Tests ──────────────────────────────────────────────────────────

proptest! {
    /// Every well-formed IBAN normalizes to itself.
    #[test]
    fn well_formed_ibans_normalize_to_themselves(raw in arb_valid_iban()) {
        let iban = normalize(&raw).unwrap();
        prop_assert_eq!(iban.as_str(), raw);
    }

    /// Whitespace and letter case in the input never change the result.
    #[test]
    fn mangling_does_not_change_the_result((clean, mangled) in arb_mangled_iban()) {
        let from_clean = normalize(&clean).unwrap();
        let from_mangled = normalize(&mangled).unwrap();
        prop_assert_eq!(from_clean, from_mangled);
    }

    /// normalize() is idempotent, even when starting from mangled input.
    #[test]
    fn normalization_is_idempotent((_, mangled) in arb_mangled_iban()) {
        let once = normalize(&mangled).unwrap();
        let twice = normalize(once.as_str()).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// The normalized form is uppercase, whitespace-free, and has the
    /// registry length for its country.
    #[test]
    fn normalized_form_satisfies_invariants((_, mangled) in arb_mangled_iban()) {
        let iban = normalize(&mangled).unwrap();
        prop_assert!(!iban.as_str().chars().any(char::is_whitespace));
        prop_assert!(!iban.as_str().chars().any(|c| c.is_ascii_lowercase()));
        prop_assert_eq!(
            required_length(iban.country_code()),
            Some(iban.as_str().len())
        );
    }

    /// Unregistered countries are always rejected, whatever the tail.
    #[test]
    fn unknown_countries_are_always_rejected(tail in "[0-9]{0,40}") {
        let raw = format!("QQ{tail}");
        let err = normalize(&raw).unwrap_err();
        prop_assert_eq!(
            err,
            IbanError::InvalidCountry {
                iban: raw,
                country: "QQ".into(),
            }
        );
    }

    /// A tail of the wrong length is reported against the registry length.
    #[test]
    fn length_mismatches_report_the_prescribed_length(
        (country, expected) in arb_registry_entry(),
        tail_len in 0usize..45,
    ) {
        prop_assume!(tail_len + 2 != expected);
        let raw = format!("{country}{}", "7".repeat(tail_len));
        let err = normalize(&raw).unwrap_err();
        prop_assert_eq!(
            err,
            IbanError::InvalidLength {
                iban: raw,
                country: country.into(),
                actual: tail_len + 2,
                expected,
            }
        );
    }

    /// The amount element always renders with exactly two decimal places
    /// and parses back to the original value.
    #[test]
    fn amount_renders_with_two_decimals(cents in 1u64..=99_999_999_999u64) {
        let amount = Decimal::new(cents as i64, 2);
        let payload = EpcPayloadBuilder::new("ACME GmbH", sample_iban(), amount)
            .remittance_reference("100000001")
            .build()
            .unwrap();
        let text = payload.to_text();
        let value = text.lines().nth(7).unwrap().strip_prefix("EUR").unwrap();
        let (whole, fraction) = value.split_once('.').unwrap();
        prop_assert!(!whole.is_empty());
        prop_assert!(whole.chars().all(|c| c.is_ascii_digit()));
        prop_assert_eq!(fraction.len(), 2);
        prop_assert!(fraction.chars().all(|c| c.is_ascii_digit()));
        prop_assert_eq!(value.parse::<Decimal>().unwrap(), amount);
    }

    /// Rendered payloads keep the fixed header and never end with an
    /// empty element.
    #[test]
    fn rendered_payloads_keep_their_shape(payload in arb_payload()) {
        let text = payload.to_text();
        let lines: Vec<&str> = text.lines().collect();
        prop_assert!((10..=12).contains(&lines.len()));
        prop_assert_eq!(lines[0], "BCD");
        prop_assert_eq!(lines[1], "002");
        prop_assert_eq!(lines[2], "1");
        prop_assert_eq!(lines[3], "SCT");
        prop_assert_eq!(lines[6], "AT611904300234573201");
        prop_assert!(!text.ends_with('\n'));
        prop_assert!(!lines.last().unwrap().is_empty());
    }

    /// The amount gate accepts exactly the closed range
    /// 0.01 ..= 999999999.99.
    #[test]
    fn amount_gate_matches_the_supported_range(cents in 0u64..=200_000_000_000u64) {
        let total = Decimal::new(cents as i64, 2);
        let order = OrderSnapshot::new("900000100", total);
        let renderable = check_prerequisites(&base_config(), &order).is_ok();
        prop_assert_eq!(renderable, (MIN_AMOUNT..=MAX_AMOUNT).contains(&total));
    }

    /// Expanded references never contain a leftover placeholder token.
    #[test]
    fn expansion_leaves_no_tokens(
        template in arb_template(),
        id in "[0-9]{1,9}",
        first in "[A-Za-z]{0,12}",
        last in "[A-Za-z]{0,12}",
    ) {
        let order = OrderSnapshot::new(id, dec!(100)).customer(first, last);
        let expanded = expand_reference_template(&template, &order);
        prop_assert!(!expanded.contains(ORDER_NUMBER_TOKEN));
        prop_assert!(!expanded.contains(FIRST_NAME_TOKEN));
        prop_assert!(!expanded.contains(LAST_NAME_TOKEN));
    }
}

// ── Edge Case Tests ─────────────────────────────────────────────────────────

// --- Unicode whitespace ---

#[test]
fn unicode_whitespace_is_stripped() {
    let raw = "DE89\u{a0}3704\u{2007}0044\u{3000}0532 0130 00";
    let iban = normalize(raw).unwrap();
    assert_eq!(iban.as_str(), "DE89370400440532013000");
}

// --- Degenerate inputs ---

#[test]
fn one_character_input_is_an_invalid_country() {
    let err = normalize("d").unwrap_err();
    assert_eq!(
        err,
        IbanError::InvalidCountry {
            iban: "D".into(),
            country: "D".into(),
        }
    );
}

#[test]
fn whitespace_only_input_is_an_invalid_country() {
    let err = normalize(" \t\r\n ").unwrap_err();
    assert_eq!(
        err,
        IbanError::InvalidCountry {
            iban: String::new(),
            country: String::new(),
        }
    );
}
