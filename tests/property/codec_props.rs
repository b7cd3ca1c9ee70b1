//! Encoder/decoder properties.

use super::common::{assert_round_trip, is_exact_thousands, letters_only, FINAL_PAIRS};
use gimatria::{decode, encode, GERESH, GERSHAYIM};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Values that round-trip: positive and not an exact multiple of 1000.
fn round_trip_value() -> impl Strategy<Value = i64> {
    (1i64..10_000_000).prop_filter("exact thousands", |&n| !is_exact_thousands(n))
}

/// Strings of numeral letters without punctuation.
fn bare_letters() -> impl Strategy<Value = String> {
    prop::string::string_regex("[אבגדהוזחטיכלמנסעפצקרשתךםןףץ]{1,6}").unwrap()
}

// ============================================================================
// ROUND TRIP
// ============================================================================

#[test]
fn test_round_trip_first_ten_thousand() {
    for n in (1..=10_000).filter(|&n| !is_exact_thousands(n)) {
        assert_round_trip(n);
    }
}

proptest! {
    /// Property: decode(encode(n)) == n.
    #[test]
    fn prop_round_trip(n in round_trip_value()) {
        prop_assert_eq!(decode(&encode(n)), n as u64);
    }

    /// Property: encoding is injective on round-trip values.
    #[test]
    fn prop_distinct_values_distinct_numerals(a in round_trip_value(), b in round_trip_value()) {
        prop_assume!(a != b);
        prop_assert_ne!(encode(a), encode(b));
    }

    /// Property: every numeral carries a geresh or gershayim.
    #[test]
    fn prop_always_punctuated(n in 1i64..i64::MAX) {
        let numeral = encode(n);
        prop_assert!(numeral.contains(&[GERESH, GERSHAYIM][..]), "{:?}", numeral);
    }

    /// Property: at most one gershayim, and never next to a geresh.
    #[test]
    fn prop_single_gershayim(n in 1i64..100_000_000) {
        let numeral = encode(n);
        prop_assert!(numeral.matches(GERSHAYIM).count() <= 1);
        prop_assert!(!numeral.contains("'\"") && !numeral.contains("\"'"), "{:?}", numeral);
    }

    /// Property: final forms appear only as the last letter.
    #[test]
    fn prop_final_forms_only_at_end(n in 1i64..100_000_000) {
        prop_assume!(!is_exact_thousands(n));
        let letters = letters_only(&encode(n));
        let body: Vec<char> = letters.chars().collect();
        if let Some((last, rest)) = body.split_last() {
            for &(regular, fin) in FINAL_PAIRS {
                prop_assert!(!rest.contains(&fin), "{:?}", letters);
                prop_assert_ne!(*last, regular);
            }
        }
    }

    /// Property: appending a separator and more letters scales by 1000.
    #[test]
    fn prop_separator_scales(s in bare_letters(), t in bare_letters()) {
        let joined = format!("{}'{}", s, t);
        prop_assert_eq!(decode(&joined), decode(&s) * 1000 + decode(&t));
    }

    /// Property: a trailing separator adds nothing.
    #[test]
    fn prop_trailing_separator_is_free(s in bare_letters()) {
        prop_assert_eq!(decode(&format!("{}'", s)), decode(&s));
    }

    /// Property: the decoder never panics.
    #[test]
    fn prop_decode_total(s in ".*") {
        let _ = decode(&s);
    }
}
