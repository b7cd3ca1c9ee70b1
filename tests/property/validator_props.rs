//! Validator properties.

use super::common::is_exact_thousands;
use gimatria::{decode, encode, is_canonical_gimatria};
use proptest::prelude::*;

fn round_trip_value() -> impl Strategy<Value = i64> {
    (1i64..10_000_000).prop_filter("exact thousands", |&n| !is_exact_thousands(n))
}

/// Hebrew letters mixed with both punctuation marks.
fn punctuated_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[אבגדהוזחטיכלמנסעפצקרשתךםןףץ'\"]{1,8}").unwrap()
}

proptest! {
    /// Property: every encoded value validates as itself.
    #[test]
    fn prop_encoded_validates(n in round_trip_value()) {
        prop_assert_eq!(is_canonical_gimatria(&encode(n)), n as u64);
    }

    /// Property: a nonzero answer means the word is exactly encode(answer).
    #[test]
    fn prop_accepted_words_are_encoder_output(word in punctuated_word()) {
        let value = is_canonical_gimatria(&word);
        if value > 0 {
            prop_assert_eq!(encode(value as i64), word.clone());
            prop_assert_eq!(decode(&word), value);
        }
    }

    /// Property: words without any punctuation are never accepted.
    #[test]
    fn prop_unpunctuated_rejected(word in "[^'\"]*") {
        prop_assert_eq!(is_canonical_gimatria(&word), 0);
    }

    /// Property: inserting an extra gershayim breaks canonicity.
    #[test]
    fn prop_extra_gershayim_rejected(n in round_trip_value(), pos in 0usize..16) {
        let numeral = encode(n);
        let chars: Vec<char> = numeral.chars().collect();
        let at = pos % (chars.len() + 1);
        let mut mangled: String = chars[..at].iter().collect();
        mangled.push('"');
        mangled.extend(&chars[at..]);
        prop_assert_eq!(is_canonical_gimatria(&mangled), 0, "{:?}", mangled);
    }
}
