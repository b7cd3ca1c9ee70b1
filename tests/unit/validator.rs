//! Canonical-form validator.

use super::common::{KNOWN_NUMERALS, SINGLE_LETTER_VALUES};
use gimatria::{encode, is_canonical_gimatria, Gimatria};

#[test]
fn test_known_numerals_are_canonical() {
    for &(value, numeral) in KNOWN_NUMERALS {
        assert_eq!(is_canonical_gimatria(numeral), value as u64, "{:?}", numeral);
    }
}

#[test]
fn test_single_letters() {
    for &n in SINGLE_LETTER_VALUES {
        assert_eq!(is_canonical_gimatria(&encode(n)), n as u64);
    }
}

#[test]
fn test_fast_path_rejects_unpunctuated() {
    assert_eq!(is_canonical_gimatria("א"), 0);
    assert_eq!(is_canonical_gimatria("תריג"), 0);
    assert_eq!(is_canonical_gimatria("שלום"), 0);
    assert_eq!(is_canonical_gimatria("hello"), 0);
    assert_eq!(is_canonical_gimatria(""), 0);
}

#[test]
fn test_fast_path_rejects_punctuation_without_letters() {
    assert_eq!(is_canonical_gimatria("it's"), 0);
    assert_eq!(is_canonical_gimatria("\"quoted\""), 0);
    assert_eq!(is_canonical_gimatria("''"), 0);
}

#[test]
fn test_rejects_misplaced_gershayim() {
    assert_eq!(is_canonical_gimatria("ת\"ריג"), 0);
    assert_eq!(is_canonical_gimatria("תריג\""), 0);
    assert_eq!(is_canonical_gimatria("\"תריג"), 0);
}

#[test]
fn test_rejects_geresh_on_multi_letter() {
    assert_eq!(is_canonical_gimatria("תריג'"), 0);
    assert_eq!(is_canonical_gimatria("יא'"), 0);
}

#[test]
fn test_rejects_gershayim_on_single_letter() {
    assert_eq!(is_canonical_gimatria("\"ג"), 0);
}

#[test]
fn test_rejects_regular_form_at_end() {
    assert_eq!(is_canonical_gimatria("ך'"), 20);
    assert_eq!(is_canonical_gimatria("כ'"), 0);
    assert_eq!(is_canonical_gimatria("ר\"מ"), 0);
}

#[test]
fn test_rejects_final_form_inside() {
    assert_eq!(is_canonical_gimatria("ךא"), 0);
    assert_eq!(is_canonical_gimatria("ך\"א"), 0);
}

#[test]
fn test_rejects_avoided_spellings() {
    assert_eq!(is_canonical_gimatria("י\"ה"), 0);
    assert_eq!(is_canonical_gimatria("י\"ו"), 0);
}

#[test]
fn test_rejects_alternate_hundreds() {
    // 500 as ק + ת, not ת + ק
    assert_eq!(is_canonical_gimatria("ק\"ת"), 0);
    // 900 as ת + ת + ק only
    assert_eq!(is_canonical_gimatria("תק\"ת"), 0);
}

#[test]
fn test_handle_and_free_function_agree() {
    let codec = Gimatria::new();
    for word in ["תרי\"ג", "ג'", "תריג", "", "ה'תשפ\"ד"] {
        assert_eq!(codec.is_canonical(word), is_canonical_gimatria(word));
    }
}
