//! ISO-8859-8 input.

use gimatria::is_canonical_gimatria_bytes;
use gimatria::legacy::{from_latin_hebrew, to_latin_hebrew};
use gimatria::utils::tokens;

#[test]
fn test_encoded_numerals_convert() {
    for n in [3, 15, 613, 5784] {
        let numeral = gimatria::encode(n);
        let bytes = to_latin_hebrew(&numeral).expect("numerals are ASCII + Hebrew letters");
        assert_eq!(from_latin_hebrew(&bytes), numeral);
        assert_eq!(is_canonical_gimatria_bytes(&bytes), n as u64);
    }
}

#[test]
fn test_ascii_word_is_not_numeral() {
    assert_eq!(is_canonical_gimatria_bytes(b"it's"), 0);
    assert_eq!(is_canonical_gimatria_bytes(b""), 0);
}

#[test]
fn test_high_bytes_outside_hebrew() {
    // 0xDE is unassigned in ISO-8859-8; 0xE0 is alef
    assert_eq!(is_canonical_gimatria_bytes(&[0xDE, b'\'']), 0);
    assert_eq!(is_canonical_gimatria_bytes(&[0xE0, b'\'']), 1);
}

#[test]
fn test_nbsp_separates_numerals() {
    // ג' NBSP ד'
    let text = from_latin_hebrew(&[0xE2, b'\'', 0xA0, 0xE3, b'\'']);
    let found: Vec<&str> = tokens(&text).collect();
    assert_eq!(found, vec!["ג'", "ד'"]);
    assert_eq!(to_latin_hebrew(&text), Some(vec![0xE2, b'\'', 0xA0, 0xE3, b'\'']));
}

#[test]
fn test_direction_marks_around_numeral() {
    // RLM תרי"ג LRM
    let bytes = [0xFE, 0xFA, 0xF8, 0xE9, b'"', 0xE2, 0xFD];
    let text = from_latin_hebrew(&bytes);
    let found: Vec<&str> = tokens(&text).collect();
    assert_eq!(found, vec!["תרי\"ג"]);
    assert_eq!(to_latin_hebrew(&text), Some(bytes.to_vec()));
}

#[test]
fn test_symbol_bytes_round_trip() {
    let bytes: Vec<u8> = vec![0xA0, 0xA2, 0xA9, 0xAA, 0xAB, 0xB9, 0xBA, 0xBE, 0xDF, 0xFD, 0xFE];
    let text = from_latin_hebrew(&bytes);
    assert!(!text.contains('\u{FFFD}'), "{:?}", text);
    assert_eq!(to_latin_hebrew(&text), Some(bytes));
}
