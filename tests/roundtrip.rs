use cipherlab::analysis::letter_frequencies;
use cipherlab::bruteforce::{enumerate_keyspace, keyspace_size};
use cipherlab::cipher::transposition::{self, RemainderPolicy, TranspositionKey};
use cipherlab::cipher::vigenere::{self, VigenereKey};
use proptest::prelude::*;
use std::collections::HashSet;

#[test]
fn vigenere_reference_fixtures() {
    let key = VigenereKey::parse("deceptive").unwrap();
    assert_eq!(
        vigenere::encrypt("wearediscoveredsaveyourself", &key).unwrap(),
        "zicvtwqngrzgvtwavzhcqyglmgj"
    );

    let key = VigenereKey::parse("nat").unwrap();
    assert_eq!(
        vigenere::decrypt("jeteewvsvbvxeewhsbagvuaitpmfaoryhhrlrly", &key).unwrap(),
        "wearediscoveredusingchapgptsaveyourself"
    );
}

#[test]
fn transposition_reference_fixtures() {
    let key = TranspositionKey::parse("4312567").unwrap();
    assert_eq!(
        transposition::encrypt(
            "attackpostponeduntiltwoamxyz",
            &key,
            RemainderPolicy::Reject
        )
        .unwrap(),
        "ttnaaptmtsuoaodwcoixknlypetz"
    );
    assert_eq!(
        transposition::decrypt(
            "ttnaaptmtsuoaodwcoixknlypetz",
            &key,
            RemainderPolicy::Reject
        )
        .unwrap(),
        "attackpostponeduntiltwoamxyz"
    );
}

#[test]
fn layered_composition_inverts_for_compatible_lengths() {
    // 30 characters, a multiple of the 5-column transposition key
    let plain = "wearediscoveredsaveyourselfabc";
    let vkey = VigenereKey::parse("nat").unwrap();
    let tkey = TranspositionKey::parse("12435").unwrap();

    let layer1 = transposition::encrypt(plain, &tkey, RemainderPolicy::Reject).unwrap();
    let layer2 = vigenere::encrypt(&layer1, &vkey).unwrap();

    let peeled2 = vigenere::decrypt(&layer2, &vkey).unwrap();
    let peeled1 = transposition::decrypt(&peeled2, &tkey, RemainderPolicy::Reject).unwrap();
    assert_eq!(peeled1, plain);
}

#[test]
fn keyspace_enumeration_is_exact_and_distinct() {
    for (alphabet, key_length) in [("abcdefghijklmnopqrstuvwxyz", 2), ("1234", 4), ("xyz", 1)] {
        let keys = enumerate_keyspace(alphabet, key_length).unwrap();
        assert_eq!(
            keys.len() as u64,
            keyspace_size(alphabet.len(), key_length),
            "size mismatch for {:?} choose {}",
            alphabet,
            key_length
        );
        let distinct: HashSet<&String> = keys.iter().collect();
        assert_eq!(distinct.len(), keys.len());
    }
}

/// A valid transposition key together with a text whose length is an exact
/// multiple of the key's column count.
fn transposition_case() -> impl Strategy<Value = (String, String)> {
    (1usize..=7)
        .prop_flat_map(|columns| {
            let digits: Vec<char> = (1..=columns)
                .map(|d| char::from_digit(d as u32, 10).unwrap())
                .collect();
            (Just(digits).prop_shuffle(), 0usize..6)
        })
        .prop_flat_map(|(digits, rows)| {
            let key: String = digits.iter().collect();
            let text_len = key.len() * rows;
            let text = proptest::string::string_regex(&format!("[a-z]{{{}}}", text_len))
                .expect("valid regex");
            (Just(key), text)
        })
}

proptest! {
    #[test]
    fn vigenere_roundtrip(plain in "[a-z]{0,64}", key in "[a-z]{1,8}") {
        let key = VigenereKey::parse(&key).unwrap();
        let cipher = vigenere::encrypt(&plain, &key).unwrap();
        prop_assert_eq!(cipher.len(), plain.len());
        prop_assert_eq!(vigenere::decrypt(&cipher, &key).unwrap(), plain);
    }

    #[test]
    fn transposition_roundtrip((key, plain) in transposition_case()) {
        let key = TranspositionKey::parse(&key).unwrap();
        let cipher = transposition::encrypt(&plain, &key, RemainderPolicy::Reject).unwrap();
        prop_assert_eq!(cipher.len(), plain.len());
        prop_assert_eq!(
            transposition::decrypt(&cipher, &key, RemainderPolicy::Reject).unwrap(),
            plain
        );
    }

    #[test]
    fn transposition_permutes_without_altering_letters((key, plain) in transposition_case()) {
        let key = TranspositionKey::parse(&key).unwrap();
        let cipher = transposition::encrypt(&plain, &key, RemainderPolicy::Reject).unwrap();
        let mut expected: Vec<char> = plain.chars().collect();
        let mut actual: Vec<char> = cipher.chars().collect();
        expected.sort_unstable();
        actual.sort_unstable();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn frequencies_sum_to_one(text in "[a-z]{1,128}") {
        let freq = letter_frequencies(&text).unwrap();
        let sum: f64 = freq.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9);
        prop_assert!(freq.iter().all(|&f| (0.0..=1.0).contains(&f)));
    }

    #[test]
    fn layered_roundtrip_vigenere_then_transposition(
        rows in 1usize..8,
        vkey in "[a-z]{1,5}",
    ) {
        // text length fixed to a multiple of 5 so the transposition is lossless
        let plain: String = std::iter::repeat("crypt").take(rows).collect();
        let vkey = VigenereKey::parse(&vkey).unwrap();
        let tkey = TranspositionKey::parse("12435").unwrap();

        let layer1 = vigenere::encrypt(&plain, &vkey).unwrap();
        let layer2 = transposition::encrypt(&layer1, &tkey, RemainderPolicy::Reject).unwrap();
        let peeled2 = transposition::decrypt(&layer2, &tkey, RemainderPolicy::Reject).unwrap();
        let peeled1 = vigenere::decrypt(&peeled2, &vkey).unwrap();
        prop_assert_eq!(peeled1, plain);
    }
}
