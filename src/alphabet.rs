//! Codec for the 26-letter lowercase alphabet.
//!
//! Every cipher in this crate works over the ring Z/26, with letters mapped
//! to their 0-25 ordinal positions. Input is normalized (ascii-lowercased)
//! and validated here before any cipher touches it, so the arithmetic
//! helpers can assume clean operands.

use crate::error::{CipherLabError, Result};

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// The lowercase alphabet in order, as bytes.
pub const ALPHABET: [u8; 26] = *b"abcdefghijklmnopqrstuvwxyz";

/// Map a lowercase letter to its 0-25 ordinal position.
pub fn letter_to_index(letter: u8) -> Result<u8> {
    if letter.is_ascii_lowercase() {
        Ok(letter - b'a')
    } else {
        Err(CipherLabError::NonAlphabetic(letter as char))
    }
}

/// Map an ordinal position back to a lowercase letter.
/// The index is reduced modulo 26 before lookup, so this is total.
pub fn index_to_letter(index: u8) -> u8 {
    b'a' + index % ALPHABET_LEN
}

/// Modular addition over the 26-letter ring.
pub fn add_mod(a: u8, b: u8) -> u8 {
    (a + b) % ALPHABET_LEN
}

/// Modular subtraction over the 26-letter ring.
/// Adds 26 before reducing so the intermediate never underflows.
pub fn sub_mod(a: u8, b: u8) -> u8 {
    (a + ALPHABET_LEN - b) % ALPHABET_LEN
}

/// Lowercase `text` and validate that every character is an ascii letter.
/// Returns the normalized bytes, or the first offending character as an error.
pub fn normalize(text: &str) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let lower = ch.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            bytes.push(lower as u8);
        } else {
            return Err(CipherLabError::NonAlphabetic(ch));
        }
    }
    Ok(bytes)
}
