//! Vigenère polyalphabetic substitution cipher.
//!
//! Each plaintext letter is shifted by the ordinal value of the key letter at
//! the same position, with the key repeated cyclically to cover the whole
//! text. Decryption subtracts the same shifts.

use crate::alphabet::{add_mod, index_to_letter, letter_to_index, normalize, sub_mod};
use crate::error::{CipherLabError, Result};

/// A validated Vigenère key: non-empty, lowercase-alphabetic,
/// stored as 0-25 shift values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereKey {
    shifts: Vec<u8>,
}

impl VigenereKey {
    /// Parse and validate a key string. Case is normalized to lowercase;
    /// empty or non-alphabetic keys are rejected.
    pub fn parse(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(CipherLabError::EmptyKey);
        }
        let bytes = normalize(key)?;
        let shifts = bytes.iter().map(|&b| b - b'a').collect();
        Ok(VigenereKey { shifts })
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Companion to [`len`](Self::len). Always false: `parse` rejects
    /// empty keys.
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Shift value at text position `i`. Cyclic indexing is the repeating-key
    /// extension: only the first `text.len()` extended positions are ever
    /// consulted.
    fn shift_at(&self, i: usize) -> u8 {
        self.shifts[i % self.shifts.len()]
    }
}

/// Encrypt lowercase-alphabetic plaintext with a repeating-key modular shift.
pub fn encrypt(plaintext: &str, key: &VigenereKey) -> Result<String> {
    let text = normalize(plaintext)?;
    let mut cipher = String::with_capacity(text.len());
    for (i, &letter) in text.iter().enumerate() {
        let shifted = add_mod(letter_to_index(letter)?, key.shift_at(i));
        cipher.push(index_to_letter(shifted) as char);
    }
    Ok(cipher)
}

/// Invert [`encrypt`]: subtract the same key shifts.
pub fn decrypt(ciphertext: &str, key: &VigenereKey) -> Result<String> {
    let text = normalize(ciphertext)?;
    let mut plain = String::with_capacity(text.len());
    for (i, &letter) in text.iter().enumerate() {
        let shifted = sub_mod(letter_to_index(letter)?, key.shift_at(i));
        plain.push(index_to_letter(shifted) as char);
    }
    Ok(plain)
}
