//! Columnar transposition cipher.
//!
//! The plaintext is laid out row-major into an R×N grid, where N is the key
//! length. The key is a permutation of the digits 1..=N: the digit at key
//! position `i` is the read-out rank of column `i`. Encryption emits the
//! columns in rank order, each top-to-bottom; decryption reverses the walk.
//!
//! When the text length is not a multiple of N there is no full last row.
//! [`RemainderPolicy`] makes the handling explicit: `Truncate` drops the
//! trailing remainder (the historical behavior, not recoverable on decrypt),
//! `Reject` refuses the input.

use crate::alphabet::normalize;
use crate::error::{CipherLabError, Result};
use serde::{Deserialize, Serialize};

/// How to handle text whose length is not a multiple of the column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RemainderPolicy {
    /// Drop the trailing remainder characters. Lossy: they cannot be
    /// recovered on decrypt.
    #[default]
    Truncate,
    /// Error out unless the length divides evenly.
    Reject,
}

impl std::str::FromStr for RemainderPolicy {
    type Err = CipherLabError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "truncate" => Ok(Self::Truncate),
            "reject" => Ok(Self::Reject),
            _ => Err(CipherLabError::UnsupportedOption(format!(
                "remainder policy: {}",
                s
            ))),
        }
    }
}

/// A validated transposition key: a permutation of the digits 1..=N.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspositionKey {
    /// ranks[i] = 0-based read-out rank of column i (the key digit minus 1).
    ranks: Vec<usize>,
    /// readout[r] = column holding rank r; inverse of `ranks`.
    readout: Vec<usize>,
}

impl TranspositionKey {
    /// Parse and validate a key string. The key must consist of the decimal
    /// digits 1..=N, each exactly once, where N is the key length (at most 9).
    pub fn parse(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(CipherLabError::EmptyKey);
        }
        let columns = key.len();
        if columns > 9 {
            return Err(CipherLabError::InvalidKey(format!(
                "at most 9 columns supported, got {}",
                columns
            )));
        }

        let mut ranks = Vec::with_capacity(columns);
        let mut seen = vec![false; columns];
        for ch in key.chars() {
            let digit = ch.to_digit(10).ok_or_else(|| {
                CipherLabError::InvalidKey(format!("non-digit character {:?}", ch))
            })? as usize;
            if digit == 0 || digit > columns {
                return Err(CipherLabError::InvalidKey(format!(
                    "digit {} out of range 1..={}",
                    digit, columns
                )));
            }
            if seen[digit - 1] {
                return Err(CipherLabError::InvalidKey(format!(
                    "digit {} appears more than once",
                    digit
                )));
            }
            seen[digit - 1] = true;
            ranks.push(digit - 1);
        }

        let mut readout = vec![0usize; columns];
        for (column, &rank) in ranks.iter().enumerate() {
            readout[rank] = column;
        }

        Ok(TranspositionKey { ranks, readout })
    }

    /// Number of grid columns (= key length).
    pub fn columns(&self) -> usize {
        self.ranks.len()
    }

    fn check_length(&self, len: usize, policy: RemainderPolicy) -> Result<usize> {
        let columns = self.columns();
        if policy == RemainderPolicy::Reject && len % columns != 0 {
            return Err(CipherLabError::LengthNotMultiple { len, columns });
        }
        Ok(len / columns)
    }
}

/// Encrypt by reading the row-major grid out column by column, columns in
/// key-digit order.
pub fn encrypt(plaintext: &str, key: &TranspositionKey, policy: RemainderPolicy) -> Result<String> {
    let text = normalize(plaintext)?;
    let columns = key.columns();
    let rows = key.check_length(text.len(), policy)?;

    let mut cipher = String::with_capacity(rows * columns);
    for &column in &key.readout {
        for row in 0..rows {
            cipher.push(text[column + row * columns] as char);
        }
    }
    Ok(cipher)
}

/// Invert [`encrypt`]: rebuild each row by visiting the key digits
/// left-to-right and indexing into the column-major ciphertext.
pub fn decrypt(
    ciphertext: &str,
    key: &TranspositionKey,
    policy: RemainderPolicy,
) -> Result<String> {
    let text = normalize(ciphertext)?;
    let columns = key.columns();
    let rows = key.check_length(text.len(), policy)?;

    let mut plain = String::with_capacity(rows * columns);
    for row in 0..rows {
        for &rank in &key.ranks {
            plain.push(text[rank * rows + row] as char);
        }
    }
    Ok(plain)
}
