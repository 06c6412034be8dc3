//! The two classical ciphers and a kind-dispatch layer over them.

pub mod transposition;
pub mod vigenere;

use crate::error::{CipherLabError, Result};
use serde::{Deserialize, Serialize};
use transposition::{RemainderPolicy, TranspositionKey};
use vigenere::VigenereKey;

/// Which cipher to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    #[default]
    Vigenere,
    Transposition,
}

impl std::str::FromStr for CipherKind {
    type Err = CipherLabError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "vigenere" => Ok(Self::Vigenere),
            "transposition" => Ok(Self::Transposition),
            _ => Err(CipherLabError::UnsupportedOption(format!("cipher: {}", s))),
        }
    }
}

impl std::fmt::Display for CipherKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vigenere => write!(f, "vigenere"),
            Self::Transposition => write!(f, "transposition"),
        }
    }
}

/// Parse `key` for `kind` and encrypt `text` with it.
pub fn encrypt_with(
    kind: CipherKind,
    text: &str,
    key: &str,
    policy: RemainderPolicy,
) -> Result<String> {
    match kind {
        CipherKind::Vigenere => vigenere::encrypt(text, &VigenereKey::parse(key)?),
        CipherKind::Transposition => {
            transposition::encrypt(text, &TranspositionKey::parse(key)?, policy)
        }
    }
}

/// Parse `key` for `kind` and decrypt `text` with it.
pub fn decrypt_with(
    kind: CipherKind,
    text: &str,
    key: &str,
    policy: RemainderPolicy,
) -> Result<String> {
    match kind {
        CipherKind::Vigenere => vigenere::decrypt(text, &VigenereKey::parse(key)?),
        CipherKind::Transposition => {
            transposition::decrypt(text, &TranspositionKey::parse(key)?, policy)
        }
    }
}
