//! Cipherlab - Classical Cipher Workbench
//!
//! Vigenère and columnar transposition ciphers with matching encrypt/decrypt
//! pairs, plus the cryptanalysis instruments used to study them: a
//! brute-force key-sweep timer and a letter-frequency analyzer. These ciphers
//! are cryptographically broken by design; the point is to measure *how*
//! broken - key-space growth against brute-force cost, and the frequency
//! structure that survives encryption.
//!
//! ## Cipher composition
//!
//! ```text
//! plaintext → Vigenère (key "nat") → Transposition (key "12435") → ciphertext
//! ```
//!
//! Decryption peels the layers in reverse order. The brute-force harness
//! sweeps a single cipher's key-space or the Cartesian product of two.
//!
//! ## Example
//!
//! ```
//! use cipherlab::cipher::vigenere::{self, VigenereKey};
//! use cipherlab::analysis::letter_frequencies;
//!
//! let key = VigenereKey::parse("deceptive").unwrap();
//! let cipher = vigenere::encrypt("wearediscoveredsaveyourself", &key).unwrap();
//! assert_eq!(cipher, "zicvtwqngrzgvtwavzhcqyglmgj");
//! assert_eq!(
//!     vigenere::decrypt(&cipher, &key).unwrap(),
//!     "wearediscoveredsaveyourself"
//! );
//!
//! let freq = letter_frequencies(&cipher).unwrap();
//! assert!((freq.iter().sum::<f64>() - 1.0).abs() < 1e-9);
//! ```

pub mod alphabet;
pub mod analysis;
pub mod bruteforce;
pub mod cipher;
pub mod error;

pub use cipher::transposition::{RemainderPolicy, TranspositionKey};
pub use cipher::vigenere::VigenereKey;
pub use cipher::{decrypt_with, encrypt_with, CipherKind};
pub use error::{CipherLabError, Result};
