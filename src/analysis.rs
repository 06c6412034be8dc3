//! Letter-frequency analysis of (cipher)text.
//!
//! Classical ciphers leak: substitution shifts the frequency profile around
//! and transposition leaves it untouched entirely. Comparing a ciphertext's
//! per-letter frequencies (and its index of coincidence) against English
//! shows how much structure survives encryption.

use crate::alphabet::{normalize, ALPHABET};
use crate::error::{CipherLabError, Result};
use serde::Serialize;

/// Per-letter occurrence counts for a text.
fn letter_counts(text: &str) -> Result<([usize; 26], usize)> {
    let bytes = normalize(text)?;
    if bytes.is_empty() {
        return Err(CipherLabError::EmptyText);
    }
    let mut counts = [0usize; 26];
    for &b in &bytes {
        counts[(b - b'a') as usize] += 1;
    }
    Ok((counts, bytes.len()))
}

/// Relative frequency of each letter a-z in `text`, in alphabetical order.
/// The 26 entries sum to 1.0 (up to floating-point rounding).
/// Empty text is an error, never a division by zero.
pub fn letter_frequencies(text: &str) -> Result<[f64; 26]> {
    let (counts, total) = letter_counts(text)?;
    let mut frequencies = [0.0f64; 26];
    for (freq, count) in frequencies.iter_mut().zip(counts) {
        *freq = count as f64 / total as f64;
    }
    Ok(frequencies)
}

/// Index of coincidence: the probability that two distinct positions hold the
/// same letter. Around 0.066 for English, 1/26 ≈ 0.038 for uniform text.
/// Needs at least two characters.
pub fn index_of_coincidence(text: &str) -> Result<f64> {
    let (counts, total) = letter_counts(text)?;
    if total < 2 {
        return Err(CipherLabError::InvalidInput(
            "index of coincidence needs at least two characters".to_string(),
        ));
    }
    let numerator: usize = counts.iter().map(|&n| n * n.saturating_sub(1)).sum();
    Ok(numerator as f64 / (total * (total - 1)) as f64)
}

/// The (letter, frequency) pairs a chart consumer renders as a distribution
/// bar chart.
#[derive(Debug, Clone, Serialize)]
pub struct FrequencyReport {
    pub letters: Vec<char>,
    pub frequencies: Vec<f64>,
    pub index_of_coincidence: f64,
}

impl FrequencyReport {
    pub fn new(text: &str) -> Result<Self> {
        Ok(FrequencyReport {
            letters: ALPHABET.iter().map(|&b| b as char).collect(),
            frequencies: letter_frequencies(text)?.to_vec(),
            index_of_coincidence: index_of_coincidence(text)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequencies_of_uniform_text() {
        let freq = letter_frequencies("abab").unwrap();
        assert_eq!(freq[0], 0.5);
        assert_eq!(freq[1], 0.5);
        assert_eq!(freq[2], 0.0);
    }

    #[test]
    fn test_frequencies_sum_to_one() {
        let freq = letter_frequencies("wearediscoveredsaveyourself").unwrap();
        let sum: f64 = freq.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9, "sum was {}", sum);
    }

    #[test]
    fn test_empty_text_is_an_error() {
        assert_eq!(letter_frequencies("").unwrap_err(), CipherLabError::EmptyText);
    }

    #[test]
    fn test_index_of_coincidence_extremes() {
        // all-same text: every pair coincides
        assert_eq!(index_of_coincidence("aaaa").unwrap(), 1.0);
        // all-distinct text: no pair coincides
        assert_eq!(index_of_coincidence("abcd").unwrap(), 0.0);
    }

    #[test]
    fn test_index_of_coincidence_with_absent_letters() {
        // most letters have a zero count; only the double "l" coincides:
        // 2*1 / (5*4) = 0.1
        assert_eq!(index_of_coincidence("hello").unwrap(), 0.1);
    }

    #[test]
    fn test_index_of_coincidence_needs_two_characters() {
        assert!(index_of_coincidence("a").is_err());
    }

    #[test]
    fn test_transposition_preserves_frequencies() {
        use crate::cipher::transposition::{encrypt, RemainderPolicy, TranspositionKey};
        let key = TranspositionKey::parse("4312567").unwrap();
        let plain = "attackpostponeduntiltwoamxyz";
        let cipher = encrypt(plain, &key, RemainderPolicy::Reject).unwrap();
        assert_eq!(
            letter_frequencies(plain).unwrap(),
            letter_frequencies(&cipher).unwrap()
        );
    }

    #[test]
    fn test_report_shape() {
        let report = FrequencyReport::new("hello").unwrap();
        assert_eq!(report.letters.len(), 26);
        assert_eq!(report.frequencies.len(), 26);
        assert_eq!(report.letters[0], 'a');
        assert_eq!(report.letters[25], 'z');
    }
}
