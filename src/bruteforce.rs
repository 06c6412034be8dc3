//! Brute-force key-sweep harness.
//!
//! Enumerates a cipher's key-space, optionally keeps only a prefix of it to
//! model expected time-to-success under a random search order, and measures
//! how long a decryption sweep over the candidates takes. The harness is a
//! cost instrument: it never inspects decrypted output for plausibility, and
//! a failing candidate never stops the sweep.

use crate::alphabet::ALPHABET;
use crate::cipher::transposition::RemainderPolicy;
use crate::cipher::{decrypt_with, CipherKind};
use crate::error::{CipherLabError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Keep the first half of the enumeration: expected position of a uniformly
/// placed key.
pub const HALF: f64 = 0.5;

/// Keep the first 1/sqrt(2) of each layer's enumeration, so a two-layer
/// Cartesian product is sampled at one half overall.
pub const INV_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Size of the key-space of `key_length`-symbol keys drawn without repetition
/// from an alphabet of `alphabet_len` symbols: the falling factorial
/// n * (n-1) * ... * (n-k+1).
pub fn keyspace_size(alphabet_len: usize, key_length: usize) -> u64 {
    if key_length > alphabet_len {
        return 0;
    }
    (0..key_length)
        .map(|i| (alphabet_len - i) as u64)
        .product()
}

/// Enumerate every ordering of `key_length` symbols drawn without repetition
/// from `symbols`, in lexicographic symbol order.
pub fn enumerate_keyspace(symbols: &str, key_length: usize) -> Result<Vec<String>> {
    let symbols: Vec<char> = symbols.chars().collect();
    if key_length > symbols.len() {
        return Err(CipherLabError::InvalidInput(format!(
            "key length {} exceeds alphabet size {}",
            key_length,
            symbols.len()
        )));
    }

    let mut candidates = Vec::with_capacity(keyspace_size(symbols.len(), key_length) as usize);
    let mut used = vec![false; symbols.len()];
    let mut current = String::with_capacity(key_length);
    extend(&symbols, key_length, &mut used, &mut current, &mut candidates);
    Ok(candidates)
}

fn extend(
    symbols: &[char],
    key_length: usize,
    used: &mut [bool],
    current: &mut String,
    out: &mut Vec<String>,
) {
    if current.len() == key_length {
        out.push(current.clone());
        return;
    }
    for (i, &symbol) in symbols.iter().enumerate() {
        if used[i] {
            continue;
        }
        used[i] = true;
        current.push(symbol);
        extend(symbols, key_length, used, current, out);
        current.pop();
        used[i] = false;
    }
}

/// The key-space a brute-force attack on `kind` has to cover: letter
/// k-permutations for Vigenère, digit permutations for transposition.
pub fn keyspace_for(kind: CipherKind, key_length: usize) -> Result<Vec<String>> {
    match kind {
        CipherKind::Vigenere => {
            let letters: String = ALPHABET.iter().map(|&b| b as char).collect();
            enumerate_keyspace(&letters, key_length)
        }
        CipherKind::Transposition => {
            if key_length > 9 {
                return Err(CipherLabError::InvalidInput(format!(
                    "transposition keys support at most 9 columns, got {}",
                    key_length
                )));
            }
            let digits: String = (1..=key_length)
                .map(|d| char::from_digit(d as u32, 10).unwrap_or('0'))
                .collect();
            enumerate_keyspace(&digits, key_length)
        }
    }
}

/// Keep the first `floor(len * fraction)` candidates. The fraction must lie
/// in (0, 1].
pub fn sample_prefix(candidates: &[String], fraction: f64) -> Result<&[String]> {
    if !(fraction > 0.0 && fraction <= 1.0) {
        return Err(CipherLabError::InvalidInput(format!(
            "sampling fraction must be in (0, 1], got {}",
            fraction
        )));
    }
    let keep = (candidates.len() as f64 * fraction).floor() as usize;
    Ok(&candidates[..keep])
}

/// Deterministically shuffle the candidate search order. Models the
/// uniformly-random key position the sampling fraction assumes.
pub fn shuffle_candidates(candidates: &mut [String], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    candidates.shuffle(&mut rng);
}

/// Run `decrypt` over every candidate key and report the wall-clock elapsed
/// time of the whole sweep. Output is discarded; errors for individual
/// candidates do not stop the sweep.
pub fn sweep<F>(ciphertext: &str, candidates: &[String], mut decrypt: F) -> Duration
where
    F: FnMut(&str, &str) -> Result<String>,
{
    let start = Instant::now();
    for key in candidates {
        let _ = std::hint::black_box(decrypt(ciphertext, key));
    }
    start.elapsed()
}

/// Two-stage sweep over the Cartesian product of two key-spaces.
///
/// `first`/`second` refer to encryption order: the plaintext went through the
/// first cipher, then the second. Each candidate pair therefore peels the
/// second layer before the first.
pub fn sweep_layered<F, S>(
    ciphertext: &str,
    first_keys: &[String],
    second_keys: &[String],
    mut first_decrypt: F,
    mut second_decrypt: S,
) -> Duration
where
    F: FnMut(&str, &str) -> Result<String>,
    S: FnMut(&str, &str) -> Result<String>,
{
    let start = Instant::now();
    for first_key in first_keys {
        for second_key in second_keys {
            if let Ok(middle) = second_decrypt(ciphertext, second_key) {
                let _ = std::hint::black_box(first_decrypt(&middle, first_key));
            }
        }
    }
    start.elapsed()
}

/// Knobs for a timed sweep.
#[derive(Debug, Clone, Copy)]
pub struct SweepOptions {
    /// Fraction of the enumerated key-space to actually try.
    pub fraction: f64,
    /// Shuffle the search order with this seed before sampling.
    pub shuffle_seed: Option<u64>,
}

impl Default for SweepOptions {
    fn default() -> Self {
        SweepOptions {
            fraction: HALF,
            shuffle_seed: None,
        }
    }
}

/// One timing measurement: how long a sweep over the sampled key-space of a
/// given key length took. The (key_length, seconds) pairs feed the timing
/// bar chart.
#[derive(Debug, Clone, Serialize)]
pub struct SweepPoint {
    pub key_length: usize,
    pub keyspace: u64,
    pub candidates_tried: usize,
    pub seconds: f64,
}

/// Sweep `ciphertext` for each key length in turn and collect the timings.
pub fn sweep_series(
    kind: CipherKind,
    ciphertext: &str,
    key_lengths: &[usize],
    options: &SweepOptions,
) -> Result<Vec<SweepPoint>> {
    let mut points = Vec::with_capacity(key_lengths.len());
    for &key_length in key_lengths {
        let mut candidates = keyspace_for(kind, key_length)?;
        let keyspace = candidates.len() as u64;
        if let Some(seed) = options.shuffle_seed {
            shuffle_candidates(&mut candidates, seed);
        }
        let sampled = sample_prefix(&candidates, options.fraction)?;
        let elapsed = sweep(ciphertext, sampled, |text, key| {
            decrypt_with(kind, text, key, RemainderPolicy::Truncate)
        });
        points.push(SweepPoint {
            key_length,
            keyspace,
            candidates_tried: sampled.len(),
            seconds: elapsed.as_secs_f64(),
        });
    }
    Ok(points)
}

/// Timing of a brute-force sweep over a two-layer cipher's product key-space.
#[derive(Debug, Clone, Serialize)]
pub struct LayeredSweepReport {
    pub first: CipherKind,
    pub second: CipherKind,
    pub total_keyspace: u64,
    pub pairs_tried: u64,
    pub seconds: f64,
}

/// Sweep the Cartesian product of the two layers' key-spaces, sampling each
/// layer's enumeration by `options.fraction`.
pub fn layered_sweep(
    first: CipherKind,
    first_key_length: usize,
    second: CipherKind,
    second_key_length: usize,
    ciphertext: &str,
    options: &SweepOptions,
) -> Result<LayeredSweepReport> {
    let mut first_keys = keyspace_for(first, first_key_length)?;
    let mut second_keys = keyspace_for(second, second_key_length)?;
    let total_keyspace = first_keys.len() as u64 * second_keys.len() as u64;

    if let Some(seed) = options.shuffle_seed {
        shuffle_candidates(&mut first_keys, seed);
        shuffle_candidates(&mut second_keys, seed.wrapping_add(1));
    }
    let first_sampled = sample_prefix(&first_keys, options.fraction)?;
    let second_sampled = sample_prefix(&second_keys, options.fraction)?;

    let elapsed = sweep_layered(
        ciphertext,
        first_sampled,
        second_sampled,
        |text, key| decrypt_with(first, text, key, RemainderPolicy::Truncate),
        |text, key| decrypt_with(second, text, key, RemainderPolicy::Truncate),
    );

    Ok(LayeredSweepReport {
        first,
        second,
        total_keyspace,
        pairs_tried: first_sampled.len() as u64 * second_sampled.len() as u64,
        seconds: elapsed.as_secs_f64(),
    })
}
