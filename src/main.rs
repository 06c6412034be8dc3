use cipherlab::analysis::FrequencyReport;
use cipherlab::bruteforce::{layered_sweep, sweep_series, SweepOptions, HALF, INV_SQRT_2};
use cipherlab::cipher::transposition::RemainderPolicy;
use cipherlab::cipher::{decrypt_with, encrypt_with, CipherKind};
use clap::{Parser, Subcommand};
use rand::Rng;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "cipherlab")]
#[command(author, about = "Classical cipher workbench: Vigenere and columnar transposition", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with a single cipher
    #[command(alias = "e")]
    Encrypt {
        /// Cipher to apply
        #[arg(long, default_value = "vigenere", value_parser = parse_cipher)]
        cipher: CipherKind,

        /// Key: letters for vigenere, a digit permutation for transposition
        #[arg(long, required = true)]
        key: String,

        /// Handling of text that doesn't fill the last transposition row
        #[arg(long, default_value = "truncate", value_parser = parse_remainder)]
        remainder: RemainderPolicy,

        /// Text to encrypt (lowercase letters only)
        text: String,
    },

    /// Decrypt text with a single cipher
    #[command(alias = "d")]
    Decrypt {
        /// Cipher to invert
        #[arg(long, default_value = "vigenere", value_parser = parse_cipher)]
        cipher: CipherKind,

        /// Key used at encryption time
        #[arg(long, required = true)]
        key: String,

        /// Handling of text that doesn't fill the last transposition row
        #[arg(long, default_value = "truncate", value_parser = parse_remainder)]
        remainder: RemainderPolicy,

        /// Text to decrypt
        text: String,
    },

    /// Letter-frequency distribution and index of coincidence of a text
    #[command(alias = "f")]
    Freq {
        /// Text to analyze
        text: String,

        /// Emit the (letter, frequency) series as JSON for chart rendering
        #[arg(long)]
        json: bool,
    },

    /// Time brute-force decryption sweeps across growing key lengths
    #[command(alias = "s")]
    Sweep {
        /// Cipher whose key-space is swept
        #[arg(long, default_value = "vigenere", value_parser = parse_cipher)]
        cipher: CipherKind,

        /// Key lengths to measure
        #[arg(long, value_delimiter = ',', default_value = "1,2,3,4")]
        key_lengths: Vec<usize>,

        /// Fraction of each key-space to actually try
        #[arg(long, default_value_t = HALF)]
        fraction: f64,

        /// Shuffle the candidate order before sampling
        #[arg(long)]
        shuffle_order: bool,

        /// Seed for --shuffle-order (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the (key length, seconds) series as JSON for chart rendering
        #[arg(long)]
        json: bool,

        /// Ciphertext to sweep against
        text: String,
    },

    /// Time a brute-force sweep over a two-layer cipher's product key-space
    #[command(alias = "l")]
    Layered {
        /// First cipher applied at encryption time
        #[arg(long, default_value = "vigenere", value_parser = parse_cipher)]
        first: CipherKind,

        /// Key length of the first layer
        #[arg(long, default_value_t = 3)]
        first_key_length: usize,

        /// Second cipher applied at encryption time
        #[arg(long, default_value = "transposition", value_parser = parse_cipher)]
        second: CipherKind,

        /// Key length of the second layer
        #[arg(long, default_value_t = 5)]
        second_key_length: usize,

        /// Fraction of each layer's key-space to actually try
        #[arg(long, default_value_t = INV_SQRT_2)]
        fraction: f64,

        /// Shuffle each layer's candidate order before sampling
        #[arg(long)]
        shuffle_order: bool,

        /// Seed for --shuffle-order (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,

        /// Ciphertext to sweep against
        text: String,
    },
}

fn parse_cipher(s: &str) -> Result<CipherKind, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn parse_remainder(s: &str) -> Result<RemainderPolicy, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn sweep_options(fraction: f64, shuffle_order: bool, seed: Option<u64>) -> SweepOptions {
    let shuffle_seed = if shuffle_order {
        Some(seed.unwrap_or_else(|| rand::thread_rng().gen()))
    } else {
        None
    };
    SweepOptions {
        fraction,
        shuffle_seed,
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Encrypt {
            cipher,
            key,
            remainder,
            text,
        } => {
            println!("{}", encrypt_with(cipher, &text, &key, remainder)?);
        }
        Commands::Decrypt {
            cipher,
            key,
            remainder,
            text,
        } => {
            println!("{}", decrypt_with(cipher, &text, &key, remainder)?);
        }
        Commands::Freq { text, json } => {
            let report = FrequencyReport::new(&text)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Letter frequencies ({} characters):", text.len());
                for (letter, freq) in report.letters.iter().zip(&report.frequencies) {
                    println!("  {}  {:.4}", letter, freq);
                }
                println!("Index of coincidence: {:.4}", report.index_of_coincidence);
            }
        }
        Commands::Sweep {
            cipher,
            key_lengths,
            fraction,
            shuffle_order,
            seed,
            json,
            text,
        } => {
            let options = sweep_options(fraction, shuffle_order, seed);
            let points = sweep_series(cipher, &text, &key_lengths, &options)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&points)?);
            } else {
                println!(
                    "Brute-force sweep, {} cipher, fraction {:.4}:",
                    cipher, fraction
                );
                for point in &points {
                    println!(
                        "  key length {}: {} of {} candidates in {:.6} s",
                        point.key_length, point.candidates_tried, point.keyspace, point.seconds
                    );
                }
            }
        }
        Commands::Layered {
            first,
            first_key_length,
            second,
            second_key_length,
            fraction,
            shuffle_order,
            seed,
            json,
            text,
        } => {
            let options = sweep_options(fraction, shuffle_order, seed);
            let report = layered_sweep(
                first,
                first_key_length,
                second,
                second_key_length,
                &text,
                &options,
            )?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "Layered sweep, {} (len {}) then {} (len {}):",
                    report.first, first_key_length, report.second, second_key_length
                );
                println!("  total key-space: {}", report.total_keyspace);
                println!("  pairs tried:     {}", report.pairs_tried);
                println!("  elapsed:         {:.6} s", report.seconds);
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
