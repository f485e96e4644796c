use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use rand::Rng;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vigenere_analysis::{apply_key, parse_key, render_key, Direction, KeyConvention, NonAlphabetic};

/// Command-line arguments for the Vigenère cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file (stdin if omitted)")]
    file: Option<String>,

    /// Key string for the Vigenère cipher
    #[arg(short, long, help = "Key string for the cipher", conflicts_with = "random_key")]
    key: Option<String>,

    /// Generate a random key of this many letters (encrypt only)
    #[arg(short, long, value_name = "LENGTH")]
    random_key: Option<usize>,

    /// Read the key with Z standing for shift 0 instead of A
    #[arg(short, long)]
    alternative: bool,

    /// Path to the output file where result will be saved
    #[arg(short, long, help = "Path to the output file (stdout if omitted)")]
    output: Option<String>,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,

    /// Enable debug tracing on stderr
    #[arg(long)]
    debug: bool,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

impl From<OperationMode> for Direction {
    fn from(mode: OperationMode) -> Self {
        match mode {
            OperationMode::Encrypt => Direction::Encrypt,
            OperationMode::Decrypt => Direction::Decrypt,
        }
    }
}

fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(io::stderr)
            .init();
    }
}

/// Draws `length` shifts uniformly from 0-25
fn random_shifts(length: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..length).map(|_| rng.gen_range(0..26)).collect()
}

/// Resolves the shift vector from either an explicit or a random key
fn shifts(cli: &Cli, convention: KeyConvention) -> Result<Vec<u8>> {
    match (&cli.key, cli.random_key, cli.mode) {
        (Some(key), None, _) => Ok(parse_key(key, convention)?),
        (None, Some(0), _) => bail!("Random key length must be at least 1"),
        (None, Some(length), OperationMode::Encrypt) => {
            let shifts = random_shifts(length);
            eprintln!("Generated key: {}", render_key(&shifts, convention)?);
            Ok(shifts)
        }
        (None, Some(_), OperationMode::Decrypt) => {
            bail!("A random key can only be used to encrypt")
        }
        _ => bail!("Either --key or --random-key is required"),
    }
}

/// Main entry point for the Vigenère cipher program.
fn main() -> Result<()> {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();
    init_tracing(cli.debug);

    let convention = if cli.alternative {
        KeyConvention::LastLetter
    } else {
        KeyConvention::FirstLetter
    };
    let shifts = shifts(&cli, convention)?;
    debug!(?shifts, mode = ?cli.mode, "applying key");

    // Read input content
    let content: String = match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    // Non-alphabetic characters remain unchanged
    let result = apply_key(&content, &shifts, cli.mode.into(), NonAlphabetic::Preserve)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, result)
                .with_context(|| format!("Failed to write output file {}", path))?;
            eprintln!("Operation completed successfully! Output saved to: {}", path);
        }
        None => print!("{}", result),
    }

    Ok(())
}
