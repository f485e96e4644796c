use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use vigenere_analysis::analysis::{DEFAULT_MAX_KEY_LENGTH, DEFAULT_NGRAM_LENGTH};
use vigenere_analysis::{analyze, Analysis, AnalysisConfig, Language, NonAlphabetic};

/// Command-line arguments for the Vigenère decryptor program.
#[derive(Parser, Debug)]
#[command(about = "Recovers the key and plaintext of Vigenère ciphertext")]
struct Cli {
    /// Read the ciphertext from a file instead of standard input
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: Option<String>,

    /// Also write the decrypted text to a file
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: Option<String>,

    /// Length of the repeated substrings searched for
    #[arg(short = 'n', long, default_value_t = DEFAULT_NGRAM_LENGTH)]
    ngram_length: usize,

    /// Key lengths from 2 up to (but excluding) this value are considered
    #[arg(short, long, default_value_t = DEFAULT_MAX_KEY_LENGTH)]
    max_key_length: usize,

    /// Keep spaces and punctuation instead of rejecting them
    #[arg(short, long)]
    preserve_non_alpha: bool,

    /// Reference language for frequency matching
    #[arg(short, long, value_enum, default_value_t = LanguageArg::English)]
    language: LanguageArg,

    /// Print the key length candidate table
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug tracing on stderr
    #[arg(long)]
    debug: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LanguageArg {
    English,
    German,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::English => Language::English,
            LanguageArg::German => Language::German,
        }
    }
}

impl Cli {
    fn config(&self) -> AnalysisConfig {
        let policy = if self.preserve_non_alpha {
            NonAlphabetic::Preserve
        } else {
            NonAlphabetic::Reject
        };

        AnalysisConfig::default()
            .with_ngram_length(self.ngram_length)
            .with_max_key_length(self.max_key_length)
            .with_non_alphabetic(policy)
            .with_language(self.language.into())
    }
}

/// Initialize tracing subscriber for debug output
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

/// Reads one line of ciphertext, prompting when attached to a terminal
fn read_ciphertext(file: Option<&str>) -> Result<String> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path))?,
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                println!("Enter the cipher text to decrypt: ");
                io::stdout().flush()?;
            }
            let mut line = String::new();
            stdin
                .lock()
                .read_line(&mut line)
                .context("Failed to read cipher text from stdin")?;
            line
        }
    };

    Ok(text.trim_end_matches(['\r', '\n']).to_string())
}

fn print_candidates(analysis: &Analysis) {
    println!("Key length candidates ({} repetitions):", analysis.distances.len());
    for candidate in &analysis.candidates {
        let marker = if candidate.length == analysis.key_length { "*" } else { " " };
        println!("{} {:>3}  {}", marker, candidate.length, candidate.support);
    }
    println!();
}

fn main() -> Result<()> {
    let cli: Cli = Cli::parse();
    init_tracing(cli.debug);

    let ciphertext = read_ciphertext(cli.file.as_deref())?;
    let analysis = analyze(&ciphertext, &cli.config()).context("Analysis failed")?;

    if cli.verbose {
        print_candidates(&analysis);
    }

    println!("Found key length: {}", analysis.key_length);
    println!();
    println!("Expected key: ");
    println!("{}", analysis.expected_key());
    println!();
    println!("Alternative key (different starting shift sometimes encountered): ");
    println!("{}", analysis.alternative_key());
    println!();
    println!("Decrypted text: ");
    println!("{}", analysis.plaintext);

    if let Some(output) = &cli.output {
        std::fs::write(output, &analysis.plaintext)
            .with_context(|| format!("Failed to write output file {}", output))?;
    }

    Ok(())
}
