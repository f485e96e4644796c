//! Full analysis pipeline: n-grams, distances, key length, column shifts,
//! decryption

use tracing::{debug, warn};

use crate::cipher::{apply_key, letters_only, normalize, Direction, NonAlphabetic};
use crate::error::{AnalysisError, Result};
use crate::frequency::{FrequencyTable, Language};
use crate::kasiski::{
    collect_distances, extract_ngrams, score_key_lengths, select_key_length, KeyLengthCandidate,
    MIN_KEY_LENGTH,
};
use crate::rotation::{render_key, KeyConvention};
use crate::shift::{estimate_shift, split_columns};

/// Default n-gram length for the Kasiski examination
pub const DEFAULT_NGRAM_LENGTH: usize = 3;

/// Default exclusive upper bound for key length candidates
pub const DEFAULT_MAX_KEY_LENGTH: usize = 20;

/// Below this many letters the statistics are unreliable
pub const RELIABLE_TEXT_LENGTH: usize = 50;

/// Tunables for one analysis run
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub ngram_length: usize,
    pub max_key_length: usize,
    pub non_alphabetic: NonAlphabetic,
    pub language: Language,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            ngram_length: DEFAULT_NGRAM_LENGTH,
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
            non_alphabetic: NonAlphabetic::default(),
            language: Language::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn with_ngram_length(mut self, ngram_length: usize) -> Self {
        self.ngram_length = ngram_length;
        self
    }

    pub fn with_max_key_length(mut self, max_key_length: usize) -> Self {
        self.max_key_length = max_key_length;
        self
    }

    pub fn with_non_alphabetic(mut self, policy: NonAlphabetic) -> Self {
        self.non_alphabetic = policy;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Reference frequencies for the configured language
    pub fn frequencies(&self) -> &'static FrequencyTable {
        self.language.table()
    }

    /// Validate n-gram length and key length range
    pub fn validate(&self) -> Result<()> {
        if self.ngram_length == 0 {
            return Err(AnalysisError::InvalidConfig(
                "n-gram length must be at least 1".to_string(),
            ));
        }
        if self.max_key_length <= MIN_KEY_LENGTH {
            return Err(AnalysisError::InvalidConfig(format!(
                "maximum key length must be greater than {}, got {}",
                MIN_KEY_LENGTH, self.max_key_length
            )));
        }
        Ok(())
    }
}

/// Everything recovered from one ciphertext
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub key_length: usize,
    /// Number of repetition distances the chosen key length divides
    pub support: usize,
    pub shifts: Vec<u8>,
    pub plaintext: String,
    /// Distances between repeated n-grams, in collection order
    pub distances: Vec<usize>,
    pub candidates: Vec<KeyLengthCandidate>,
}

impl Analysis {
    /// Key string with `A` standing for shift 0
    pub fn expected_key(&self) -> String {
        self.render(KeyConvention::FirstLetter)
    }

    /// Key string with `Z` standing for shift 0
    pub fn alternative_key(&self) -> String {
        self.render(KeyConvention::LastLetter)
    }

    fn render(&self, convention: KeyConvention) -> String {
        // shifts always holds key_length >= 2 values
        render_key(&self.shifts, convention).unwrap_or_default()
    }
}

/// Breaks a repeating-key ciphertext.
///
/// Letters are upper-cased before analysis, so the decrypted text is upper
/// case. Under [`NonAlphabetic::Preserve`] the analysis sees only the letters
/// and the decrypted text keeps every other character in place.
///
/// # Errors
///
/// * [`AnalysisError::InvalidConfig`] for an unusable configuration
/// * [`AnalysisError::InvalidCiphertext`] for a non-letter under
///   [`NonAlphabetic::Reject`]
/// * [`AnalysisError::InsufficientEvidence`] when no repeated n-grams support
///   any key length
/// * [`AnalysisError::DegenerateColumn`] when the key length exceeds the text.
///   A length chosen by divisor voting divides some distance shorter than the
///   text, so in practice [`estimate_shift`] rejecting an empty column is the
///   last line of defence.
pub fn analyze(ciphertext: &str, config: &AnalysisConfig) -> Result<Analysis> {
    config.validate()?;

    let normalized = normalize(ciphertext, config.non_alphabetic)?;
    let letters = letters_only(&normalized);
    let text_length = letters.len();

    if text_length < config.ngram_length {
        warn!(
            text_length,
            ngram_length = config.ngram_length,
            "ciphertext is shorter than one n-gram"
        );
    } else if text_length < RELIABLE_TEXT_LENGTH {
        warn!(text_length, "ciphertext may be too short for reliable analysis");
    }

    let ngrams = extract_ngrams(&letters, config.ngram_length);
    let repetitions = collect_distances(&ngrams);
    let distances: Vec<usize> = repetitions.iter().map(|r| r.distance).collect();
    debug!(
        ngrams = ngrams.len(),
        repetitions = distances.len(),
        "collected repetition distances"
    );

    let candidates = score_key_lengths(&distances, config.max_key_length);
    let best = select_key_length(&candidates)?;
    let key_length = best.length;
    check_key_length(key_length, text_length)?;

    let shifts = estimate_shifts(&letters, key_length, config.frequencies())?;
    debug!(?shifts, "estimated column shifts");

    let plaintext = apply_key(&normalized, &shifts, Direction::Decrypt, config.non_alphabetic)?;

    Ok(Analysis {
        key_length,
        support: best.support,
        shifts,
        plaintext,
        candidates,
        distances,
    })
}

/// Every column must receive at least one letter
fn check_key_length(key_length: usize, text_length: usize) -> Result<()> {
    if key_length > text_length {
        return Err(AnalysisError::DegenerateColumn {
            key_length,
            text_length,
        });
    }
    Ok(())
}

/// Estimates the shift of every key phase, in phase order
#[cfg(not(feature = "parallel"))]
pub fn estimate_shifts(letters: &str, key_length: usize, table: &FrequencyTable) -> Result<Vec<u8>> {
    split_columns(letters, key_length)
        .iter()
        .map(|column| estimate_shift(column, table))
        .collect()
}

/// Estimates the shift of every key phase, in phase order
#[cfg(feature = "parallel")]
pub fn estimate_shifts(letters: &str, key_length: usize, table: &FrequencyTable) -> Result<Vec<u8>> {
    use rayon::prelude::*;

    split_columns(letters, key_length)
        .par_iter()
        .map(|column| estimate_shift(column, table))
        .collect()
}
