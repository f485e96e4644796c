//! # Vigenère Analysis Library
//!
//! Breaks repeating-key rotation (Vigenère) ciphertext without knowing the key.
//!
//! ## Pipeline
//!
//! 1. **N-grams** - every overlapping substring of a fixed length
//! 2. **Repetition distances** - spacing between identical n-grams
//! 3. **Key length** - the candidate dividing the most distances (Kasiski examination)
//! 4. **Column shifts** - per key phase, the rotation whose letter frequencies best match a reference language
//! 5. **Decryption** - every letter rotated back by the shift of its phase
//!
//! ## Usage
//!
//! ```rust
//! use vigenere_analysis::{analyze, encrypt, AnalysisConfig};
//!
//! let plaintext = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG".repeat(3);
//! let ciphertext = encrypt(&plaintext, &[3, 1, 7])?;
//!
//! let analysis = analyze(&ciphertext, &AnalysisConfig::default())?;
//! assert_eq!(analysis.key_length, 3);
//! assert_eq!(analysis.expected_key(), "DBH");
//! assert_eq!(analysis.plaintext, plaintext);
//! # Ok::<(), vigenere_analysis::AnalysisError>(())
//! ```
//!
//! ## Features
//!
//! - `parallel` - estimate column shifts on the rayon thread pool

// Public modules
pub mod analysis;
pub mod cipher;
pub mod error;
pub mod frequency;
pub mod kasiski;
pub mod rotation;
pub mod shift;

// Re-exports for easy access
pub use analysis::{analyze, Analysis, AnalysisConfig};
pub use cipher::{apply_key, decrypt, encrypt, Direction, NonAlphabetic};
pub use error::{AnalysisError, Result};
pub use frequency::{FrequencyTable, Language, ENGLISH, GERMAN};
pub use kasiski::{collect_distances, estimate_key_length, extract_ngrams, KeyLengthCandidate};
pub use rotation::{parse_key, render_key, rotate, KeyConvention};
pub use shift::estimate_shift;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
