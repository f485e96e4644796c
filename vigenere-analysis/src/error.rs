//! Error types for ciphertext analysis

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Character {0:?} is outside the A-Z alphabet")]
    InputDomain(char),

    #[error("Character {character:?} at offset {offset} is outside the A-Z alphabet")]
    InvalidCiphertext { character: char, offset: usize },

    #[error("No repeated patterns with usable spacing found, key length cannot be estimated")]
    InsufficientEvidence,

    #[error("Key length {key_length} exceeds text length {text_length}")]
    DegenerateColumn { key_length: usize, text_length: usize },

    #[error("Column contains no letters")]
    EmptyColumn,

    #[error("Key must contain at least one shift value")]
    EmptyKey,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
