//! Kasiski examination: repeated n-grams and the key lengths their spacing supports

pub mod distances;
pub mod key_length;
pub mod ngrams;

pub use distances::{collect_distances, Repetition};
pub use key_length::{
    estimate_key_length, score_key_lengths, select_key_length, KeyLengthCandidate, MIN_KEY_LENGTH,
};
pub use ngrams::{extract_ngrams, Ngram};
