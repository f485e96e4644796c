//! Per-column shift estimation by frequency matching

use crate::error::Result;
use crate::frequency::{observed_frequencies, FrequencyTable};
use crate::rotation::ALPHABET_LEN;

/// Letters sharing one key phase: every `key_length`-th character starting
/// at `phase`.
pub fn column(text: &str, key_length: usize, phase: usize) -> String {
    text.chars().skip(phase).step_by(key_length.max(1)).collect()
}

/// Splits text into one column per key phase
pub fn split_columns(text: &str, key_length: usize) -> Vec<String> {
    if key_length == 0 {
        return Vec::new();
    }

    let mut columns = vec![String::new(); key_length];

    for (i, c) in text.chars().enumerate() {
        columns[i % key_length].push(c);
    }

    columns
}

/// Total absolute deviation from the reference table for each candidate
/// shift `r`, comparing every reference letter with the observed frequency
/// of that letter rotated by `r`.
pub fn shift_deviations(column: &str, table: &FrequencyTable) -> Result<[f64; 26]> {
    let observed = observed_frequencies(column)?;
    let mut deviations = [0.0; 26];

    for (shift, deviation) in deviations.iter_mut().enumerate() {
        *deviation = (0..ALPHABET_LEN as usize)
            .map(|letter| {
                let rotated = (letter + shift) % ALPHABET_LEN as usize;
                (table.expected(letter) - observed[rotated]).abs()
            })
            .sum();
    }

    Ok(deviations)
}

/// Estimates the shift (0-25) that produced a column from plaintext in the
/// table's language. Ties go to the smallest shift.
///
/// # Errors
///
/// Empty columns and non-letters are rejected rather than defaulting to 0.
pub fn estimate_shift(column: &str, table: &FrequencyTable) -> Result<u8> {
    let deviations = shift_deviations(column, table)?;

    let mut best_shift = 0;
    for (shift, &deviation) in deviations.iter().enumerate() {
        if deviation < deviations[best_shift] {
            best_shift = shift;
        }
    }

    Ok(best_shift as u8)
}
