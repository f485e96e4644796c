//! Key length estimation by divisor voting

use tracing::debug;

use crate::error::{AnalysisError, Result};

/// Smallest key length considered
pub const MIN_KEY_LENGTH: usize = 2;

/// A candidate key length and how many repetition distances it divides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLengthCandidate {
    pub length: usize,
    pub support: usize,
}

/// Scores every candidate in `[2, max_candidate)` by the number of distances
/// it divides evenly. Candidates are returned in ascending order.
pub fn score_key_lengths(distances: &[usize], max_candidate: usize) -> Vec<KeyLengthCandidate> {
    (MIN_KEY_LENGTH..max_candidate)
        .map(|length| KeyLengthCandidate {
            length,
            support: distances.iter().filter(|&&d| d % length == 0).count(),
        })
        .collect()
}

/// Picks the key length with the most support.
///
/// Ties go to the smallest candidate.
///
/// # Errors
///
/// * [`AnalysisError::InvalidConfig`] if `max_candidate` leaves no candidates
/// * [`AnalysisError::InsufficientEvidence`] if there are no distances, or
///   none of them is divisible by any candidate
pub fn estimate_key_length(distances: &[usize], max_candidate: usize) -> Result<KeyLengthCandidate> {
    if max_candidate <= MIN_KEY_LENGTH {
        return Err(AnalysisError::InvalidConfig(format!(
            "maximum key length must be greater than {}, got {}",
            MIN_KEY_LENGTH, max_candidate
        )));
    }
    if distances.is_empty() {
        return Err(AnalysisError::InsufficientEvidence);
    }

    select_key_length(&score_key_lengths(distances, max_candidate))
}

/// Picks the best-supported entry of an already scored candidate table.
///
/// Ties go to the earliest entry, which is the smallest length for tables
/// built by [`score_key_lengths`].
pub fn select_key_length(candidates: &[KeyLengthCandidate]) -> Result<KeyLengthCandidate> {
    let mut best: Option<KeyLengthCandidate> = None;
    for &candidate in candidates {
        // Strictly greater keeps the earliest (smallest) candidate on ties
        if best.map_or(true, |b| candidate.support > b.support) {
            best = Some(candidate);
        }
    }

    match best {
        Some(best) if best.support > 0 => {
            debug!(key_length = best.length, support = best.support, "estimated key length");
            Ok(best)
        }
        _ => Err(AnalysisError::InsufficientEvidence),
    }
}
