//! Applying a repeating shift key to text

use crate::error::{AnalysisError, Result};
use crate::rotation::rotate;

/// How characters outside A-Z are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NonAlphabetic {
    /// Any non-letter is an error
    #[default]
    Reject,
    /// Non-letters are copied unchanged and do not advance the key phase
    Preserve,
}

/// Direction in which the key is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Upper-cases the text, checking every character against the policy.
///
/// Under [`NonAlphabetic::Reject`] the first non-letter is reported with its
/// character offset.
pub fn normalize(text: &str, policy: NonAlphabetic) -> Result<String> {
    text.chars()
        .enumerate()
        .map(|(offset, c)| match (c.is_ascii_alphabetic(), policy) {
            (true, _) => Ok(c.to_ascii_uppercase()),
            (false, NonAlphabetic::Preserve) => Ok(c),
            (false, NonAlphabetic::Reject) => Err(AnalysisError::InvalidCiphertext {
                character: c,
                offset,
            }),
        })
        .collect()
}

/// Keeps only the ASCII letters of the text, upper-cased
pub fn letters_only(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Rotates each letter by the shift of its key phase.
///
/// The phase is the number of letters seen so far modulo the key length.
/// Letter case is preserved.
pub fn apply_key(
    text: &str,
    shifts: &[u8],
    direction: Direction,
    policy: NonAlphabetic,
) -> Result<String> {
    if shifts.is_empty() {
        return Err(AnalysisError::EmptyKey);
    }

    let mut result = String::with_capacity(text.len());
    let mut key_index: usize = 0;

    for (offset, c) in text.chars().enumerate() {
        if c.is_ascii_alphabetic() {
            let shift = i32::from(shifts[key_index % shifts.len()]);
            let shift = match direction {
                Direction::Encrypt => shift,
                Direction::Decrypt => -shift,
            };
            result.push(rotate(c, shift)?);
            key_index += 1;
        } else if policy == NonAlphabetic::Preserve {
            result.push(c);
        } else {
            return Err(AnalysisError::InvalidCiphertext { character: c, offset });
        }
    }

    Ok(result)
}

/// Encrypts a text made only of letters
pub fn encrypt(plaintext: &str, shifts: &[u8]) -> Result<String> {
    apply_key(plaintext, shifts, Direction::Encrypt, NonAlphabetic::Reject)
}

/// Decrypts a text made only of letters
pub fn decrypt(ciphertext: &str, shifts: &[u8]) -> Result<String> {
    apply_key(ciphertext, shifts, Direction::Decrypt, NonAlphabetic::Reject)
}
