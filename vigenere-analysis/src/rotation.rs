//! Cyclic rotation over the 26-letter alphabet
//!
//! Both shift estimation and decryption are built on [`rotate`]. Shifts of
//! any magnitude are reduced modulo 26 first, so `rotate(rotate(x, s), -s)`
//! always returns `x`.

use crate::error::{AnalysisError, Result};

/// Number of symbols in the working alphabet
pub const ALPHABET_LEN: u8 = 26;

/// Which letter stands for shift 0 when a key is written out as text.
///
/// Key tables disagree on whether `A` or `Z` means "no shift", so analysis
/// results offer both spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyConvention {
    /// Shift 0 is written as `A`
    #[default]
    FirstLetter,
    /// Shift 0 is written as `Z`
    LastLetter,
}

impl KeyConvention {
    fn reference_letter(self) -> char {
        match self {
            KeyConvention::FirstLetter => 'A',
            KeyConvention::LastLetter => 'Z',
        }
    }
}

/// Rotates a letter forward through the alphabet by `shift` positions.
///
/// Negative shifts rotate backwards. Case is preserved.
///
/// # Errors
///
/// Returns [`AnalysisError::InputDomain`] if `letter` is not an ASCII letter.
pub fn rotate(letter: char, shift: i32) -> Result<char> {
    if !letter.is_ascii_alphabetic() {
        return Err(AnalysisError::InputDomain(letter));
    }

    let base: u8 = if letter.is_ascii_lowercase() { b'a' } else { b'A' };
    let index = i32::from(letter as u8 - base);
    let modulus = i32::from(ALPHABET_LEN);
    let rotated = (index + shift.rem_euclid(modulus)).rem_euclid(modulus) as u8;

    Ok((base + rotated) as char)
}

/// Position of an ASCII letter in the alphabet (A=0, B=1, etc.)
pub fn letter_index(letter: char) -> Result<usize> {
    if !letter.is_ascii_alphabetic() {
        return Err(AnalysisError::InputDomain(letter));
    }
    Ok((letter.to_ascii_uppercase() as u8 - b'A') as usize)
}

/// Writes a shift vector as a key string by rotating the convention's
/// reference letter by each shift.
pub fn render_key(shifts: &[u8], convention: KeyConvention) -> Result<String> {
    if shifts.is_empty() {
        return Err(AnalysisError::EmptyKey);
    }

    shifts
        .iter()
        .map(|&shift| rotate(convention.reference_letter(), i32::from(shift)))
        .collect()
}

/// Reads a key string back into a shift vector, the inverse of [`render_key`].
pub fn parse_key(key: &str, convention: KeyConvention) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(AnalysisError::EmptyKey);
    }

    let zero = letter_index(convention.reference_letter())? as i32;
    key.chars()
        .map(|c| {
            let index = letter_index(c)? as i32;
            Ok((index - zero).rem_euclid(i32::from(ALPHABET_LEN)) as u8)
        })
        .collect()
}
