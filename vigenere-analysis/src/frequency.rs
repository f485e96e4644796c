//! Reference letter frequencies and column letter counting

use crate::error::{AnalysisError, Result};
use crate::rotation::letter_index;

/// Expected relative frequency of each letter A-Z in a reference language.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    pub name: &'static str,
    pub frequencies: [f64; 26],
}

impl FrequencyTable {
    /// Expected frequency of the letter at `index` (A=0)
    pub fn expected(&self, index: usize) -> f64 {
        self.frequencies[index]
    }
}

/// English letter frequencies (Wikipedia)
pub const ENGLISH: FrequencyTable = FrequencyTable {
    name: "english",
    frequencies: [
        0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094,
        0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929,
        0.00095, 0.05987, 0.06327, 0.09056, 0.02758, 0.00978, 0.02360, 0.00150,
        0.01974, 0.00074,
    ],
};

/// German letter frequencies
pub const GERMAN: FrequencyTable = FrequencyTable {
    name: "german",
    frequencies: [
        0.0558, 0.0196, 0.0316, 0.0498, 0.1693, 0.0149, 0.0302, 0.0498,
        0.0802, 0.0024, 0.0132, 0.0360, 0.0255, 0.1053, 0.0224, 0.0067,
        0.0002, 0.0689, 0.0642, 0.0579, 0.0383, 0.0084, 0.0178, 0.0005,
        0.0005, 0.0121,
    ],
};

/// Reference language used for column shift estimation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    German,
}

impl Language {
    pub fn table(self) -> &'static FrequencyTable {
        match self {
            Language::English => &ENGLISH,
            Language::German => &GERMAN,
        }
    }
}

/// Counts every letter of the column, case-insensitively.
///
/// Letters that never occur keep a count of zero.
pub fn count_letters(column: &str) -> Result<[u32; 26]> {
    let mut counts: [u32; 26] = [0; 26];

    for c in column.chars() {
        counts[letter_index(c)?] += 1;
    }

    Ok(counts)
}

/// Observed relative frequency of each letter in the column.
///
/// # Errors
///
/// [`AnalysisError::EmptyColumn`] when the column has no letters, since
/// there is nothing to divide by.
pub fn observed_frequencies(column: &str) -> Result<[f64; 26]> {
    let counts = count_letters(column)?;
    let total: u32 = counts.iter().sum();

    if total == 0 {
        return Err(AnalysisError::EmptyColumn);
    }

    let mut observed = [0.0; 26];
    for (slot, &count) in observed.iter_mut().zip(counts.iter()) {
        *slot = f64::from(count) / f64::from(total);
    }
    Ok(observed)
}
