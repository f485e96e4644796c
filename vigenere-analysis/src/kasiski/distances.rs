//! Spacing between repeated n-grams

use std::collections::HashMap;

use super::ngrams::Ngram;

/// Two occurrences of the same pattern, `distance` characters apart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repetition<'a> {
    pub pattern: &'a str,
    pub distance: usize,
}

/// Records the distance between every pair of equal patterns.
///
/// Each unordered pair is counted once. Records follow the input order of
/// the second n-gram of the pair, then of the first.
pub fn collect_distances<'a>(ngrams: &[Ngram<'a>]) -> Vec<Repetition<'a>> {
    let mut seen: HashMap<&str, Vec<usize>> = HashMap::new();
    let mut repetitions = Vec::new();

    for ngram in ngrams {
        let earlier = seen.entry(ngram.pattern).or_default();
        repetitions.extend(
            earlier
                .iter()
                .map(|&offset| Repetition {
                    pattern: ngram.pattern,
                    distance: ngram.offset.abs_diff(offset),
                }),
        );
        earlier.push(ngram.offset);
    }

    repetitions
}
