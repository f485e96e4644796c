//! Overlapping fixed-length substrings of a text

use std::iter;

/// One n-gram and the character offset where it starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ngram<'a> {
    pub offset: usize,
    pub pattern: &'a str,
}

/// Returns every substring of exactly `n` characters, in order of offset.
///
/// Identical substrings at different offsets each appear. A text shorter
/// than `n` (or `n == 0`) yields no n-grams.
pub fn extract_ngrams(text: &str, n: usize) -> Vec<Ngram<'_>> {
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(index, _)| index)
        .chain(iter::once(text.len()))
        .collect();
    let char_count = bounds.len() - 1;

    if n == 0 || char_count < n {
        return Vec::new();
    }

    (0..=char_count - n)
        .map(|offset| Ngram {
            offset,
            pattern: &text[bounds[offset]..bounds[offset + n]],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns<'a>(ngrams: &[Ngram<'a>]) -> Vec<&'a str> {
        ngrams.iter().map(|g| g.pattern).collect()
    }

    #[test]
    fn test_trigrams() {
        let ngrams = extract_ngrams("ABCDAB", 3);
        assert_eq!(patterns(&ngrams), vec!["ABC", "BCD", "CDA", "DAB"]);
        assert_eq!(ngrams[3].offset, 3);
    }

    #[test]
    fn test_duplicates_kept() {
        let ngrams = extract_ngrams("AAAA", 2);
        assert_eq!(patterns(&ngrams), vec!["AA", "AA", "AA"]);
        let offsets: Vec<usize> = ngrams.iter().map(|g| g.offset).collect();
        assert_eq!(offsets, vec![0, 1, 2]);
    }

    #[test]
    fn test_exact_length() {
        assert_eq!(patterns(&extract_ngrams("XYZ", 3)), vec!["XYZ"]);
    }

    #[test]
    fn test_short_text_is_empty() {
        assert!(extract_ngrams("AB", 3).is_empty());
        assert!(extract_ngrams("", 3).is_empty());
        assert!(extract_ngrams("ABC", 0).is_empty());
    }

    #[test]
    fn test_offsets_count_characters() {
        let ngrams = extract_ngrams("ÄBCÄB", 2);
        assert_eq!(patterns(&ngrams), vec!["ÄB", "BC", "CÄ", "ÄB"]);
        assert_eq!(ngrams[3].offset, 3);
    }
}
