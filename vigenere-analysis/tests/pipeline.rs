//! End-to-end analysis over a real English passage

use vigenere_analysis::cipher::{apply_key, letters_only};
use vigenere_analysis::{
    analyze, encrypt, parse_key, AnalysisConfig, AnalysisError, Direction, KeyConvention,
    NonAlphabetic,
};

const PASSAGE: &str = include_str!("fixtures/passage.txt");

fn plaintext() -> String {
    letters_only(PASSAGE)
}

fn key(text: &str) -> Vec<u8> {
    parse_key(text, KeyConvention::FirstLetter).unwrap()
}

#[test]
fn test_recovers_prime_length_keys() {
    let plaintext = plaintext();
    assert!(plaintext.len() > 1400);

    for word in ["HI", "KEY", "LEMON", "CIPHERS", "ABRACADABRA"] {
        let ciphertext = encrypt(&plaintext, &key(word)).unwrap();
        let analysis = analyze(&ciphertext, &AnalysisConfig::default()).unwrap();

        assert_eq!(analysis.key_length, word.len(), "key length for {}", word);
        assert_eq!(analysis.expected_key(), word);
        assert_eq!(analysis.plaintext, plaintext);
    }
}

#[test]
fn test_alternative_key_is_one_letter_lower() {
    let ciphertext = encrypt(&plaintext(), &key("LEMON")).unwrap();
    let analysis = analyze(&ciphertext, &AnalysisConfig::default()).unwrap();
    assert_eq!(analysis.alternative_key(), "KDLNM");
}

#[test]
fn test_candidate_table_favours_true_length() {
    let ciphertext = encrypt(&plaintext(), &key("CIPHERS")).unwrap();
    let analysis = analyze(&ciphertext, &AnalysisConfig::default()).unwrap();

    assert_eq!(analysis.candidates.len(), 18);
    let seven = analysis.candidates.iter().find(|c| c.length == 7).unwrap();
    assert_eq!(seven.support, analysis.support);
    assert!(analysis.candidates.iter().all(|c| c.support <= seven.support));
}

#[test]
fn test_composite_length_collapses_to_divisor() {
    // Every multiple of 8 is also a multiple of 2, so 2 collects more votes
    let ciphertext = encrypt(&plaintext(), &key("LEMONADE")).unwrap();
    let analysis = analyze(&ciphertext, &AnalysisConfig::default()).unwrap();
    assert_eq!(analysis.key_length, 2);
}

#[test]
fn test_preserves_punctuation_and_spacing() {
    let shifts = key("LEMON");
    let ciphertext = apply_key(PASSAGE, &shifts, Direction::Encrypt, NonAlphabetic::Preserve).unwrap();

    let config = AnalysisConfig::default().with_non_alphabetic(NonAlphabetic::Preserve);
    let analysis = analyze(&ciphertext, &config).unwrap();

    assert_eq!(analysis.shifts, shifts);
    assert_eq!(analysis.plaintext, PASSAGE.to_ascii_uppercase());
}

#[test]
fn test_rejects_punctuation_by_default() {
    let result = analyze(PASSAGE, &AnalysisConfig::default());
    assert!(matches!(result, Err(AnalysisError::InvalidCiphertext { offset: 4, .. })));
}

#[test]
fn test_longer_ngrams_still_find_key() {
    let ciphertext = encrypt(&plaintext(), &key("KEY")).unwrap();
    let config = AnalysisConfig::default().with_ngram_length(4);
    let analysis = analyze(&ciphertext, &config).unwrap();
    assert_eq!(analysis.key_length, 3);
    assert_eq!(analysis.plaintext, plaintext());
}

#[test]
fn test_pangram_example() {
    let plaintext = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG".repeat(3);
    let ciphertext = encrypt(&plaintext, &[3, 1, 7]).unwrap();

    let analysis = analyze(&ciphertext, &AnalysisConfig::default().with_ngram_length(3)).unwrap();
    assert_eq!(analysis.key_length, 3);
    assert_eq!(analysis.shifts, vec![3, 1, 7]);
    assert_eq!(analysis.plaintext, plaintext);
}

#[test]
fn test_doubled_pangram_ties_to_smallest_divisor() {
    // The one repeat is 60 apart; 2, 3, 4, 5, 6, 10, 12 and 15 all divide it
    let plaintext = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG".repeat(2);
    let ciphertext = encrypt(&plaintext, &[3, 1, 7]).unwrap();

    let analysis = analyze(&ciphertext, &AnalysisConfig::default()).unwrap();
    assert_eq!(analysis.distances, vec![60]);
    assert_eq!(analysis.key_length, 2);
    assert!(analysis.candidates.iter().all(|c| c.support <= 1));
    assert_ne!(analysis.plaintext, plaintext);
}

#[test]
fn test_no_repeats_is_insufficient_evidence() {
    let result = analyze("ABCDEFGHIJKLMNOPQRSTUVWXYZ", &AnalysisConfig::default());
    assert_eq!(result, Err(AnalysisError::InsufficientEvidence));
}
