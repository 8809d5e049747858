use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

/// Cap on distinct words fed into the cloud.
pub const MAX_WORDS: usize = 200;

// ---------------------------------------------------------------------------
// Word frequencies
// ---------------------------------------------------------------------------

/// Count word frequencies using Unicode word segmentation (UAX #29). Words
/// are case-folded; the result is sorted by descending count (ties broken
/// alphabetically for determinism) and capped at [`MAX_WORDS`].
pub fn word_frequencies(text: &str) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in text.unicode_words() {
        *counts.entry(word.to_lowercase()).or_insert(0) += 1;
    }

    let mut freqs: Vec<(String, usize)> = counts.into_iter().collect();
    freqs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    freqs.truncate(MAX_WORDS);
    freqs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_case_folds() {
        let freqs = word_frequencies("Rust rust RUST plot plot chart");
        assert_eq!(freqs[0], ("rust".to_string(), 3));
        assert_eq!(freqs[1], ("plot".to_string(), 2));
        assert_eq!(freqs[2], ("chart".to_string(), 1));
    }

    #[test]
    fn punctuation_is_not_a_word() {
        let freqs = word_frequencies("one, two; two!");
        assert_eq!(freqs.len(), 2);
        assert_eq!(freqs[0], ("two".to_string(), 2));
    }

    #[test]
    fn cjk_text_yields_words() {
        // UAX #29 segments ideographs individually; repeated characters
        // still accumulate counts.
        let freqs = word_frequencies("我爱人工智能，人工智能改变世界。");
        assert!(!freqs.is_empty());
        let total: usize = freqs.iter().map(|(_, c)| c).sum();
        assert!(total >= 8);
    }

    #[test]
    fn output_is_capped() {
        let text: String = (0..MAX_WORDS + 50)
            .map(|i| format!("word{i} "))
            .collect();
        assert_eq!(word_frequencies(&text).len(), MAX_WORDS);
    }

    #[test]
    fn empty_text_is_empty() {
        assert!(word_frequencies("  \n\t").is_empty());
    }
}
