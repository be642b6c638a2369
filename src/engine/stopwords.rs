/// Common English words excluded from the similarity vocabulary.
/// Course titles and profile text are short, so even a few of these
/// would otherwise dominate the term weights.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "been", "but", "by", "can",
    "do", "for", "from", "has", "have", "her", "his", "how", "i", "if",
    "in", "into", "is", "it", "its", "my", "no", "not", "of", "on", "or",
    "our", "so", "that", "the", "their", "them", "then", "there", "these",
    "they", "this", "to", "was", "we", "were", "what", "when", "where",
    "which", "who", "will", "with", "you", "your",
];

/// Returns true when `token` is a stop word. Tokens are expected to be
/// lowercased already.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.binary_search(&token).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words_are_sorted_for_binary_search() {
        let mut sorted = STOP_WORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, STOP_WORDS);
    }

    #[test]
    fn test_common_words_filtered() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("and"));
        assert!(!is_stop_word("python"));
        assert!(!is_stop_word("learning"));
    }
}
