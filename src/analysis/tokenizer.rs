//! Word segmentation and stop-word filtering
//!
//! Tokens are Unicode word segments that are purely alphabetic,
//! lowercased. Counting and n-gram building run on `content_words`, which
//! additionally drops English stop words.

use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

/// Alphabetic tokens of `text`, lowercased
pub fn words(text: &str) -> Vec<String> {
    text.unicode_words()
        .filter(|w| w.chars().all(|c| c.is_alphabetic()))
        .map(|w| w.to_lowercase())
        .collect()
}

/// Alphabetic tokens with stop words removed
pub fn content_words(text: &str) -> Vec<String> {
    text.unicode_words()
        .filter(|w| w.chars().all(|c| c.is_alphabetic()))
        .map(|w| w.to_lowercase())
        .filter(|w| !is_stopword(w))
        .collect()
}

/// Check if a word is a common English stop word
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS_SET.contains(word)
}

lazy_static::lazy_static! {
    static ref STOPWORDS_SET: HashSet<&'static str> = {
        let words: &[&str] = &[
            // Articles & determiners
            "the", "a", "an", "this", "that", "these", "those",
            // Pronouns
            "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
            "my", "your", "his", "its", "our", "their", "mine", "yours", "ours", "theirs",
            "himself", "herself", "itself", "themselves", "myself", "yourself",
            "who", "whom", "whose", "which", "what", "whoever", "whatever",
            // Prepositions
            "in", "on", "at", "to", "for", "of", "with", "by", "from", "up", "down",
            "into", "onto", "upon", "out", "off", "over", "under", "above", "below",
            "between", "among", "through", "during", "before", "after", "about", "against",
            // Conjunctions
            "and", "or", "but", "nor", "so", "yet", "because", "although", "though",
            "while", "whereas", "if", "unless", "until", "since", "when", "where", "whether",
            // Auxiliary verbs
            "is", "am", "are", "was", "were", "be", "been", "being",
            "have", "has", "had", "having", "do", "does", "did", "doing",
            "will", "would", "shall", "should", "may", "might", "must", "can", "could",
            // Common adverbs
            "very", "really", "just", "only", "also", "too", "even", "still", "already",
            "now", "then", "here", "there", "always", "never", "often", "sometimes",
            // Other common words
            "not", "no", "yes", "all", "any", "some", "each", "every", "both", "few", "more",
            "most", "other", "such", "own", "same", "than", "as", "how", "why",
        ];
        words.iter().cloned().collect()
    };
}
