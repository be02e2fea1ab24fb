//! Static English stop-word set used by the dependency heuristics.

use once_cell::sync::Lazy;
use std::collections::HashSet;

// Function words only. Content words never belong here: the extractor
// consults this list to keep noise out of the related-entities bucket,
// and an over-broad list silently deletes real arguments.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "an",
    "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are", "around",
    "as", "at", "back", "be", "became", "because", "become", "becomes", "becoming", "been",
    "before", "beforehand", "behind", "being", "below", "beside", "besides", "between", "beyond",
    "both", "bottom", "but", "by", "can", "cannot", "could", "did", "do", "does", "doing", "done",
    "down", "due", "during", "each", "either", "else", "elsewhere", "enough", "even", "ever",
    "every", "everyone", "everything", "everywhere", "except", "few", "for", "former", "formerly",
    "from", "front", "further", "had", "has", "have", "he", "hence", "her", "here", "hereafter",
    "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his", "how", "however",
    "i", "if", "in", "indeed", "into", "is", "it", "its", "itself", "just", "last", "latter",
    "latterly", "least", "less", "made", "many", "may", "me", "meanwhile", "might", "mine", "more",
    "moreover", "most", "mostly", "much", "must", "my", "myself", "namely", "neither", "never",
    "nevertheless", "next", "no", "nobody", "none", "noone", "nor", "not", "nothing", "now",
    "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto", "or", "other", "others",
    "otherwise", "our", "ours", "ourselves", "out", "over", "own", "per", "perhaps", "please",
    "quite", "rather", "re", "really", "regarding", "same", "say", "see", "seem", "seemed",
    "seeming", "seems", "several", "she", "should", "since", "so", "some", "somehow", "someone",
    "something", "sometime", "sometimes", "somewhere", "still", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "this", "those", "though", "through",
    "throughout", "thru", "thus", "to", "together", "too", "toward", "towards", "under", "unless",
    "until", "up", "upon", "us", "used", "using", "various", "very", "via", "was", "we", "well",
    "were", "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas",
    "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while", "whither", "who",
    "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without", "would",
    "yet", "you", "your", "yours", "yourself", "yourselves",
];

static STOP_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORDS.iter().copied().collect());

/// Check whether a word is an English stop word.
///
/// Expects lower-cased input; the list itself is all lower-case.
#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    STOP_SET.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_words_are_stop_words() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("her"));
        assert!(is_stop_word("with"));
        assert!(is_stop_word("to"));
    }

    #[test]
    fn test_content_words_are_not() {
        assert!(!is_stop_word("apple"));
        assert!(!is_stop_word("store"));
        assert!(!is_stop_word("eat"));
    }

    #[test]
    fn test_case_sensitive_by_contract() {
        // Callers lower-case before lookup.
        assert!(!is_stop_word("The"));
    }
}
