use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Default English stop words used by the summarizer's term-frequency
/// scoring. Deliberately broad; domain terms are re-admitted via
/// [`StopWords::for_forensic_documents`].
static DEFAULT_STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
        "any", "are", "as", "at", "be", "because", "been", "before", "being", "below", "between",
        "both", "but", "by", "can", "case", "could", "did", "do", "does", "doing", "down",
        "during", "each", "evidence", "few", "for", "from", "further", "had", "has", "have",
        "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "i",
        "if", "in", "into", "is", "it", "its", "itself", "just", "may", "me", "might", "more",
        "most", "must", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
        "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "report", "same",
        "shall", "she", "should", "so", "some", "such", "than", "that", "the", "their", "theirs",
        "them", "themselves", "then", "there", "these", "they", "this", "those", "through", "to",
        "too", "under", "until", "up", "upon", "very", "was", "we", "were", "what", "when",
        "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your",
        "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

/// Domain terms that must stay scoreable even though a general-purpose
/// stop list (or an over-broad one) might filter them.
pub const KEEP_TERMS: &[&str] = &[
    "evidence",
    "analysis",
    "sample",
    "dna",
    "fingerprint",
    "forensic",
    "examination",
    "report",
    "case",
    "specimen",
    "conclusion",
];

/// An immutable stop-word set, constructed once at startup and shared.
///
/// Built as an explicit value rather than by mutating a process-wide
/// default, so multiple analyzer instances can never interfere.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The unmodified default English list.
    pub fn standard() -> Self {
        Self {
            words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// The default list minus the forensic keep-terms.
    pub fn for_forensic_documents() -> Self {
        let mut set = Self::standard();
        for term in KEEP_TERMS {
            set.words.remove(*term);
        }
        set
    }

    /// Membership test; callers lowercase before asking.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
