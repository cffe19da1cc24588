use crate::segment::split_sentences;

/// Phrases that mark a sentence as a likely forensic conclusion.
pub const FINDING_KEYWORDS: &[&str] = &[
    "conclude",
    "conclusion",
    "finding",
    "results",
    "determine",
    "identified",
    "match",
    "consistent with",
    "evidence indicates",
    "analysis shows",
    "examination revealed",
    "tested positive",
    "comparison",
    "probability",
];

/// Upper bound on reported findings.
pub const MAX_FINDINGS: usize = 5;

/// Select sentences likely to contain forensic conclusions.
///
/// A sentence qualifies if its lowercased form contains any keyword.
/// Document order is preserved and at most [`MAX_FINDINGS`] sentences
/// are returned; there is no relevance ranking beyond first-match-wins.
pub fn extract_findings(text: &str) -> Vec<String> {
    split_sentences(text)
        .into_iter()
        .filter(|sentence| {
            let lower = sentence.to_lowercase();
            FINDING_KEYWORDS.iter().any(|kw| lower.contains(kw))
        })
        .take(MAX_FINDINGS)
        .collect()
}
