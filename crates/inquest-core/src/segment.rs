use once_cell::sync::Lazy;
use std::collections::HashSet;

/// A single token from [`tokenize`]. Whitespace delimits tokens and is
/// never emitted, so "word count" is simply the non-punctuation tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub is_punct: bool,
}

/// Abbreviations that end with a period without ending a sentence.
static ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "dr", "mr", "mrs", "ms", "prof", "det", "sgt", "lt", "capt", "no", "vs", "etc", "e.g",
        "i.e", "st", "jr", "sr", "inc", "corp", "approx", "dept", "fig", "al",
    ]
    .into_iter()
    .collect()
});

/// Split text into word and punctuation tokens.
///
/// Words keep internal hyphens, apostrophes, periods, and slashes so that
/// identifiers like `2023-04-117`, `O'Neil`, and `3.5` stay whole.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }
        if c.is_alphanumeric() {
            let start = i;
            while i < chars.len() {
                let c = chars[i];
                if c.is_alphanumeric() {
                    i += 1;
                } else if matches!(c, '-' | '\'' | '.' | '/' | ',')
                    && i + 1 < chars.len()
                    && chars[i + 1].is_alphanumeric()
                {
                    // internal joiner, e.g. "case-file", "3.5", "1,200"
                    i += 2;
                } else {
                    break;
                }
            }
            tokens.push(Token {
                text: chars[start..i].iter().collect(),
                is_punct: false,
            });
        } else {
            tokens.push(Token {
                text: c.to_string(),
                is_punct: true,
            });
            i += 1;
        }
    }
    tokens
}

/// Count of tokens that are neither punctuation nor whitespace.
pub fn word_count(text: &str) -> usize {
    tokenize(text).iter().filter(|t| !t.is_punct).count()
}

/// Split text into sentences, document order preserved.
///
/// A sentence boundary is `.`, `?`, or `!` followed by whitespace and an
/// uppercase letter, digit, or opening quote. Known abbreviations and
/// decimal numbers do not terminate a sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if matches!(c, '.' | '?' | '!') && is_boundary(&chars, i) {
            let sentence: String = chars[start..=i].iter().collect();
            let sentence = sentence.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            start = i + 1;
        }
        i += 1;
    }

    let tail: String = chars[start..].iter().collect();
    let tail = tail.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

fn is_boundary(chars: &[char], i: usize) -> bool {
    // Must be followed by whitespace (or end of text) and a plausible opener.
    let mut j = i + 1;
    // Allow closing quotes/parens directly after the terminator.
    while j < chars.len() && matches!(chars[j], '"' | '\'' | ')' | ']' | '\u{201D}') {
        j += 1;
    }
    if j >= chars.len() {
        return true;
    }
    if !chars[j].is_whitespace() {
        return false;
    }
    let mut k = j;
    while k < chars.len() && chars[k].is_whitespace() {
        k += 1;
    }
    if k < chars.len() {
        let next = chars[k];
        let opener =
            next.is_uppercase() || next.is_ascii_digit() || matches!(next, '"' | '\u{201C}' | '(');
        if !opener {
            return false;
        }
    }

    if chars[i] != '.' {
        return true;
    }

    // Decimal like "3.5" never reaches here (no whitespace after the dot),
    // but "No. 7" would: check the word before the period.
    let mut w = i;
    while w > 0 && (chars[w - 1].is_alphanumeric() || chars[w - 1] == '.') {
        w -= 1;
    }
    let word: String = chars[w..i].iter().collect::<String>().to_lowercase();
    if ABBREVIATIONS.contains(word.as_str()) {
        return false;
    }
    // Single capital initial, e.g. "John Q. Public"
    if word.len() == 1 && chars[i - 1].is_uppercase() {
        return false;
    }
    true
}

/// Number of sentences in the text.
pub fn sentence_count(text: &str) -> usize {
    split_sentences(text).len()
}
