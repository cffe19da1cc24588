use std::collections::HashMap;

use crate::segment::{split_sentences, tokenize};
use crate::stopwords::StopWords;
use crate::text::preprocess_text;

/// Sentence scoring strategy for extractive summarization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryMethod {
    /// Stop-word-filtered term-frequency score, length-normalized.
    Frequency,
    /// Lead-biased positional score.
    Position,
    /// Weighted blend of frequency and position.
    #[default]
    Hybrid,
}

const FREQUENCY_WEIGHT: f64 = 0.7;
const POSITION_WEIGHT: f64 = 0.3;

/// Produce an extractive summary of roughly `top_n` sentences.
///
/// The input is cleaned with [`preprocess_text`] before segmentation, so
/// selected sentences come out ligature-free and whitespace-normalized.
/// Selected sentences are emitted in document order. Documents with at
/// most `top_n` sentences are returned whole. Best effort only; there is
/// no hard guarantee on the output length.
pub fn summarize(text: &str, method: SummaryMethod, top_n: usize, stop_words: &StopWords) -> String {
    let cleaned = preprocess_text(text);
    let sentences = split_sentences(&cleaned);
    if sentences.is_empty() || top_n == 0 {
        return String::new();
    }
    if sentences.len() <= top_n {
        return sentences.join(" ");
    }

    let frequencies = term_frequencies(&cleaned, stop_words);
    let mut scored: Vec<(usize, f64)> = sentences
        .iter()
        .enumerate()
        .map(|(idx, sentence)| {
            let score = match method {
                SummaryMethod::Frequency => frequency_score(sentence, &frequencies, stop_words),
                SummaryMethod::Position => position_score(idx, sentences.len()),
                SummaryMethod::Hybrid => {
                    FREQUENCY_WEIGHT * frequency_score(sentence, &frequencies, stop_words)
                        + POSITION_WEIGHT * position_score(idx, sentences.len())
                }
            };
            (idx, score)
        })
        .collect();

    // Highest score first; ties resolve to the earlier sentence.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    let mut selected: Vec<usize> = scored.iter().take(top_n).map(|(idx, _)| *idx).collect();
    selected.sort_unstable();

    selected
        .into_iter()
        .map(|idx| sentences[idx].as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Relative frequency of each scoreable term in the document, normalized
/// so the most frequent term scores 1.0.
fn term_frequencies(text: &str, stop_words: &StopWords) -> HashMap<String, f64> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in tokenize(text) {
        if token.is_punct {
            continue;
        }
        let word = token.text.to_lowercase();
        if word.chars().any(|c| c.is_alphabetic()) && !stop_words.contains(&word) {
            *counts.entry(word).or_default() += 1;
        }
    }
    let max = counts.values().copied().max().unwrap_or(1) as f64;
    counts
        .into_iter()
        .map(|(word, count)| (word, count as f64 / max))
        .collect()
}

fn frequency_score(
    sentence: &str,
    frequencies: &HashMap<String, f64>,
    stop_words: &StopWords,
) -> f64 {
    let mut total = 0.0;
    let mut scoreable = 0usize;
    for token in tokenize(sentence) {
        if token.is_punct {
            continue;
        }
        let word = token.text.to_lowercase();
        if stop_words.contains(&word) {
            continue;
        }
        scoreable += 1;
        if let Some(f) = frequencies.get(&word) {
            total += f;
        }
    }
    if scoreable == 0 {
        return 0.0;
    }
    total / scoreable as f64
}

/// Lead bias: the opening sentences of a report carry its framing, and
/// the final sentence usually carries the conclusion.
fn position_score(idx: usize, total: usize) -> f64 {
    if idx + 1 == total {
        return 0.5;
    }
    1.0 / (1.0 + idx as f64)
}
