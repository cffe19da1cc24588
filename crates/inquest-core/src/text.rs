use once_cell::sync::Lazy;
use regex::Regex;

/// Expand common typographic ligatures found in PDF-extracted text.
pub fn expand_ligatures(text: &str) -> String {
    text.replace('\u{FB00}', "ff")
        .replace('\u{FB01}', "fi")
        .replace('\u{FB02}', "fl")
        .replace('\u{FB03}', "ffi")
        .replace('\u{FB04}', "ffl")
        .replace(['\u{FB05}', '\u{FB06}'], "st")
}

/// Rejoin words hyphenated across PDF line breaks.
///
/// - `"examina-\ntion"` → `"examination"` (syllable break)
/// - `"blood- stained"` stays hyphenated when the right side is a
///   compound-word continuation after a digit (`"STR-\n21"` → `"STR-21"`)
pub fn fix_hyphenation(text: &str) -> String {
    static RE: Lazy<Regex> = Lazy::new(|| {
        // word char, hyphen, line-break whitespace, word chars
        Regex::new(r"(\w)-\s*\n\s*(\w+)").unwrap()
    });

    RE.replace_all(text, |caps: &regex::Captures| {
        let before = &caps[1];
        let after = &caps[2];
        // Keep the hyphen around digits (lab codes like "STR-21", "D5S-818")
        let keep = before.chars().last().is_some_and(|c| c.is_ascii_digit())
            || after.chars().next().is_some_and(|c| c.is_ascii_digit());
        if keep {
            format!("{before}-{after}")
        } else {
            format!("{before}{after}")
        }
    })
    .into_owned()
}

/// Drop control characters (except newlines and tabs) that PDF extractors
/// occasionally emit for unmapped glyphs.
fn strip_control_chars(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

/// Collapse runs of whitespace to single spaces, preserving paragraph
/// breaks (two or more newlines) as a single newline.
fn normalize_whitespace(text: &str) -> String {
    static PARA: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());
    static RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
    static MARK: Lazy<Regex> = Lazy::new(|| Regex::new(r" ?\x01 ?").unwrap());

    // Paragraph breaks survive as a marker byte while whitespace collapses.
    let text = PARA.replace_all(text, "\x01");
    let text = RUN.replace_all(&text, " ");
    let text = MARK.replace_all(&text, "\n");
    text.trim().to_string()
}

/// Clean extracted PDF text ahead of summarization: ligatures expanded,
/// line-break hyphenation repaired, control characters removed, whitespace
/// normalized.
pub fn preprocess_text(text: &str) -> String {
    let text = expand_ligatures(text);
    let text = fix_hyphenation(&text);
    let text = strip_control_chars(&text);
    normalize_whitespace(&text)
}
