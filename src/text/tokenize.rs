use std::collections::BTreeSet;

/// Stemmed, stop-word-filtered content tokens of a text. Ordered so that
/// iteration is canonical.
pub type TokenSet = BTreeSet<String>;

pub const MIN_TOKEN_LEN: usize = 3;
pub const THREAD_SUMMARY_CHARS: usize = 220;

const STEM_MIN_LEN: usize = 5;
const SUFFIXES: [&str; 4] = ["ing", "ed", "es", "s"];

pub const STOP_WORDS: [&str; 30] = [
    "the", "and", "for", "with", "from", "that", "this", "into", "onto", "over", "about", "after",
    "before", "are", "was", "were", "has", "have", "its", "but", "not", "than", "then", "will",
    "been", "they", "their", "what", "when", "how",
];

/// Lower-cases, replaces everything outside `[a-z0-9\s]` with a space,
/// collapses whitespace and trims.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut space_pending = false;

    for ch in lowered.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if space_pending && !out.is_empty() {
                out.push(' ');
            }
            out.push(ch);
            space_pending = false;
        } else {
            space_pending = true;
        }
    }

    out
}

/// Strips at most one suffix, and only from words longer than four characters.
pub fn stem(word: &str) -> &str {
    if word.len() < STEM_MIN_LEN {
        return word;
    }
    for suffix in SUFFIXES {
        if let Some(stripped) = word.strip_suffix(suffix) {
            return stripped;
        }
    }
    word
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

pub fn tokenize(text: &str) -> TokenSet {
    normalize(text)
        .split(' ')
        .filter(|word| !is_stop_word(word))
        .map(stem)
        .filter(|token| token.len() >= MIN_TOKEN_LEN && !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// Title plus the head of the summary, the text used by the thread view.
pub fn thread_text(title: &str, summary: &str, summary_chars: usize) -> String {
    let head: String = summary.chars().take(summary_chars).collect();
    format!("{} {}", title, head)
}
