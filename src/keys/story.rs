use std::collections::BTreeSet;

use crate::text::{tokenize, TokenSet};

/// Key for the recurring Anthropic / Pentagon story, which rarely names
/// enough entities to be caught by the generic rules.
pub const ANTHROPIC_PENTAGON_STORY: &str = "story:anthropic-pentagon";

const MAX_ENTITIES: usize = 4;
const MAX_EVENTS: usize = 3;

pub const ENTITY_HINTS: [&str; 30] = [
    "altman", "amazon", "amodei", "anthropic", "apple", "biden", "congress", "deepmind", "doj",
    "european", "ftc", "google", "meta", "microsoft", "mistral", "musk", "nadella", "nvidia",
    "openai", "pentagon", "perplexity", "pichai", "samsung", "senate", "tesla", "tiktok", "trump",
    "whitehouse", "xai", "zuckerberg",
];

pub const EVENT_HINTS: [&str; 28] = [
    "acquisit", "antitrust", "ban", "blacklist", "breach", "classifi", "contract", "court",
    "designat", "exploit", "export", "hack", "indict", "investigat", "lawsuit", "layoff", "leak",
    "merger", "militar", "penalty", "probe", "regulat", "ruling", "sanction", "settlement",
    "subpoena", "tariff", "vulnerab",
];

/// Shortest token that may count as a truncated stem of a longer hint.
const MIN_PARTIAL_TOKEN: usize = 4;

/// Stemmed forms of military, classified, designated and banned.
const PENTAGON_ESCALATIONS: [&str; 4] = ["militar", "classifi", "designat", "bann"];

/// The three fields a story key is derived from.
#[derive(Debug, Clone, Copy)]
pub struct StoryText<'a> {
    pub title: &'a str,
    pub summary: &'a str,
    pub keyword: &'a str,
}

impl<'a> StoryText<'a> {
    pub fn new(title: &'a str, summary: &'a str, keyword: &'a str) -> Self {
        Self {
            title,
            summary,
            keyword,
        }
    }

    pub fn key(&self) -> Option<String> {
        story_key(self.title, self.summary, self.keyword)
    }
}

/// High-precision cross-day identity. Returns `None` unless the text names
/// the known recurring story or enough corroborating entities.
pub fn story_key(title: &str, summary: &str, keyword: &str) -> Option<String> {
    let tokens = tokenize(&format!("{} {} {}", title, summary, keyword));
    if tokens.is_empty() {
        return None;
    }

    if is_anthropic_pentagon(&tokens) {
        return Some(ANTHROPIC_PENTAGON_STORY.to_string());
    }

    let entities = matched_hints(&tokens, &ENTITY_HINTS);
    let events = matched_hints(&tokens, &EVENT_HINTS);

    if entities.len() >= 2 && !events.is_empty() {
        return Some(format!(
            "story:{}|{}",
            join_capped(&entities, MAX_ENTITIES),
            join_capped(&events, MAX_EVENTS)
        ));
    }
    if entities.len() >= 3 {
        return Some(format!("story:{}", join_capped(&entities, MAX_ENTITIES)));
    }
    None
}

/// Hints that occur in any token, or that start with a token of four or more
/// characters, so truncated stems still count.
pub fn matched_hints<'h>(tokens: &TokenSet, hints: &[&'h str]) -> BTreeSet<&'h str> {
    hints
        .iter()
        .copied()
        .filter(|hint| mentions(tokens, hint))
        .collect()
}

fn mentions(tokens: &TokenSet, hint: &str) -> bool {
    tokens.iter().any(|token| {
        token.contains(hint)
            || (token.len() >= MIN_PARTIAL_TOKEN && hint.starts_with(token.as_str()))
    })
}

/// Whole-word match on stems: `trumps` names `trump`, `pen` does not name `pentagon`.
fn names(tokens: &TokenSet, word: &str) -> bool {
    tokens.iter().any(|token| token.starts_with(word))
}

fn is_anthropic_pentagon(tokens: &TokenSet) -> bool {
    if !names(tokens, "anthropic") {
        return false;
    }
    let trump = names(tokens, "trump");
    let pentagon = names(tokens, "pentagon");
    let escalated = PENTAGON_ESCALATIONS.iter().any(|word| names(tokens, word));

    (trump && pentagon) || ((trump || pentagon) && escalated)
}

fn join_capped(hints: &BTreeSet<&str>, cap: usize) -> String {
    hints.iter().take(cap).copied().collect::<Vec<_>>().join("+")
}
