use std::collections::{BTreeSet, HashMap};

use crate::text::TokenSet;

pub type Signature = BTreeSet<String>;

/// Number of texts in a corpus containing each token.
#[derive(Debug, Clone, Default)]
pub struct DocumentFrequency {
    counts: HashMap<String, usize>,
}

impl DocumentFrequency {
    pub fn from_token_sets<'a>(sets: impl IntoIterator<Item = &'a TokenSet>) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for tokens in sets {
            for token in tokens {
                *counts.entry(token.clone()).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// The `size` rarest tokens; ties go to the alphabetically first.
    pub fn signature(&self, tokens: &TokenSet, size: usize) -> Signature {
        let mut ranked: Vec<(usize, &String)> =
            tokens.iter().map(|token| (self.get(token), token)).collect();
        ranked.sort();
        ranked
            .into_iter()
            .take(size)
            .map(|(_, token)| token.clone())
            .collect()
    }
}
