use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::text::{normalize, TokenSet};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityThresholds {
    pub min_shared_tokens: usize,
    pub jaccard_min: f64,
    pub containment_min: f64,
    pub strong_min_shared_tokens: usize,
    pub strong_containment_min: f64,
    pub substring_min_len: usize,
    pub dice_min: f64,
}

impl Default for SimilarityThresholds {
    fn default() -> Self {
        Self {
            min_shared_tokens: 3,
            jaccard_min: 0.28,
            containment_min: 0.55,
            strong_min_shared_tokens: 2,
            strong_containment_min: 0.72,
            substring_min_len: 24,
            dice_min: 0.72,
        }
    }
}

impl SimilarityThresholds {
    pub fn token_similar(&self, a: &TokenSet, b: &TokenSet) -> bool {
        if a.is_empty() || b.is_empty() {
            return false;
        }

        let shared = a.intersection(b).count();
        let union = a.len() + b.len() - shared;
        let jaccard = shared as f64 / union as f64;
        let containment = shared as f64 / a.len().min(b.len()) as f64;

        (shared >= self.min_shared_tokens
            && (jaccard >= self.jaccard_min || containment >= self.containment_min))
            || (shared >= self.strong_min_shared_tokens
                && containment >= self.strong_containment_min)
    }

    pub fn text_similar(&self, a: &str, b: &str) -> bool {
        let a = normalize(a);
        let b = normalize(b);

        if a.len() >= self.substring_min_len
            && b.len() >= self.substring_min_len
            && (a.contains(&b) || b.contains(&a))
        {
            return true;
        }

        trigram_dice(&a, &b) >= self.dice_min
    }
}

pub fn token_similar(a: &TokenSet, b: &TokenSet) -> bool {
    SimilarityThresholds::default().token_similar(a, b)
}

pub fn text_similar(a: &str, b: &str) -> bool {
    SimilarityThresholds::default().text_similar(a, b)
}

/// Dice coefficient over character trigrams of the whitespace-stripped
/// normalized text.
pub fn trigram_dice(a: &str, b: &str) -> f64 {
    let left = trigrams(a);
    let right = trigrams(b);
    let total = left.len() + right.len();
    if total == 0 {
        return 0.0;
    }
    let shared = left.intersection(&right).count();
    2.0 * shared as f64 / total as f64
}

fn trigrams(text: &str) -> HashSet<String> {
    let chars: Vec<char> = normalize(text)
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect();
    chars
        .windows(3)
        .map(|window| window.iter().collect::<String>())
        .collect()
}
