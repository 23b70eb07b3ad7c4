use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

use crate::cluster::signature::{DocumentFrequency, Signature};
use crate::keys::StoryText;
use crate::text::{tokenize, SimilarityThresholds, TokenSet};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    pub signature_size: usize,
    pub strong_signature_overlap: usize,
    pub weak_signature_overlap: usize,
    pub match_text_cap: usize,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            signature_size: 8,
            strong_signature_overlap: 3,
            weak_signature_overlap: 2,
            match_text_cap: 600,
        }
    }
}

/// An item the signature clusterer can group.
pub trait Clusterable {
    /// Text used for tokens, signatures and whole-text similarity.
    fn cluster_text(&self) -> String;

    /// Fields for the story key, when the item carries them.
    fn story_text(&self) -> Option<StoryText<'_>>;
}

/// Which rule accepted an item into a cluster, in the order rules are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchReason {
    StoryKey,
    SignatureOverlap,
    SignatureAndTokens,
    Tokens,
    Text,
}

#[derive(Debug, Clone)]
pub struct Cluster<T> {
    /// Merged output record.
    pub payload: T,
    /// Input positions of the members, seed first.
    pub members: Vec<usize>,
    /// Rule that admitted each member after the seed.
    pub reasons: Vec<MatchReason>,
    pub tokens: TokenSet,
    pub signature: Signature,
    pub story_keys: BTreeSet<String>,
    pub match_text: String,
}

struct Candidate {
    index: usize,
    text: String,
    tokens: TokenSet,
    signature: Signature,
    story_key: Option<String>,
}

/// Greedy single-pass clustering over rarity signatures.
///
/// Items are visited in input order and each joins the *first* cluster, in
/// creation order, that any rule accepts. The grouping is therefore not
/// transitive: an item that would match two clusters goes to the older one
/// and the two clusters stay apart. Input order is part of the result.
#[derive(Debug, Clone, Default)]
pub struct SignatureClusterer {
    config: ClusterConfig,
    similarity: SimilarityThresholds,
}

impl SignatureClusterer {
    pub fn new(config: ClusterConfig, similarity: SimilarityThresholds) -> Self {
        Self { config, similarity }
    }

    pub fn cluster<T, M>(&self, items: Vec<T>, mut merge: M) -> Vec<Cluster<T>>
    where
        T: Clusterable,
        M: FnMut(&mut T, T),
    {
        if items.is_empty() {
            return Vec::new();
        }

        let texts: Vec<String> = items.iter().map(Clusterable::cluster_text).collect();
        let token_sets: Vec<TokenSet> = texts.iter().map(|text| tokenize(text)).collect();
        let frequency = DocumentFrequency::from_token_sets(&token_sets);

        let candidates: Vec<Candidate> = items
            .iter()
            .zip(texts)
            .zip(token_sets)
            .enumerate()
            .map(|(index, ((item, text), tokens))| Candidate {
                index,
                signature: frequency.signature(&tokens, self.config.signature_size),
                story_key: item.story_text().and_then(|story| story.key()),
                text,
                tokens,
            })
            .collect();

        let total = candidates.len();
        let mut clusters: Vec<Cluster<T>> = Vec::new();

        for (item, candidate) in items.into_iter().zip(candidates) {
            let matched = clusters
                .iter()
                .enumerate()
                .find_map(|(position, cluster)| {
                    self.match_reason(cluster, &candidate)
                        .map(|reason| (position, reason))
                });

            match matched {
                Some((position, reason)) => {
                    debug!(
                        item = candidate.index,
                        cluster = position,
                        reason = ?reason,
                        "merging item into cluster"
                    );
                    let cluster = &mut clusters[position];
                    self.absorb(cluster, candidate, reason);
                    merge(&mut cluster.payload, item);
                }
                None => clusters.push(self.open(item, candidate)),
            }
        }

        debug!(items = total, clusters = clusters.len(), "signature clustering finished");
        clusters
    }

    fn match_reason<T>(&self, cluster: &Cluster<T>, candidate: &Candidate) -> Option<MatchReason> {
        if let Some(key) = candidate.story_key.as_ref() {
            if cluster.story_keys.contains(key) {
                return Some(MatchReason::StoryKey);
            }
        }

        let overlap = cluster.signature.intersection(&candidate.signature).count();
        if overlap >= self.config.strong_signature_overlap {
            return Some(MatchReason::SignatureOverlap);
        }

        let tokens_similar = self
            .similarity
            .token_similar(&cluster.tokens, &candidate.tokens);
        if overlap >= self.config.weak_signature_overlap && tokens_similar {
            return Some(MatchReason::SignatureAndTokens);
        }
        if tokens_similar {
            return Some(MatchReason::Tokens);
        }

        if self.similarity.text_similar(&cluster.match_text, &candidate.text) {
            return Some(MatchReason::Text);
        }
        None
    }

    fn open<T>(&self, payload: T, candidate: Candidate) -> Cluster<T> {
        let mut match_text = String::new();
        append_capped(&mut match_text, &candidate.text, self.config.match_text_cap);
        Cluster {
            payload,
            members: vec![candidate.index],
            reasons: Vec::new(),
            tokens: candidate.tokens,
            signature: candidate.signature,
            story_keys: candidate.story_key.into_iter().collect(),
            match_text,
        }
    }

    fn absorb<T>(&self, cluster: &mut Cluster<T>, candidate: Candidate, reason: MatchReason) {
        cluster.members.push(candidate.index);
        cluster.reasons.push(reason);
        cluster.tokens.extend(candidate.tokens);
        cluster.signature.extend(candidate.signature);
        cluster.story_keys.extend(candidate.story_key);
        append_capped(
            &mut cluster.match_text,
            &candidate.text,
            self.config.match_text_cap,
        );
    }
}

/// Appends `text`, keeping the oldest `cap` characters.
fn append_capped(buffer: &mut String, text: &str, cap: usize) {
    if !buffer.is_empty() {
        buffer.push(' ');
    }
    buffer.push_str(text);
    if let Some((end, _)) = buffer.char_indices().nth(cap) {
        buffer.truncate(end);
    }
}
