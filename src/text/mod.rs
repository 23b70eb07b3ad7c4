pub mod similarity;
pub mod tokenize;

pub use similarity::{text_similar, token_similar, trigram_dice, SimilarityThresholds};
pub use tokenize::{normalize, stem, thread_text, tokenize, TokenSet, THREAD_SUMMARY_CHARS};
