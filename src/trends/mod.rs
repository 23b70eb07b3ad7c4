pub mod merge;
pub mod rank;
pub mod series;
pub mod state;

pub use merge::merge_series;
pub use rank::{assign_ranks, new_today, trending, ViewConfig};
pub use series::{group_by_key, momentum_score, window_dates, KeySeries};

use tracing::info;

use crate::cluster::SignatureClusterer;
use crate::config::EngineConfig;
use crate::{RawTopicRecord, TrendTopic};

/// Turns a window of raw records into ranked, deduplicated trend series.
#[derive(Debug, Clone, Default)]
pub struct TrendAggregator {
    clusterer: SignatureClusterer,
}

impl TrendAggregator {
    pub fn new(clusterer: SignatureClusterer) -> Self {
        Self { clusterer }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(SignatureClusterer::new(
            config.cluster.clone(),
            config.similarity.clone(),
        ))
    }

    /// Topics for `category`, ordered by today's volume then momentum.
    /// `today` is the caller's local calendar day.
    pub fn build(
        &self,
        records: &[RawTopicRecord],
        category: &str,
        today: &str,
    ) -> Vec<TrendTopic> {
        let today = today.trim();
        let window = window_dates(records);
        let series = group_by_key(records, category, today);
        let keys = series.len();

        let mut topics: Vec<TrendTopic> = merge_series(&self.clusterer, series, today)
            .iter()
            .map(|story| story.materialize(&window, today))
            .collect();
        assign_ranks(&mut topics);
        topics.sort_by(|a, b| {
            b.today_count
                .cmp(&a.today_count)
                .then_with(|| {
                    b.score
                        .partial_cmp(&a.score)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .then_with(|| b.total_count.cmp(&a.total_count))
        });

        info!(
            category,
            today,
            days = window.len(),
            keys,
            topics = topics.len(),
            "built trend series"
        );
        topics
    }
}
