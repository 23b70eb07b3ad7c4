use tracing::debug;

use crate::cluster::{Clusterable, SignatureClusterer};
use crate::keys::StoryText;
use crate::trends::series::KeySeries;

impl Clusterable for KeySeries {
    fn cluster_text(&self) -> String {
        self.title.clone()
    }

    fn story_text(&self) -> Option<StoryText<'_>> {
        Some(StoryText::new(&self.title, "", &self.keyword))
    }
}

/// Collapses key series that describe the same story, summing their days.
pub fn merge_series(
    clusterer: &SignatureClusterer,
    series: Vec<KeySeries>,
    today: &str,
) -> Vec<KeySeries> {
    let keys = series.len();
    let merged: Vec<KeySeries> = clusterer
        .cluster(series, |into, other| into.merge(other, today))
        .into_iter()
        .map(|cluster| cluster.payload)
        .collect();

    debug!(keys, stories = merged.len(), "merged key series across window");
    merged
}
