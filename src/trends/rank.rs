use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::TrendTopic;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub new_today_limit: usize,
    pub trending_limit: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            new_today_limit: 10,
            trending_limit: 10,
        }
    }
}

/// Fills `today_rank` and `yesterday_rank`, 1-based. Topics with no posts
/// on the day in question stay unranked.
pub fn assign_ranks(topics: &mut [TrendTopic]) {
    for topic in topics.iter_mut() {
        topic.today_rank = None;
        topic.yesterday_rank = None;
    }

    let mut today: Vec<usize> = (0..topics.len())
        .filter(|&index| topics[index].today_count > 0)
        .collect();
    today.sort_by(|&a, &b| by_today(&topics[a], &topics[b]));
    for (rank, index) in today.into_iter().enumerate() {
        topics[index].today_rank = Some(rank as u32 + 1);
    }

    let mut yesterday: Vec<usize> = (0..topics.len())
        .filter(|&index| topics[index].yesterday_count > 0)
        .collect();
    yesterday.sort_by(|&a, &b| {
        let (a, b) = (&topics[a], &topics[b]);
        b.yesterday_count
            .cmp(&a.yesterday_count)
            .then_with(|| b.total_count.cmp(&a.total_count))
    });
    for (rank, index) in yesterday.into_iter().enumerate() {
        topics[index].yesterday_rank = Some(rank as u32 + 1);
    }
}

/// Topics first seen today, busiest first.
pub fn new_today(topics: &[TrendTopic], limit: usize) -> Vec<TrendTopic> {
    let mut selected: Vec<TrendTopic> = topics
        .iter()
        .filter(|topic| topic.is_new_today && topic.today_count > 0)
        .cloned()
        .collect();
    selected.sort_by(by_today);
    selected.truncate(limit);
    selected
}

/// Topics with the strongest momentum over the whole window.
pub fn trending(topics: &[TrendTopic], limit: usize) -> Vec<TrendTopic> {
    let mut selected: Vec<TrendTopic> = topics
        .iter()
        .filter(|topic| topic.total_count > 0)
        .cloned()
        .collect();
    selected.sort_by(|a, b| {
        cmp_desc(a.score, b.score).then_with(|| b.total_count.cmp(&a.total_count))
    });
    selected.truncate(limit);
    selected
}

fn by_today(a: &TrendTopic, b: &TrendTopic) -> Ordering {
    b.today_count
        .cmp(&a.today_count)
        .then_with(|| cmp_desc(a.score, b.score))
}

fn cmp_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
