pub mod cluster;
pub mod config;
pub mod dates;
pub mod error;
pub mod keys;
pub mod sources;
pub mod text;
pub mod threads;
pub mod trends;

use serde::{Deserialize, Serialize};

pub use crate::config::EngineConfig;
pub use crate::error::{Error, Result};

use crate::threads::ThreadMerger;
use crate::trends::TrendAggregator;

/// One platform + keyword + day occurrence of a topic, as stored by the
/// ingestion pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTopicRecord {
    /// Local calendar day, `YYYY-MM-DD`.
    pub date: String,
    pub platform: String,
    pub keyword: String,
    pub category: String,
    pub topic_title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub post_count: u64,
    #[serde(default)]
    pub sample_urls: Vec<String>,
    /// Key assigned by the store, authoritative when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicLink {
    pub url: String,
    pub platform: String,
    pub label: String,
}

/// A same-day thread: near-duplicate records of one day folded together.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedTopic {
    pub topic_title: String,
    pub summary: String,
    pub category: String,
    pub post_count: u64,
    pub links: Vec<TopicLink>,
    pub platforms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPosts {
    pub date: String,
    pub posts: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendState {
    New,
    Rising,
    Steady,
    Fading,
}

impl TrendState {
    pub fn label(self) -> &'static str {
        match self {
            TrendState::New => "new",
            TrendState::Rising => "rising",
            TrendState::Steady => "steady",
            TrendState::Fading => "fading",
        }
    }
}

/// A deduplicated story tracked across the window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendTopic {
    pub key: String,
    pub title: String,
    pub keyword: String,
    pub category: String,
    pub primary_url: Option<String>,
    /// One entry per distinct date in the window, zero-filled.
    pub data: Vec<DailyPosts>,
    pub today_count: u64,
    pub yesterday_count: u64,
    pub two_days_ago_count: u64,
    pub total_count: u64,
    pub score: f64,
    pub first_seen: String,
    pub last_seen: String,
    pub ongoing_days: u32,
    pub is_new_today: bool,
    pub trend_state: TrendState,
    pub today_rank: Option<u32>,
    pub yesterday_rank: Option<u32>,
    pub urls: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendReport {
    pub category: String,
    pub today: String,
    pub topics: Vec<TrendTopic>,
    pub new_today: Vec<TrendTopic>,
    pub trending: Vec<TrendTopic>,
}

/// Ranked trend series for one category over the records' window.
pub fn build_trends(
    records: &[RawTopicRecord],
    category: &str,
    today: &str,
    config: &EngineConfig,
) -> Vec<TrendTopic> {
    TrendAggregator::from_config(config).build(records, category, today)
}

pub fn trend_report(
    records: &[RawTopicRecord],
    category: &str,
    today: &str,
    config: &EngineConfig,
) -> TrendReport {
    let topics = build_trends(records, category, today, config);
    let new_today = trends::new_today(&topics, config.views.new_today_limit);
    let trending = trends::trending(&topics, config.views.trending_limit);

    TrendReport {
        category: category.to_string(),
        today: today.to_string(),
        topics,
        new_today,
        trending,
    }
}

/// Display threads for one category on one day, largest first.
pub fn merge_threads(
    records: &[RawTopicRecord],
    category: &str,
    date: &str,
    config: &EngineConfig,
) -> Vec<MergedTopic> {
    ThreadMerger::from_config(config).merge(records, category, date)
}

pub fn format_score(value: f64) -> String {
    format!("{:+.1}", value)
}
