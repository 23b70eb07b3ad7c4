use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cluster::{Clusterable, SignatureClusterer};
use crate::config::EngineConfig;
use crate::keys::StoryText;
use crate::sources::source_label;
use crate::text::{thread_text, THREAD_SUMMARY_CHARS};
use crate::{MergedTopic, RawTopicRecord, TopicLink};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreadConfig {
    pub summary_chars: usize,
    pub limit: usize,
}

impl Default for ThreadConfig {
    fn default() -> Self {
        Self {
            summary_chars: THREAD_SUMMARY_CHARS,
            limit: 20,
        }
    }
}

struct ThreadDraft {
    topic: MergedTopic,
    keyword: String,
    summary_chars: usize,
}

impl ThreadDraft {
    fn from_record(record: &RawTopicRecord, summary_chars: usize) -> Self {
        let mut links: Vec<TopicLink> = Vec::new();
        for url in &record.sample_urls {
            let url = url.trim();
            if url.is_empty() || links.iter().any(|link| link.url == url) {
                continue;
            }
            links.push(TopicLink {
                url: url.to_string(),
                platform: record.platform.clone(),
                label: source_label(url),
            });
        }

        let platforms = if record.platform.trim().is_empty() {
            Vec::new()
        } else {
            vec![record.platform.clone()]
        };

        Self {
            topic: MergedTopic {
                topic_title: record.topic_title.clone(),
                summary: record.summary.clone(),
                category: record.category.clone(),
                post_count: record.post_count,
                links,
                platforms,
            },
            keyword: record.keyword.clone(),
            summary_chars,
        }
    }

    fn absorb(&mut self, other: ThreadDraft) {
        let topic = &mut self.topic;
        topic.post_count = topic.post_count.saturating_add(other.topic.post_count);
        if other.topic.summary.chars().count() > topic.summary.chars().count() {
            topic.summary = other.topic.summary;
        }
        for platform in other.topic.platforms {
            if !topic.platforms.contains(&platform) {
                topic.platforms.push(platform);
            }
        }
        for link in other.topic.links {
            if !topic.links.iter().any(|existing| existing.url == link.url) {
                topic.links.push(link);
            }
        }
    }
}

impl Clusterable for ThreadDraft {
    fn cluster_text(&self) -> String {
        thread_text(&self.topic.topic_title, &self.topic.summary, self.summary_chars)
    }

    fn story_text(&self) -> Option<StoryText<'_>> {
        Some(StoryText::new(
            &self.topic.topic_title,
            &self.topic.summary,
            &self.keyword,
        ))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ThreadMerger {
    clusterer: SignatureClusterer,
    config: ThreadConfig,
}

impl ThreadMerger {
    pub fn new(clusterer: SignatureClusterer, config: ThreadConfig) -> Self {
        Self { clusterer, config }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            SignatureClusterer::new(config.cluster.clone(), config.similarity.clone()),
            config.threads.clone(),
        )
    }

    /// Threads for `category` on `date`, at most `limit` of them, by summed
    /// post count. The busiest record of a group seeds its cluster, so its
    /// title names the thread.
    pub fn merge(
        &self,
        records: &[RawTopicRecord],
        category: &str,
        date: &str,
    ) -> Vec<MergedTopic> {
        let date = date.trim();
        let mut day: Vec<&RawTopicRecord> = records
            .iter()
            .filter(|record| record.date.trim() == date)
            .filter(|record| record.category.trim().eq_ignore_ascii_case(category.trim()))
            .collect();
        day.sort_by(|a, b| b.post_count.cmp(&a.post_count));

        let drafts: Vec<ThreadDraft> = day
            .into_iter()
            .map(|record| ThreadDraft::from_record(record, self.config.summary_chars))
            .collect();
        let input = drafts.len();

        let mut threads: Vec<MergedTopic> = self
            .clusterer
            .cluster(drafts, ThreadDraft::absorb)
            .into_iter()
            .map(|cluster| cluster.payload.topic)
            .collect();
        threads.sort_by(|a, b| b.post_count.cmp(&a.post_count));
        threads.truncate(self.config.limit);

        debug!(
            category,
            date,
            records = input,
            threads = threads.len(),
            "merged same-day threads"
        );
        threads
    }
}
