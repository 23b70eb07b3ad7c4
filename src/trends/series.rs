use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::dates::{ongoing_days, shift_days};
use crate::keys::resolve_topic_key;
use crate::{DailyPosts, RawTopicRecord, TrendState, TrendTopic};

/// Per-key daily volume accumulated over the window.
#[derive(Debug, Clone)]
pub struct KeySeries {
    pub key: String,
    pub title: String,
    pub keyword: String,
    pub category: String,
    title_date: String,
    pub counts: BTreeMap<String, u64>,
    pub urls_by_date: BTreeMap<String, Vec<String>>,
    pub urls: Vec<String>,
    pub primary_url: Option<String>,
}

impl KeySeries {
    fn new(key: String, record: &RawTopicRecord) -> Self {
        Self {
            key,
            title: record.topic_title.clone(),
            keyword: record.keyword.clone(),
            category: record.category.clone(),
            title_date: record.date.trim().to_string(),
            counts: BTreeMap::new(),
            urls_by_date: BTreeMap::new(),
            urls: Vec::new(),
            primary_url: None,
        }
    }

    fn add_record(&mut self, record: &RawTopicRecord, today: &str) {
        let date = record.date.trim();
        if date >= today && date >= self.title_date.as_str() {
            self.title = record.topic_title.clone();
            self.keyword = record.keyword.clone();
            self.title_date = date.to_string();
        }

        let day = self.counts.entry(date.to_string()).or_insert(0);
        *day = day.saturating_add(record.post_count);
        for url in &record.sample_urls {
            let url = url.trim();
            if url.is_empty() {
                continue;
            }
            push_unique(self.urls_by_date.entry(date.to_string()).or_default(), url);
            push_unique(&mut self.urls, url);
        }
    }

    pub fn count_on(&self, date: &str) -> u64 {
        self.counts.get(date).copied().unwrap_or(0)
    }

    /// First URL of the most relevant day: today, yesterday, then every
    /// active day newest first.
    pub fn pick_primary_url(&self, today: &str) -> Option<String> {
        let mut order: Vec<String> = vec![today.to_string()];
        if let Some(yesterday) = shift_days(today, -1) {
            order.push(yesterday);
        }
        order.extend(
            self.counts
                .iter()
                .rev()
                .filter(|(_, posts)| **posts > 0)
                .map(|(date, _)| date.clone()),
        );

        order
            .iter()
            .filter_map(|date| self.urls_by_date.get(date))
            .find_map(|urls| urls.first().cloned())
    }

    /// Folds another series into this one. The member with more posts today
    /// lends its title and key; counts and URLs are summed and unioned.
    pub fn merge(&mut self, other: KeySeries, today: &str) {
        let incoming_leads = other.count_on(today) > self.count_on(today);
        let KeySeries {
            key,
            title,
            keyword,
            title_date,
            counts,
            urls_by_date,
            urls,
            primary_url,
            ..
        } = other;

        if incoming_leads {
            self.key = key;
            self.title = title;
            self.keyword = keyword;
            self.title_date = title_date;
        }
        for (date, posts) in counts {
            let day = self.counts.entry(date).or_insert(0);
            *day = day.saturating_add(posts);
        }
        for (date, day_urls) in urls_by_date {
            let entry = self.urls_by_date.entry(date).or_default();
            for url in day_urls {
                push_unique(entry, &url);
            }
        }
        for url in urls {
            push_unique(&mut self.urls, &url);
        }
        self.primary_url = self
            .primary_url
            .take()
            .or(primary_url)
            .or_else(|| self.urls.first().cloned());
    }

    /// Dense series over `window` with every derived field filled in. Ranks
    /// are left empty.
    pub fn materialize(&self, window: &[String], today: &str) -> TrendTopic {
        let data: Vec<DailyPosts> = window
            .iter()
            .map(|date| DailyPosts {
                date: date.clone(),
                posts: self.count_on(date),
            })
            .collect();

        let first_seen = data
            .iter()
            .find(|day| day.posts > 0)
            .map(|day| day.date.clone())
            .unwrap_or_else(|| today.to_string());
        let last_seen = data
            .iter()
            .rev()
            .find(|day| day.posts > 0)
            .map(|day| day.date.clone())
            .unwrap_or_else(|| today.to_string());

        let today_count = self.count_on(today);
        let yesterday_count = self.count_at_offset(today, -1);
        let two_days_ago_count = self.count_at_offset(today, -2);
        let total_count = data
            .iter()
            .fold(0u64, |total, day| total.saturating_add(day.posts));
        let is_new_today = first_seen == today;

        TrendTopic {
            key: self.key.clone(),
            title: self.title.clone(),
            keyword: self.keyword.clone(),
            category: self.category.clone(),
            primary_url: self.primary_url.clone(),
            data,
            today_count,
            yesterday_count,
            two_days_ago_count,
            total_count,
            score: momentum_score(today_count, yesterday_count, two_days_ago_count),
            ongoing_days: ongoing_days(&first_seen, today),
            first_seen,
            last_seen,
            is_new_today,
            trend_state: TrendState::classify(is_new_today, today_count, yesterday_count),
            today_rank: None,
            yesterday_rank: None,
            urls: self.urls.clone(),
        }
    }

    fn count_at_offset(&self, today: &str, offset: i64) -> u64 {
        shift_days(today, offset)
            .map(|date| self.count_on(&date))
            .unwrap_or(0)
    }
}

/// Short-horizon momentum; negative when the story is cooling off.
pub fn momentum_score(today: u64, yesterday: u64, two_days_ago: u64) -> f64 {
    today as f64 + 0.5 * yesterday as f64 - 0.5 * two_days_ago as f64
}

/// Every distinct date present in the window, ascending.
pub fn window_dates(records: &[RawTopicRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.date.trim().to_string())
        .filter(|date| !date.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Groups the category's records by topic key, in order of first appearance,
/// and settles each key's primary URL.
pub fn group_by_key(records: &[RawTopicRecord], category: &str, today: &str) -> Vec<KeySeries> {
    let mut series: Vec<KeySeries> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for record in records
        .iter()
        .filter(|record| record.category.trim().eq_ignore_ascii_case(category.trim()))
    {
        let key = resolve_topic_key(
            record.topic_key.as_deref(),
            &record.category,
            &record.keyword,
            &record.topic_title,
        );
        let position = match positions.get(&key) {
            Some(position) => *position,
            None => {
                positions.insert(key.clone(), series.len());
                series.push(KeySeries::new(key, record));
                series.len() - 1
            }
        };
        series[position].add_record(record, today);
    }

    for entry in series.iter_mut() {
        entry.primary_url = entry.pick_primary_url(today);
    }
    series
}

fn push_unique(list: &mut Vec<String>, url: &str) {
    if !list.iter().any(|existing| existing == url) {
        list.push(url.to_string());
    }
}
