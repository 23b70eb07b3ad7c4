use topic_trends::cluster::{
    ClusterConfig, Clusterable, DocumentFrequency, MatchReason, SignatureClusterer,
};
use topic_trends::keys::StoryText;
use topic_trends::text::{tokenize, SimilarityThresholds, TokenSet};

#[derive(Debug, Clone)]
struct Headline {
    title: String,
    posts: u64,
    with_story: bool,
}

impl Headline {
    fn new(title: &str, posts: u64) -> Self {
        Self {
            title: title.to_string(),
            posts,
            with_story: false,
        }
    }

    fn with_story(title: &str, posts: u64) -> Self {
        Self {
            with_story: true,
            ..Self::new(title, posts)
        }
    }
}

impl Clusterable for Headline {
    fn cluster_text(&self) -> String {
        self.title.clone()
    }

    fn story_text(&self) -> Option<StoryText<'_>> {
        if self.with_story {
            Some(StoryText::new(&self.title, "", ""))
        } else {
            None
        }
    }
}

fn sum_posts(into: &mut Headline, other: Headline) {
    into.posts += other.posts;
}

fn clusterer() -> SignatureClusterer {
    SignatureClusterer::default()
}

#[test]
fn merges_reworded_headlines() {
    let items = vec![
        Headline::new("OpenAI launches GPT-6", 5),
        Headline::new("GPT-6 launch: OpenAI", 7),
    ];
    let clusters = clusterer().cluster(items, sum_posts);

    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].payload.posts, 12);
    assert_eq!(clusters[0].payload.title, "OpenAI launches GPT-6");
    assert_eq!(clusters[0].members, vec![0, 1]);
    assert_eq!(clusters[0].reasons, vec![MatchReason::SignatureOverlap]);
}

#[test]
fn keeps_unrelated_headlines_apart() {
    let items = vec![
        Headline::new("OpenAI launches GPT-6", 5),
        Headline::new("Rust compiler gets faster builds", 3),
        Headline::new("Volcano erupts near island village", 2),
    ];
    let clusters = clusterer().cluster(items, sum_posts);
    assert_eq!(clusters.len(), 3);
    assert!(clusters.iter().all(|cluster| cluster.members.len() == 1));
}

#[test]
fn empty_input_gives_no_clusters() {
    let clusters = clusterer().cluster(Vec::<Headline>::new(), sum_posts);
    assert!(clusters.is_empty());
}

#[test]
fn clustering_is_deterministic() {
    let items = vec![
        Headline::new("OpenAI launches GPT-6", 5),
        Headline::new("Senator proposes budget reform bill", 1),
        Headline::new("GPT-6 launch: OpenAI", 7),
        Headline::new("Volcano erupts near island village", 2),
        Headline::new("OpenAI GPT-6 launch reactions", 4),
    ];

    let first = clusterer().cluster(items.clone(), sum_posts);
    let second = clusterer().cluster(items, sum_posts);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.members, b.members);
        assert_eq!(a.signature, b.signature);
        assert_eq!(a.tokens, b.tokens);
        assert_eq!(a.payload.posts, b.payload.posts);
    }
}

#[test]
fn first_matching_cluster_wins() {
    let volcano = Headline::new("Volcano erupts near island village", 1);
    let senate = Headline::new("Senator proposes budget reform bill", 1);
    let bridge = Headline::new("Volcano island village budget reform bill", 1);

    let clusters = clusterer().cluster(
        vec![volcano.clone(), senate.clone(), bridge.clone()],
        sum_posts,
    );
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].members, vec![0, 2]);
    assert_eq!(clusters[1].members, vec![1]);

    let clusters = clusterer().cluster(vec![senate, volcano, bridge], sum_posts);
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].members, vec![0, 2]);
    assert_eq!(clusters[1].members, vec![1]);
}

#[test]
fn story_key_links_differently_worded_headlines() {
    let items = vec![
        Headline::with_story("Pentagon and Trump target Anthropic", 3),
        Headline::with_story(
            "Anthropic barred after military contract dispute, says Pentagon",
            2,
        ),
    ];
    let clusters = clusterer().cluster(items, sum_posts);

    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].reasons, vec![MatchReason::StoryKey]);
    assert!(clusters[0].story_keys.contains("story:anthropic-pentagon"));
    assert_eq!(clusters[0].payload.posts, 5);
}

#[test]
fn whole_text_match_covers_tokenless_text() {
    let items = vec![
        Headline::new("ab cd ef gh ij kl mn op qr st uv wx", 1),
        Headline::new("ab cd ef gh ij kl mn op qr st", 1),
    ];
    let clusters = clusterer().cluster(items, sum_posts);

    assert_eq!(clusters.len(), 1);
    assert!(clusters[0].tokens.is_empty());
    assert_eq!(clusters[0].reasons, vec![MatchReason::Text]);
}

#[test]
fn match_text_keeps_oldest_text_within_cap() {
    let config = ClusterConfig {
        match_text_cap: 30,
        ..ClusterConfig::default()
    };
    let clusterer = SignatureClusterer::new(config, SimilarityThresholds::default());
    let items = vec![
        Headline::new("OpenAI launches GPT-6", 1),
        Headline::new("GPT-6 launch: OpenAI", 1),
        Headline::new("OpenAI GPT-6 launch day", 1),
    ];
    let clusters = clusterer.cluster(items, sum_posts);

    assert_eq!(clusters.len(), 1);
    let text = &clusters[0].match_text;
    assert!(text.starts_with("OpenAI launches GPT-6 GPT-6"));
    assert_eq!(text.chars().count(), 30);
}

#[test]
fn signature_prefers_rare_tokens() {
    let sets: Vec<TokenSet> = vec![
        tokenize("common rarest"),
        tokenize("common other"),
        tokenize("common third"),
    ];
    let frequency = DocumentFrequency::from_token_sets(&sets);

    assert_eq!(frequency.get("common"), 3);
    assert_eq!(frequency.get("missing"), 0);
    let signature = frequency.signature(&sets[0], 1);
    assert_eq!(signature.into_iter().collect::<Vec<_>>(), vec!["rarest"]);
}

#[test]
fn signature_is_bounded_and_alphabetical_on_ties() {
    let tokens =
        tokenize("alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima");
    let frequency = DocumentFrequency::from_token_sets([&tokens]);
    let signature = frequency.signature(&tokens, 8);

    assert_eq!(
        signature.into_iter().collect::<Vec<_>>(),
        vec!["alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel"]
    );
}
