use topic_trends::keys::{
    resolve_topic_key, story_key, topic_key, StoryText, ANTHROPIC_PENTAGON_STORY,
};

#[test]
fn topic_key_ignores_case_punctuation_and_spacing() {
    let messy = topic_key("Ecosystem", "Claude Code", " New   Release!! ");
    let clean = topic_key("ecosystem", "claude code", "new release");
    assert_eq!(messy, clean);
    assert_eq!(clean, "ecosystem::claude code::new release");
}

#[test]
fn topic_key_separates_keywords() {
    assert_ne!(
        topic_key("ecosystem", "claude", "new release"),
        topic_key("ecosystem", "gemini", "new release")
    );
    assert_ne!(
        topic_key("ecosystem", "claude", "new release"),
        topic_key("enterprise", "claude", "new release")
    );
}

#[test]
fn assigned_key_wins_verbatim() {
    assert_eq!(
        resolve_topic_key(Some("Legacy::Key"), "ecosystem", "claude", "Title"),
        "Legacy::Key"
    );
    assert_eq!(
        resolve_topic_key(Some("   "), "ecosystem", "claude", "Title"),
        "ecosystem::claude::title"
    );
    assert_eq!(
        resolve_topic_key(None, "ecosystem", "claude", "Title"),
        "ecosystem::claude::title"
    );
}

#[test]
fn recurring_story_needs_trump_and_pentagon() {
    let key = story_key(
        "Anthropic clashes with Pentagon",
        "Trump administration weighs in",
        "claude",
    );
    assert_eq!(key.as_deref(), Some(ANTHROPIC_PENTAGON_STORY));
}

#[test]
fn recurring_story_accepts_one_side_with_escalation() {
    let key = story_key("Anthropic designated supply chain risk by Pentagon", "", "");
    assert_eq!(key.as_deref(), Some(ANTHROPIC_PENTAGON_STORY));

    let key = story_key("Trump says Anthropic models banned", "", "");
    assert_eq!(key.as_deref(), Some(ANTHROPIC_PENTAGON_STORY));
}

#[test]
fn recurring_story_requires_anthropic() {
    let key = story_key("Trump visits the Pentagon", "", "");
    assert_ne!(key.as_deref(), Some(ANTHROPIC_PENTAGON_STORY));
}

#[test]
fn two_entities_and_an_event_make_a_story() {
    let key = story_key("OpenAI and Microsoft face antitrust probe", "", "");
    assert_eq!(key.as_deref(), Some("story:microsoft+openai|antitrust+probe"));
}

#[test]
fn three_entities_make_a_story() {
    let key = story_key("Google, Apple and Nvidia share the stage", "", "");
    assert_eq!(key.as_deref(), Some("story:apple+google+nvidia"));
}

#[test]
fn entity_list_is_capped() {
    let key = story_key("Google Apple Nvidia Tesla Meta Amazon", "", "");
    assert_eq!(key.as_deref(), Some("story:amazon+apple+google+meta"));
}

#[test]
fn weak_evidence_has_no_story() {
    assert_eq!(story_key("Anthropic talks to Trump", "", ""), None);
    assert_eq!(story_key("Rust 2.0 released", "", ""), None);
    assert_eq!(story_key("", "", ""), None);
}

#[test]
fn story_text_reads_all_three_fields() {
    let story = StoryText::new("Lawsuit filed", "Microsoft named alongside", "openai");
    assert_eq!(story.key().as_deref(), Some("story:microsoft+openai|lawsuit"));
}

#[test]
fn recurring_story_ignores_words_inside_its_names() {
    assert_eq!(
        story_key("Anthropic pricing change two weeks ago, Trump tweets", "", ""),
        None
    );
    assert_eq!(story_key("Trump signs pen for Anthropic hiring rally", "", ""), None);
    assert_eq!(story_key("Anthropic rum tasting tag at the Pentagon", "", ""), None);
}

#[test]
fn recurring_story_accepts_inflected_names() {
    let key = story_key("Anthropic classified briefing for Pentagon officials", "", "");
    assert_eq!(key.as_deref(), Some(ANTHROPIC_PENTAGON_STORY));
}
