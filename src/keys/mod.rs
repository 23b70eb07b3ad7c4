pub mod story;
pub mod topic;

pub use story::{story_key, StoryText, ANTHROPIC_PENTAGON_STORY};
pub use topic::{resolve_topic_key, topic_key, TOPIC_KEY_SEPARATOR};
