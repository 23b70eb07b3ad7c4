use crate::text::normalize;

pub const TOPIC_KEY_SEPARATOR: &str = "::";

/// Identity of a topic within a category and keyword, insensitive to the
/// casing, punctuation and spacing of its title.
pub fn topic_key(category: &str, keyword: &str, title: &str) -> String {
    [
        category.trim().to_lowercase(),
        keyword.trim().to_lowercase(),
        normalize(title),
    ]
    .join(TOPIC_KEY_SEPARATOR)
}

/// A key already assigned by the store outlives any change to the
/// normalization rule, so it is used verbatim when present.
pub fn resolve_topic_key(
    assigned: Option<&str>,
    category: &str,
    keyword: &str,
    title: &str,
) -> String {
    match assigned {
        Some(key) if !key.trim().is_empty() => key.to_string(),
        _ => topic_key(category, keyword, title),
    }
}
