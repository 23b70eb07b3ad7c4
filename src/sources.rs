use url::Url;

pub const FALLBACK_SOURCE_LABEL: &str = "Source";

const KNOWN_HOSTS: [(&str, &str); 9] = [
    ("news.ycombinator.com", "Hacker News"),
    ("reddit.com", "Reddit"),
    ("x.com", "X"),
    ("twitter.com", "X"),
    ("youtube.com", "YouTube"),
    ("youtu.be", "YouTube"),
    ("github.com", "GitHub"),
    ("linkedin.com", "LinkedIn"),
    ("bsky.app", "Bluesky"),
];

/// Display label for the site a link points at.
pub fn source_label(url: &str) -> String {
    let host = match Url::parse(url.trim()) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.trim_start_matches("www.").to_lowercase(),
            None => return FALLBACK_SOURCE_LABEL.to_string(),
        },
        Err(_) => return FALLBACK_SOURCE_LABEL.to_string(),
    };

    for (known, label) in KNOWN_HOSTS {
        if host == known || host.ends_with(&format!(".{}", known)) {
            return label.to_string();
        }
    }
    if host.ends_with(".social") {
        return "Mastodon".to_string();
    }
    host
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_known_hosts() {
        assert_eq!(source_label("https://www.reddit.com/r/rust/comments/1"), "Reddit");
        assert_eq!(source_label("https://old.reddit.com/r/rust"), "Reddit");
        assert_eq!(source_label("https://news.ycombinator.com/item?id=1"), "Hacker News");
        assert_eq!(source_label("https://twitter.com/someone/status/1"), "X");
        assert_eq!(source_label("https://fosstodon.social/@dev/1"), "Mastodon");
    }

    #[test]
    fn unknown_hosts_use_bare_host() {
        assert_eq!(source_label("https://www.example.org/post"), "example.org");
    }

    #[test]
    fn malformed_urls_fall_back() {
        assert_eq!(source_label("not a url"), FALLBACK_SOURCE_LABEL);
        assert_eq!(source_label(""), FALLBACK_SOURCE_LABEL);
        assert_eq!(source_label("mailto:someone@example.org"), FALLBACK_SOURCE_LABEL);
    }
}
