use serde::Deserialize;
use std::io::{self, Read};
use std::path::Path;
use topic_trends::{Error, RawTopicRecord, Result};

#[derive(Deserialize)]
struct FeedDocument {
    records: Vec<RawTopicRecord>,
}

/// Reads a record feed from `path`, or stdin when no path is given.
pub fn read_feed(path: Option<&Path>) -> Result<Vec<RawTopicRecord>> {
    let contents = match path {
        Some(path) => std::fs::read_to_string(path).map_err(|err| {
            Error::Input(format!("failed to read {}: {}", path.display(), err))
        })?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    parse_feed(&contents)
}

/// Accepts a JSON array, `{ "records": [...] }`, or one record per line.
pub fn parse_feed(contents: &str) -> Result<Vec<RawTopicRecord>> {
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }
    if let Ok(document) = serde_json::from_str::<FeedDocument>(trimmed) {
        return Ok(document.records);
    }

    trimmed
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(number, line)| {
            serde_json::from_str(line)
                .map_err(|err| Error::Input(format!("line {}: {}", number + 1, err)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{"date":"2026-10-19","platform":"reddit","keyword":"claude","category":"ecosystem","topic_title":"Claude ships","post_count":4}"#;

    #[test]
    fn parses_array_and_wrapped_documents() {
        let array = format!("[{}]", RECORD);
        assert_eq!(parse_feed(&array).unwrap().len(), 1);

        let wrapped = format!("{{\"records\": [{}, {}]}}", RECORD, RECORD);
        assert_eq!(parse_feed(&wrapped).unwrap().len(), 2);
    }

    #[test]
    fn parses_json_lines_with_defaults() {
        let lines = format!("{}\n\n{}\n", RECORD, RECORD);
        let records = parse_feed(&lines).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].sample_urls.is_empty());
        assert!(records[0].summary.is_empty());
        assert!(records[0].topic_key.is_none());
    }

    #[test]
    fn parses_pretty_printed_wrapper() {
        let wrapped = format!("{{\n  \"records\": [\n    {}\n  ]\n}}\n", RECORD);
        let records = parse_feed(&wrapped).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].post_count, 4);
    }

    #[test]
    fn empty_feed_is_empty() {
        assert!(parse_feed("  \n").unwrap().is_empty());
    }

    #[test]
    fn reports_bad_line_number() {
        let lines = format!("{}\nnot json\n", RECORD);
        let err = parse_feed(&lines).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
