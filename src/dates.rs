use chrono::{Duration, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub fn format_day(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// `day` moved by `offset` days, or `None` if `day` does not parse.
pub fn shift_days(day: &str, offset: i64) -> Option<String> {
    let date = parse_day(day)?;
    date.checked_add_signed(Duration::days(offset))
        .map(format_day)
}

/// Whole days from `from` to `to`.
pub fn days_between(from: &str, to: &str) -> Option<i64> {
    Some((parse_day(to)? - parse_day(from)?).num_days())
}

/// Inclusive count of days a topic has been running, never below one.
pub fn ongoing_days(first_seen: &str, today: &str) -> u32 {
    match days_between(first_seen, today) {
        Some(days) if days >= 0 => u32::try_from(days + 1).unwrap_or(u32::MAX),
        _ => 1,
    }
}
