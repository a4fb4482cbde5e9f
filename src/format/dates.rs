//! Date display and calendar arithmetic
//!
//! Ages and tenures count whole calendar units: a period only counts once the
//! day-of-month of the anniversary has been reached.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Placeholder shown for absent or unreadable values
pub const NOT_AVAILABLE: &str = "N/A";

/// Parse an ISO date (`2024-06-15`) or timestamp (`2024-06-15T09:00:00Z`)
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

/// `15 Jun 2000`, or `N/A` when absent or unparseable
pub fn format_date(raw: Option<&str>) -> String {
    raw.and_then(parse_date)
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// `start - end` period, with `Present` for an open end
pub fn format_period(start: &str, end: Option<&str>) -> String {
    let end = match end {
        Some(end) => format_date(Some(end)),
        None => "Present".to_string(),
    };
    format!("{} - {}", format_date(Some(start)), end)
}

/// Whole months elapsed from `start` to `end`; negative if `end` is earlier
pub fn whole_months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let mut months =
        (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if end.day() < start.day() {
        months -= 1;
    }
    months
}

/// Age in whole years on `today`; `None` for an unreadable date of birth
pub fn calculate_age(dob: &str, today: NaiveDate) -> Option<u32> {
    let born = parse_date(dob)?;
    Some((whole_months_between(born, today).max(0) / 12) as u32)
}

/// Tenure as `2yr 3mo` or `7mo`; future start dates count as `0mo`
pub fn calculate_tenure(start: &str, today: NaiveDate) -> String {
    let Some(started) = parse_date(start) else {
        return NOT_AVAILABLE.to_string();
    };
    let months = whole_months_between(started, today).max(0);
    let (years, months) = (months / 12, months % 12);

    if years > 0 {
        format!("{}yr {}mo", years, months)
    } else {
        format!("{}mo", months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_counts_birthday_only_once_reached() {
        assert_eq!(calculate_age("2000-06-15", date(2024, 6, 14)), Some(23));
        assert_eq!(calculate_age("2000-06-15", date(2024, 6, 15)), Some(24));
        assert_eq!(calculate_age("2000-06-15", date(2024, 5, 30)), Some(23));
        assert_eq!(calculate_age("2000-06-15", date(2024, 7, 1)), Some(24));
    }

    #[test]
    fn test_age_is_stable_across_calls() {
        let today = date(2024, 6, 14);
        let first = calculate_age("2000-06-15", today);
        assert_eq!(first, calculate_age("2000-06-15", today));
    }

    #[test]
    fn test_age_degrades_on_bad_input() {
        assert_eq!(calculate_age("", date(2024, 1, 1)), None);
        assert_eq!(calculate_age("yesterday", date(2024, 1, 1)), None);
        assert_eq!(calculate_age("2030-01-01", date(2024, 1, 1)), Some(0));
    }

    #[test]
    fn test_tenure() {
        let today = date(2024, 6, 14);
        assert_eq!(calculate_tenure("2021-04-01", today), "3yr 2mo");
        assert_eq!(calculate_tenure("2024-01-15", today), "4mo");
        assert_eq!(calculate_tenure("2024-06-01", today), "0mo");
        assert_eq!(calculate_tenure("2023-06-14", today), "1yr 0mo");
        assert_eq!(calculate_tenure("2023-06-15", today), "11mo");
        assert_eq!(calculate_tenure("2025-01-01", today), "0mo");
        assert_eq!(calculate_tenure("not a date", today), "N/A");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2000-06-15")), "15 Jun 2000");
        assert_eq!(format_date(Some("2024-01-05T10:30:00Z")), "05 Jan 2024");
        assert_eq!(format_date(Some("2024-01-05T10:30:00")), "05 Jan 2024");
        assert_eq!(format_date(None), "N/A");
        assert_eq!(format_date(Some("")), "N/A");
        assert_eq!(format_date(Some("31/12/2024")), "N/A");
    }

    #[test]
    fn test_format_period() {
        assert_eq!(format_period("2024-02-01", Some("2025-01-31")), "01 Feb 2024 - 31 Jan 2025");
        assert_eq!(format_period("2024-02-01", None), "01 Feb 2024 - Present");
    }
}
