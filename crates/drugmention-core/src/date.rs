//! Flexible textual date parsing.
//!
//! Landing files mix ISO dates, day-month-name dates and slash dates. Numeric
//! slash or dash dates are read month-first; when the first number cannot
//! be a month the day-first reading applies instead.
//!
//! Four-digit years are required wherever a format carries `%Y`; chrono would
//! otherwise read `01/03/20` as year 20. Two-digit years are only accepted in
//! slash and dot forms and pivot the way chrono's `%y` does (`00..=69` is the
//! 2000s, `70..=99` the 1900s).

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use regex::Regex;

const MIN_FOUR_DIGIT_YEAR: i32 = 1000;

/// Leading weekday name with optional `.` and `,` (`Wednesday, `, `Wed. `).
static LEADING_WEEKDAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:mon|tue|wed|thu|fri|sat|sun)[a-z]*\.?,?\s+")
        .expect("Invalid weekday regex")
});

/// English ordinal suffix on a day number (`1st`, `22nd`, `3rd`, `4th`).
static ORDINAL_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})(?:st|nd|rd|th)\b").expect("Invalid ordinal regex")
});

/// Abbreviated month name followed by a period (`Jan.`, `Sept.`).
static MONTH_ABBREVIATION_DOT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(jan|feb|mar|apr|jun|jul|aug|sep|oct|nov|dec)t?\.")
        .expect("Invalid month abbreviation regex")
});

/// Parse a calendar date from any of the supported textual forms.
///
/// Datetimes are accepted and truncated to their date. Returns `None` for
/// blank or unrecognized input.
pub fn parse_flexible_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = normalize(trimmed);
    try_parse_datetime(&normalized)
        .map(|dt| dt.date())
        .or_else(|| try_parse_date(&normalized))
}

/// Drop decorations chrono cannot match: a leading weekday, ordinal
/// suffixes and the period after an abbreviated month.
fn normalize(value: &str) -> String {
    let text = LEADING_WEEKDAY.replace(value, "");
    let text = ORDINAL_SUFFIX.replace_all(&text, "$1");
    MONTH_ABBREVIATION_DOT.replace_all(&text, "$1").into_owned()
}

/// Try to parse formats carrying a time of day.
fn try_parse_datetime(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }

    let formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
        "%m/%d/%Y %H:%M:%S",
        "%m/%d/%Y %H:%M",
    ];

    formats
        .iter()
        .filter_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .find(|dt| has_four_digit_year(dt.date()))
}

/// Try to parse date-only formats.
fn try_parse_date(value: &str) -> Option<NaiveDate> {
    let formats = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%m/%d/%Y",  // US first: 01/03/2020 is January 3rd
        "%d/%m/%Y",  // 25/05/2020
        "%m-%d-%Y",  // 01-03-2020
        "%d-%m-%Y",  // 25-05-2020
        "%d.%m.%Y",  // 25.05.2020
        "%Y%m%d",    // 20200525
        "%d %B %Y",  // 1 January 2020
        "%d %b %Y",  // 1 Jan 2020
        "%B %d, %Y", // January 1, 2020
        "%b %d, %Y", // Jan 1, 2020
        "%B %d %Y",  // January 1 2020
        "%d-%b-%Y",  // 01-Jan-2020
        "%Y-%b-%d",  // 2020-Jan-01
        "%m/%d/%y",  // 01/03/20
        "%d/%m/%y",  // 25/05/20
        "%d.%m.%y",  // 25.05.20
    ];

    formats
        .iter()
        .filter_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .find(|date| has_four_digit_year(*date))
}

fn has_four_digit_year(date: NaiveDate) -> bool {
    date.year() >= MIN_FOUR_DIGIT_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day)
    }

    #[test]
    fn parses_iso_date() {
        assert_eq!(parse_flexible_date("2020-01-01"), ymd(2020, 1, 1));
    }

    #[test]
    fn parses_month_name() {
        assert_eq!(parse_flexible_date("1 January 2020"), ymd(2020, 1, 1));
        assert_eq!(parse_flexible_date("27 April 2020"), ymd(2020, 4, 27));
    }

    #[test]
    fn ambiguous_slash_date_is_month_first() {
        assert_eq!(parse_flexible_date("01/03/2020"), ymd(2020, 1, 3));
    }

    #[test]
    fn falls_back_to_day_first() {
        assert_eq!(parse_flexible_date("25/05/2020"), ymd(2020, 5, 25));
    }

    #[test]
    fn truncates_datetime() {
        assert_eq!(parse_flexible_date("2020-04-27 10:15:00"), ymd(2020, 4, 27));
        assert_eq!(
            parse_flexible_date("2020-04-27T10:15:00+02:00"),
            ymd(2020, 4, 27)
        );
    }

    #[test]
    fn two_digit_slash_year_pivots_to_this_century() {
        assert_eq!(parse_flexible_date("01/03/20"), ymd(2020, 1, 3));
        assert_eq!(parse_flexible_date("1/3/20"), ymd(2020, 1, 3));
        assert_eq!(parse_flexible_date("25/05/20"), ymd(2020, 5, 25));
        assert_eq!(parse_flexible_date("25.05.99"), ymd(1999, 5, 25));
    }

    #[test]
    fn short_years_never_land_in_the_first_millennium() {
        assert_eq!(parse_flexible_date("Jan 2020"), None);
        assert_eq!(parse_flexible_date("20-01-01"), None);
        assert_eq!(parse_flexible_date("1/3/20 10:15"), None);
    }

    #[test]
    fn strips_ordinal_suffix() {
        assert_eq!(parse_flexible_date("January 1st, 2020"), ymd(2020, 1, 1));
        assert_eq!(parse_flexible_date("22nd March 2020"), ymd(2020, 3, 22));
    }

    #[test]
    fn strips_period_after_month_abbreviation() {
        assert_eq!(parse_flexible_date("1 Jan. 2020"), ymd(2020, 1, 1));
        assert_eq!(parse_flexible_date("Sept. 4, 2020"), ymd(2020, 9, 4));
    }

    #[test]
    fn strips_leading_weekday() {
        assert_eq!(
            parse_flexible_date("Wednesday, 1 January 2020"),
            ymd(2020, 1, 1)
        );
        assert_eq!(parse_flexible_date("Wed 1 Jan 2020"), ymd(2020, 1, 1));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_flexible_date(""), None);
        assert_eq!(parse_flexible_date("   "), None);
        assert_eq!(parse_flexible_date("not a date"), None);
        assert_eq!(parse_flexible_date("2020-13-45"), None);
    }
}
