//! Date-stamp extraction from the holiday feed.
//!
//! The feed is an ICS document, but the marker syntax for event start dates
//! varies between `DTSTART:20260501` and `DTSTART;VALUE=DATE:20260501`.
//! Rather than parse the full calendar structure, the extraction scans for
//! any start-date marker followed by an 8-digit `YYYYMMDD` stamp, which is
//! tolerant of everything else in the document being malformed.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Matches a start-date marker, bare or parameterized, and captures the
/// 8-digit date stamp that follows it on the same line.
static DATE_STAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"DTSTART[;:].*?([0-9]{8})").expect("date-stamp pattern is valid")
});

/// Extracts the public-holiday days of a given month from a feed document.
///
/// Every date stamp whose year and month match the query contributes its
/// day-of-month. The result is ascending and duplicate-free. A document with
/// no recognizable date stamps yields an empty set; extraction itself never
/// fails.
///
/// # Example
///
/// ```
/// use cesu_engine::feed::extract_holidays;
///
/// let feed = "DTSTART;VALUE=DATE:20260501\nDTSTART:20260714\n";
/// assert_eq!(extract_holidays(feed, 2026, 5), vec![1]);
/// assert_eq!(extract_holidays(feed, 2026, 7), vec![14]);
/// assert_eq!(extract_holidays(feed, 2026, 8), Vec::<u32>::new());
/// ```
pub fn extract_holidays(feed: &str, year: i32, month: u32) -> Vec<u32> {
    let mut days = BTreeSet::new();

    for caps in DATE_STAMP.captures_iter(feed) {
        let stamp = &caps[1];
        let (Ok(stamp_year), Ok(stamp_month), Ok(stamp_day)) = (
            stamp[0..4].parse::<i32>(),
            stamp[4..6].parse::<u32>(),
            stamp[6..8].parse::<u32>(),
        ) else {
            continue;
        };

        if stamp_year == year && stamp_month == month {
            days.insert(stamp_day);
        }
    }

    days.into_iter().collect()
}

/// Whether the document contains any start-date records at all.
///
/// Used by the loader to distinguish a feed that simply has no holidays in
/// the queried month from a document that is not a calendar at all.
pub fn contains_date_records(feed: &str) -> bool {
    DATE_STAMP.is_match(feed)
}
