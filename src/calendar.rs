//! Calendar facts for a Gregorian year/month pair.
//!
//! This module answers the two calendar questions the salary formula needs:
//! how many days a month has, and on which days of the month a given weekday
//! falls. Both are pure functions of (year, month) with no clock access, so
//! calculations stay reproducible.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};

/// The last year the engine accepts.
///
/// Keeps every date of every accepted month (including the next-month
/// lookahead past December) comfortably inside chrono's representable range.
pub const MAX_YEAR: i32 = 9999;

/// Returns the number of calendar days in the given Gregorian month.
///
/// Leap years are accounted for: February has 29 days in 2024 and 28 in 2025.
///
/// # Arguments
///
/// * `year` - The target year (1-[`MAX_YEAR`])
/// * `month` - The target month (1-12)
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`] when `month` is outside 1-12 and
/// [`EngineError::InvalidYear`] when `year` is outside 1-[`MAX_YEAR`].
///
/// # Example
///
/// ```
/// use cesu_engine::calendar::days_in_month;
///
/// assert_eq!(days_in_month(2026, 1).unwrap(), 31);
/// assert_eq!(days_in_month(2024, 2).unwrap(), 29);
/// assert!(days_in_month(2026, 13).is_err());
/// ```
pub fn days_in_month(year: i32, month: u32) -> EngineResult<u32> {
    let first = first_of_month(year, month)?;

    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("first day of a valid month always exists");

    Ok((next_month - first).num_days() as u32)
}

/// Returns every day-of-month in the given month that falls on `weekday`.
///
/// The result is ascending and duplicate-free. Any weekday occurs either
/// four or five times in a month.
///
/// # Arguments
///
/// * `year` - The target year (1-[`MAX_YEAR`])
/// * `month` - The target month (1-12)
/// * `weekday` - The weekday to collect occurrences of
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`] or [`EngineError::InvalidYear`] for
/// out-of-range input.
///
/// # Example
///
/// ```
/// use cesu_engine::calendar::weekday_occurrences;
/// use chrono::Weekday;
///
/// // January 2026 starts on a Thursday, so its Sundays are the 4th, 11th,
/// // 18th and 25th.
/// let sundays = weekday_occurrences(2026, 1, Weekday::Sun).unwrap();
/// assert_eq!(sundays, vec![4, 11, 18, 25]);
/// ```
pub fn weekday_occurrences(year: i32, month: u32, weekday: Weekday) -> EngineResult<Vec<u32>> {
    let first = first_of_month(year, month)?;
    let day_count = days_in_month(year, month)?;

    // Day of month of the first occurrence, then step by whole weeks.
    let offset = (7 + weekday.num_days_from_monday() - first.weekday().num_days_from_monday()) % 7;
    let occurrences = (1 + offset..=day_count).step_by(7).collect();

    Ok(occurrences)
}

/// Validates (year, month) and returns the first day of that month.
fn first_of_month(year: i32, month: u32) -> EngineResult<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(EngineError::InvalidMonth { month });
    }
    if !(1..=MAX_YEAR).contains(&year) {
        return Err(EngineError::InvalidYear { year });
    }

    Ok(NaiveDate::from_ymd_opt(year, month, 1)
        .expect("day 1 of a validated year/month always exists"))
}
