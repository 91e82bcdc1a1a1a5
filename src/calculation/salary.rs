//! Monthly salary calculation.
//!
//! Implements the CESU pay formula: every calendar day contributes one base
//! hour; Sundays and public holidays each add one extra hour (the scheme's
//! "x2" premium expressed in hours); Thursdays add 25% of their count,
//! rounded up; absent days are deducted. The hour total is priced at the
//! hourly rate, uplifted by a flat 10%, and topped up with the transport
//! allowance.

use std::path::Path;

use chrono::Weekday;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::calendar::{days_in_month, weekday_occurrences};
use crate::error::{EngineError, EngineResult};
use crate::feed::{FeedSource, load_holidays};
use crate::models::{SalaryBreakdown, SalaryInputs};

use super::thursday_bonus_hours;

/// The flat bonus applied to the base salary: +10%.
const BONUS_MULTIPLIER: Decimal = Decimal::from_parts(110, 0, 0, false, 2);

/// Calculates the monthly salary for validated inputs and a known holiday set.
///
/// `holidays` is the list of public-holiday days-of-month for the pay month;
/// the caller is responsible for filtering it to the right month (see
/// [`calculate_with_source`] for the composed pipeline). The list is sorted
/// and deduplicated here, so each holiday counts once regardless of the
/// caller's ordering.
///
/// The hour total is not floored: with enough absent days it goes negative,
/// and the salary goes negative with it. This mirrors the underlying pay
/// rule, which has no clamping.
///
/// # Errors
///
/// Calendar lookups can only fail for an out-of-range month or year, which
/// the [`SalaryInputs`] constructor already rules out. A rate or allowance
/// extreme enough to overflow the decimal range returns
/// [`EngineError::CalculationError`].
///
/// # Example
///
/// ```
/// use cesu_engine::calculation::calculate_salary;
/// use cesu_engine::models::{PayMonth, SalaryInputs};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // June 2026: 30 days, 4 Sundays, 4 Thursdays.
/// let inputs = SalaryInputs::new(
///     PayMonth::new(2026, 6).unwrap(),
///     Decimal::from_str("12.0").unwrap(),
///     0,
///     Decimal::from_str("60.0").unwrap(),
/// )
/// .unwrap();
///
/// let breakdown = calculate_salary(&inputs, &[15]).unwrap();
/// assert_eq!(breakdown.total_hours, 36); // 30 + 4 + 1 + 1 - 0
/// assert_eq!(breakdown.total_salary, Decimal::from_str("535.20").unwrap());
/// ```
pub fn calculate_salary(inputs: &SalaryInputs, holidays: &[u32]) -> EngineResult<SalaryBreakdown> {
    let year = inputs.month.year();
    let month = inputs.month.month();

    let day_count = days_in_month(year, month)?;
    let sunday_days = weekday_occurrences(year, month, Weekday::Sun)?;
    let thursday_days = weekday_occurrences(year, month, Weekday::Thu)?;

    let mut holiday_days = holidays.to_vec();
    holiday_days.sort_unstable();
    holiday_days.dedup();

    let sunday_bonus = sunday_days.len() as u32;
    let holiday_bonus = holiday_days.len() as u32;
    let thursday_bonus = thursday_bonus_hours(thursday_days.len() as u32);

    let total_hours = i64::from(day_count) + i64::from(sunday_bonus) + i64::from(holiday_bonus)
        + i64::from(thursday_bonus)
        - i64::from(inputs.absent_days);

    let base_salary = Decimal::from(total_hours)
        .checked_mul(inputs.hourly_rate)
        .ok_or_else(|| amount_overflow("base salary"))?;
    let with_bonus = base_salary
        .checked_mul(BONUS_MULTIPLIER)
        .ok_or_else(|| amount_overflow("salary with bonus"))?;
    let total_salary = with_bonus
        .checked_add(inputs.transport_allowance)
        .ok_or_else(|| amount_overflow("total salary"))?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    Ok(SalaryBreakdown {
        year,
        month,
        days_in_month: day_count,
        sunday_days,
        thursday_days,
        holiday_days,
        sunday_bonus,
        holiday_bonus,
        thursday_bonus_hours: thursday_bonus,
        absent_days: inputs.absent_days,
        total_hours,
        hourly_rate: inputs.hourly_rate,
        base_salary,
        with_bonus,
        transport_allowance: inputs.transport_allowance,
        total_salary,
    })
}

fn amount_overflow(quantity: &str) -> EngineError {
    EngineError::CalculationError {
        message: format!("{quantity} overflows the decimal range"),
    }
}

/// Calculates the monthly salary, loading public holidays through `source`.
///
/// Composes [`load_holidays`](crate::feed::load_holidays) with
/// [`calculate_salary`]: the feed is read from `feed_path` or downloaded from
/// `feed_url` and cached, and any feed failure degrades to a calculation
/// without holiday data (logged, never raised).
pub fn calculate_with_source(
    inputs: &SalaryInputs,
    source: &impl FeedSource,
    feed_path: &Path,
    feed_url: &str,
) -> EngineResult<SalaryBreakdown> {
    let holidays = load_holidays(
        source,
        feed_path,
        feed_url,
        inputs.month.year(),
        inputs.month.month(),
    );
    calculate_salary(inputs, &holidays)
}
