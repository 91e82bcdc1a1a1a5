//! Thursday surcharge calculation.
//!
//! CESU scheduling credits an extra 25% of the month's Thursday count as
//! bonus hours, rounded up to a whole hour.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// The Thursday surcharge rate: 25% of the Thursday count.
const THURSDAY_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// Returns the bonus hours for a month with `thursday_count` Thursdays.
///
/// The surcharge is `ceiling(thursday_count x 0.25)`: four Thursdays earn
/// one bonus hour, five Thursdays earn two.
///
/// # Example
///
/// ```
/// use cesu_engine::calculation::thursday_bonus_hours;
///
/// assert_eq!(thursday_bonus_hours(0), 0);
/// assert_eq!(thursday_bonus_hours(4), 1);
/// assert_eq!(thursday_bonus_hours(5), 2);
/// ```
pub fn thursday_bonus_hours(thursday_count: u32) -> u32 {
    let bonus = (Decimal::from(thursday_count) * THURSDAY_RATE).ceil();
    bonus.to_u32().expect("ceiling of a small non-negative product fits in u32")
}
