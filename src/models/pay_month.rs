//! The calendar month a salary calculation targets.

use serde::{Deserialize, Serialize};

use crate::calendar::MAX_YEAR;
use crate::error::{EngineError, EngineResult};

/// A validated (year, month) pair identifying the month being paid.
///
/// Construction validates the range once, so every function receiving a
/// `PayMonth` can rely on the month being 1-12 and the year being Gregorian.
/// The pair is immutable after construction.
///
/// # Example
///
/// ```
/// use cesu_engine::models::PayMonth;
///
/// let month = PayMonth::new(2026, 5).unwrap();
/// assert_eq!(month.year(), 2026);
/// assert_eq!(month.month(), 5);
///
/// assert!(PayMonth::new(2026, 13).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayMonth {
    year: i32,
    month: u32,
}

impl PayMonth {
    /// Creates a pay month after validating the year and month ranges.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidMonth`] when `month` is outside 1-12 and
    /// [`EngineError::InvalidYear`] when `year` is outside
    /// 1-[`MAX_YEAR`](crate::calendar::MAX_YEAR).
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidMonth { month });
        }
        if !(1..=MAX_YEAR).contains(&year) {
            return Err(EngineError::InvalidYear { year });
        }

        Ok(Self { year, month })
    }

    /// The Gregorian year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month number, 1-12.
    pub fn month(&self) -> u32 {
        self.month
    }
}

impl std::fmt::Display for PayMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}
