//! Validated inputs for a salary calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::PayMonth;

/// The validated inputs to a monthly salary calculation.
///
/// The constructor enforces the calculator's preconditions: a positive
/// hourly rate and a non-negative transport allowance. Absent days are a
/// `u32`, so a negative count is unrepresentable.
///
/// # Example
///
/// ```
/// use cesu_engine::models::{PayMonth, SalaryInputs};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let inputs = SalaryInputs::new(
///     PayMonth::new(2026, 6).unwrap(),
///     Decimal::from_str("12.0").unwrap(),
///     0,
///     Decimal::from_str("60.0").unwrap(),
/// )
/// .unwrap();
/// assert_eq!(inputs.absent_days, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInputs {
    /// The month being paid.
    pub month: PayMonth,
    /// The net hourly rate in euros.
    pub hourly_rate: Decimal,
    /// The number of absent days to deduct.
    pub absent_days: u32,
    /// The fixed monthly transport allowance in euros.
    pub transport_allowance: Decimal,
}

impl SalaryInputs {
    /// Creates salary inputs after validating the rate and allowance.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRate`] when `hourly_rate` is not
    /// strictly positive and [`EngineError::InvalidAllowance`] when
    /// `transport_allowance` is negative.
    pub fn new(
        month: PayMonth,
        hourly_rate: Decimal,
        absent_days: u32,
        transport_allowance: Decimal,
    ) -> EngineResult<Self> {
        if hourly_rate <= Decimal::ZERO {
            return Err(EngineError::InvalidRate { rate: hourly_rate });
        }
        if transport_allowance < Decimal::ZERO {
            return Err(EngineError::InvalidAllowance {
                amount: transport_allowance,
            });
        }

        Ok(Self {
            month,
            hourly_rate,
            absent_days,
            transport_allowance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn june_2026() -> PayMonth {
        PayMonth::new(2026, 6).unwrap()
    }

    #[test]
    fn test_valid_inputs_accepted() {
        let inputs = SalaryInputs::new(june_2026(), dec("12.0"), 2, dec("60.0")).unwrap();
        assert_eq!(inputs.hourly_rate, dec("12.0"));
        assert_eq!(inputs.absent_days, 2);
        assert_eq!(inputs.transport_allowance, dec("60.0"));
    }

    #[test]
    fn test_zero_rate_rejected() {
        assert!(matches!(
            SalaryInputs::new(june_2026(), Decimal::ZERO, 0, dec("60.0")),
            Err(EngineError::InvalidRate { .. })
        ));
    }

    #[test]
    fn test_negative_rate_rejected() {
        assert!(matches!(
            SalaryInputs::new(june_2026(), dec("-12.0"), 0, dec("60.0")),
            Err(EngineError::InvalidRate { .. })
        ));
    }

    #[test]
    fn test_negative_allowance_rejected() {
        assert!(matches!(
            SalaryInputs::new(june_2026(), dec("12.0"), 0, dec("-0.01")),
            Err(EngineError::InvalidAllowance { .. })
        ));
    }

    #[test]
    fn test_zero_allowance_accepted() {
        assert!(SalaryInputs::new(june_2026(), dec("12.0"), 0, Decimal::ZERO).is_ok());
    }
}
