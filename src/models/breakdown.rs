//! The salary breakdown value record.
//!
//! This module contains the [`SalaryBreakdown`] type that captures every
//! input and intermediate quantity of a monthly salary calculation, so the
//! result can be displayed, audited, or serialized without recomputation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The complete result of a monthly salary calculation.
///
/// Constructed once per calculation and never mutated. Two calculations over
/// identical inputs and an identical holiday set produce equal breakdowns,
/// which the test suite relies on for the idempotence guarantee.
///
/// `total_hours` is signed: when absent days exceed the accrued hours the
/// total goes negative and is deliberately not clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// The Gregorian year the calculation covers.
    pub year: i32,
    /// The month the calculation covers, 1-12.
    pub month: u32,
    /// The number of calendar days in the month.
    pub days_in_month: u32,
    /// The days of the month that are Sundays, ascending.
    pub sunday_days: Vec<u32>,
    /// The days of the month that are Thursdays, ascending.
    pub thursday_days: Vec<u32>,
    /// The days of the month that are public holidays, ascending.
    pub holiday_days: Vec<u32>,
    /// Extra hours credited for Sundays (one per Sunday).
    pub sunday_bonus: u32,
    /// Extra hours credited for public holidays (one per holiday).
    pub holiday_bonus: u32,
    /// Extra hours credited for Thursdays (25% of the count, rounded up).
    pub thursday_bonus_hours: u32,
    /// The number of absent days deducted.
    pub absent_days: u32,
    /// Total payable hours after bonuses and deductions. May be negative.
    pub total_hours: i64,
    /// The net hourly rate in euros.
    pub hourly_rate: Decimal,
    /// `total_hours` x `hourly_rate`, before the flat bonus.
    pub base_salary: Decimal,
    /// `base_salary` with the flat 10% bonus applied.
    pub with_bonus: Decimal,
    /// The fixed monthly transport allowance in euros.
    pub transport_allowance: Decimal,
    /// Final amount: `with_bonus` plus allowance, rounded to 2 decimals.
    pub total_salary: Decimal,
}
