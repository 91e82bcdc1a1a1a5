//! Calculation logic for the CESU Salary Calculation Engine.
//!
//! This module contains the salary formula itself and the Thursday surcharge
//! helper. The formula composes calendar facts (days in month, Sundays,
//! Thursdays) with the public-holiday set to produce an hours total, then
//! prices it and applies the flat bonus and the transport allowance.

mod salary;
mod thursday_bonus;

pub use salary::{calculate_salary, calculate_with_source};
pub use thursday_bonus::thursday_bonus_hours;
