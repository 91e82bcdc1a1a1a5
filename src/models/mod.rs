//! Core data models for the CESU Salary Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
mod inputs;
mod pay_month;

pub use breakdown::SalaryBreakdown;
pub use inputs::SalaryInputs;
pub use pay_month::PayMonth;
