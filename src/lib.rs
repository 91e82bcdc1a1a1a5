//! CESU Salary Calculation Engine
//!
//! This crate computes monthly CESU (Chèque Emploi Service Universel) salaries
//! for French household employment, applying the labor-law bonuses the scheme
//! requires: Sunday premium, public-holiday premium, Thursday surcharge, a
//! flat 10% bonus, an absence deduction, and a transport allowance.
//!
//! Public holidays are taken from an ICS calendar feed (the etalab
//! jours fériés dataset) with a read-local-or-download-then-cache policy;
//! holiday data is best-effort and never blocks a calculation.

#![warn(missing_docs)]

pub mod calculation;
pub mod calendar;
pub mod error;
pub mod feed;
pub mod models;
