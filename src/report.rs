//! Console rendering of a salary breakdown.
//!
//! Human-readable only; machine consumers should serialize the
//! [`SalaryBreakdown`] instead.

use cesu_engine::models::SalaryBreakdown;

/// Prints the full breakdown of a calculation to stdout.
pub fn print_breakdown(breakdown: &SalaryBreakdown) {
    println!();
    println!(
        "=== SALARY CALCULATION FOR {}/{} ===",
        breakdown.month, breakdown.year
    );
    println!("Days in month: {}", breakdown.days_in_month);
    println!(
        "Public holidays in month {}/{}: {:?}",
        breakdown.month, breakdown.year, breakdown.holiday_days
    );
    println!(
        "Sundays: {:?} (count: {})",
        breakdown.sunday_days, breakdown.sunday_bonus
    );
    println!(
        "Thursdays: {:?} (count: {})",
        breakdown.thursday_days,
        breakdown.thursday_days.len()
    );

    println!();
    println!("=== HOURS BREAKDOWN ===");
    println!("Base hours (1 per day): {}", breakdown.days_in_month);
    println!("Sunday bonus (+1 per Sunday): +{}", breakdown.sunday_bonus);
    println!("Holiday bonus (+1 per holiday): +{}", breakdown.holiday_bonus);
    println!(
        "Thursday bonus (25% per Thursday, rounded up): +{}",
        breakdown.thursday_bonus_hours
    );
    println!("Absent days: -{}", breakdown.absent_days);
    println!("TOTAL HOURS: {}", breakdown.total_hours);

    println!();
    println!("=== SALARY BREAKDOWN ===");
    println!(
        "Base salary ({} hours x {}€): {:.2}€",
        breakdown.total_hours, breakdown.hourly_rate, breakdown.base_salary
    );
    println!("With 10% bonus: {:.2}€", breakdown.with_bonus);
    println!(
        "Transport allowance: +{:.2}€",
        breakdown.transport_allowance
    );
    println!();
    println!("{}", "=".repeat(42));
    println!("TOTAL SALARY: {:.2}€", breakdown.total_salary);
    println!("{}", "=".repeat(42));
    println!();
}
