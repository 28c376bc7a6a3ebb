//! Wage calculation functionality.
//!
//! This module multiplies reconciled hours by an employee's pay rate, per
//! date and across every date the employee clocked in on.

use tracing::warn;

use crate::error::{PayrollError, PayrollResult};
use crate::models::EmployeeRecord;

use super::hours_worked::{hours_worked_on_date, try_hours_worked_on_date};

/// Calculates the wages earned on `date`: hours worked times pay rate.
///
/// An absent pay rate counts as zero. The sentinel and `NaN` values of
/// [`hours_worked_on_date`] are multiplied through unchanged, so an absent
/// event log yields `2 * pay_per_hour`.
///
/// # Arguments
///
/// * `employee` - The employee to calculate wages for
/// * `date` - The date to calculate wages for
///
/// # Returns
///
/// The wages earned on the date, in the same unit as the pay rate.
///
/// # Examples
///
/// ```
/// use timecard_payroll::calculation::wages_earned_on_date;
/// use timecard_payroll::models::EmployeeRecord;
///
/// let mut employee = EmployeeRecord::new("Ada", "Lovelace", "Engineer", 50.0);
/// employee
///     .create_time_in_event("2024-03-01 900")
///     .create_time_out_event("2024-03-01 1700");
///
/// assert_eq!(wages_earned_on_date(&employee, "2024-03-01"), 400.0);
/// ```
pub fn wages_earned_on_date(employee: &EmployeeRecord, date: &str) -> f64 {
    hours_worked_on_date(employee, date) * employee.pay_rate()
}

/// Sums the wages over every date in the employee's time-in log.
///
/// Dates are not deduplicated: a date with two time-in punches is paid
/// twice. An employee without a time-in log earns `0.0`.
///
/// # Arguments
///
/// * `employee` - The employee to total wages for
///
/// # Returns
///
/// The sum of [`wages_earned_on_date`] over every time-in punch's date.
pub fn all_wages_for(employee: &EmployeeRecord) -> f64 {
    let Some(time_in_events) = &employee.time_in_events else {
        warn!(first_name = %employee.first_name, "Missing time events for employee");
        return 0.0;
    };

    time_in_events
        .iter()
        .map(|event| wages_earned_on_date(employee, &event.date))
        .fold(0.0, |total, wages| total + wages)
}

/// Calculates the wages earned on `date`, reporting failures as errors.
///
/// # Returns
///
/// Returns hours times pay rate, or any error from
/// [`try_hours_worked_on_date`].
pub fn try_wages_earned_on_date(employee: &EmployeeRecord, date: &str) -> PayrollResult<f64> {
    Ok(try_hours_worked_on_date(employee, date)? * employee.pay_rate())
}

/// Sums the wages over every time-in date, failing on the first error.
///
/// Repeated dates are visited once per punch, as in [`all_wages_for`].
///
/// # Errors
///
/// - `MissingTimeEvents` if the time-in log is absent
/// - any error from [`try_wages_earned_on_date`]
pub fn try_all_wages_for(employee: &EmployeeRecord) -> PayrollResult<f64> {
    let time_in_events =
        employee
            .time_in_events
            .as_ref()
            .ok_or_else(|| PayrollError::MissingTimeEvents {
                first_name: employee.first_name.clone(),
            })?;

    time_in_events.iter().try_fold(0.0, |total, event| {
        Ok(total + try_wages_earned_on_date(employee, &event.date)?)
    })
}
