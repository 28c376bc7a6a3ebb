//! Payroll aggregation across employees.

use crate::error::PayrollResult;
use crate::models::EmployeeRecord;

use super::wages::{all_wages_for, try_all_wages_for};

/// Sums [`all_wages_for`] over every employee.
///
/// # Arguments
///
/// * `employees` - The employees to include in the payroll
///
/// # Returns
///
/// The total wages owed, `0.0` for an empty collection.
///
/// # Examples
///
/// ```
/// use timecard_payroll::calculation::calculate_payroll;
/// use timecard_payroll::models::create_employee_records;
///
/// let mut employees = create_employee_records(vec![
///     ("Ada", "Lovelace", "Engineer", 50.0),
///     ("Grace", "Hopper", "Admiral", 50.0),
/// ]);
/// for employee in &mut employees {
///     employee
///         .create_time_in_event("2024-03-01 900")
///         .create_time_out_event("2024-03-01 1700");
/// }
///
/// assert_eq!(calculate_payroll(&employees), 800.0);
/// assert_eq!(calculate_payroll(&[]), 0.0);
/// ```
pub fn calculate_payroll(employees: &[EmployeeRecord]) -> f64 {
    employees.iter().map(all_wages_for).fold(0.0, |total, wages| total + wages)
}

/// Sums [`try_all_wages_for`] over every employee.
///
/// There is no per-employee isolation: the first failing employee fails
/// the whole run. Use
/// [`generate_payroll_report`](super::generate_payroll_report) to keep
/// going past bad records.
///
/// # Arguments
///
/// * `employees` - The employees to include in the payroll
///
/// # Returns
///
/// Returns the total wages owed, or the first error from
/// [`try_all_wages_for`].
pub fn try_calculate_payroll(employees: &[EmployeeRecord]) -> PayrollResult<f64> {
    employees
        .iter()
        .try_fold(0.0, |total, employee| Ok(total + try_all_wages_for(employee)?))
}
