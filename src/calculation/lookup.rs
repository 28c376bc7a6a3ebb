//! Employee lookup by first name.

use crate::models::EmployeeRecord;

/// Returns the first employee whose first name matches exactly.
///
/// Matching is case-sensitive. Duplicate first names are not an error, the
/// earliest record wins.
///
/// # Arguments
///
/// * `employees` - The collection to search
/// * `first_name` - The first name to match
///
/// # Returns
///
/// The first matching record, or `None` if no record matches.
///
/// # Examples
///
/// ```
/// use timecard_payroll::calculation::find_employee_by_first_name;
/// use timecard_payroll::models::create_employee_records;
///
/// let employees = create_employee_records(vec![
///     ("Ada", "Lovelace", "Engineer", 50.0),
///     ("Grace", "Hopper", "Admiral", 60.0),
/// ]);
///
/// let grace = find_employee_by_first_name(&employees, "Grace").unwrap();
/// assert_eq!(grace.family_name, "Hopper");
/// assert!(find_employee_by_first_name(&employees, "grace").is_none());
/// ```
pub fn find_employee_by_first_name<'a>(
    employees: &'a [EmployeeRecord],
    first_name: &str,
) -> Option<&'a EmployeeRecord> {
    employees.iter().find(|e| e.first_name == first_name)
}
