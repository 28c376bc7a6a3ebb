//! Payroll report generation.
//!
//! Builds a [`PayrollReport`] from the strict calculation surface. Each
//! employee is summarized on its own, so a bad record produces warnings in
//! its own section instead of failing the whole run. Unlike
//! [`all_wages_for`](super::all_wages_for), each time-in date is paid once.

use std::collections::HashSet;

use chrono::Utc;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::PayrollError;
use crate::models::{
    DailyWage, EmployeeRecord, EmployeeWageSummary, PayrollReport, ReportWarning, WarningCode,
};

use super::hours_worked::try_hours_worked_on_date;

/// Scale used for hours in reports.
pub const HOURS_SCALE: u32 = 4;

/// Scale used for money in reports.
pub const MONEY_SCALE: u32 = 2;

/// Converts a float into a `Decimal` at a fixed scale.
///
/// Returns `None` for `NaN`, infinities, and values beyond the `Decimal` range.
fn to_scaled_decimal(value: f64, scale: u32) -> Option<Decimal> {
    let mut decimal = Decimal::from_f64(value)?
        .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    decimal.rescale(scale);
    Some(decimal)
}

fn warning_for(error: &PayrollError, date: &str) -> ReportWarning {
    let code = match error {
        PayrollError::MissingTimeEvents { .. } => WarningCode::MissingTimeEvents,
        PayrollError::InvalidHour { .. } => WarningCode::InvalidHour,
        _ => WarningCode::TimeEventsNotFound,
    };

    ReportWarning {
        code,
        date: Some(date.to_string()),
        message: error.to_string(),
    }
}

fn unrepresentable(date: Option<&str>, message: String) -> ReportWarning {
    ReportWarning {
        code: WarningCode::NonFiniteAmount,
        date: date.map(str::to_string),
        message,
    }
}

fn summarize_employee(employee: &EmployeeRecord) -> EmployeeWageSummary {
    let mut warnings = Vec::new();
    let mut days = Vec::new();
    let mut total_hours = Decimal::ZERO;
    let mut total_wages = Decimal::ZERO;

    let pay_per_hour = to_scaled_decimal(employee.pay_rate(), MONEY_SCALE).unwrap_or_else(|| {
        warnings.push(unrepresentable(
            None,
            format!("Pay rate for '{}' is not representable", employee.first_name),
        ));
        Decimal::ZERO
    });

    match (&employee.time_in_events, &employee.time_out_events) {
        (Some(time_in_events), Some(_)) => {
            let mut seen = HashSet::new();
            for event in time_in_events {
                if !seen.insert(event.date.as_str()) {
                    warnings.push(ReportWarning {
                        code: WarningCode::DuplicateTimeInDate,
                        date: Some(event.date.clone()),
                        message: format!(
                            "Date {} has more than one time-in punch; paid once",
                            event.date
                        ),
                    });
                    continue;
                }

                let hours = match try_hours_worked_on_date(employee, &event.date) {
                    Ok(hours) => hours,
                    Err(err) => {
                        warnings.push(warning_for(&err, &event.date));
                        continue;
                    }
                };

                let wages = hours * employee.pay_rate();
                let (Some(hours), Some(wages)) = (
                    to_scaled_decimal(hours, HOURS_SCALE),
                    to_scaled_decimal(wages, MONEY_SCALE),
                ) else {
                    warnings.push(unrepresentable(
                        Some(event.date.as_str()),
                        format!("Wages for date {} are not representable", event.date),
                    ));
                    continue;
                };

                // Totals must stay equal to the sum of the listed days.
                let (Some(next_hours), Some(next_wages)) =
                    (total_hours.checked_add(hours), total_wages.checked_add(wages))
                else {
                    warnings.push(unrepresentable(
                        Some(event.date.as_str()),
                        format!(
                            "Wages for date {} overflow the employee total; excluded",
                            event.date
                        ),
                    ));
                    continue;
                };

                total_hours = next_hours;
                total_wages = next_wages;
                days.push(DailyWage {
                    date: event.date.clone(),
                    hours,
                    wages,
                });
            }
        }
        _ => warnings.push(ReportWarning {
            code: WarningCode::MissingTimeEvents,
            date: None,
            message: PayrollError::MissingTimeEvents {
                first_name: employee.first_name.clone(),
            }
            .to_string(),
        }),
    }

    debug!(
        first_name = %employee.first_name,
        days = days.len(),
        warnings = warnings.len(),
        "Summarized employee"
    );

    EmployeeWageSummary {
        first_name: employee.first_name.clone(),
        family_name: employee.family_name.clone(),
        title: employee.title.clone(),
        pay_per_hour,
        days,
        total_hours,
        total_wages,
        warnings,
    }
}

/// Adds each employee's wages to the payroll total.
///
/// An employee whose wages would overflow the total is left out of it and
/// gets a warning in their own section.
fn accumulate_payroll(summaries: &mut [EmployeeWageSummary]) -> Decimal {
    let mut total_payroll = Decimal::ZERO;

    for summary in summaries.iter_mut() {
        match total_payroll.checked_add(summary.total_wages) {
            Some(total) => total_payroll = total,
            None => summary.warnings.push(unrepresentable(
                None,
                format!(
                    "Wages for '{}' overflow the payroll total; excluded",
                    summary.first_name
                ),
            )),
        }
    }

    total_payroll.rescale(MONEY_SCALE);
    total_payroll
}

/// Generates a payroll report for a collection of employees.
///
/// # Arguments
///
/// * `employees` - The employees to report on, in output order
///
/// # Returns
///
/// A `PayrollReport` with one summary per employee. Problems with a record
/// are listed as warnings in that employee's summary and never abort the
/// run.
///
/// # Examples
///
/// ```
/// use timecard_payroll::calculation::generate_payroll_report;
/// use timecard_payroll::models::EmployeeRecord;
///
/// let mut ada = EmployeeRecord::new("Ada", "Lovelace", "Engineer", 50.0);
/// ada.create_time_in_event("2024-03-01 900")
///     .create_time_out_event("2024-03-01 1700");
///
/// let report = generate_payroll_report(&[ada]);
/// assert_eq!(report.total_payroll.to_string(), "400.00");
/// assert!(!report.has_warnings());
/// ```
pub fn generate_payroll_report(employees: &[EmployeeRecord]) -> PayrollReport {
    let mut summaries: Vec<EmployeeWageSummary> =
        employees.iter().map(summarize_employee).collect();

    let total_payroll = accumulate_payroll(&mut summaries);
    let warnings_count = summaries.iter().map(|s| s.warnings.len()).sum();

    let report = PayrollReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        employees: summaries,
        total_payroll,
        warnings_count,
    };

    info!(
        report_id = %report.report_id,
        employees = report.employees.len(),
        total_payroll = %report.total_payroll,
        warnings = report.warnings_count,
        "Generated payroll report"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_employee(pay_per_hour: f64) -> EmployeeRecord {
        EmployeeRecord::new("Ada", "Lovelace", "Engineer", pay_per_hour)
    }

    #[test]
    fn test_to_scaled_decimal_rounds_and_pads() {
        assert_eq!(to_scaled_decimal(400.0, 2).unwrap().to_string(), "400.00");
        assert_eq!(to_scaled_decimal(1.005_1, 2).unwrap().to_string(), "1.01");
        assert_eq!(to_scaled_decimal(-2.5, 0).unwrap().to_string(), "-3");
        assert!(to_scaled_decimal(f64::NAN, 2).is_none());
        assert!(to_scaled_decimal(f64::INFINITY, 2).is_none());
    }

    #[test]
    fn test_empty_report() {
        let report = generate_payroll_report(&[]);
        assert!(report.employees.is_empty());
        assert_eq!(report.total_payroll, Decimal::ZERO);
        assert_eq!(report.total_payroll.to_string(), "0.00");
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_single_day_line() {
        let mut employee = create_test_employee(50.0);
        employee
            .create_time_in_event("2024-03-01 900")
            .create_time_out_event("2024-03-01 1700");

        let report = generate_payroll_report(&[employee]);
        let summary = report.employee("Ada").unwrap();
        assert_eq!(summary.days.len(), 1);
        assert_eq!(summary.days[0].date, "2024-03-01");
        assert_eq!(summary.days[0].hours, dec("8"));
        assert_eq!(summary.days[0].wages.to_string(), "400.00");
        assert_eq!(summary.total_hours, dec("8"));
        assert_eq!(summary.pay_per_hour, dec("50"));
        assert_eq!(report.total_payroll, dec("400"));
    }

    #[test]
    fn test_fractional_hours_are_rounded() {
        let mut employee = create_test_employee(30.0);
        employee
            .create_time_in_event("2024-03-01 900")
            .create_time_out_event("2024-03-01 920");

        let report = generate_payroll_report(&[employee]);
        let day = &report.employees[0].days[0];
        assert_eq!(day.hours.to_string(), "0.3333");
        assert_eq!(day.wages.to_string(), "10.00");
    }

    #[test]
    fn test_duplicate_dates_are_paid_once_and_flagged() {
        let mut employee = create_test_employee(10.0);
        employee
            .create_time_in_event("2024-03-01 900")
            .create_time_in_event("2024-03-01 1300")
            .create_time_out_event("2024-03-01 1700");

        let report = generate_payroll_report(&[employee]);
        let summary = &report.employees[0];
        assert_eq!(summary.days.len(), 1);
        assert_eq!(summary.total_wages, dec("80"));
        assert_eq!(summary.warnings.len(), 1);
        assert_eq!(summary.warnings[0].code, WarningCode::DuplicateTimeInDate);
    }

    #[test]
    fn test_missing_log_is_a_warning_not_a_sentinel() {
        let mut employee = create_test_employee(25.0);
        employee.time_out_events = None;
        employee.create_time_in_event("2024-03-01 900");

        let report = generate_payroll_report(&[employee]);
        let summary = &report.employees[0];
        assert!(summary.days.is_empty());
        assert_eq!(summary.total_wages, Decimal::ZERO);
        assert_eq!(summary.warnings[0].code, WarningCode::MissingTimeEvents);
        assert_eq!(report.warnings_count, 1);
    }

    #[test]
    fn test_bad_records_are_isolated() {
        let mut good = create_test_employee(50.0);
        good.create_time_in_event("2024-03-01 900")
            .create_time_out_event("2024-03-01 1700");

        let mut bad = EmployeeRecord::new("Grace", "Hopper", "Admiral", 60.0);
        bad.create_time_in_event("2024-03-01 nine")
            .create_time_out_event("2024-03-01 1700")
            .create_time_in_event("2024-03-02 900");

        let report = generate_payroll_report(&[good, bad]);
        assert_eq!(report.total_payroll, dec("400"));

        let grace = report.employee("Grace").unwrap();
        let codes: Vec<WarningCode> = grace.warnings.iter().map(|w| w.code).collect();
        assert_eq!(
            codes,
            vec![WarningCode::InvalidHour, WarningCode::TimeEventsNotFound]
        );
        assert_eq!(grace.warnings[1].date.as_deref(), Some("2024-03-02"));
    }

    #[test]
    fn test_non_finite_pay_rate_is_flagged() {
        let mut employee = create_test_employee(f64::INFINITY);
        employee
            .create_time_in_event("2024-03-01 900")
            .create_time_out_event("2024-03-01 1700");

        let report = generate_payroll_report(&[employee]);
        let codes: Vec<WarningCode> = report.employees[0].warnings.iter().map(|w| w.code).collect();
        assert_eq!(
            codes,
            vec![WarningCode::NonFiniteAmount, WarningCode::NonFiniteAmount]
        );
        assert_eq!(report.total_payroll, Decimal::ZERO);
        assert!(
            report.employees[0].warnings[0]
                .message
                .contains("not representable")
        );
    }

    #[test]
    fn test_employee_total_overflow_is_flagged_not_panicking() {
        // Each day fits in a Decimal, the sum of both does not.
        let mut employee = create_test_employee(7.0e28);
        employee
            .create_time_in_event("2024-03-01 900")
            .create_time_out_event("2024-03-01 1000")
            .create_time_in_event("2024-03-02 900")
            .create_time_out_event("2024-03-02 1000");

        let report = generate_payroll_report(&[employee]);
        let summary = &report.employees[0];
        assert_eq!(summary.days.len(), 1);
        assert_eq!(summary.days[0].date, "2024-03-01");
        assert_eq!(summary.total_wages, summary.days[0].wages);
        assert_eq!(summary.warnings.len(), 1);
        assert_eq!(summary.warnings[0].code, WarningCode::NonFiniteAmount);
        assert_eq!(summary.warnings[0].date.as_deref(), Some("2024-03-02"));
        assert_eq!(report.total_payroll, summary.total_wages);
    }

    #[test]
    fn test_payroll_total_overflow_excludes_later_employee() {
        let mut employees = vec![
            create_test_employee(5.0e28),
            EmployeeRecord::new("Grace", "Hopper", "Admiral", 5.0e28),
        ];
        for employee in &mut employees {
            employee
                .create_time_in_event("2024-03-01 900")
                .create_time_out_event("2024-03-01 1000");
        }

        let report = generate_payroll_report(&employees);
        let ada = report.employee("Ada").unwrap();
        let grace = report.employee("Grace").unwrap();

        assert!(ada.warnings.is_empty());
        assert_eq!(report.total_payroll, ada.total_wages);
        assert_eq!(grace.warnings.len(), 1);
        assert_eq!(grace.warnings[0].code, WarningCode::NonFiniteAmount);
        assert!(grace.warnings[0].message.contains("payroll total"));
        assert_eq!(report.warnings_count, 1);
    }
}
