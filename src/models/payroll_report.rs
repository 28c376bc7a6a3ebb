//! Payroll report models.
//!
//! This module contains the [`PayrollReport`] type and its associated
//! structures that capture a payroll run: per-day wage lines, per-employee
//! totals, and the warnings raised while reconciling punches.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult};

/// Identifies the kind of problem a [`ReportWarning`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningCode {
    /// The employee has no time-in or no time-out log.
    MissingTimeEvents,
    /// No matching time-in/time-out pair for a date.
    TimeEventsNotFound,
    /// A matched punch carried an unparseable hour.
    InvalidHour,
    /// A date appears more than once among the time-in punches.
    DuplicateTimeInDate,
    /// A computed amount was NaN, infinite, or too large for a `Decimal`.
    NonFiniteAmount,
}

/// A warning raised while building a report.
///
/// Warnings never abort the run; the affected date simply contributes
/// nothing to the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWarning {
    /// The kind of warning.
    pub code: WarningCode,
    /// The date the warning concerns, if any.
    pub date: Option<String>,
    /// A human-readable description of the warning.
    pub message: String,
}

/// Hours and wages reconciled for one date.
///
/// # Example
///
/// ```
/// use timecard_payroll::models::DailyWage;
/// use rust_decimal::Decimal;
///
/// let line = DailyWage {
///     date: "2024-03-01".to_string(),
///     hours: Decimal::new(80, 1),
///     wages: Decimal::new(40000, 2),
/// };
/// assert_eq!(line.wages.to_string(), "400.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyWage {
    /// The date the punches were matched on.
    pub date: String,
    /// Hours worked, rounded to 4 dp.
    pub hours: Decimal,
    /// Wages earned, rounded to 2 dp.
    pub wages: Decimal,
}

/// Per-employee section of a payroll report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeWageSummary {
    /// The employee's first name.
    pub first_name: String,
    /// The employee's family name.
    pub family_name: String,
    /// The employee's job title.
    pub title: String,
    /// The hourly rate applied (zero when absent).
    pub pay_per_hour: Decimal,
    /// One line per distinct time-in date that reconciled.
    pub days: Vec<DailyWage>,
    /// Sum of `days[].hours`.
    pub total_hours: Decimal,
    /// Sum of `days[].wages`.
    pub total_wages: Decimal,
    /// Problems found for this employee.
    pub warnings: Vec<ReportWarning>,
}

/// The complete result of a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// Unique identifier for this run.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// One summary per employee, in input order.
    pub employees: Vec<EmployeeWageSummary>,
    /// Sum of every employee's `total_wages` that fits in a `Decimal`.
    pub total_payroll: Decimal,
    /// Number of warnings across all employees.
    pub warnings_count: usize,
}

impl PayrollReport {
    /// Returns the summary for the first employee with the given first name.
    pub fn employee(&self, first_name: &str) -> Option<&EmployeeWageSummary> {
        self.employees.iter().find(|e| e.first_name == first_name)
    }

    /// Returns `true` if any employee raised a warning.
    pub fn has_warnings(&self) -> bool {
        self.warnings_count > 0
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> PayrollResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PayrollError::ReportSerialization {
            message: e.to_string(),
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

    fn create_sample_summary(first_name: &str, warnings: Vec<ReportWarning>) -> EmployeeWageSummary {
        EmployeeWageSummary {
            first_name: first_name.to_string(),
            family_name: "Lovelace".to_string(),
            title: "Engineer".to_string(),
            pay_per_hour: dec("50"),
            days: vec![DailyWage {
                date: "2024-03-01".to_string(),
                hours: dec("8"),
                wages: dec("400.00"),
            }],
            total_hours: dec("8"),
            total_wages: dec("400.00"),
            warnings,
        }
    }

    fn create_sample_report(employees: Vec<EmployeeWageSummary>) -> PayrollReport {
        let warnings_count = employees.iter().map(|e| e.warnings.len()).sum();
        PayrollReport {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            total_payroll: employees.iter().map(|e| e.total_wages).sum(),
            employees,
            warnings_count,
        }
    }

    #[test]
    fn test_employee_lookup_returns_first_match() {
        let report = create_sample_report(vec![
            create_sample_summary("Ada", vec![]),
            create_sample_summary("Grace", vec![]),
        ]);
        assert_eq!(report.employee("Grace").unwrap().first_name, "Grace");
        assert!(report.employee("Alan").is_none());
    }

    #[test]
    fn test_has_warnings() {
        let clean = create_sample_report(vec![create_sample_summary("Ada", vec![])]);
        assert!(!clean.has_warnings());

        let warned = create_sample_report(vec![create_sample_summary(
            "Ada",
            vec![ReportWarning {
                code: WarningCode::DuplicateTimeInDate,
                date: Some("2024-03-01".to_string()),
                message: "duplicate".to_string(),
            }],
        )]);
        assert!(warned.has_warnings());
    }

    #[test]
    fn test_json_uses_string_decimals_and_snake_case_codes() {
        let report = create_sample_report(vec![create_sample_summary(
            "Ada",
            vec![ReportWarning {
                code: WarningCode::TimeEventsNotFound,
                date: Some("2024-03-02".to_string()),
                message: "no punches".to_string(),
            }],
        )]);

        let json: serde_json::Value =
            serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["total_payroll"], "400.00");
        assert_eq!(json["employees"][0]["days"][0]["wages"], "400.00");
        assert_eq!(
            json["employees"][0]["warnings"][0]["code"],
            "time_events_not_found"
        );
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = create_sample_report(vec![create_sample_summary("Ada", vec![])]);
        let json = report.to_json_pretty().unwrap();
        let deserialized: PayrollReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deserialized);
    }
}
