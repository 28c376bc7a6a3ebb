//! Core data models for timecard payroll.
//!
//! This module contains all the domain models used throughout the crate.

mod employee;
mod payroll_report;
mod time_event;

pub use employee::{EmployeeRecord, EmployeeRow, create_employee_record, create_employee_records};
pub use payroll_report::{
    DailyWage, EmployeeWageSummary, PayrollReport, ReportWarning, WarningCode,
};
pub use time_event::{TimeEvent, TimeEventType, parse_hour_token};
