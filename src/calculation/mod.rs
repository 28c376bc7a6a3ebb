//! Calculation logic for timecard payroll.
//!
//! This module contains the functions that turn recorded punches into pay:
//! employee lookup, hours reconciliation per date, wages per date and per
//! employee, payroll totals, and auditable payroll reports.
//!
//! The plain `f64` functions keep the numeric failure markers of the
//! reconciliation step (see [`MISSING_TIME_EVENTS_HOURS`]); the `try_`
//! variants return [`PayrollError`](crate::error::PayrollError) instead.

mod hours_worked;
mod lookup;
mod payroll;
mod report;
mod wages;

pub use hours_worked::{
    MISSING_TIME_EVENTS_HOURS, hour_fraction, hours_worked_on_date, try_hours_worked_on_date,
};
pub use lookup::find_employee_by_first_name;
pub use payroll::{calculate_payroll, try_calculate_payroll};
pub use report::{HOURS_SCALE, MONEY_SCALE, generate_payroll_report};
pub use wages::{all_wages_for, try_all_wages_for, try_wages_earned_on_date, wages_earned_on_date};
