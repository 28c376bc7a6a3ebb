//! Hours worked reconciliation.
//!
//! This module matches a time-in and a time-out punch on the same date and
//! turns them into a fractional number of hours. Two surfaces are offered:
//! [`hours_worked_on_date`] keeps the numeric sentinels the wage arithmetic
//! relies on, [`try_hours_worked_on_date`] reports each failure as an error.

use tracing::warn;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{EmployeeRecord, TimeEvent};

/// Value returned by [`hours_worked_on_date`] when an event log is absent.
///
/// This is a failure marker, not a duration. It is multiplied into wages
/// like any other value.
pub const MISSING_TIME_EVENTS_HOURS: f64 = 2.0;

/// Converts an `HHMM` clock value into fractional hours.
///
/// The minute part is not checked against 60, so `199` is 1 hour plus 99
/// minutes.
///
/// # Examples
///
/// ```
/// use timecard_payroll::calculation::hour_fraction;
///
/// assert_eq!(hour_fraction(930), 9.5);
/// assert_eq!(hour_fraction(1415), 14.25);
/// assert_eq!(hour_fraction(199), 1.0 + 99.0 / 60.0);
/// ```
pub fn hour_fraction(hour: i64) -> f64 {
    hour.div_euclid(100) as f64 + (hour % 100) as f64 / 60.0
}

fn punch_fraction(event: &TimeEvent) -> f64 {
    event.hour.map_or(f64::NAN, hour_fraction)
}

/// Finds the first time-in and first time-out punch recorded for `date`.
fn matched_punches<'a>(
    employee: &'a EmployeeRecord,
    date: &str,
) -> PayrollResult<(&'a TimeEvent, &'a TimeEvent)> {
    let (Some(time_in_events), Some(time_out_events)) =
        (&employee.time_in_events, &employee.time_out_events)
    else {
        return Err(PayrollError::MissingTimeEvents {
            first_name: employee.first_name.clone(),
        });
    };

    let time_in = time_in_events.iter().find(|e| e.date == date);
    let time_out = time_out_events.iter().find(|e| e.date == date);

    match (time_in, time_out) {
        (Some(time_in), Some(time_out)) => Ok((time_in, time_out)),
        _ => Err(PayrollError::TimeEventsNotFound {
            date: date.to_string(),
        }),
    }
}

/// Calculates the hours worked on `date` as time-out minus time-in.
///
/// Failure conditions are folded into the return value:
/// - an absent event log yields [`MISSING_TIME_EVENTS_HOURS`]
/// - no time-in or no time-out punch for the date yields `0.0`
/// - an unparseable hour yields `NaN`
///
/// The result is negative when the time-out precedes the time-in; it is
/// never clamped. The first two conditions are logged as warnings.
///
/// # Arguments
///
/// * `employee` - The employee whose punches are reconciled
/// * `date` - The date to match, compared by exact string equality
///
/// # Returns
///
/// The signed number of hours worked, or one of the markers above.
///
/// # Examples
///
/// ```
/// use timecard_payroll::calculation::hours_worked_on_date;
/// use timecard_payroll::models::EmployeeRecord;
///
/// let mut employee = EmployeeRecord::new("Ada", "Lovelace", "Engineer", 50.0);
/// employee
///     .create_time_in_event("2024-01-15 930")
///     .create_time_out_event("2024-01-15 1730");
///
/// assert_eq!(hours_worked_on_date(&employee, "2024-01-15"), 8.0);
/// assert_eq!(hours_worked_on_date(&employee, "2024-01-16"), 0.0);
/// ```
pub fn hours_worked_on_date(employee: &EmployeeRecord, date: &str) -> f64 {
    match matched_punches(employee, date) {
        Ok((time_in, time_out)) => punch_fraction(time_out) - punch_fraction(time_in),
        Err(PayrollError::MissingTimeEvents { first_name }) => {
            warn!(first_name = %first_name, "Missing time events for employee");
            MISSING_TIME_EVENTS_HOURS
        }
        Err(_) => {
            warn!(first_name = %employee.first_name, date = %date, "Time events not found for date");
            0.0
        }
    }
}

/// Calculates the hours worked on `date`, reporting failures as errors.
///
/// # Arguments
///
/// * `employee` - The employee whose punches are reconciled
/// * `date` - The date to match, compared by exact string equality
///
/// # Returns
///
/// Returns the signed number of hours worked, or an error if:
/// - `MissingTimeEvents` if either event log is absent
/// - `TimeEventsNotFound` if no time-in or no time-out punch matches `date`
/// - `InvalidHour` if a matched punch has an unparseable hour
pub fn try_hours_worked_on_date(employee: &EmployeeRecord, date: &str) -> PayrollResult<f64> {
    let (time_in, time_out) = matched_punches(employee, date)?;

    match (time_in.hour, time_out.hour) {
        (Some(hour_in), Some(hour_out)) => Ok(hour_fraction(hour_out) - hour_fraction(hour_in)),
        _ => Err(PayrollError::InvalidHour {
            date: date.to_string(),
        }),
    }
}
