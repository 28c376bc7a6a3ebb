//! Employee record model and factory functions.
//!
//! This module defines the [`EmployeeRecord`] struct, the event recorders
//! that append punches to it, and the factories that build records from
//! raw identity rows.

use serde::{Deserialize, Serialize};

use super::time_event::{TimeEvent, TimeEventType};

/// A raw identity row: `(first_name, family_name, title, pay_per_hour)`.
pub type EmployeeRow = (String, String, String, Option<f64>);

/// Represents one employee and the punches recorded against them.
///
/// `first_name` is the lookup key within a collection. The event logs are
/// `None` only when a record was deserialized without them; the factory
/// always starts them empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// The employee's first name, used as the identity key.
    pub first_name: String,
    /// The employee's family name.
    pub family_name: String,
    /// The employee's job title.
    pub title: String,
    /// Hourly pay rate. Absent is treated as zero.
    #[serde(default)]
    pub pay_per_hour: Option<f64>,
    /// Clock-in punches in recording order.
    pub time_in_events: Option<Vec<TimeEvent>>,
    /// Clock-out punches in recording order.
    pub time_out_events: Option<Vec<TimeEvent>>,
}

impl EmployeeRecord {
    /// Creates a record with empty event logs.
    pub fn new(
        first_name: impl Into<String>,
        family_name: impl Into<String>,
        title: impl Into<String>,
        pay_per_hour: impl Into<Option<f64>>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            family_name: family_name.into(),
            title: title.into(),
            pay_per_hour: pay_per_hour.into(),
            time_in_events: Some(Vec::new()),
            time_out_events: Some(Vec::new()),
        }
    }

    /// Returns the pay rate, with an absent or `NaN` rate read as zero.
    pub fn pay_rate(&self) -> f64 {
        self.pay_per_hour.filter(|p| !p.is_nan()).unwrap_or(0.0)
    }

    /// Records a clock-in punch from a `"<date> <hour>"` string.
    ///
    /// Returns the record so further punches can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use timecard_payroll::models::EmployeeRecord;
    ///
    /// let mut ada = EmployeeRecord::new("Ada", "Lovelace", "Engineer", 50.0);
    /// ada.create_time_in_event("2024-03-01 900")
    ///     .create_time_out_event("2024-03-01 1700");
    ///
    /// assert_eq!(ada.time_in_events.as_ref().map(Vec::len), Some(1));
    /// assert_eq!(ada.time_out_events.as_ref().map(Vec::len), Some(1));
    /// ```
    pub fn create_time_in_event(&mut self, date_time: &str) -> &mut Self {
        let event = TimeEvent::parse(TimeEventType::TimeIn, date_time);
        self.time_in_events.get_or_insert_with(Vec::new).push(event);
        self
    }

    /// Records a clock-out punch from a `"<date> <hour>"` string.
    ///
    /// Returns the record so further punches can be chained.
    pub fn create_time_out_event(&mut self, date_time: &str) -> &mut Self {
        let event = TimeEvent::parse(TimeEventType::TimeOut, date_time);
        self.time_out_events.get_or_insert_with(Vec::new).push(event);
        self
    }
}

/// Builds an employee record from a `(first_name, family_name, title, pay)` row.
///
/// No validation is performed. The event logs start empty.
///
/// # Examples
///
/// ```
/// use timecard_payroll::models::create_employee_record;
///
/// let ada = create_employee_record(("Ada", "Lovelace", "Engineer", 50.0));
/// assert_eq!(ada.first_name, "Ada");
/// assert_eq!(ada.pay_per_hour, Some(50.0));
/// assert_eq!(ada.time_in_events, Some(vec![]));
/// ```
pub fn create_employee_record<F, L, T, P>(row: (F, L, T, P)) -> EmployeeRecord
where
    F: Into<String>,
    L: Into<String>,
    T: Into<String>,
    P: Into<Option<f64>>,
{
    let (first_name, family_name, title, pay_per_hour) = row;
    EmployeeRecord::new(first_name, family_name, title, pay_per_hour)
}

/// Builds one record per row, preserving order.
pub fn create_employee_records<I, F, L, T, P>(rows: I) -> Vec<EmployeeRecord>
where
    I: IntoIterator<Item = (F, L, T, P)>,
    F: Into<String>,
    L: Into<String>,
    T: Into<String>,
    P: Into<Option<f64>>,
{
    rows.into_iter().map(create_employee_record).collect()
}
