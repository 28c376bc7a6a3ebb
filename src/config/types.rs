//! Roster file types.
//!
//! This module contains the structures deserialized from YAML roster
//! files before they are turned into employee records.

use serde::Deserialize;

/// One employee entry in a roster file.
///
/// Punches are written in the same `"<date> <hour>"` form the event
/// recorders accept.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    /// The employee's first name.
    pub first_name: String,
    /// The employee's family name.
    pub family_name: String,
    /// The employee's job title.
    pub title: String,
    /// Hourly pay rate, if known.
    #[serde(default)]
    pub pay_per_hour: Option<f64>,
    /// Clock-in punches.
    #[serde(default)]
    pub time_in: Vec<String>,
    /// Clock-out punches.
    #[serde(default)]
    pub time_out: Vec<String>,
}

/// Roster file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterFile {
    /// Employees in file order.
    #[serde(default)]
    pub employees: Vec<RosterEntry>,
}
