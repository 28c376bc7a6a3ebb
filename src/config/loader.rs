//! Roster loading functionality.
//!
//! This module provides the [`RosterLoader`] type for loading employee
//! rosters and their punches from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::calculation::find_employee_by_first_name;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{EmployeeRecord, create_employee_record};

use super::types::{RosterEntry, RosterFile};

/// Loads a roster and provides access to the resulting employee records.
///
/// # File Format
///
/// ```text
/// employees:
///   - first_name: Ada
///     family_name: Lovelace
///     title: Engineer
///     pay_per_hour: 50
///     time_in: ["2024-03-01 900"]
///     time_out: ["2024-03-01 1700"]
/// ```
///
/// # Example
///
/// ```no_run
/// use timecard_payroll::calculation::calculate_payroll;
/// use timecard_payroll::config::RosterLoader;
///
/// let roster = RosterLoader::load("./config/sample_roster.yaml")?;
/// println!("Payroll: {}", calculate_payroll(roster.employees()));
/// # Ok::<(), timecard_payroll::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RosterLoader {
    employees: Vec<EmployeeRecord>,
}

impl RosterLoader {
    /// Loads a roster from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the roster file (e.g., "./config/sample_roster.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `RosterLoader` holding one record per roster entry, or an
    /// error if:
    /// - `RosterNotFound` if the file cannot be read
    /// - `RosterParseError` if the file is not a valid roster
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::RosterNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, &path_str)?;
        info!(path = %path_str, employees = loader.employees.len(), "Loaded roster");
        Ok(loader)
    }

    /// Parses a roster from in-memory YAML.
    ///
    /// # Arguments
    ///
    /// * `content` - The roster document
    ///
    /// # Returns
    ///
    /// Returns the loader, or `RosterParseError` with the path `<inline>`.
    ///
    /// # Example
    ///
    /// ```
    /// use timecard_payroll::config::RosterLoader;
    ///
    /// let yaml = r#"
    /// employees:
    ///   - first_name: Ada
    ///     family_name: Lovelace
    ///     title: Engineer
    ///     pay_per_hour: 50
    /// "#;
    ///
    /// let roster = RosterLoader::from_yaml_str(yaml)?;
    /// assert_eq!(roster.employees().len(), 1);
    /// # Ok::<(), timecard_payroll::error::PayrollError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> PayrollResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> PayrollResult<Self> {
        let roster: RosterFile =
            serde_yaml::from_str(content).map_err(|e| PayrollError::RosterParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        let employees = roster.employees.iter().map(Self::build_record).collect();
        Ok(Self { employees })
    }

    fn build_record(entry: &RosterEntry) -> EmployeeRecord {
        let mut employee = create_employee_record((
            entry.first_name.as_str(),
            entry.family_name.as_str(),
            entry.title.as_str(),
            entry.pay_per_hour,
        ));

        for punch in &entry.time_in {
            employee.create_time_in_event(punch);
        }
        for punch in &entry.time_out {
            employee.create_time_out_event(punch);
        }

        debug!(
            first_name = %employee.first_name,
            time_in = entry.time_in.len(),
            time_out = entry.time_out.len(),
            "Built employee record from roster"
        );
        employee
    }

    /// Returns the loaded employees in file order.
    pub fn employees(&self) -> &[EmployeeRecord] {
        &self.employees
    }

    /// Consumes the loader, returning the employees.
    pub fn into_employees(self) -> Vec<EmployeeRecord> {
        self.employees
    }

    /// Finds the first employee with the given first name.
    pub fn find(&self, first_name: &str) -> Option<&EmployeeRecord> {
        find_employee_by_first_name(&self.employees, first_name)
    }
}
