//! Roster configuration for timecard payroll.
//!
//! This module provides functionality to load employee rosters, with their
//! identity fields, pay rates, and recorded punches, from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use timecard_payroll::config::RosterLoader;
//!
//! let roster = RosterLoader::load("./config/sample_roster.yaml").unwrap();
//! println!("Loaded {} employees", roster.employees().len());
//! ```

mod loader;
mod types;

pub use loader::RosterLoader;
pub use types::{RosterEntry, RosterFile};
