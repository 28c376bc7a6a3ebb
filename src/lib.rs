//! Timecard payroll
//!
//! This crate computes employee wages from recorded clock-in/clock-out
//! punches: it keeps per-employee records, reconciles punches into hours
//! per date, and aggregates wages into a payroll total or an auditable
//! payroll report.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
