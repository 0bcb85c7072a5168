//! Pay run workflow.
//!
//! This module combines the business rules with the payroll API client:
//! processing new pay runs, approving and rejecting them, and summarizing
//! payroll costs for the dashboard.

mod dashboard;
mod service;

pub use dashboard::{PayrollDashboard, PeriodCost};
pub use service::{ApprovalOutcome, PayRunService, ProcessOutcome};
