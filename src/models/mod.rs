//! Core data models for the pay run desk.
//!
//! This module contains all the domain models used throughout the desk.

mod attendance;
mod pay_period;
mod pay_run;
mod session;

pub use attendance::AttendanceRecord;
pub use pay_period::{
    PERIOD_DATE_FORMAT, PayPeriod, format_period_date, parse_period_date, period_date,
};
pub use pay_run::{ApprovalState, ApprovalUpdate, PayRun, PayRunLine};
pub use session::{Role, Session, SessionUser};
