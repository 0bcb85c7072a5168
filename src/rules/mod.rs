//! Business rules for pay run processing and approval.
//!
//! This module contains the pay period validator, the attendance
//! precondition check, the duplicate-approval guard and the approval state
//! machine transitions on [`crate::models::ApprovalState`].

mod approval;
mod attendance;
mod duplicate;
mod period;

pub use attendance::check_attendance;
pub use duplicate::ensure_not_approved;
pub use period::{PERIOD_END_DAY, PERIOD_START_DAY, validate_period};
