//! Attendance precondition check.
//!
//! Payroll must not be processed for a period with no recorded attendance.

use tracing::{debug, warn};

use crate::client::PayrollApi;
use crate::error::{DeskError, DeskResult};
use crate::models::PayPeriod;

/// Checks that the payroll API holds attendance records for `period`.
///
/// Returns the number of records found. A failed query is reported as
/// `Precondition("fetch failed")` and an empty result as
/// `Precondition("no attendance")`.
pub async fn check_attendance<A>(api: &A, period: &PayPeriod) -> DeskResult<usize>
where
    A: PayrollApi + ?Sized,
{
    let records = api.attendance_by_period(period).await.map_err(|err| {
        warn!(period = %period, error = %err, "Attendance query failed");
        DeskError::Precondition("fetch failed".to_string())
    })?;

    if records.is_empty() {
        return Err(DeskError::Precondition("no attendance".to_string()));
    }

    debug!(period = %period, records = records.len(), "Attendance precondition satisfied");
    Ok(records.len())
}
