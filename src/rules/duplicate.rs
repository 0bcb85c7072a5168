//! Duplicate-approval guard.
//!
//! At most one pay run per period may be approved. The guard runs against a
//! freshly fetched pay run collection before a period is processed and
//! before a pending pay run is approved.

use crate::error::{DeskError, DeskResult};
use crate::models::{PayPeriod, PayRun};

/// Fails with `Conflict("already approved")` if any pay run for `period`,
/// other than the one named by `exclude`, is approved.
///
/// # Example
///
/// ```
/// use payrun_desk::rules::ensure_not_approved;
/// use payrun_desk::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::new(
///     NaiveDate::from_ymd_opt(2024, 1, 26).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 25).unwrap(),
/// );
/// assert!(ensure_not_approved(&[], &period, None).is_ok());
/// ```
pub fn ensure_not_approved(
    pay_runs: &[PayRun],
    period: &PayPeriod,
    exclude: Option<&str>,
) -> DeskResult<()> {
    let conflict = pay_runs.iter().any(|run| {
        run.period == *period
            && run.is_approved()
            && exclude.is_none_or(|id| run.pay_run_id != id)
    });

    if conflict {
        return Err(DeskError::Conflict("already approved".to_string()));
    }

    Ok(())
}
