//! Pay period validation.
//!
//! The organization runs payroll on fixed cutoffs: every period starts on
//! the 26th of one month and ends on the 25th of the next. A candidate period
//! is checked here before any request reaches the payroll API.

use chrono::{Datelike, NaiveDate};

use crate::error::{DeskError, DeskResult};
use crate::models::PayPeriod;

/// Day of month every pay period starts on.
pub const PERIOD_START_DAY: u32 = 26;

/// Day of month every pay period ends on.
pub const PERIOD_END_DAY: u32 = 25;

/// Validates an operator-chosen pay period.
///
/// The rules are applied in order and the first failure is returned:
/// 1. both dates must be present (`"missing date"`)
/// 2. the start date must fall on the 26th (`"bad start day"`)
/// 3. the end date must fall on the 25th (`"bad end day"`)
/// 4. the end date must come after the start date (`"end before start"`)
///
/// # Example
///
/// ```
/// use payrun_desk::rules::validate_period;
/// use chrono::NaiveDate;
///
/// let period = validate_period(
///     NaiveDate::from_ymd_opt(2024, 12, 26),
///     NaiveDate::from_ymd_opt(2025, 1, 25),
/// )
/// .unwrap();
/// assert_eq!(period.to_string(), "26-12-2024 - 25-01-2025");
///
/// assert!(validate_period(NaiveDate::from_ymd_opt(2024, 12, 1), None).is_err());
/// ```
pub fn validate_period(start: Option<NaiveDate>, end: Option<NaiveDate>) -> DeskResult<PayPeriod> {
    let (Some(start), Some(end)) = (start, end) else {
        return Err(DeskError::Validation("missing date".to_string()));
    };

    if start.day() != PERIOD_START_DAY {
        return Err(DeskError::Validation("bad start day".to_string()));
    }

    if end.day() != PERIOD_END_DAY {
        return Err(DeskError::Validation("bad end day".to_string()));
    }

    if end <= start {
        return Err(DeskError::Validation("end before start".to_string()));
    }

    Ok(PayPeriod::new(start, end))
}
