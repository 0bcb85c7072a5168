//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type and the `dd-MM-yyyy` date
//! format the payroll API uses for every period boundary.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DeskError, DeskResult};

/// The textual date format used for period boundaries on the wire.
pub const PERIOD_DATE_FORMAT: &str = "%d-%m-%Y";

/// Formats a date as `dd-MM-yyyy`.
///
/// # Example
///
/// ```
/// use payrun_desk::models::format_period_date;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 12, 26).unwrap();
/// assert_eq!(format_period_date(date), "26-12-2024");
/// ```
pub fn format_period_date(date: NaiveDate) -> String {
    date.format(PERIOD_DATE_FORMAT).to_string()
}

/// Parses a `dd-MM-yyyy` date.
///
/// The value must be exactly the zero-padded form [`format_period_date`]
/// produces: `26-1-2024`, ISO-8601 and other layouts are rejected with a
/// validation error.
pub fn parse_period_date(value: &str) -> DeskResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(value, PERIOD_DATE_FORMAT).map_err(|e| {
        DeskError::Validation(format!("invalid period date '{}': {}", value, e))
    })?;
    if format_period_date(date) != value {
        return Err(DeskError::Validation(format!(
            "invalid period date '{}': expected dd-MM-yyyy",
            value
        )));
    }
    Ok(date)
}

/// Serde adapter for `dd-MM-yyyy` dates.
pub mod period_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes a date as `dd-MM-yyyy`.
    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_period_date(*date))
    }

    /// Deserializes a `dd-MM-yyyy` date.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let value = String::deserialize(deserializer)?;
        super::parse_period_date(&value).map_err(serde::de::Error::custom)
    }
}

/// A pay period, identified by its start and end dates.
///
/// Two periods are the same period exactly when both dates are equal. The
/// canonical period string (`"dd-MM-yyyy - dd-MM-yyyy"`) is derived from the
/// dates through [`fmt::Display`] and is only used for presentation.
///
/// On the wire the period is `{"periodStart": "26-12-2024", "periodEnd": "25-01-2025"}`.
///
/// # Example
///
/// ```
/// use payrun_desk::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::new(
///     NaiveDate::from_ymd_opt(2024, 12, 26).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 25).unwrap(),
/// );
/// assert_eq!(period.to_string(), "26-12-2024 - 25-01-2025");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The first day of the period (inclusive).
    #[serde(rename = "periodStart", with = "period_date")]
    pub start_date: NaiveDate,
    /// The last day of the period (inclusive).
    #[serde(rename = "periodEnd", with = "period_date")]
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Creates a period from its boundaries without validating them.
    ///
    /// Use [`crate::rules::validate_period`] for operator input.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Returns the start date as `dd-MM-yyyy`.
    pub fn start_param(&self) -> String {
        format_period_date(self.start_date)
    }

    /// Returns the end date as `dd-MM-yyyy`.
    pub fn end_param(&self) -> String {
        format_period_date(self.end_date)
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start_param(), self.end_param())
    }
}
