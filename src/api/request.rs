//! Request types for the pay run desk API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request body for `POST /pay-runs/process`.
///
/// Both dates are optional so that a missing date reaches the period
/// validator and is reported as `"missing date"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRequest {
    /// First day of the period (ISO-8601 date).
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last day of the period (ISO-8601 date).
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_process_request() {
        let json = r#"{"startDate": "2024-12-26", "endDate": "2025-01-25"}"#;
        let request: ProcessRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.start_date, NaiveDate::from_ymd_opt(2024, 12, 26));
        assert_eq!(request.end_date, NaiveDate::from_ymd_opt(2025, 1, 25));
    }

    #[test]
    fn test_missing_and_null_dates_are_none() {
        let request: ProcessRequest = serde_json::from_str(r#"{"startDate": null}"#).unwrap();
        assert!(request.start_date.is_none());
        assert!(request.end_date.is_none());
    }
}
