//! Time-and-attendance record model.

use serde::{Deserialize, Serialize};

/// An attendance record returned by the payroll API for a period.
///
/// The desk only needs to know that records exist, so apart from the
/// employee id the record is kept as the API sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee the record belongs to.
    #[serde(rename = "employeeId")]
    pub employee_id: String,
    /// The remaining fields, as sent by the payroll API.
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}
