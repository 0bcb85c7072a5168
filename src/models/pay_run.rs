//! Pay run models.
//!
//! This module contains the [`PayRun`] type as returned by the payroll API,
//! its [`ApprovalState`] and the [`ApprovalUpdate`] body sent to change it.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::PayPeriod;

/// The approval status of a pay run.
///
/// The payroll API stores this as two independent booleans (`approved`,
/// `rejected`); the desk collapses them into a single state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalState {
    /// Neither approved nor rejected.
    Pending,
    /// Accepted by an operator.
    Approved,
    /// Explicitly rejected after approval.
    Rejected,
}

impl ApprovalState {
    /// Builds a state from the API's `approved`/`rejected` flags.
    ///
    /// Both flags set is inconsistent upstream data and is read as
    /// `Rejected`, since rejection is the later transition.
    pub fn from_flags(approved: bool, rejected: bool) -> Self {
        match (approved, rejected) {
            (false, false) => ApprovalState::Pending,
            (true, false) => ApprovalState::Approved,
            (false, true) => ApprovalState::Rejected,
            (true, true) => {
                warn!("Pay run has both approved and rejected set, treating as rejected");
                ApprovalState::Rejected
            }
        }
    }

    /// Returns the `(approved, rejected)` flags for this state.
    pub fn flags(self) -> (bool, bool) {
        match self {
            ApprovalState::Pending => (false, false),
            ApprovalState::Approved => (true, false),
            ApprovalState::Rejected => (false, true),
        }
    }

    /// Returns the lowercase state name.
    pub fn as_str(self) -> &'static str {
        match self {
            ApprovalState::Pending => "pending",
            ApprovalState::Approved => "approved",
            ApprovalState::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApprovalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A per-employee line of a pay run's summary, earnings or deductions.
///
/// Only the employee id is interpreted; every other field computed by the
/// payroll API is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayRunLine {
    /// The employee this line belongs to.
    #[serde(rename = "employeeId")]
    pub employee_id: String,
    /// The remaining fields, as computed by the payroll API.
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// A single payroll computation cycle for a fixed period.
///
/// # Example
///
/// ```
/// use payrun_desk::models::{ApprovalState, PayRun};
///
/// let json = r#"{
///     "payRunId": "pr_001",
///     "period": {"periodStart": "26-01-2024", "periodEnd": "25-02-2024"},
///     "approved": true,
///     "rejected": false,
///     "totalPayrollCost": 15230.50
/// }"#;
/// let pay_run: PayRun = serde_json::from_str(json).unwrap();
/// assert_eq!(pay_run.state, ApprovalState::Approved);
/// assert_eq!(pay_run.period.to_string(), "26-01-2024 - 25-02-2024");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PayRunWire", into = "PayRunWire")]
pub struct PayRun {
    /// Identifier assigned by the payroll API.
    pub pay_run_id: String,
    /// The period this pay run covers.
    pub period: PayPeriod,
    /// The current approval state.
    pub state: ApprovalState,
    /// Total payroll cost, computed by the payroll API.
    pub total_payroll_cost: Decimal,
    /// Total payroll deductions, computed by the payroll API.
    pub total_payroll_deductions: Decimal,
    /// Net pay summary lines.
    pub summary: Vec<PayRunLine>,
    /// Earnings lines.
    pub earnings: Vec<PayRunLine>,
    /// Deduction lines.
    pub deductions: Vec<PayRunLine>,
}

impl PayRun {
    /// Returns true if this pay run is approved.
    pub fn is_approved(&self) -> bool {
        self.state == ApprovalState::Approved
    }
}

/// The pay run as the payroll API serializes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PayRunWire {
    pay_run_id: String,
    period: PayPeriod,
    #[serde(default)]
    approved: bool,
    #[serde(default)]
    rejected: bool,
    #[serde(default)]
    total_payroll_cost: Decimal,
    #[serde(default)]
    total_payroll_deductions: Decimal,
    #[serde(default)]
    summary: Vec<PayRunLine>,
    #[serde(default)]
    earnings: Vec<PayRunLine>,
    #[serde(default)]
    deductions: Vec<PayRunLine>,
}

impl From<PayRunWire> for PayRun {
    fn from(wire: PayRunWire) -> Self {
        PayRun {
            state: ApprovalState::from_flags(wire.approved, wire.rejected),
            pay_run_id: wire.pay_run_id,
            period: wire.period,
            total_payroll_cost: wire.total_payroll_cost,
            total_payroll_deductions: wire.total_payroll_deductions,
            summary: wire.summary,
            earnings: wire.earnings,
            deductions: wire.deductions,
        }
    }
}

impl From<PayRun> for PayRunWire {
    fn from(pay_run: PayRun) -> Self {
        let (approved, rejected) = pay_run.state.flags();
        PayRunWire {
            pay_run_id: pay_run.pay_run_id,
            period: pay_run.period,
            approved,
            rejected,
            total_payroll_cost: pay_run.total_payroll_cost,
            total_payroll_deductions: pay_run.total_payroll_deductions,
            summary: pay_run.summary,
            earnings: pay_run.earnings,
            deductions: pay_run.deductions,
        }
    }
}

/// Request body for `PUT /pay-run/approve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalUpdate {
    /// The pay run to update.
    pub pay_run_id: String,
    /// Whether the pay run is approved.
    pub approved: bool,
    /// Whether the pay run is rejected.
    pub rejected: bool,
}

impl ApprovalUpdate {
    /// Builds the update that moves `pay_run_id` into `state`.
    pub fn new(pay_run_id: impl Into<String>, state: ApprovalState) -> Self {
        let (approved, rejected) = state.flags();
        Self {
            pay_run_id: pay_run_id.into(),
            approved,
            rejected,
        }
    }

    /// Returns the state this update requests.
    pub fn state(&self) -> ApprovalState {
        ApprovalState::from_flags(self.approved, self.rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const PAY_RUN_JSON: &str = r#"{
        "payRunId": "pr_2024_01",
        "period": {"periodStart": "26-01-2024", "periodEnd": "25-02-2024"},
        "approved": false,
        "rejected": false,
        "totalPayrollCost": "15230.50",
        "totalPayrollDeductions": 2310.25,
        "summary": [
            {"employeeId": "emp_001", "netPay": 1200.5},
            {"employeeId": "emp_002", "netPay": 980}
        ],
        "earnings": [{"employeeId": "emp_001", "basicPay": 1000, "overtime": 200.5}],
        "deductions": [{"employeeId": "emp_001", "tax": 150}]
    }"#;

    #[test]
    fn test_from_flags_covers_all_combinations() {
        assert_eq!(ApprovalState::from_flags(false, false), ApprovalState::Pending);
        assert_eq!(ApprovalState::from_flags(true, false), ApprovalState::Approved);
        assert_eq!(ApprovalState::from_flags(false, true), ApprovalState::Rejected);
        assert_eq!(ApprovalState::from_flags(true, true), ApprovalState::Rejected);
    }

    #[test]
    fn test_flags_are_mutually_exclusive() {
        for state in [
            ApprovalState::Pending,
            ApprovalState::Approved,
            ApprovalState::Rejected,
        ] {
            let (approved, rejected) = state.flags();
            assert!(!(approved && rejected));
            assert_eq!(ApprovalState::from_flags(approved, rejected), state);
        }
    }

    #[test]
    fn test_deserialize_pay_run() {
        let pay_run: PayRun = serde_json::from_str(PAY_RUN_JSON).unwrap();
        assert_eq!(pay_run.pay_run_id, "pr_2024_01");
        assert_eq!(pay_run.state, ApprovalState::Pending);
        assert_eq!(pay_run.total_payroll_cost, Decimal::from_str("15230.50").unwrap());
        assert_eq!(pay_run.total_payroll_deductions, Decimal::from_str("2310.25").unwrap());
        assert_eq!(pay_run.summary.len(), 2);
        assert_eq!(pay_run.summary[1].employee_id, "emp_002");
        assert_eq!(pay_run.earnings[0].fields["overtime"], serde_json::json!(200.5));
    }

    #[test]
    fn test_deserialize_minimal_pay_run_defaults() {
        let json = r#"{
            "payRunId": "pr_min",
            "period": {"periodStart": "26-02-2024", "periodEnd": "25-03-2024"}
        }"#;
        let pay_run: PayRun = serde_json::from_str(json).unwrap();
        assert_eq!(pay_run.state, ApprovalState::Pending);
        assert_eq!(pay_run.total_payroll_cost, Decimal::ZERO);
        assert!(pay_run.summary.is_empty());
    }

    #[test]
    fn test_serialize_pay_run_uses_api_flags() {
        let mut pay_run: PayRun = serde_json::from_str(PAY_RUN_JSON).unwrap();
        pay_run.state = ApprovalState::Approved;
        let value = serde_json::to_value(&pay_run).unwrap();
        assert_eq!(value["payRunId"], "pr_2024_01");
        assert_eq!(value["approved"], true);
        assert_eq!(value["rejected"], false);
        assert_eq!(value["period"]["periodStart"], "26-01-2024");
        assert_eq!(value["summary"][0]["employeeId"], "emp_001");
        assert_eq!(value["summary"][0]["netPay"], serde_json::json!(1200.5));
    }

    #[test]
    fn test_approval_update_bodies() {
        let approve = ApprovalUpdate::new("pr_1", ApprovalState::Approved);
        assert_eq!(
            serde_json::to_value(&approve).unwrap(),
            serde_json::json!({"payRunId": "pr_1", "approved": true, "rejected": false})
        );

        let reject = ApprovalUpdate::new("pr_1", ApprovalState::Rejected);
        assert_eq!(
            serde_json::to_value(&reject).unwrap(),
            serde_json::json!({"payRunId": "pr_1", "approved": false, "rejected": true})
        );
        assert_eq!(reject.state(), ApprovalState::Rejected);
    }

    #[test]
    fn test_approval_state_display() {
        assert_eq!(ApprovalState::Pending.to_string(), "pending");
        assert_eq!(
            serde_json::to_string(&ApprovalState::Approved).unwrap(),
            "\"approved\""
        );
    }
}
