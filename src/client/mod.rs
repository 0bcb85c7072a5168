//! Client for the remote payroll API.
//!
//! The payroll API owns attendance data and all payroll math. The desk talks
//! to it through the [`PayrollApi`] trait; [`HttpPayrollApi`] is the network
//! implementation.

mod http;
#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::DeskResult;
use crate::models::{ApprovalUpdate, AttendanceRecord, PayPeriod, PayRun, Session};

pub use http::HttpPayrollApi;

/// Operations the desk needs from the payroll API.
#[async_trait]
pub trait PayrollApi: Send + Sync {
    /// `GET /time-and-attendance/by-period?startDate=..&endDate=..`
    async fn attendance_by_period(&self, period: &PayPeriod) -> DeskResult<Vec<AttendanceRecord>>;

    /// `GET /pay-run/all`
    async fn list_pay_runs(&self) -> DeskResult<Vec<PayRun>>;

    /// `POST /pay-run/process?startDate=..&endDate=..`
    ///
    /// Triggers computation of a new pay run for the period. The response
    /// body is not interpreted; callers re-query the pay run list.
    async fn process_pay_run(&self, period: &PayPeriod) -> DeskResult<()>;

    /// `PUT /pay-run/approve`
    async fn update_approval(&self, update: &ApprovalUpdate) -> DeskResult<()>;

    /// Returns a client that authenticates as `session`, or sends no
    /// credentials when `session` is `None`.
    fn for_session(&self, session: Option<&Session>) -> Arc<dyn PayrollApi>;
}
