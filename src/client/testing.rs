//! In-memory [`PayrollApi`] that records every call.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::{DeskError, DeskResult};
use crate::models::{
    ApprovalState, ApprovalUpdate, AttendanceRecord, PayPeriod, PayRun, Session,
};

use super::PayrollApi;

/// Calls received by a [`MockPayrollApi`] and every client derived from it.
#[derive(Debug, Clone, Default)]
pub(crate) struct CallLog {
    pub attendance: usize,
    pub list: usize,
    pub processed: Vec<PayPeriod>,
    pub updates: Vec<ApprovalUpdate>,
    /// Token sent with each call, in call order.
    pub tokens: Vec<Option<String>>,
}

#[derive(Default)]
struct Shared {
    calls: Mutex<CallLog>,
    created: Mutex<Vec<PayRun>>,
}

#[derive(Clone, Default)]
pub(crate) struct MockPayrollApi {
    attendance: Vec<AttendanceRecord>,
    pay_runs: Vec<PayRun>,
    fail_attendance: bool,
    fail_list: bool,
    fail_updates: bool,
    token: Option<String>,
    shared: Arc<Shared>,
}

impl MockPayrollApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attendance(mut self, records: Vec<AttendanceRecord>) -> Self {
        self.attendance = records;
        self
    }

    pub fn with_pay_runs(mut self, pay_runs: Vec<PayRun>) -> Self {
        self.pay_runs = pay_runs;
        self
    }

    pub fn failing_attendance(mut self) -> Self {
        self.fail_attendance = true;
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn failing_updates(mut self) -> Self {
        self.fail_updates = true;
        self
    }

    pub fn calls(&self) -> CallLog {
        self.shared.calls.lock().unwrap().clone()
    }

    fn record(&self, f: impl FnOnce(&mut CallLog)) {
        let mut calls = self.shared.calls.lock().unwrap();
        calls.tokens.push(self.token.clone());
        f(&mut calls);
    }
}

fn unavailable() -> DeskError {
    DeskError::Network {
        status: Some(503),
        message: "service unavailable".to_string(),
    }
}

/// Builds a pay run with zero totals and no lines.
pub(crate) fn pay_run(id: &str, period: PayPeriod, state: ApprovalState) -> PayRun {
    PayRun {
        pay_run_id: id.to_string(),
        period,
        state,
        total_payroll_cost: Decimal::ZERO,
        total_payroll_deductions: Decimal::ZERO,
        summary: vec![],
        earnings: vec![],
        deductions: vec![],
    }
}

#[async_trait]
impl PayrollApi for MockPayrollApi {
    async fn attendance_by_period(&self, _period: &PayPeriod) -> DeskResult<Vec<AttendanceRecord>> {
        self.record(|calls| calls.attendance += 1);
        if self.fail_attendance {
            return Err(unavailable());
        }
        Ok(self.attendance.clone())
    }

    async fn list_pay_runs(&self) -> DeskResult<Vec<PayRun>> {
        self.record(|calls| calls.list += 1);
        if self.fail_list {
            return Err(unavailable());
        }
        let mut pay_runs = self.pay_runs.clone();
        pay_runs.extend(self.shared.created.lock().unwrap().iter().cloned());
        Ok(pay_runs)
    }

    async fn process_pay_run(&self, period: &PayPeriod) -> DeskResult<()> {
        self.record(|calls| calls.processed.push(*period));
        let mut created = self.shared.created.lock().unwrap();
        let id = format!("pr_new_{}", created.len() + 1);
        created.push(pay_run(&id, *period, ApprovalState::Pending));
        Ok(())
    }

    async fn update_approval(&self, update: &ApprovalUpdate) -> DeskResult<()> {
        self.record(|calls| calls.updates.push(update.clone()));
        if self.fail_updates {
            return Err(unavailable());
        }
        Ok(())
    }

    fn for_session(&self, session: Option<&Session>) -> Arc<dyn PayrollApi> {
        Arc::new(Self {
            token: session.map(|s| s.token.clone()),
            ..self.clone()
        })
    }
}
