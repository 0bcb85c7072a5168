//! Pay run processing and approval workflow.
//!
//! [`PayRunService`] runs the business rules in their fixed order and only
//! then calls the payroll API's mutating endpoints. It never mutates pay runs
//! locally: after any call, success or failure, callers re-query.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::client::PayrollApi;
use crate::error::{DeskError, DeskResult};
use crate::models::{ApprovalState, ApprovalUpdate, PayPeriod, PayRun, Session};
use crate::rules::{check_attendance, ensure_not_approved, validate_period};

use super::PayrollDashboard;

/// The result of an approval or rejection request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalOutcome {
    /// The pay run that was updated.
    pub pay_run_id: String,
    /// The pay run's period.
    pub period: PayPeriod,
    /// The state requested from the payroll API.
    pub state: ApprovalState,
}

/// The result of a processing request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessOutcome {
    /// The processed period.
    pub period: PayPeriod,
    /// The pay run the payroll API created, as found by re-querying the pay
    /// run list. `None` if the re-query failed or showed no new run.
    pub pay_run: Option<PayRun>,
}

/// Orchestrates pay run processing, approval and rejection.
#[derive(Clone)]
pub struct PayRunService {
    api: Arc<dyn PayrollApi>,
}

impl PayRunService {
    /// Creates a service on top of a payroll API client.
    pub fn new(api: Arc<dyn PayrollApi>) -> Self {
        Self { api }
    }

    /// Returns a service whose payroll API calls carry `session`'s token,
    /// or no credentials when `session` is `None`.
    pub fn for_session(&self, session: Option<&Session>) -> Self {
        Self {
            api: self.api.for_session(session),
        }
    }

    /// Processes a new pay run for the period `start`..`end`.
    ///
    /// The period is validated first, then attendance is checked, then the
    /// duplicate-approval guard runs against a fresh pay run list. The first
    /// failure stops the sequence and the process endpoint is not called.
    ///
    /// Once the payroll API accepts the request the pay run list is fetched
    /// again to report the created run.
    pub async fn process(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> DeskResult<ProcessOutcome> {
        let correlation_id = Uuid::new_v4();
        let period = validate_period(start, end).inspect_err(|err| {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected pay period");
        })?;

        info!(correlation_id = %correlation_id, period = %period, "Processing pay run");
        let known = match self.process_period(&period).await {
            Ok(known) => known,
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    period = %period,
                    error = %err,
                    "Pay run processing blocked"
                );
                return Err(err);
            }
        };

        let pay_run = match self.api.list_pay_runs().await {
            Ok(pay_runs) => find_created(pay_runs, &known, &period),
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "Pay run processed but the pay run list could not be refreshed"
                );
                None
            }
        };
        info!(
            correlation_id = %correlation_id,
            period = %period,
            pay_run_id = pay_run.as_ref().map(|run| run.pay_run_id.as_str()),
            "Pay run processed"
        );
        Ok(ProcessOutcome { period, pay_run })
    }

    /// Runs the processing preconditions and submits the request. Returns the
    /// pay runs that existed beforehand.
    async fn process_period(&self, period: &PayPeriod) -> DeskResult<Vec<PayRun>> {
        check_attendance(self.api.as_ref(), period).await?;
        let pay_runs = self.api.list_pay_runs().await?;
        ensure_not_approved(&pay_runs, period, None)?;
        self.api.process_pay_run(period).await?;
        Ok(pay_runs)
    }

    /// Approves a pending pay run.
    ///
    /// Fails with `Conflict` if another pay run for the same period is
    /// already approved.
    pub async fn approve(&self, pay_run_id: &str) -> DeskResult<ApprovalOutcome> {
        let correlation_id = Uuid::new_v4();
        info!(correlation_id = %correlation_id, pay_run_id = %pay_run_id, "Approving pay run");

        let result = self.approve_pay_run(pay_run_id).await;
        log_outcome(correlation_id, pay_run_id, &result);
        result
    }

    async fn approve_pay_run(&self, pay_run_id: &str) -> DeskResult<ApprovalOutcome> {
        let pay_runs = self.api.list_pay_runs().await?;
        let pay_run = find_pay_run(&pay_runs, pay_run_id)?;
        let next = pay_run.state.approve()?;
        ensure_not_approved(&pay_runs, &pay_run.period, Some(pay_run_id))?;
        self.submit(pay_run, next).await
    }

    /// Rejects an approved pay run on behalf of `session`'s user.
    ///
    /// Only roles that may reject are accepted. The duplicate-approval guard
    /// does not apply to rejection.
    pub async fn reject(&self, pay_run_id: &str, session: &Session) -> DeskResult<ApprovalOutcome> {
        let correlation_id = Uuid::new_v4();
        info!(
            correlation_id = %correlation_id,
            pay_run_id = %pay_run_id,
            user_id = %session.user.id,
            "Rejecting pay run"
        );

        let result = self.reject_pay_run(pay_run_id, session).await;
        log_outcome(correlation_id, pay_run_id, &result);
        result
    }

    async fn reject_pay_run(&self, pay_run_id: &str, session: &Session) -> DeskResult<ApprovalOutcome> {
        let role = session.user.role;
        if !role.can_reject() {
            return Err(DeskError::Forbidden {
                role: role.as_str().to_string(),
            });
        }

        let pay_runs = self.api.list_pay_runs().await?;
        let pay_run = find_pay_run(&pay_runs, pay_run_id)?;
        let next = pay_run.state.reject()?;
        self.submit(pay_run, next).await
    }

    async fn submit(&self, pay_run: &PayRun, next: ApprovalState) -> DeskResult<ApprovalOutcome> {
        let update = ApprovalUpdate::new(&pay_run.pay_run_id, next);
        self.api.update_approval(&update).await?;
        Ok(ApprovalOutcome {
            pay_run_id: pay_run.pay_run_id.clone(),
            period: pay_run.period,
            state: next,
        })
    }

    /// Returns all pay runs, most recent period first.
    pub async fn list(&self) -> DeskResult<Vec<PayRun>> {
        let mut pay_runs = self.api.list_pay_runs().await?;
        pay_runs.sort_by(|a, b| b.period.cmp(&a.period));
        Ok(pay_runs)
    }

    /// Builds the payroll cost dashboard from the current pay runs.
    pub async fn dashboard(&self) -> DeskResult<PayrollDashboard> {
        let pay_runs = self.api.list_pay_runs().await?;
        Ok(PayrollDashboard::from_pay_runs(&pay_runs))
    }
}

fn find_pay_run<'a>(pay_runs: &'a [PayRun], pay_run_id: &str) -> DeskResult<&'a PayRun> {
    pay_runs
        .iter()
        .find(|run| run.pay_run_id == pay_run_id)
        .ok_or_else(|| DeskError::PayRunNotFound {
            pay_run_id: pay_run_id.to_string(),
        })
}

/// Picks the run for `period` that was not in `known`.
fn find_created(pay_runs: Vec<PayRun>, known: &[PayRun], period: &PayPeriod) -> Option<PayRun> {
    pay_runs.into_iter().rev().find(|run| {
        run.period == *period && known.iter().all(|k| k.pay_run_id != run.pay_run_id)
    })
}

fn log_outcome(correlation_id: Uuid, pay_run_id: &str, result: &DeskResult<ApprovalOutcome>) {
    match result {
        Ok(outcome) => info!(
            correlation_id = %correlation_id,
            pay_run_id = %pay_run_id,
            state = %outcome.state,
            "Approval state updated"
        ),
        Err(err) => warn!(
            correlation_id = %correlation_id,
            pay_run_id = %pay_run_id,
            error = %err,
            "Approval state unchanged"
        ),
    }
}
