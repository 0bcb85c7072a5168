//! Payroll cost dashboard.
//!
//! Summarizes totals the payroll API has already computed. Only approved pay
//! runs count towards cost figures.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{ApprovalState, PayPeriod, PayRun};

/// Approved payroll cost for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodCost {
    /// The period.
    pub period: PayPeriod,
    /// The canonical period string, for display.
    pub label: String,
    /// Total payroll cost of the approved pay run(s) for the period.
    pub total_payroll_cost: Decimal,
    /// Total payroll deductions of the approved pay run(s) for the period.
    pub total_payroll_deductions: Decimal,
}

/// Dashboard summary of all pay runs.
///
/// # Example
///
/// ```
/// use payrun_desk::workflow::PayrollDashboard;
///
/// let dashboard = PayrollDashboard::from_pay_runs(&[]);
/// assert_eq!(dashboard.approved, 0);
/// assert!(dashboard.latest.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollDashboard {
    /// Number of pending pay runs.
    pub pending: usize,
    /// Number of approved pay runs.
    pub approved: usize,
    /// Number of rejected pay runs.
    pub rejected: usize,
    /// Sum of payroll cost over approved pay runs.
    pub total_payroll_cost: Decimal,
    /// Sum of payroll deductions over approved pay runs.
    pub total_payroll_deductions: Decimal,
    /// The most recent approved period.
    pub latest: Option<PeriodCost>,
    /// Approved cost per period, oldest first.
    pub cost_by_period: Vec<PeriodCost>,
}

impl PayrollDashboard {
    /// Builds the dashboard from a pay run collection.
    pub fn from_pay_runs(pay_runs: &[PayRun]) -> Self {
        let mut pending = 0;
        let mut approved = 0;
        let mut rejected = 0;
        let mut by_period: BTreeMap<PayPeriod, (Decimal, Decimal)> = BTreeMap::new();

        for run in pay_runs {
            match run.state {
                ApprovalState::Pending => pending += 1,
                ApprovalState::Rejected => rejected += 1,
                ApprovalState::Approved => {
                    approved += 1;
                    let entry = by_period.entry(run.period).or_default();
                    entry.0 += run.total_payroll_cost;
                    entry.1 += run.total_payroll_deductions;
                }
            }
        }

        let cost_by_period: Vec<PeriodCost> = by_period
            .into_iter()
            .map(|(period, (cost, deductions))| PeriodCost {
                period,
                label: period.to_string(),
                total_payroll_cost: cost,
                total_payroll_deductions: deductions,
            })
            .collect();

        Self {
            pending,
            approved,
            rejected,
            total_payroll_cost: cost_by_period.iter().map(|c| c.total_payroll_cost).sum(),
            total_payroll_deductions: cost_by_period
                .iter()
                .map(|c| c.total_payroll_deductions)
                .sum(),
            latest: cost_by_period.last().cloned(),
            cost_by_period,
        }
    }
}
