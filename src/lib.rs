//! Pay Run Desk
//!
//! This crate validates and approves payroll pay runs against the payroll
//! REST API: fixed 26th-to-25th pay periods, an attendance precondition, a
//! single approved pay run per period, and the approval state machine.

#![warn(missing_docs)]

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod rules;
pub mod session;
pub mod workflow;
