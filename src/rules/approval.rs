//! Pay run approval state machine.
//!
//! ```text
//! Pending --approve--> Approved --reject--> Rejected
//! ```
//!
//! No transition leads back to `Pending`, and a pending pay run cannot be
//! rejected directly.

use crate::error::{DeskError, DeskResult};
use crate::models::ApprovalState;

impl ApprovalState {
    /// Moves a pending pay run to `Approved`.
    ///
    /// The duplicate-approval guard is not part of the transition; callers
    /// run [`crate::rules::ensure_not_approved`] before submitting.
    ///
    /// # Example
    ///
    /// ```
    /// use payrun_desk::models::ApprovalState;
    ///
    /// assert_eq!(ApprovalState::Pending.approve().unwrap(), ApprovalState::Approved);
    /// assert!(ApprovalState::Rejected.approve().is_err());
    /// ```
    pub fn approve(self) -> DeskResult<ApprovalState> {
        match self {
            ApprovalState::Pending => Ok(ApprovalState::Approved),
            other => Err(invalid_transition(other, "approve")),
        }
    }

    /// Moves an approved pay run to `Rejected`.
    pub fn reject(self) -> DeskResult<ApprovalState> {
        match self {
            ApprovalState::Approved => Ok(ApprovalState::Rejected),
            other => Err(invalid_transition(other, "reject")),
        }
    }
}

fn invalid_transition(from: ApprovalState, action: &str) -> DeskError {
    DeskError::InvalidTransition {
        from: from.to_string(),
        action: action.to_string(),
    }
}
