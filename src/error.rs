//! Error types for the pay run desk.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the desk surfaces to an operator: bad input, unmet
//! preconditions, approval conflicts and failed calls to the payroll API.

use thiserror::Error;

/// The main error type for the pay run desk.
///
/// # Example
///
/// ```
/// use payrun_desk::error::DeskError;
///
/// let error = DeskError::Validation("bad start day".to_string());
/// assert_eq!(error.to_string(), "Validation error: bad start day");
/// ```
#[derive(Debug, Error)]
pub enum DeskError {
    /// The candidate input was rejected before any network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// External state required by the operation is not satisfied.
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// The period already has an approved pay run.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A request to the payroll API failed or returned a non-2xx status.
    #[error("Network error{}: {message}", status_suffix(.status))]
    Network {
        /// The HTTP status, if a response was received.
        status: Option<u16>,
        /// A description of the failure.
        message: String,
    },

    /// The pay run cannot make the requested approval transition.
    #[error("Cannot {action} a pay run that is {from}")]
    InvalidTransition {
        /// The current approval state.
        from: String,
        /// The attempted action.
        action: String,
    },

    /// No pay run with the given id exists.
    #[error("Pay run not found: {pay_run_id}")]
    PayRunNotFound {
        /// The id that was looked up.
        pay_run_id: String,
    },

    /// The operator's role does not permit the action.
    #[error("Role '{role}' is not permitted to perform this action")]
    Forbidden {
        /// The operator's role.
        role: String,
    },

    /// No operator session is active.
    #[error("No active session")]
    Unauthenticated,

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The persisted session could not be read or written.
    #[error("Session storage error: {message}")]
    Session {
        /// A description of the storage failure.
        message: String,
    },
}

impl From<reqwest::Error> for DeskError {
    fn from(err: reqwest::Error) -> Self {
        DeskError::Network {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" ({s})")).unwrap_or_default()
}

/// A type alias for Results that return DeskError.
pub type DeskResult<T> = Result<T, DeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_displays_message() {
        let error = DeskError::Validation("missing date".to_string());
        assert_eq!(error.to_string(), "Validation error: missing date");
    }

    #[test]
    fn test_precondition_displays_message() {
        let error = DeskError::Precondition("no attendance".to_string());
        assert_eq!(error.to_string(), "Precondition failed: no attendance");
    }

    #[test]
    fn test_conflict_displays_message() {
        let error = DeskError::Conflict("already approved".to_string());
        assert_eq!(error.to_string(), "Conflict: already approved");
    }

    #[test]
    fn test_network_with_status() {
        let error = DeskError::Network {
            status: Some(503),
            message: "service unavailable".to_string(),
        };
        assert_eq!(error.to_string(), "Network error (503): service unavailable");
    }

    #[test]
    fn test_network_without_status() {
        let error = DeskError::Network {
            status: None,
            message: "connection refused".to_string(),
        };
        assert_eq!(error.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_invalid_transition_displays_states() {
        let error = DeskError::InvalidTransition {
            from: "pending".to_string(),
            action: "reject".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot reject a pay run that is pending");
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = DeskError::ConfigParseError {
            path: "/config/desk.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/desk.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<DeskError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_conflict() -> DeskResult<()> {
            Err(DeskError::Conflict("already approved".to_string()))
        }

        fn propagates_error() -> DeskResult<()> {
            returns_conflict()?;
            Ok(())
        }

        assert!(matches!(propagates_error(), Err(DeskError::Conflict(_))));
    }
}
