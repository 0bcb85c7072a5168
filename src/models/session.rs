//! Operator session models.

use serde::{Deserialize, Serialize};

/// The role of the operator using the desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full administrative access, including rejecting approved pay runs.
    Admin,
    /// Processes and approves pay runs.
    PayrollOfficer,
    /// Read-only staff access.
    Employee,
}

impl Role {
    /// Returns true if this role may reject an approved pay run.
    pub fn can_reject(self) -> bool {
        self == Role::Admin
    }

    /// Returns the snake_case role name.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::PayrollOfficer => "payroll_officer",
            Role::Employee => "employee",
        }
    }
}

/// The authenticated user of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// User identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The user's role.
    pub role: Role,
}

/// An operator session: the API token and the user it belongs to.
///
/// # Example
///
/// ```
/// use payrun_desk::models::{Role, Session, SessionUser};
///
/// let session = Session {
///     token: "tok_abc".to_string(),
///     user: SessionUser {
///         id: "u_1".to_string(),
///         name: "Dana".to_string(),
///         role: Role::Admin,
///     },
/// };
/// assert!(session.user.role.can_reject());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token for the payroll API.
    pub token: String,
    /// The logged-in user.
    pub user: SessionUser,
}
