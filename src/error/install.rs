//! Package manager errors

use super::ReazyError;

/// Creates a package manager not found error
pub fn manager_not_found(manager: impl Into<String>) -> ReazyError {
    ReazyError::ManagerNotFound {
        manager: manager.into(),
    }
}

/// Creates an install failure error carrying the failed command line
pub fn failed(command: impl Into<String>, reason: impl ToString) -> ReazyError {
    ReazyError::InstallFailed {
        command: command.into(),
        reason: reason.to_string(),
    }
}
