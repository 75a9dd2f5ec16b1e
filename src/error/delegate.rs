//! Delegation errors

use super::ReazyError;

/// Creates a runtime not found error
pub fn runtime_not_found(runtime: impl Into<String>) -> ReazyError {
    ReazyError::RuntimeNotFound {
        runtime: runtime.into(),
    }
}

/// Creates an error for a delegate entry module that is not on disk
pub fn not_installed(path: impl Into<String>) -> ReazyError {
    ReazyError::DelegateNotInstalled { path: path.into() }
}

/// Creates an error for a delegate process that could not be started
pub fn failed(entry: impl Into<String>, reason: impl ToString) -> ReazyError {
    ReazyError::DelegateFailed {
        entry: entry.into(),
        reason: reason.to_string(),
    }
}
