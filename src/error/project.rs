//! Project scaffolding errors

use super::ReazyError;

/// Creates an invalid project name error
pub fn invalid_name(name: impl Into<String>) -> ReazyError {
    ReazyError::InvalidProjectName { name: name.into() }
}

/// Creates a reserved project name error
pub fn reserved_name(name: impl Into<String>) -> ReazyError {
    ReazyError::ReservedProjectName { name: name.into() }
}

/// Creates a manifest write error
pub fn manifest_write_failed(path: impl Into<String>, reason: impl ToString) -> ReazyError {
    ReazyError::ManifestWriteFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates a manifest read error
pub fn manifest_read_failed(path: impl Into<String>, reason: impl ToString) -> ReazyError {
    ReazyError::ManifestReadFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}
