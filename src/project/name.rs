//! Project name validation

use crate::error::{Result, project};

/// Name a project may never take
pub const RESERVED_NAME: &str = "React";

/// Check `name` is an identifier (`[A-Za-z_$][A-Za-z0-9_$]*`) and not reserved
pub fn validate(name: &str) -> Result<()> {
    if !is_identifier(name) {
        return Err(project::invalid_name(name));
    }
    if name == RESERVED_NAME {
        return Err(project::reserved_name(name));
    }
    Ok(())
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
