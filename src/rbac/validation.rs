//! Input checks shared by the facade operations

use crate::utils::error::{RbacError, Result};

/// Reject an empty or whitespace-only identifier
pub(super) fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RbacError::validation(format!("miss parameter[{}]", field)));
    }
    Ok(())
}

/// Reject a list containing an empty name
pub(super) fn require_each<S: AsRef<str>>(field: &str, values: &[S]) -> Result<()> {
    if values.iter().any(|value| value.as_ref().trim().is_empty()) {
        return Err(RbacError::validation(format!(
            "parameter[{}] contains an empty name",
            field
        )));
    }
    Ok(())
}
