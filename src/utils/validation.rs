use crate::utils::error::{Result, VaultError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Request-field check: present and non-blank, or `BadRequest`.
pub fn require_field(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(VaultError::bad_request(format!(
            "missing required field: {}",
            field_name
        )));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(VaultError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
