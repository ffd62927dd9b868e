//! Config validation for values that end up inside SQL text.

use crate::error::ConfigError;

/// Identifiers are interpolated (quoted) into DDL/DML, so only `[A-Za-z_][A-Za-z0-9_]*` up to 63 bytes is accepted.
pub fn validate_identifier(key: &'static str, value: &str) -> Result<(), ConfigError> {
    let mut chars = value.chars();
    let starts_ok = chars
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_')
        .unwrap_or(false);
    let rest_ok = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !starts_ok || !rest_ok || value.len() > 63 {
        return Err(ConfigError::Validation(format!(
            "{} must be a plain identifier, got '{}'",
            key, value
        )));
    }
    Ok(())
}
