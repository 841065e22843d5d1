//! Custom validation functions shared across configuration fields.

use std::path::PathBuf;

use validator::ValidationError;

/// Validate that an optional pattern file, if given, actually exists.
/// An absent file is always valid — it simply means no file-sourced
/// patterns are configured.
pub fn validate_pattern_file(path: &Option<PathBuf>) -> Result<(), ValidationError> {
    match path {
        Some(p) if !p.exists() => Err(ValidationError::new("pattern_file_not_found")),
        _ => Ok(()),
    }
}
