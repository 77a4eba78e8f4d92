//! Input validation shared by the HTTP handlers.
//!
//! Text fields are trimmed before any check; a value that is empty after
//! trimming is rejected before anything is written.

use crate::error::CoreError;

/// Maximum length of a habit, category, goal, or sub-task name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length of a journal entry in characters.
pub const MAX_JOURNAL_CONTENT_LENGTH: usize = 20_000;

/// Minimum password length accepted at signup.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Trim `value` and reject it when empty or longer than `max_len` characters.
///
/// Returns the trimmed value on success.
pub fn require_text(field: &str, value: &str, max_len: usize) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} cannot be empty")));
    }
    if trimmed.chars().count() > max_len {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {max_len} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Shorthand for [`require_text`] with [`MAX_NAME_LENGTH`].
pub fn require_name(field: &str, value: &str) -> Result<String, CoreError> {
    require_text(field, value, MAX_NAME_LENGTH)
}

/// Validate an optional `#RRGGBB` color. Empty strings are treated as absent.
pub fn validate_color(color: Option<&str>) -> Result<Option<String>, CoreError> {
    let Some(raw) = color.map(str::trim).filter(|c| !c.is_empty()) else {
        return Ok(None);
    };
    let hex = raw.strip_prefix('#').unwrap_or("");
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CoreError::Validation(format!(
            "Invalid color '{raw}'. Expected #RRGGBB"
        )));
    }
    Ok(Some(raw.to_string()))
}

/// Normalize and validate an email address (trimmed, lowercased, one `@`
/// with text on both sides).
pub fn normalize_email(email: &str) -> Result<String, CoreError> {
    let normalized = email.trim().to_lowercase();
    match normalized.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(normalized)
        }
        _ => Err(CoreError::Validation(format!("Invalid email address '{email}'"))),
    }
}

/// Reject passwords shorter than [`MIN_PASSWORD_LENGTH`].
pub fn validate_password(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn require_text_trims() {
        assert_eq!(require_name("name", "  Read  ").unwrap(), "Read");
    }

    #[test]
    fn require_text_rejects_whitespace_only() {
        assert_matches!(require_name("name", " \t\n "), Err(CoreError::Validation(msg)) if msg == "name cannot be empty");
    }

    #[test]
    fn require_text_rejects_too_long() {
        let long = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(require_name("title", &long).is_err());
    }

    #[test]
    fn color_accepts_hex_and_blank() {
        assert_eq!(validate_color(Some("#1a2B3c")).unwrap().as_deref(), Some("#1a2B3c"));
        assert_eq!(validate_color(Some("  ")).unwrap(), None);
        assert_eq!(validate_color(None).unwrap(), None);
    }

    #[test]
    fn color_rejects_bad_values() {
        assert!(validate_color(Some("red")).is_err());
        assert!(validate_color(Some("#12345")).is_err());
        assert!(validate_color(Some("#12345G")).is_err());
    }

    #[test]
    fn email_is_normalized() {
        assert_eq!(normalize_email("  Ada@Example.COM ").unwrap(), "ada@example.com");
        assert!(normalize_email("no-at-sign").is_err());
        assert!(normalize_email("@example.com").is_err());
        assert!(normalize_email("a@b@c").is_err());
    }

    #[test]
    fn password_minimum_length() {
        assert!(validate_password("short").is_err());
        assert!(validate_password("eight ch").is_ok());
    }
}
