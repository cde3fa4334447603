//! Shared field validation helpers.
//!
//! Domain modules wrap these with their own constant lists so error messages
//! name the offending field and the accepted values.

use crate::error::CoreError;

/// Validate that `value` is one of `allowed`.
pub fn validate_one_of(field: &str, value: &str, allowed: &[&str]) -> Result<(), CoreError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid {field} '{value}'. Must be one of: {}",
            allowed.join(", ")
        )))
    }
}

/// Validate that a required text field is not empty or whitespace.
pub fn validate_required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validate an optional text field: when present it must not be blank.
pub fn validate_optional(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) => validate_required(field, v),
        None => Ok(()),
    }
}

/// Minimal email shape check: one `@` with text on both sides.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    let mut parts = email.split('@');
    let valid = matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty()
    );
    if valid {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("Invalid email '{email}'")))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn one_of_lists_allowed_values() {
        let err = validate_one_of("color", "teal", &["red", "blue"]).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("red, blue"));
    }

    #[test]
    fn blank_required_field_rejected() {
        assert!(validate_required("name", "   ").is_err());
        assert!(validate_required("name", "Gym").is_ok());
    }

    #[test]
    fn optional_field_only_checked_when_present() {
        assert!(validate_optional("phone", None).is_ok());
        assert!(validate_optional("phone", Some("")).is_err());
    }

    #[test]
    fn email_shapes() {
        assert!(validate_email("resident@apt.com").is_ok());
        assert!(validate_email("resident").is_err());
        assert!(validate_email("@apt.com").is_err());
        assert!(validate_email("a@b@c").is_err());
    }
}
