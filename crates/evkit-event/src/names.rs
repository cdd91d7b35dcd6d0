//! Event name validation for registries.
//!
//! Events themselves accept any name. Registries that key prototypes by name
//! use these rules so that names stay usable as subscription targets:
//!
//! - Surrounding whitespace is ignored
//! - Must be non-empty
//! - Must start with an ASCII letter
//! - Remaining characters are ASCII letters, digits, `_`, `-`, `.` or `*`

use crate::error::{EventError, Result};

/// Punctuation allowed after the first character.
const ALLOWED_PUNCT: &[char] = &['_', '-', '.', '*'];

/// Trim surrounding whitespace from a name.
pub fn normalize_event_name(name: &str) -> String {
    name.trim().to_string()
}

/// Validate an event name, returning `Ok(())` if a registry may store it.
///
/// # Examples
///
/// ```
/// use evkit_event::names::validate_event_name;
///
/// assert!(validate_event_name("order.created").is_ok());
/// assert!(validate_event_name("  app.init  ").is_ok());
/// assert!(validate_event_name("").is_err());
/// assert!(validate_event_name("1st.event").is_err());
/// ```
pub fn validate_event_name(name: &str) -> Result<()> {
    let trimmed = name.trim();

    let mut chars = trimmed.chars();
    let Some(first) = chars.next() else {
        return Err(EventError::InvalidName {
            name: name.to_string(),
            reason: "event name must not be empty".into(),
        });
    };

    if !first.is_ascii_alphabetic() {
        return Err(EventError::InvalidName {
            name: name.to_string(),
            reason: format!("must start with an ASCII letter, found {first:?}"),
        });
    }

    if let Some(bad) = chars.find(|c| !c.is_ascii_alphanumeric() && !ALLOWED_PUNCT.contains(c)) {
        return Err(EventError::InvalidName {
            name: name.to_string(),
            reason: format!("contains forbidden character: {bad:?}"),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(validate_event_name("a").is_ok());
        assert!(validate_event_name("order.created").is_ok());
        assert!(validate_event_name("user_login-v2").is_ok());
        assert!(validate_event_name("app.*").is_ok());
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(validate_event_name("  app.init\t").is_ok());
        assert_eq!(normalize_event_name("  app.init\t"), "app.init");
    }

    #[test]
    fn reject_empty_and_blank() {
        assert!(validate_event_name("").is_err());
        assert!(validate_event_name("   ").is_err());
    }

    #[test]
    fn reject_bad_first_char() {
        assert!(validate_event_name("1order").is_err());
        assert!(validate_event_name(".order").is_err());
        assert!(validate_event_name("*").is_err());
        assert!(validate_event_name("éclair").is_err());
    }

    #[test]
    fn reject_forbidden_chars() {
        assert!(validate_event_name("order created").is_err());
        assert!(validate_event_name("order/created").is_err());
        assert!(validate_event_name("order?").is_err());
        assert!(validate_event_name("order:created").is_err());
    }

    #[test]
    fn error_keeps_original_name() {
        match validate_event_name(" 9x ") {
            Err(EventError::InvalidName { name, .. }) => assert_eq!(name, " 9x "),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
