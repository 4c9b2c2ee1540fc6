//! Shared rules for human-entered names
//!
//! Both the login identifier and the display name are free text with the
//! same shape constraints: NFKC-normalized, trimmed, non-empty, bounded by
//! the `VARCHAR(255)` column, no control characters.

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Maximum length of a stored name (in characters)
pub const NAME_MAX_LENGTH: usize = 255;

/// Error returned when name validation fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("{field} is too long ({length} chars, maximum {max})")]
    TooLong {
        field: &'static str,
        length: usize,
        max: usize,
    },

    #[error("{field} cannot contain control characters")]
    InvalidCharacter { field: &'static str },
}

/// Normalize (NFKC, trim) and validate a name
pub(crate) fn normalize_name(field: &'static str, input: &str) -> Result<String, NameError> {
    let normalized = input.nfkc().collect::<String>().trim().to_string();

    if normalized.is_empty() {
        return Err(NameError::Empty { field });
    }

    let length = normalized.chars().count();
    if length > NAME_MAX_LENGTH {
        return Err(NameError::TooLong {
            field,
            length,
            max: NAME_MAX_LENGTH,
        });
    }

    if normalized.chars().any(char::is_control) {
        return Err(NameError::InvalidCharacter { field });
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_normalizes() {
        assert_eq!(normalize_name("Name", "  alice ").unwrap(), "alice");
        // Fullwidth letters fold to ASCII
        assert_eq!(normalize_name("Name", "ａｌｉｃｅ").unwrap(), "alice");
    }

    #[test]
    fn test_empty() {
        assert_eq!(
            normalize_name("Name", "   "),
            Err(NameError::Empty { field: "Name" })
        );
    }

    #[test]
    fn test_too_long() {
        let long = "x".repeat(NAME_MAX_LENGTH + 1);
        assert!(matches!(
            normalize_name("Name", &long),
            Err(NameError::TooLong { length: 256, .. })
        ));
        assert!(normalize_name("Name", &"x".repeat(NAME_MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_control_character() {
        assert!(matches!(
            normalize_name("Name", "ali\u{0}ce"),
            Err(NameError::InvalidCharacter { .. })
        ));
    }

    #[test]
    fn test_error_message_names_field() {
        let err = normalize_name("Account name", "").unwrap_err();
        assert_eq!(err.to_string(), "Account name cannot be empty");
    }
}
