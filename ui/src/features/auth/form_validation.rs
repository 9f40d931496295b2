use std::sync::LazyLock;

use regex::Regex;

use crate::features::auth::types::FieldMarker;
use crate::services::errors::ValidationError;
use crate::services::host::{LoginPayload, RegisterPayload};

pub const MIN_IDENTIFIER_LEN: usize = 3;
pub const MIN_USERNAME_LEN: usize = 3;
pub const MAX_USERNAME_LEN: usize = 20;
pub const MIN_PASSWORD_LEN: usize = 6;

static USERNAME_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").ok());

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Field length as the browser reports it for an input value (UTF-16 code units)
pub fn input_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Letters, digits and underscore only
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_PATTERN
        .as_ref()
        .map_or(false, |re| re.is_match(username))
}

/// Deliberately permissive `local@domain.tld` shape check
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.as_ref().map_or(false, |re| re.is_match(email))
}

/// Validates the login form and builds the outbound payload.
/// The first violated rule wins.
pub fn validate_login_form(identifier: &str, password: &str) -> Result<LoginPayload, ValidationError> {
    let identifier = identifier.trim();

    if identifier.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    if input_length(identifier) < MIN_IDENTIFIER_LEN {
        return Err(ValidationError::IdentifierTooShort);
    }

    Ok(LoginPayload {
        email: identifier.to_string(),
        password: password.to_string(),
    })
}

/// Validates the register form and builds the outbound payload.
/// `confirm_password` only takes part in validation and is never sent.
pub fn validate_register_form(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<RegisterPayload, ValidationError> {
    let username = username.trim();
    let email = email.trim();

    if username.is_empty() || email.is_empty() || password.is_empty() || confirm_password.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    let username_len = input_length(username);
    if !(MIN_USERNAME_LEN..=MAX_USERNAME_LEN).contains(&username_len) {
        return Err(ValidationError::UsernameLength);
    }

    if !is_valid_username(username) {
        return Err(ValidationError::UsernameCharacters);
    }

    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    if input_length(password) < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }

    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(RegisterPayload {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Marker for the confirm-password field while the user types
pub fn password_match_marker(password: &str, confirm_password: &str) -> FieldMarker {
    if confirm_password.is_empty() {
        FieldMarker::None
    } else if password == confirm_password {
        FieldMarker::Success
    } else {
        FieldMarker::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        assert_eq!(
            validate_login_form("", "secret"),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_login_form("player", ""),
            Err(ValidationError::MissingFields)
        );
        // Whitespace-only identifiers count as empty
        assert_eq!(
            validate_login_form("   ", "secret"),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_login_identifier_too_short() {
        let err = validate_login_form("ab", "secret").unwrap_err();
        assert_eq!(err, ValidationError::IdentifierTooShort);
        assert_eq!(err.to_string(), "Please enter a valid email or username.");
    }

    #[test]
    fn test_login_accepts_username_or_email() {
        let payload = validate_login_form("  abc  ", "x").unwrap();
        assert_eq!(payload.email, "abc");
        assert_eq!(payload.password, "x");

        let payload = validate_login_form("someone@example.com", "hunter2").unwrap();
        assert_eq!(payload.email, "someone@example.com");
    }

    #[test]
    fn test_lengths_count_utf16_units() {
        assert_eq!(input_length("abc"), 3);
        assert_eq!(input_length("é"), 1);
        assert_eq!(input_length("😀"), 2);

        // A surrogate pair counts twice, like an input's value length
        let payload = validate_login_form("a😀", "pw").unwrap();
        assert_eq!(payload.email, "a😀");
        assert_eq!(
            validate_login_form("😀", "pw"),
            Err(ValidationError::IdentifierTooShort)
        );

        let payload = validate_register_form("valid_user1", "a@b.com", "😀😀😀", "😀😀😀").unwrap();
        assert_eq!(payload.password, "😀😀😀");
        assert_eq!(
            validate_register_form("valid_user1", "a@b.com", "😀😀", "😀😀"),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn test_register_rule_order() {
        assert_eq!(
            validate_register_form("", "a@b.com", "abcdef", "abcdef"),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_register_form("ab", "a@b.com", "abcdef", "abcdef"),
            Err(ValidationError::UsernameLength)
        );
        assert_eq!(
            validate_register_form("a".repeat(21).as_str(), "a@b.com", "abcdef", "abcdef"),
            Err(ValidationError::UsernameLength)
        );
        assert_eq!(
            validate_register_form("bad-name", "a@b.com", "abcdef", "abcdef"),
            Err(ValidationError::UsernameCharacters)
        );
        assert_eq!(
            validate_register_form("valid_user1", "not-an-email", "abcdef", "abcdef"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_register_form("valid_user1", "a@b.com", "abc", "abc"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(
            validate_register_form("valid_user1", "a@b.com", "abcdef", "abcdeg"),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_register_length_check_precedes_pattern_check() {
        // Both rules are violated; the length rule is reported
        assert_eq!(
            validate_register_form("a!", "a@b.com", "abcdef", "abcdef"),
            Err(ValidationError::UsernameLength)
        );
    }

    #[test]
    fn test_register_builds_payload_without_confirmation() {
        let payload =
            validate_register_form("valid_user1", "a@b.com", "abcdef", "abcdef").unwrap();
        assert_eq!(
            payload,
            RegisterPayload {
                username: "valid_user1".to_string(),
                email: "a@b.com".to_string(),
                password: "abcdef".to_string(),
            }
        );
    }

    #[test]
    fn test_username_bounds_are_inclusive() {
        assert!(validate_register_form("abc", "a@b.com", "abcdef", "abcdef").is_ok());
        assert!(validate_register_form(&"a".repeat(20), "a@b.com", "abcdef", "abcdef").is_ok());
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@@b.com"));
    }

    #[test]
    fn test_username_pattern() {
        assert!(is_valid_username("Player_One_99"));
        assert!(!is_valid_username("player one"));
        assert!(!is_valid_username("jóga"));
        assert!(!is_valid_username(""));
    }

    #[test]
    fn test_password_match_marker() {
        assert_eq!(password_match_marker("secret", ""), FieldMarker::None);
        assert_eq!(password_match_marker("", ""), FieldMarker::None);
        assert_eq!(password_match_marker("secret", "secret"), FieldMarker::Success);
        assert_eq!(password_match_marker("secret", "secre"), FieldMarker::Error);
    }
}
