//! Input validation for sign-in and profile fields.

use std::fmt;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Invalid email format.
    InvalidEmail(String),
    /// Value too long.
    TooLong { field: String, max: usize, actual: usize },
    /// Empty value where one is required.
    Empty(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidEmail(msg) => write!(f, "Invalid email: {}", msg),
            ValidationError::TooLong { field, max, actual } => {
                write!(f, "{} is too long ({} chars, max {})", field, actual, max)
            }
            ValidationError::Empty(field) => write!(f, "{} is required", field),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Maximum allowed length for email addresses.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum allowed length for usernames.
pub const MAX_USERNAME_LENGTH: usize = 32;

/// Maximum allowed length for the profile bio.
pub const MAX_BIO_LENGTH: usize = 280;

/// Validate an email address (basic shape check).
///
/// Checks for exactly one `@` with text on both sides and a dot in the
/// domain part.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Empty("Email".to_string()));
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::TooLong {
            field: "Email".to_string(),
            max: MAX_EMAIL_LENGTH,
            actual: email.len(),
        });
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ValidationError::InvalidEmail(
            "must contain exactly one @".to_string(),
        ));
    };

    if local.is_empty() {
        return Err(ValidationError::InvalidEmail(
            "missing name before @".to_string(),
        ));
    }

    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(ValidationError::InvalidEmail(
            "domain must contain a dot".to_string(),
        ));
    }

    Ok(())
}

/// Validate a username.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let username = username.trim();

    if username.is_empty() {
        return Err(ValidationError::Empty("Username".to_string()));
    }

    let chars = username.chars().count();
    if chars > MAX_USERNAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "Username".to_string(),
            max: MAX_USERNAME_LENGTH,
            actual: chars,
        });
    }

    Ok(())
}

/// Validate a profile bio.
pub fn validate_bio(bio: &str) -> Result<(), ValidationError> {
    let chars = bio.chars().count();
    if chars > MAX_BIO_LENGTH {
        return Err(ValidationError::TooLong {
            field: "Bio".to_string(),
            max: MAX_BIO_LENGTH,
            actual: chars,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("priya@example.com").is_ok());
        assert!(validate_email("  a.b+trips@mail.co.in ").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(
            validate_email(""),
            Err(ValidationError::Empty("Email".to_string()))
        );
        assert!(matches!(validate_email("no-at-sign"), Err(ValidationError::InvalidEmail(_))));
        assert!(matches!(validate_email("a@@b.com"), Err(ValidationError::InvalidEmail(_))));
        assert!(matches!(validate_email("@b.com"), Err(ValidationError::InvalidEmail(_))));
        assert!(matches!(validate_email("a@localhost"), Err(ValidationError::InvalidEmail(_))));
    }

    #[test]
    fn test_username_required() {
        let err = validate_username("   ").unwrap_err();
        assert_eq!(err.to_string(), "Username is required");
        assert!(validate_username("wanderer").is_ok());
    }

    #[test]
    fn test_bio_length() {
        assert!(validate_bio(&"x".repeat(MAX_BIO_LENGTH)).is_ok());
        assert!(matches!(
            validate_bio(&"x".repeat(MAX_BIO_LENGTH + 1)),
            Err(ValidationError::TooLong { .. })
        ));
    }
}
