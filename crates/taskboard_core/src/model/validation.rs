//! Input validation shared by model constructors.
//!
//! # Invariants
//! - Validation never mutates input; callers normalize first.
//! - Error values carry the offending field name, never secret values.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum accepted password length, counted in chars.
pub const MIN_PASSWORD_CHARS: usize = 6;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid color regex")
});

/// Validation error for user-supplied entity fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty after trimming.
    EmptyField(&'static str),
    /// Email does not look like `local@domain.tld`.
    InvalidEmail,
    /// Password shorter than [`MIN_PASSWORD_CHARS`].
    PasswordTooShort { min_chars: usize },
    /// Color is not a `#rgb` / `#rrggbb` hex value.
    InvalidColor(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "{field} must not be empty"),
            Self::InvalidEmail => write!(f, "email address is not valid"),
            Self::PasswordTooShort { min_chars } => {
                write!(f, "password must be at least {min_chars} characters")
            }
            Self::InvalidColor(value) => {
                write!(f, "color `{value}` must be a hex value like #3b82f6")
            }
        }
    }
}

impl Error for ValidationError {}

/// Trims `value` and rejects it when nothing is left.
pub fn require_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

/// Normalizes an email for storage and comparison: trimmed, ASCII lowercase.
pub fn normalize_email(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(ValidationError::PasswordTooShort {
            min_chars: MIN_PASSWORD_CHARS,
        });
    }
    Ok(())
}

/// Normalizes a color: trims, lowercases, and checks the hex shape.
pub fn normalize_color(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if !COLOR_RE.is_match(trimmed) {
        return Err(ValidationError::InvalidColor(trimmed.to_string()));
    }
    Ok(trimmed.to_ascii_lowercase())
}
