//! Domain validation errors.

use std::fmt;

/// Errors raised when a configuration value fails domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided email address is malformed.
    InvalidEmail(String),

    /// The provided phone number is malformed.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail(email) => write!(f, "invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(f, "invalid phone number: {}", phone),
        }
    }
}

impl std::error::Error for ValidationError {}
