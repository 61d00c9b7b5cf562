//! PhoneNumber value object.

use super::errors::ValidationError;
use std::fmt;

/// A phone number validated at construction time.
///
/// Accepts the loose formatting people actually type (digits plus spaces,
/// hyphens, parentheses, a leading `+`, periods). The messaging deep link
/// needs the bare digit form, which [`PhoneNumber::digits`] provides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the value is empty,
    /// contains no digit, or contains a character outside the accepted
    /// formatting set.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        let has_digit = phone.chars().any(|c| c.is_ascii_digit());
        let well_formed = phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '+' | '.'));

        if phone.is_empty() || !has_digit || !well_formed {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// The number as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The number reduced to its digits, as messaging deep links expect
    /// (no `+`, no separators).
    pub fn digits(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
