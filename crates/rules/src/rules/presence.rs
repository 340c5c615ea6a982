//! Presence rules
//!
//! Rules that require at least one character of a given class anywhere in
//! the string. The empty string fails all of them.

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// HAS LOWERCASE
// ============================================================================

/// Validates that a string contains at least one character in `[a-z]`.
///
/// # Examples
///
/// ```rust,ignore
/// use quill_rules::rules::HasLowercase;
///
/// let rule = HasLowercase;
/// assert!(rule.validate("Hello").is_ok());
/// assert!(rule.validate("HELLO").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HasLowercase;

impl Validate for HasLowercase {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.chars().any(|c| c.is_ascii_lowercase()) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "has_lowercase",
                "String must contain at least one lowercase letter",
            ))
        }
    }
}

/// Creates a has-lowercase rule.
#[must_use]
pub const fn has_lowercase() -> HasLowercase {
    HasLowercase
}

// ============================================================================
// HAS UPPERCASE
// ============================================================================

/// Validates that a string contains at least one character in `[A-Z]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HasUppercase;

impl Validate for HasUppercase {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.chars().any(|c| c.is_ascii_uppercase()) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "has_uppercase",
                "String must contain at least one uppercase letter",
            ))
        }
    }
}

/// Creates a has-uppercase rule.
#[must_use]
pub const fn has_uppercase() -> HasUppercase {
    HasUppercase
}

// ============================================================================
// HAS DIGIT
// ============================================================================

/// Validates that a string contains at least one ASCII digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HasDigit;

impl Validate for HasDigit {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.chars().any(|c| c.is_ascii_digit()) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "has_digit",
                "String must contain at least one digit",
            ))
        }
    }
}

/// Creates a has-digit rule.
#[must_use]
pub const fn has_digit() -> HasDigit {
    HasDigit
}

// ============================================================================
// HAS SPECIAL CHARACTER
// ============================================================================

/// Validates that a string contains at least one character outside
/// `[A-Za-z0-9]` and whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HasSpecialCharacter;

impl Validate for HasSpecialCharacter {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input
            .chars()
            .any(|c| !c.is_ascii_alphanumeric() && !c.is_whitespace())
        {
            Ok(())
        } else {
            Err(ValidationError::new(
                "has_special_character",
                "String must contain at least one special character",
            ))
        }
    }
}

/// Creates a has-special-character rule.
#[must_use]
pub const fn has_special_character() -> HasSpecialCharacter {
    HasSpecialCharacter
}

// ============================================================================
// HAS LETTER
// ============================================================================

/// Validates that a string contains at least one character in `[A-Za-z]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HasLetter;

impl Validate for HasLetter {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.chars().any(|c| c.is_ascii_alphabetic()) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "has_letter",
                "String must contain at least one letter",
            ))
        }
    }
}

/// Creates a has-letter rule.
#[must_use]
pub const fn has_letter() -> HasLetter {
    HasLetter
}

// ============================================================================
// TESTS
// ============================================================================
