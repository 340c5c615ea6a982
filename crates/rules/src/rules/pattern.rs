//! Character-class and case rules
//!
//! This module provides rules that classify every character of a string,
//! plus the whole-string case rules.

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// ALPHABETIC
// ============================================================================

/// Validates that a non-empty string contains only letters (any script).
///
/// # Examples
///
/// ```rust,ignore
/// use quill_rules::rules::Alphabetic;
///
/// let rule = Alphabetic::new();
/// assert!(rule.validate("héllo").is_ok());
/// assert!(rule.validate("hello123").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabetic {
    /// Whether to allow whitespace between letters.
    pub allow_spaces: bool,
}

impl Alphabetic {
    #[must_use]
    pub fn new() -> Self {
        Self {
            allow_spaces: false,
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_spaces(mut self) -> Self {
        self.allow_spaces = true;
        self
    }
}

impl Default for Alphabetic {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Alphabetic {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let is_valid = !input.is_empty()
            && input
                .chars()
                .all(|c| c.is_alphabetic() || (self.allow_spaces && c.is_whitespace()));

        if is_valid {
            Ok(())
        } else {
            Err(ValidationError::new(
                "alphabetic",
                "String must contain only letters",
            ))
        }
    }
}

#[must_use]
pub fn alphabetic() -> Alphabetic {
    Alphabetic::new()
}

// ============================================================================
// LATIN ALPHABETIC
// ============================================================================

/// Validates that a non-empty string contains only ASCII letters `[A-Za-z]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LatinAlphabetic {
    /// Whether to allow whitespace between letters.
    pub allow_spaces: bool,
}

impl LatinAlphabetic {
    #[must_use]
    pub fn new() -> Self {
        Self {
            allow_spaces: false,
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_spaces(mut self) -> Self {
        self.allow_spaces = true;
        self
    }
}

impl Default for LatinAlphabetic {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for LatinAlphabetic {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let is_valid = !input.is_empty()
            && input
                .chars()
                .all(|c| c.is_ascii_alphabetic() || (self.allow_spaces && c.is_whitespace()));

        if is_valid {
            Ok(())
        } else {
            Err(ValidationError::new(
                "latin_alphabetic",
                "String must contain only latin letters",
            ))
        }
    }
}

#[must_use]
pub fn latin_alphabetic() -> LatinAlphabetic {
    LatinAlphabetic::new()
}

// ============================================================================
// ALPHANUMERIC
// ============================================================================

/// Validates that a non-empty string contains only ASCII letters and digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphanumeric;

impl Validate for Alphanumeric {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if !input.is_empty() && input.chars().all(|c| c.is_ascii_alphanumeric()) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "alphanumeric",
                "String must contain only letters and numbers",
            ))
        }
    }
}

#[must_use]
pub const fn alphanumeric() -> Alphanumeric {
    Alphanumeric
}

// ============================================================================
// DIGITS
// ============================================================================

/// Validates that a non-empty string contains only ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digits;

impl Validate for Digits {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "digits",
                "String must contain only digits",
            ))
        }
    }
}

#[must_use]
pub const fn digits() -> Digits {
    Digits
}

// ============================================================================
// LOWERCASE / UPPERCASE
// ============================================================================

/// Validates that a string equals its lowercase transform.
///
/// The empty string passes; a string with no letters passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lowercase;

impl Validate for Lowercase {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input == input.to_lowercase() {
            Ok(())
        } else {
            Err(ValidationError::new(
                "lowercase",
                "String must be lowercase",
            ))
        }
    }
}

#[must_use]
pub const fn lowercase() -> Lowercase {
    Lowercase
}

/// Validates that a string equals its uppercase transform.
///
/// The empty string passes; a string with no letters passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uppercase;

impl Validate for Uppercase {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input == input.to_uppercase() {
            Ok(())
        } else {
            Err(ValidationError::new(
                "uppercase",
                "String must be uppercase",
            ))
        }
    }
}

#[must_use]
pub const fn uppercase() -> Uppercase {
    Uppercase
}

// ============================================================================
// TESTS
// ============================================================================
