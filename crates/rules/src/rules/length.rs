//! String length rules
//!
//! This module provides rules for checking string length constraints.
//! Length is measured in Unicode scalar values (chars).

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// MIN LENGTH
// ============================================================================

/// Validates that a string has at least a minimum length.
///
/// # Examples
///
/// ```rust,ignore
/// use quill_rules::rules::MinLength;
///
/// let rule = MinLength::new(5);
/// assert!(rule.validate("hello").is_ok());
/// assert!(rule.validate("hi").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinLength {
    /// Minimum required length (inclusive).
    pub min: usize,
}

impl MinLength {
    /// Creates a new minimum length rule.
    #[must_use]
    pub fn new(min: usize) -> Self {
        Self { min }
    }
}

impl Validate for MinLength {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let len = input.chars().count();
        if len >= self.min {
            Ok(())
        } else {
            Err(ValidationError::min_length(self.min, len))
        }
    }
}

/// Creates a minimum length rule.
#[must_use]
pub fn min_length(min: usize) -> MinLength {
    MinLength::new(min)
}

// ============================================================================
// MAX LENGTH
// ============================================================================

/// Validates that a string does not exceed a maximum length.
///
/// # Examples
///
/// ```rust,ignore
/// use quill_rules::rules::MaxLength;
///
/// let rule = MaxLength::new(10);
/// assert!(rule.validate("hello").is_ok());
/// assert!(rule.validate("verylongstring").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxLength {
    /// Maximum allowed length (inclusive).
    pub max: usize,
}

impl MaxLength {
    /// Creates a new maximum length rule.
    #[must_use]
    pub fn new(max: usize) -> Self {
        Self { max }
    }
}

impl Validate for MaxLength {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let len = input.chars().count();
        if len <= self.max {
            Ok(())
        } else {
            Err(ValidationError::max_length(self.max, len))
        }
    }
}

/// Creates a maximum length rule.
#[must_use]
pub fn max_length(max: usize) -> MaxLength {
    MaxLength::new(max)
}

// ============================================================================
// NOT EMPTY
// ============================================================================

/// Validates that a string is not empty.
///
/// This is equivalent to `MinLength::new(1)` but more semantic.
///
/// # Examples
///
/// ```rust,ignore
/// use quill_rules::rules::NotEmpty;
///
/// let rule = NotEmpty;
/// assert!(rule.validate("hello").is_ok());
/// assert!(rule.validate("").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotEmpty;

impl Validate for NotEmpty {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.is_empty() {
            Err(ValidationError::new("not_empty", "String must not be empty"))
        } else {
            Ok(())
        }
    }
}

/// Creates a not-empty rule.
#[must_use]
pub const fn not_empty() -> NotEmpty {
    NotEmpty
}

// ============================================================================
// TESTS
// ============================================================================
