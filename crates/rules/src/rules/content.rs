//! Content rules
//!
//! Rules backed by regular expressions: email format plus the two
//! caller-supplied pattern shapes (whole-string match and search).

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// EMAIL
// ============================================================================

/// Validates email format.
///
/// Uses a simple but effective regex pattern, anchored to the whole string.
#[derive(Debug, Clone)]
pub struct Email {
    pattern: regex::Regex,
}

impl Email {
    #[must_use]
    pub fn new() -> Self {
        let pattern = regex::Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
        ).expect("hardcoded email regex pattern is valid");

        Self { pattern }
    }
}

impl Default for Email {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Email {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.pattern.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::invalid_format("email"))
        }
    }
}

/// Creates an email rule.
#[must_use]
pub fn email() -> Email {
    Email::new()
}

// ============================================================================
// MATCHES REGEX (whole string)
// ============================================================================

/// Validates that a string matches a regular expression in its entirety.
///
/// The pattern is anchored at compile time, so `"\d{4}"` accepts `"1234"`
/// but rejects `"x1234"`.
///
/// # Examples
///
/// ```rust,ignore
/// use quill_rules::rules::MatchesRegex;
///
/// let rule = MatchesRegex::new(r"\d{3}-\d{4}").unwrap();
/// assert!(rule.validate("123-4567").is_ok());
/// assert!(rule.validate("tel: 123-4567").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MatchesRegex {
    pattern: regex::Regex,
    source: String,
}

impl MatchesRegex {
    /// Compiles a whole-string matcher from `pattern`.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`regex::Error`] when the pattern does not
    /// compile.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        // Anchor the caller's pattern so a match must span the whole input.
        let anchored = format!(r"\A(?:{pattern})\z");
        Ok(Self {
            pattern: regex::Regex::new(&anchored)?,
            source: pattern.to_string(),
        })
    }

    /// The pattern string this rule was built from (without anchors).
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Validate for MatchesRegex {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.pattern.is_match(input) {
            Ok(())
        } else {
            Err(
                ValidationError::new("regex", "String must match pattern")
                    .with_param("pattern", self.source.clone()),
            )
        }
    }
}

/// Creates a whole-string regex rule.
///
/// # Errors
///
/// Returns the underlying [`regex::Error`] when the pattern does not compile.
pub fn matches_regex(pattern: &str) -> Result<MatchesRegex, regex::Error> {
    MatchesRegex::new(pattern)
}

// ============================================================================
// CONTAINS MATCH (search)
// ============================================================================

/// Validates that a regular expression matches somewhere in the string.
///
/// Unlike [`MatchesRegex`] the pattern is not anchored; any partial match
/// passes.
#[derive(Debug, Clone)]
pub struct ContainsMatch {
    pattern: regex::Regex,
}

impl ContainsMatch {
    /// Compiles a search matcher from `pattern`.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`regex::Error`] when the pattern does not
    /// compile.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
        })
    }

    /// The pattern string this rule was built from.
    #[must_use]
    pub fn source(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Validate for ContainsMatch {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.pattern.is_match(input) {
            Ok(())
        } else {
            Err(
                ValidationError::new("regex_search", "String must contain a pattern match")
                    .with_param("pattern", self.pattern.as_str().to_string()),
            )
        }
    }
}

/// Creates a search regex rule.
///
/// # Errors
///
/// Returns the underlying [`regex::Error`] when the pattern does not compile.
pub fn contains_match(pattern: &str) -> Result<ContainsMatch, regex::Error> {
    ContainsMatch::new(pattern)
}

// ============================================================================
// TESTS
// ============================================================================
