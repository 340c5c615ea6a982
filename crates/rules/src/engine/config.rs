//! Engine configuration
//!
//! Per-rule error-message templates, the two length bounds, and the three
//! caller-supplied auxiliary patterns. Auxiliary patterns are compiled
//! eagerly, so a malformed pattern surfaces at configuration time rather
//! than mid-evaluation.

use std::borrow::Cow;

use thiserror::Error;

use super::RuleId;
use crate::rules::{ContainsMatch, MatchesRegex};

// ============================================================================
// CONFIG ERROR
// ============================================================================

/// Errors produced while configuring the engine.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A rule identifier string did not name a built-in rule.
    #[error("unknown rule identifier: {0}")]
    UnknownRule(String),

    /// A caller-supplied auxiliary pattern failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

// ============================================================================
// DEFAULTS
// ============================================================================

/// Default maximum length bound.
pub const DEFAULT_MAX_LENGTH: usize = 32;

/// Default minimum length bound.
pub const DEFAULT_MIN_LENGTH: usize = 3;

const fn default_message(id: RuleId) -> &'static str {
    match id {
        RuleId::NotEmpty => "Cannot be empty",
        RuleId::Email => "Invalid email address",
        RuleId::OnlyLetters
        | RuleId::OnlyLettersWithSpaces
        | RuleId::OnlyLatinLetters
        | RuleId::OnlyLatinLettersWithSpaces => "Please enter only letters",
        RuleId::Alphanumeric => "Please enter only letters or digits",
        RuleId::OnlyDigits => "Please enter only digits",
        RuleId::MaxLength => "Length should be less than or equal to ",
        RuleId::MinLength => "Length should be greater than or equal to ",
        RuleId::AllLowercase => "All letters should be in lower case",
        RuleId::AllUppercase => "All letters should be in upper case",
        RuleId::AtLeastOneLowercase => "At least one letter should be in lower case",
        RuleId::AtLeastOneUppercase => "At least one letter should be in upper case",
        RuleId::AtLeastOneDigit => "Should contain at least one digit",
        RuleId::AtLeastOneSpecialCharacter => "Should contain at least one special character",
        RuleId::AtLeastOneLetter => "Should contain at least one letter",
        RuleId::ValidPostalCode => "Invalid postal code",
        RuleId::OnlyCustomRegex => "Please enter only custom regex",
        RuleId::AtLeastOneCustomRegex => "At least one letter should be like custom regex",
    }
}

// ============================================================================
// RULE CONFIG
// ============================================================================

/// Configuration read by the engine on every evaluation.
///
/// Holds one error-message template per rule, the two length bounds, and
/// the three auxiliary patterns. Created with defaults; every piece is
/// individually overridable.
///
/// The length bounds are a single cell each: both the corresponding
/// predicate and the message formatter read the same value, and it changes
/// only through [`set_max_length`](Self::set_max_length) /
/// [`set_min_length`](Self::set_min_length) or construction. Checking a
/// value never mutates a bound.
///
/// # Examples
///
/// ```rust,ignore
/// use quill_rules::engine::{RuleConfig, RuleId};
///
/// let mut config = RuleConfig::new();
/// config.set_max_length(8);
/// config.set_message(RuleId::NotEmpty, "Required");
/// assert_eq!(config.message(RuleId::MaxLength), "Length should be less than or equal to 8");
/// ```
#[derive(Debug, Clone)]
pub struct RuleConfig {
    messages: [Cow<'static, str>; RuleId::COUNT],
    max_length: usize,
    min_length: usize,
    postal_code: Option<MatchesRegex>,
    only_custom: Option<MatchesRegex>,
    at_least_one: Option<ContainsMatch>,
}

impl RuleConfig {
    /// Creates a configuration with the default message table and bounds.
    #[must_use]
    pub fn new() -> Self {
        let mut messages: [Cow<'static, str>; RuleId::COUNT] =
            std::array::from_fn(|_| Cow::Borrowed(""));
        for id in RuleId::ALL {
            messages[id.index()] = Cow::Borrowed(default_message(id));
        }
        Self {
            messages,
            max_length: DEFAULT_MAX_LENGTH,
            min_length: DEFAULT_MIN_LENGTH,
            postal_code: None,
            only_custom: None,
            at_least_one: None,
        }
    }

    // ------------------------------------------------------------------
    // Messages
    // ------------------------------------------------------------------

    /// The message reported when `id` fails.
    ///
    /// For every rule except the two length rules this is the template
    /// verbatim. The length rules append the currently configured bound as
    /// a decimal integer.
    #[must_use]
    pub fn message(&self, id: RuleId) -> String {
        let template = &self.messages[id.index()];
        match id {
            RuleId::MaxLength => format!("{template}{}", self.max_length),
            RuleId::MinLength => format!("{template}{}", self.min_length),
            _ => template.clone().into_owned(),
        }
    }

    /// The raw message template for `id`, without bound formatting.
    #[must_use]
    pub fn message_template(&self, id: RuleId) -> &str {
        &self.messages[id.index()]
    }

    /// Replaces the message template for `id`.
    ///
    /// No validation is performed on the text.
    pub fn set_message(&mut self, id: RuleId, message: impl Into<Cow<'static, str>>) {
        self.messages[id.index()] = message.into();
    }

    // ------------------------------------------------------------------
    // Length bounds
    // ------------------------------------------------------------------

    /// The configured maximum length bound.
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Sets the maximum length bound.
    pub fn set_max_length(&mut self, max: usize) {
        self.max_length = max;
    }

    /// The configured minimum length bound.
    #[must_use]
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Sets the minimum length bound.
    pub fn set_min_length(&mut self, min: usize) {
        self.min_length = min;
    }

    // ------------------------------------------------------------------
    // Auxiliary patterns
    // ------------------------------------------------------------------

    /// Sets the postal-code pattern (whole-string match).
    ///
    /// An empty string clears the pattern; the rule is then skipped even
    /// when enabled.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pattern`] when the pattern does not compile;
    /// the previous pattern is left in place.
    pub fn set_postal_code_pattern(&mut self, pattern: &str) -> Result<(), ConfigError> {
        self.postal_code = compile_full(pattern)?;
        Ok(())
    }

    /// The compiled postal-code matcher, if one is configured.
    #[must_use]
    pub fn postal_code(&self) -> Option<&MatchesRegex> {
        self.postal_code.as_ref()
    }

    /// Sets the only-custom pattern (whole-string match).
    ///
    /// An empty string clears the pattern; the rule is then skipped even
    /// when enabled.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pattern`] when the pattern does not compile;
    /// the previous pattern is left in place.
    pub fn set_only_custom_pattern(&mut self, pattern: &str) -> Result<(), ConfigError> {
        self.only_custom = compile_full(pattern)?;
        Ok(())
    }

    /// The compiled only-custom matcher, if one is configured.
    #[must_use]
    pub fn only_custom(&self) -> Option<&MatchesRegex> {
        self.only_custom.as_ref()
    }

    /// Sets the at-least-one pattern (search, partial match).
    ///
    /// An empty string clears the pattern; the rule is then skipped even
    /// when enabled.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pattern`] when the pattern does not compile;
    /// the previous pattern is left in place.
    pub fn set_at_least_one_pattern(&mut self, pattern: &str) -> Result<(), ConfigError> {
        self.at_least_one = if pattern.is_empty() {
            None
        } else {
            Some(ContainsMatch::new(pattern)?)
        };
        Ok(())
    }

    /// The compiled at-least-one matcher, if one is configured.
    #[must_use]
    pub fn at_least_one(&self) -> Option<&ContainsMatch> {
        self.at_least_one.as_ref()
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn compile_full(pattern: &str) -> Result<Option<MatchesRegex>, ConfigError> {
    if pattern.is_empty() {
        Ok(None)
    } else {
        Ok(Some(MatchesRegex::new(pattern)?))
    }
}

// ============================================================================
// TESTS
// ============================================================================
