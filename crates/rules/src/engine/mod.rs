//! The rule-evaluation engine
//!
//! An engine owns a [`RuleConfig`] and evaluates input against a
//! caller-chosen subset of the built-in rules. Evaluation walks
//! [`RuleId::ALL`] in declaration order and stops at the first enabled
//! rule whose predicate rejects the input, returning that rule's
//! configured message.
//!
//! # Examples
//!
//! ```rust,ignore
//! use quill_rules::engine::{Outcome, RuleEngine, RuleId};
//!
//! let engine = RuleEngine::default();
//! let outcome = engine.evaluate("", &[RuleId::NotEmpty]);
//! assert_eq!(outcome.message(), Some("Cannot be empty"));
//! ```

mod config;
mod id;

pub use config::{ConfigError, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, RuleConfig};
pub use id::RuleId;

use crate::foundation::Validate;
use crate::rules::{
    Alphabetic, Alphanumeric, Digits, Email, HasDigit, HasLetter, HasLowercase,
    HasSpecialCharacter, HasUppercase, LatinAlphabetic, Lowercase, MaxLength, MinLength, NotEmpty,
    Uppercase,
};

// ============================================================================
// OUTCOME
// ============================================================================

/// Result of evaluating a string against an enabled rule set.
///
/// Carries at most one failure: the first enabled rule in priority order
/// whose predicate rejected the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every enabled, applicable rule passed.
    Valid,
    /// A rule rejected the input.
    Invalid {
        /// The rule that rejected the input.
        rule: RuleId,
        /// That rule's configured message at evaluation time.
        message: String,
    },
}

impl Outcome {
    /// True when every enabled rule passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }

    /// The failing rule, if any.
    #[must_use]
    pub fn rule(&self) -> Option<RuleId> {
        match self {
            Outcome::Valid => None,
            Outcome::Invalid { rule, .. } => Some(*rule),
        }
    }

    /// The failure message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Valid => None,
            Outcome::Invalid { message, .. } => Some(message),
        }
    }
}

// ============================================================================
// RULE ENGINE
// ============================================================================

/// Evaluates strings against the built-in rule table.
///
/// The engine is cheap to construct; the one regex it owns (the email
/// pattern) is compiled once in [`new`](Self::new). Evaluation is pure:
/// no state changes, no I/O.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    config: RuleConfig,
    email: Email,
}

impl RuleEngine {
    /// Creates an engine around `config`.
    #[must_use]
    pub fn new(config: RuleConfig) -> Self {
        Self {
            config,
            email: Email::new(),
        }
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Mutable access to the engine's configuration.
    pub fn config_mut(&mut self) -> &mut RuleConfig {
        &mut self.config
    }

    /// Replaces the configuration wholesale.
    pub fn set_config(&mut self, config: RuleConfig) {
        self.config = config;
    }

    /// Evaluates `value` against the rules named in `enabled`.
    ///
    /// Rules run in the fixed priority order of [`RuleId::ALL`]; the order
    /// and duplicates of `enabled` are irrelevant. The first enabled rule
    /// whose predicate rejects `value` produces [`Outcome::Invalid`] with
    /// that rule's configured message. An auxiliary-pattern rule with no
    /// configured pattern is skipped even when enabled. An empty `enabled`
    /// set always yields [`Outcome::Valid`].
    #[must_use]
    pub fn evaluate(&self, value: &str, enabled: &[RuleId]) -> Outcome {
        for id in RuleId::ALL {
            if !enabled.contains(&id) {
                continue;
            }
            if self.passes(id, value) {
                continue;
            }
            return Outcome::Invalid {
                rule: id,
                message: self.config.message(id),
            };
        }
        Outcome::Valid
    }

    /// Runs a single rule's predicate against `value`.
    ///
    /// Auxiliary-pattern rules with no configured pattern report `true`
    /// (skipped).
    #[must_use]
    pub fn passes(&self, id: RuleId, value: &str) -> bool {
        match id {
            RuleId::NotEmpty => NotEmpty.validate(value).is_ok(),
            RuleId::Email => self.email.validate(value).is_ok(),
            RuleId::OnlyLetters => Alphabetic::new().validate(value).is_ok(),
            RuleId::OnlyLettersWithSpaces => {
                Alphabetic::new().with_spaces().validate(value).is_ok()
            }
            RuleId::OnlyLatinLetters => LatinAlphabetic::new().validate(value).is_ok(),
            RuleId::OnlyLatinLettersWithSpaces => {
                LatinAlphabetic::new().with_spaces().validate(value).is_ok()
            }
            RuleId::Alphanumeric => Alphanumeric.validate(value).is_ok(),
            RuleId::OnlyDigits => Digits.validate(value).is_ok(),
            RuleId::MaxLength => MaxLength::new(self.config.max_length())
                .validate(value)
                .is_ok(),
            RuleId::MinLength => MinLength::new(self.config.min_length())
                .validate(value)
                .is_ok(),
            RuleId::AllLowercase => Lowercase.validate(value).is_ok(),
            RuleId::AllUppercase => Uppercase.validate(value).is_ok(),
            RuleId::AtLeastOneLowercase => HasLowercase.validate(value).is_ok(),
            RuleId::AtLeastOneUppercase => HasUppercase.validate(value).is_ok(),
            RuleId::AtLeastOneDigit => HasDigit.validate(value).is_ok(),
            RuleId::AtLeastOneSpecialCharacter => HasSpecialCharacter.validate(value).is_ok(),
            RuleId::AtLeastOneLetter => HasLetter.validate(value).is_ok(),
            RuleId::ValidPostalCode => self
                .config
                .postal_code()
                .is_none_or(|rule| rule.validate(value).is_ok()),
            RuleId::OnlyCustomRegex => self
                .config
                .only_custom()
                .is_none_or(|rule| rule.validate(value).is_ok()),
            RuleId::AtLeastOneCustomRegex => self
                .config
                .at_least_one()
                .is_none_or(|rule| rule.validate(value).is_ok()),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(RuleConfig::new())
    }
}

// ============================================================================
// TESTS
// ============================================================================
