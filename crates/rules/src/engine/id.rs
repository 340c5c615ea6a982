//! Rule identifiers
//!
//! A closed enumeration of every built-in check. Declaration order is the
//! evaluation priority order; the engine always walks [`RuleId::ALL`]
//! front to back.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

use super::ConfigError;

// ============================================================================
// RULE ID
// ============================================================================

/// Identifier of a built-in rule.
///
/// The variants are declared in evaluation priority order: when several
/// enabled rules reject an input, the reported failure is always the one
/// declared first here.
///
/// Identifiers serialize as kebab-case strings (`"not-empty"`,
/// `"at-least-one-digit"`, …) and parse back via [`FromStr`]; unknown
/// strings are rejected with [`ConfigError::UnknownRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    NotEmpty,
    Email,
    OnlyLetters,
    OnlyLettersWithSpaces,
    OnlyLatinLetters,
    OnlyLatinLettersWithSpaces,
    Alphanumeric,
    OnlyDigits,
    MaxLength,
    MinLength,
    AllLowercase,
    AllUppercase,
    AtLeastOneLowercase,
    AtLeastOneUppercase,
    AtLeastOneDigit,
    AtLeastOneSpecialCharacter,
    AtLeastOneLetter,
    ValidPostalCode,
    OnlyCustomRegex,
    AtLeastOneCustomRegex,
}

impl RuleId {
    /// Number of built-in rules.
    pub const COUNT: usize = 20;

    /// Every rule in evaluation priority order.
    pub const ALL: [RuleId; Self::COUNT] = [
        RuleId::NotEmpty,
        RuleId::Email,
        RuleId::OnlyLetters,
        RuleId::OnlyLettersWithSpaces,
        RuleId::OnlyLatinLetters,
        RuleId::OnlyLatinLettersWithSpaces,
        RuleId::Alphanumeric,
        RuleId::OnlyDigits,
        RuleId::MaxLength,
        RuleId::MinLength,
        RuleId::AllLowercase,
        RuleId::AllUppercase,
        RuleId::AtLeastOneLowercase,
        RuleId::AtLeastOneUppercase,
        RuleId::AtLeastOneDigit,
        RuleId::AtLeastOneSpecialCharacter,
        RuleId::AtLeastOneLetter,
        RuleId::ValidPostalCode,
        RuleId::OnlyCustomRegex,
        RuleId::AtLeastOneCustomRegex,
    ];

    /// The kebab-case identifier string for this rule.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleId::NotEmpty => "not-empty",
            RuleId::Email => "email",
            RuleId::OnlyLetters => "only-letters",
            RuleId::OnlyLettersWithSpaces => "only-letters-with-spaces",
            RuleId::OnlyLatinLetters => "only-latin-letters",
            RuleId::OnlyLatinLettersWithSpaces => "only-latin-letters-with-spaces",
            RuleId::Alphanumeric => "alphanumeric",
            RuleId::OnlyDigits => "only-digits",
            RuleId::MaxLength => "max-length",
            RuleId::MinLength => "min-length",
            RuleId::AllLowercase => "all-lowercase",
            RuleId::AllUppercase => "all-uppercase",
            RuleId::AtLeastOneLowercase => "at-least-one-lowercase",
            RuleId::AtLeastOneUppercase => "at-least-one-uppercase",
            RuleId::AtLeastOneDigit => "at-least-one-digit",
            RuleId::AtLeastOneSpecialCharacter => "at-least-one-special-character",
            RuleId::AtLeastOneLetter => "at-least-one-letter",
            RuleId::ValidPostalCode => "valid-postal-code",
            RuleId::OnlyCustomRegex => "only-custom-regex",
            RuleId::AtLeastOneCustomRegex => "at-least-one-custom-regex",
        }
    }

    /// Position of this rule in the priority order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownRule(s.to_string()))
    }
}

// ============================================================================
// TESTS
// ============================================================================
