//! # quill-rules
//!
//! A rule-evaluation engine for validating user-entered text.
//!
//! The engine owns an ordered table of built-in rules (emptiness, character
//! classes, length bounds, case rules, caller-supplied regular expressions),
//! each with a configurable error message. Evaluation walks the table in a
//! fixed priority order, filtered to the rules a caller enabled, and stops at
//! the first failure.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quill_rules::prelude::*;
//!
//! let engine = RuleEngine::default();
//! let outcome = engine.evaluate("abc123", &[RuleId::NotEmpty, RuleId::Alphanumeric]);
//! assert!(outcome.is_valid());
//!
//! let outcome = engine.evaluate("abc123", &[RuleId::OnlyLetters]);
//! assert_eq!(outcome.message(), Some("Please enter only letters"));
//! ```
//!
//! ## Built-in Rules
//!
//! - **Length**: [`MinLength`](rules::MinLength), [`MaxLength`](rules::MaxLength),
//!   [`NotEmpty`](rules::NotEmpty)
//! - **Pattern**: [`Alphabetic`](rules::Alphabetic),
//!   [`LatinAlphabetic`](rules::LatinAlphabetic),
//!   [`Alphanumeric`](rules::Alphanumeric), [`Digits`](rules::Digits),
//!   [`Lowercase`](rules::Lowercase), [`Uppercase`](rules::Uppercase)
//! - **Presence**: [`HasLowercase`](rules::HasLowercase),
//!   [`HasUppercase`](rules::HasUppercase), [`HasDigit`](rules::HasDigit),
//!   [`HasSpecialCharacter`](rules::HasSpecialCharacter),
//!   [`HasLetter`](rules::HasLetter)
//! - **Content**: [`Email`](rules::Email), [`MatchesRegex`](rules::MatchesRegex),
//!   [`ContainsMatch`](rules::ContainsMatch)
//!
//! Every rule is also usable on its own through the
//! [`Validate`](foundation::Validate) trait.

pub mod engine;
pub mod foundation;
pub mod prelude;
pub mod rules;

pub use engine::{ConfigError, Outcome, RuleConfig, RuleEngine, RuleId};
