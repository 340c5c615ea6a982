//! Built-in rules
//!
//! This module provides the predicate types behind every [`RuleId`]
//! the engine knows about. Each rule is independently usable.
//!
//! # Categories
//!
//! - **Length**: minimum, maximum, not-empty
//! - **Pattern**: character classes and whole-string case
//! - **Presence**: at-least-one-character-of-class checks
//! - **Content**: email and caller-supplied regular expressions
//!
//! # Examples
//!
//! ```rust,ignore
//! use quill_rules::rules::{min_length, alphanumeric};
//! use quill_rules::foundation::Validate;
//!
//! assert!(min_length(3).validate("hello").is_ok());
//! assert!(alphanumeric().validate("user42").is_ok());
//! ```
//!
//! [`RuleId`]: crate::engine::RuleId

pub mod content;
pub mod length;
pub mod pattern;
pub mod presence;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use length::{MaxLength, MinLength, NotEmpty, max_length, min_length, not_empty};

pub use pattern::{
    Alphabetic, Alphanumeric, Digits, LatinAlphabetic, Lowercase, Uppercase, alphabetic,
    alphanumeric, digits, latin_alphabetic, lowercase, uppercase,
};

pub use presence::{
    HasDigit, HasLetter, HasLowercase, HasSpecialCharacter, HasUppercase, has_digit, has_letter,
    has_lowercase, has_special_character, has_uppercase,
};

pub use content::{
    ContainsMatch, Email, MatchesRegex, contains_match, email, matches_regex,
};
