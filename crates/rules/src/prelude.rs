//! Prelude module for convenient imports.
//!
//! Provides a single `use quill_rules::prelude::*;` import that brings in
//! all commonly needed traits, types, and rules.
//!
//! # Examples
//!
//! ```rust,ignore
//! use quill_rules::prelude::*;
//!
//! let engine = RuleEngine::default();
//! assert!(engine.evaluate("user42", &[RuleId::Alphanumeric]).is_valid());
//! ```

// ============================================================================
// FOUNDATION: Core trait and error
// ============================================================================

pub use crate::foundation::{Validate, ValidationError, ValidationResult};

// ============================================================================
// ENGINE: Evaluation types
// ============================================================================

pub use crate::engine::{
    ConfigError, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, Outcome, RuleConfig, RuleEngine, RuleId,
};

// ============================================================================
// RULES: All built-in rules
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::rules::*;
