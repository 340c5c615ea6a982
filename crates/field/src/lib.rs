//! # quill-field
//!
//! A headless validated text-entry field.
//!
//! Pairs the [`quill_rules`] engine with the event surface of an input
//! widget: per-keystroke silent validation, a typing-pause debounce timer
//! that surfaces errors once the user stops typing, focus-loss validation,
//! and an inline-error cell for render layers to read.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quill_field::{RuleEngine, RuleId, TextField};
//!
//! let mut field = TextField::new(RuleEngine::default())
//!     .with_rules(&[RuleId::NotEmpty, RuleId::Email])
//!     .on_result(|valid, message| println!("{valid}: {message}"));
//!
//! field.set_text("user@example");   // silent validation per keystroke
//! field.set_focused(false);         // visible validation on focus loss
//! assert!(field.error_message().is_some());
//! ```
//!
//! The typing-pause timer needs a tokio runtime; everything else is
//! synchronous.

pub mod debounce;
pub mod field;

pub use debounce::{DEFAULT_DELAY, Debouncer, EARLY_FIRE_TOLERANCE};
pub use field::{TextField, VALID_MESSAGE};

// Re-export the engine surface so callers need only one crate.
pub use quill_rules::{ConfigError, Outcome, RuleConfig, RuleEngine, RuleId};
