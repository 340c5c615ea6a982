//! Validated text-field surface
//!
//! [`TextField`] models the input widget as a headless state machine: it
//! owns the current text, the enabled rule set, a result callback, and an
//! inline-error cell. Callers feed it text-change and focus events; the
//! field validates on every change and re-validates visibly after a typing
//! pause or on focus loss.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

use quill_rules::{ConfigError, Outcome, RuleConfig, RuleEngine, RuleId};

use crate::debounce::Debouncer;

/// Message delivered to the callback when validation passes.
pub const VALID_MESSAGE: &str = "Correct";

type ResultCallback = dyn Fn(bool, &str) + Send + Sync;

// ============================================================================
// INNER STATE
// ============================================================================

struct Inner {
    engine: RuleEngine,
    text: String,
    enabled: Vec<RuleId>,
    validate_on_change: bool,
    inline_errors: bool,
    error: Option<String>,
    callback: Option<Arc<ResultCallback>>,
}

impl Inner {
    fn evaluate(&self) -> Outcome {
        self.engine.evaluate(&self.text, &self.enabled)
    }
}

/// Evaluates the current text and delivers the result.
///
/// Visible validations also update the inline-error cell; silent ones leave
/// it untouched. The callback runs outside the state lock.
fn run_validation(inner: &Arc<Mutex<Inner>>, visible: bool) {
    let (outcome, callback) = {
        let mut state = inner.lock();
        let outcome = state.evaluate();
        if visible {
            state.error = outcome.message().map(String::from);
        }
        (outcome, state.callback.clone())
    };

    debug!(valid = outcome.is_valid(), visible, "validated text");

    if let Some(callback) = callback {
        match &outcome {
            Outcome::Valid => callback(true, VALID_MESSAGE),
            Outcome::Invalid { message, .. } => callback(false, message),
        }
    }
}

// ============================================================================
// TEXT FIELD
// ============================================================================

/// A validated text-entry field.
///
/// Validation triggers:
///
/// - **every text change** (once rules or a callback are set) — silent:
///   result goes to the callback only;
/// - **typing pause** — visible: callback plus inline-error cell, via the
///   debounce timer (only while inline errors are enabled);
/// - **focus loss** — visible, immediately.
///
/// # Examples
///
/// ```rust,ignore
/// use quill_field::{RuleEngine, RuleId, TextField};
///
/// let mut field = TextField::new(RuleEngine::default())
///     .with_rules(&[RuleId::NotEmpty, RuleId::Email])
///     .on_result(|valid, message| println!("{valid}: {message}"));
///
/// field.set_text("user@example.com");
/// assert!(field.validate().is_valid());
/// ```
pub struct TextField {
    inner: Arc<Mutex<Inner>>,
    debounce: Debouncer,
}

impl TextField {
    /// Creates a field around `engine` with no rules enabled.
    #[must_use]
    pub fn new(engine: RuleEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                engine,
                text: String::new(),
                enabled: Vec::new(),
                validate_on_change: false,
                inline_errors: true,
                error: None,
                callback: None,
            })),
            debounce: Debouncer::new(),
        }
    }

    // ------------------------------------------------------------------
    // Builders
    // ------------------------------------------------------------------

    /// Enables `rules` for this field and arms validate-on-change.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rules(mut self, rules: &[RuleId]) -> Self {
        self.set_rules(rules);
        self
    }

    /// Sets the typing-pause delay (default 1200 ms).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.debounce.set_delay(delay);
        self
    }

    /// Enables or disables inline errors (default enabled).
    ///
    /// While disabled, the typing-pause timer is not armed and focus loss
    /// does not validate; the callback still receives per-change results.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_inline_errors(self, show: bool) -> Self {
        self.inner.lock().inline_errors = show;
        self
    }

    /// Registers the result callback and arms validate-on-change.
    ///
    /// The callback receives `(is_valid, message)` on every validation;
    /// registering performs an immediate silent validation.
    #[must_use = "builder methods must be chained or built"]
    pub fn on_result(self, callback: impl Fn(bool, &str) + Send + Sync + 'static) -> Self {
        {
            let mut inner = self.inner.lock();
            inner.callback = Some(Arc::new(callback));
            inner.validate_on_change = true;
        }
        run_validation(&self.inner, false);
        self
    }

    // ------------------------------------------------------------------
    // Event surface
    // ------------------------------------------------------------------

    /// Replaces the enabled rule set and arms validate-on-change.
    pub fn set_rules(&mut self, rules: &[RuleId]) {
        let mut inner = self.inner.lock();
        inner.enabled = rules.to_vec();
        inner.validate_on_change = true;
    }

    /// The currently enabled rules.
    #[must_use]
    pub fn rules(&self) -> Vec<RuleId> {
        self.inner.lock().enabled.clone()
    }

    /// Feeds a text-change event.
    ///
    /// Validates silently right away and, while inline errors are enabled,
    /// re-arms the typing-pause timer from this change.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let (validate, schedule) = {
            let mut inner = self.inner.lock();
            inner.text = text.into();
            (
                inner.validate_on_change,
                inner.validate_on_change && inner.inline_errors,
            )
        };

        if validate {
            run_validation(&self.inner, false);
        }
        if schedule {
            let state = Arc::downgrade(&self.inner);
            self.debounce.poke(move || {
                if let Some(state) = state.upgrade() {
                    run_validation(&state, true);
                }
            });
        }
    }

    /// Feeds a focus-change event.
    ///
    /// Losing focus validates visibly; gaining focus does nothing.
    pub fn set_focused(&mut self, focused: bool) {
        if focused {
            return;
        }
        let active = {
            let inner = self.inner.lock();
            inner.validate_on_change && inner.inline_errors
        };
        if active {
            debug!("focus lost, validating");
            run_validation(&self.inner, true);
        }
    }

    /// Validates the current text without side effects.
    #[must_use]
    pub fn validate(&self) -> Outcome {
        self.inner.lock().evaluate()
    }

    /// The current text.
    #[must_use]
    pub fn text(&self) -> String {
        self.inner.lock().text.clone()
    }

    /// The inline-error cell: the failure message of the latest *visible*
    /// validation, or `None` when it passed.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.inner.lock().error.clone()
    }

    // ------------------------------------------------------------------
    // Configuration pass-throughs
    // ------------------------------------------------------------------

    /// Sets the typing-pause delay.
    pub fn set_delay(&mut self, delay: Duration) {
        self.debounce.set_delay(delay);
    }

    /// Enables or disables inline errors.
    pub fn set_inline_errors(&mut self, show: bool) {
        self.inner.lock().inline_errors = show;
    }

    /// Sets the maximum length bound.
    pub fn set_max_length(&mut self, max: usize) {
        self.inner.lock().engine.config_mut().set_max_length(max);
    }

    /// Sets the minimum length bound.
    pub fn set_min_length(&mut self, min: usize) {
        self.inner.lock().engine.config_mut().set_min_length(min);
    }

    /// Replaces the error-message template for `rule`.
    pub fn set_message(&mut self, rule: RuleId, message: impl Into<std::borrow::Cow<'static, str>>) {
        self.inner.lock().engine.config_mut().set_message(rule, message);
    }

    /// Sets the postal-code pattern (whole-string match; empty clears).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pattern`] when the pattern does not compile.
    pub fn set_postal_code_pattern(&mut self, pattern: &str) -> Result<(), ConfigError> {
        self.inner
            .lock()
            .engine
            .config_mut()
            .set_postal_code_pattern(pattern)
    }

    /// Sets the only-custom pattern (whole-string match; empty clears).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pattern`] when the pattern does not compile.
    pub fn set_only_custom_pattern(&mut self, pattern: &str) -> Result<(), ConfigError> {
        self.inner
            .lock()
            .engine
            .config_mut()
            .set_only_custom_pattern(pattern)
    }

    /// Sets the at-least-one pattern (search; empty clears).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pattern`] when the pattern does not compile.
    pub fn set_at_least_one_pattern(&mut self, pattern: &str) -> Result<(), ConfigError> {
        self.inner
            .lock()
            .engine
            .config_mut()
            .set_at_least_one_pattern(pattern)
    }

    /// Replaces the engine configuration wholesale.
    ///
    /// The field's current length bounds are carried into the replacement,
    /// so swapping in a message-only configuration does not reset them.
    pub fn set_config(&mut self, config: RuleConfig) {
        let mut inner = self.inner.lock();
        let max = inner.engine.config().max_length();
        let min = inner.engine.config().min_length();

        let mut config = config;
        config.set_max_length(max);
        config.set_min_length(min);
        inner.engine.set_config(config);
    }
}

impl std::fmt::Debug for TextField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("TextField")
            .field("text", &inner.text)
            .field("enabled", &inner.enabled)
            .field("inline_errors", &inner.inline_errors)
            .field("error", &inner.error)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_validate_without_rules_is_valid() {
        let field = TextField::new(RuleEngine::default());
        assert!(field.validate().is_valid());
    }

    #[test]
    fn test_set_rules_replaces_the_enabled_set() {
        let mut field = TextField::new(RuleEngine::default());
        field.set_rules(&[RuleId::NotEmpty, RuleId::Email]);
        assert_eq!(field.rules(), vec![RuleId::NotEmpty, RuleId::Email]);

        field.set_rules(&[RuleId::OnlyDigits]);
        assert_eq!(field.rules(), vec![RuleId::OnlyDigits]);
    }

    #[test]
    fn test_on_result_validates_immediately() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);

        let _field = TextField::new(RuleEngine::default())
            .with_rules(&[RuleId::NotEmpty])
            .on_result(move |valid, message| {
                sink.lock().push((valid, message.to_string()));
            });

        let calls = calls.lock();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], (false, "Cannot be empty".to_string()));
    }

    #[test]
    fn test_valid_result_delivers_correct_message() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);

        let mut field = TextField::new(RuleEngine::default())
            .with_inline_errors(false)
            .with_rules(&[RuleId::OnlyDigits])
            .on_result(move |valid, message| {
                sink.lock().push((valid, message.to_string()));
            });

        field.set_text("123");

        let calls = calls.lock();
        assert_eq!(calls.last(), Some(&(true, VALID_MESSAGE.to_string())));
    }

    #[test]
    fn test_silent_validation_leaves_error_cell_untouched() {
        let mut field = TextField::new(RuleEngine::default())
            .with_inline_errors(false)
            .with_rules(&[RuleId::OnlyDigits]);

        field.set_text("abc");
        assert_eq!(field.error_message(), None);
    }

    #[test]
    fn test_focus_loss_sets_and_clears_error_cell() {
        let mut field =
            TextField::new(RuleEngine::default()).with_rules(&[RuleId::OnlyDigits]);

        field.set_text("abc");
        field.set_focused(false);
        assert_eq!(
            field.error_message(),
            Some("Please enter only digits".to_string())
        );

        field.set_text("123");
        field.set_focused(false);
        assert_eq!(field.error_message(), None);
    }

    #[test]
    fn test_gaining_focus_does_nothing() {
        let mut field =
            TextField::new(RuleEngine::default()).with_rules(&[RuleId::OnlyDigits]);

        field.set_text("abc");
        field.set_focused(true);
        assert_eq!(field.error_message(), None);
    }

    #[test]
    fn test_focus_loss_without_inline_errors_is_silent() {
        let counter = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&counter);

        let mut field = TextField::new(RuleEngine::default())
            .with_inline_errors(false)
            .with_rules(&[RuleId::OnlyDigits])
            .on_result(move |_, _| {
                sink.fetch_add(1, Ordering::SeqCst);
            });
        let registered = counter.load(Ordering::SeqCst);

        field.set_focused(false);
        assert_eq!(counter.load(Ordering::SeqCst), registered);
        assert_eq!(field.error_message(), None);
    }

    #[test]
    fn test_set_config_preserves_bounds() {
        let mut field = TextField::new(RuleEngine::default());
        field.set_max_length(8);
        field.set_min_length(2);

        let mut replacement = RuleConfig::new();
        replacement.set_message(RuleId::NotEmpty, "Required");
        field.set_config(replacement);

        let inner = field.inner.lock();
        assert_eq!(inner.engine.config().max_length(), 8);
        assert_eq!(inner.engine.config().min_length(), 2);
        assert_eq!(inner.engine.config().message(RuleId::NotEmpty), "Required");
    }

    #[test]
    fn test_config_pass_throughs() {
        let mut field = TextField::new(RuleEngine::default())
            .with_inline_errors(false)
            .with_rules(&[RuleId::MaxLength]);

        field.set_max_length(3);
        let outcome = {
            field.set_text("ABCDE");
            field.validate()
        };
        assert_eq!(
            outcome.message(),
            Some("Length should be less than or equal to 3")
        );

        assert!(field.set_postal_code_pattern("(broken").is_err());
        assert!(field.set_postal_code_pattern(r"\d{5}").is_ok());
    }
}
