//! Integration tests for the rule engine.

use pretty_assertions::assert_eq;
use quill_rules::prelude::*;
use rstest::rstest;

fn engine() -> RuleEngine {
    RuleEngine::default()
}

// ============================================================================
// SINGLE-RULE SCENARIOS
// ============================================================================

#[rstest]
#[case("", RuleId::NotEmpty, Some("Cannot be empty"))]
#[case("x", RuleId::NotEmpty, None)]
#[case("test@example.com", RuleId::Email, None)]
#[case("not an email", RuleId::Email, Some("Invalid email address"))]
#[case("abc123", RuleId::OnlyLetters, Some("Please enter only letters"))]
#[case("abc123", RuleId::Alphanumeric, None)]
#[case("héllo", RuleId::OnlyLetters, None)]
#[case("héllo", RuleId::OnlyLatinLetters, Some("Please enter only letters"))]
#[case("one two", RuleId::OnlyLettersWithSpaces, None)]
#[case("one two", RuleId::OnlyLetters, Some("Please enter only letters"))]
#[case("12345", RuleId::OnlyDigits, None)]
#[case("12.45", RuleId::OnlyDigits, Some("Please enter only digits"))]
#[case("hello", RuleId::AllLowercase, None)]
#[case("Hello", RuleId::AllLowercase, Some("All letters should be in lower case"))]
#[case("HELLO", RuleId::AllUppercase, None)]
#[case("Hello", RuleId::AllUppercase, Some("All letters should be in upper case"))]
#[case("HELLo", RuleId::AtLeastOneLowercase, None)]
#[case(
    "HELLO",
    RuleId::AtLeastOneLowercase,
    Some("At least one letter should be in lower case")
)]
#[case("hellO", RuleId::AtLeastOneUppercase, None)]
#[case(
    "hello",
    RuleId::AtLeastOneUppercase,
    Some("At least one letter should be in upper case")
)]
#[case("abc1", RuleId::AtLeastOneDigit, None)]
#[case("abc", RuleId::AtLeastOneDigit, Some("Should contain at least one digit"))]
#[case("p@ss", RuleId::AtLeastOneSpecialCharacter, None)]
#[case(
    "pass 123",
    RuleId::AtLeastOneSpecialCharacter,
    Some("Should contain at least one special character")
)]
#[case("123a", RuleId::AtLeastOneLetter, None)]
#[case("1234", RuleId::AtLeastOneLetter, Some("Should contain at least one letter"))]
fn single_rule(#[case] value: &str, #[case] rule: RuleId, #[case] expected: Option<&str>) {
    let outcome = engine().evaluate(value, &[rule]);
    assert_eq!(outcome.message(), expected);
}

// ============================================================================
// LENGTH BOUNDS
// ============================================================================

#[test]
fn max_length_uses_configured_bound() {
    let mut engine = engine();
    engine.config_mut().set_max_length(3);

    let outcome = engine.evaluate("ABCDE", &[RuleId::MaxLength]);
    assert_eq!(
        outcome.message(),
        Some("Length should be less than or equal to 3")
    );

    assert!(engine.evaluate("ABC", &[RuleId::MaxLength]).is_valid());
}

#[test]
fn min_length_uses_configured_bound() {
    let engine = engine();

    let outcome = engine.evaluate("ab", &[RuleId::MinLength]);
    assert_eq!(
        outcome.message(),
        Some("Length should be greater than or equal to 3")
    );

    assert!(engine.evaluate("abc", &[RuleId::MinLength]).is_valid());
}

#[test]
fn checking_never_moves_the_bound() {
    let mut engine = engine();
    engine.config_mut().set_max_length(10);

    // A long input failing the check must not change the configured bound
    // or the rendered message.
    let _ = engine.evaluate("a".repeat(50).as_str(), &[RuleId::MaxLength]);
    assert_eq!(engine.config().max_length(), 10);
    assert_eq!(
        engine.config().message(RuleId::MaxLength),
        "Length should be less than or equal to 10"
    );
}

// ============================================================================
// PRIORITY ORDER
// ============================================================================

#[test]
fn earlier_rule_reports_when_both_fail() {
    let engine = engine();
    // "" fails both; NotEmpty precedes OnlyDigits.
    let outcome = engine.evaluate("", &[RuleId::OnlyDigits, RuleId::NotEmpty]);
    assert_eq!(outcome.rule(), Some(RuleId::NotEmpty));
}

#[test]
fn all_twenty_rules_enabled_reports_first_failure() {
    let mut engine = engine();
    engine.config_mut().set_postal_code_pattern(r"\d{5}").unwrap();
    engine.config_mut().set_only_custom_pattern(r"[a-z]+").unwrap();
    engine.config_mut().set_at_least_one_pattern(r"\d").unwrap();

    let outcome = engine.evaluate("", &RuleId::ALL);
    assert_eq!(outcome.rule(), Some(RuleId::NotEmpty));
}

// ============================================================================
// AUXILIARY PATTERNS
// ============================================================================

#[test]
fn postal_code_rule_skipped_when_pattern_empty() {
    let engine = engine();
    assert!(
        engine
            .evaluate("whatever", &[RuleId::ValidPostalCode])
            .is_valid()
    );
}

#[test]
fn custom_regex_rules_skipped_when_pattern_empty() {
    let engine = engine();
    assert!(engine.evaluate("!!", &[RuleId::OnlyCustomRegex]).is_valid());
    assert!(
        engine
            .evaluate("!!", &[RuleId::AtLeastOneCustomRegex])
            .is_valid()
    );
}

#[test]
fn only_custom_regex_requires_full_match() {
    let mut engine = engine();
    engine.config_mut().set_only_custom_pattern("[a-c]+").unwrap();

    assert!(engine.evaluate("abc", &[RuleId::OnlyCustomRegex]).is_valid());

    let outcome = engine.evaluate("abcd", &[RuleId::OnlyCustomRegex]);
    assert_eq!(outcome.message(), Some("Please enter only custom regex"));
}

#[test]
fn malformed_pattern_reported_at_configuration_time() {
    let mut engine = engine();
    let result = engine.config_mut().set_only_custom_pattern("(oops");
    assert!(matches!(result, Err(ConfigError::Pattern(_))));
}

// ============================================================================
// IDENTIFIER PARSING
// ============================================================================

#[test]
fn identifiers_parse_and_reject() {
    assert_eq!("not-empty".parse::<RuleId>().unwrap(), RuleId::NotEmpty);
    assert_eq!(
        "at-least-one-digit".parse::<RuleId>().unwrap(),
        RuleId::AtLeastOneDigit
    );
    assert!(matches!(
        "shouty-case".parse::<RuleId>(),
        Err(ConfigError::UnknownRule(_))
    ));
}
