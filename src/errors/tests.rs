//! Unit tests for error handling.
//!
//! This module contains tests for diagnostic construction and reporting.

use crate::errors::errors::{Diagnostic, DiagnosticKind, ErrorTip};
use crate::Position;

#[test]
fn test_diagnostic_creation() {
    let error = Diagnostic::new(DiagnosticKind::UnrecognisedCharacter { character: '@' }, 3, 7);

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.line(), 3);
    assert_eq!(error.column(), 7);
}

#[test]
fn test_diagnostic_at_position() {
    let error = Diagnostic::at(
        DiagnosticKind::UnbalancedParentheses,
        Position { line: 4, column: 12 },
    );

    assert_eq!(error.get_position(), Position { line: 4, column: 12 });
    assert_eq!(error.get_error_name(), "UnbalancedParentheses");
}

#[test]
fn test_unexpected_token_message() {
    let error = Diagnostic::new(
        DiagnosticKind::UnexpectedToken {
            expected: String::from("WORD"),
            found: String::from("NOTEQUAL"),
        },
        2,
        2,
    );

    assert_eq!(error.message(), "expected WORD but found NOTEQUAL");
    assert_eq!(
        error.to_string(),
        "expected WORD but found NOTEQUAL (line 2, column 2)"
    );
}

#[test]
fn test_premature_end_message() {
    let error = Diagnostic::new(
        DiagnosticKind::PrematureEnd {
            expected: String::from("DEDENT"),
        },
        9,
        1,
    );

    assert_eq!(error.message(), "expected DEDENT but found none");
    assert_eq!(error.get_error_name(), "PrematureEnd");
}

#[test]
fn test_malformed_operator_message() {
    let error = Diagnostic::new(DiagnosticKind::MalformedOperator { operator: '!' }, 1, 5);

    assert_eq!(error.message(), "malformed operator `!`, expected `!=`");
    assert_eq!(error.get_tip().to_string(), "did you mean `!=`?");
}

#[test]
fn test_locals_outside_method_message() {
    let error = Diagnostic::new(DiagnosticKind::LocalsOutsideMethod, 6, 3);

    assert_eq!(error.message(), "locals outside method/constructor");
}

#[test]
fn test_error_tip_none() {
    let error = Diagnostic::new(
        DiagnosticKind::UnexpectedToken {
            expected: String::from("NEWLINE"),
            found: String::from("COMMA"),
        },
        1,
        1,
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Diagnostic::new(DiagnosticKind::UnterminatedComment, 1, 1);

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_unrecognised_character_tip_escapes_control_characters() {
    let error = Diagnostic::new(
        DiagnosticKind::UnrecognisedCharacter {
            character: '\u{1A}',
        },
        1,
        1,
    );

    assert_eq!(
        error.get_tip().to_string(),
        "`\\u{1a}` is not part of the language"
    );
}

#[test]
fn test_nesting_too_deep_message() {
    let error = Diagnostic::new(DiagnosticKind::NestingTooDeep { limit: 128 }, 3, 134);

    assert_eq!(error.message(), "nesting deeper than 128 levels");
    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}
