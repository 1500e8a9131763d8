use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} (line {line}, column {column})")]
pub struct Diagnostic {
    kind: DiagnosticKind,
    line: usize,
    column: usize,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, line: usize, column: usize) -> Self {
        Diagnostic { kind, line, column }
    }

    pub fn at(kind: DiagnosticKind, position: Position) -> Self {
        Diagnostic::new(kind, position.line, position.column)
    }

    pub fn kind(&self) -> &DiagnosticKind {
        &self.kind
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn get_position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    /// The human-readable message, without the position suffix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.kind {
            DiagnosticKind::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            DiagnosticKind::UnterminatedComment => "UnterminatedComment",
            DiagnosticKind::CodeAfterComment => "CodeAfterComment",
            DiagnosticKind::UnterminatedString => "UnterminatedString",
            DiagnosticKind::UnterminatedCharacter => "UnterminatedCharacter",
            DiagnosticKind::MalformedOperator { .. } => "MalformedOperator",
            DiagnosticKind::UnbalancedParentheses => "UnbalancedParentheses",
            DiagnosticKind::UnexpectedToken { .. } => "UnexpectedToken",
            DiagnosticKind::PrematureEnd { .. } => "PrematureEnd",
            DiagnosticKind::LocalsOutsideMethod => "LocalsOutsideMethod",
            DiagnosticKind::ExpectedBooleanExpression { .. } => "ExpectedBooleanExpression",
            DiagnosticKind::MissingReturnDeclaration => "MissingReturnDeclaration",
            DiagnosticKind::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.kind {
            DiagnosticKind::UnrecognisedCharacter { character } => ErrorTip::Suggestion(format!(
                "`{}` is not part of the language",
                character.escape_default()
            )),
            DiagnosticKind::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("close the comment with `}`"))
            }
            DiagnosticKind::CodeAfterComment => ErrorTip::Suggestion(String::from(
                "move the code after the comment onto its own line",
            )),
            DiagnosticKind::UnterminatedString => {
                ErrorTip::Suggestion(String::from("close the string with `\"`"))
            }
            DiagnosticKind::UnterminatedCharacter => ErrorTip::Suggestion(String::from(
                "a character literal holds exactly one character, like 'x'",
            )),
            DiagnosticKind::MalformedOperator { operator } => {
                ErrorTip::Suggestion(format!("did you mean `{}=`?", operator))
            }
            DiagnosticKind::UnbalancedParentheses => {
                ErrorTip::Suggestion(String::from("this parenthesis is never matched"))
            }
            DiagnosticKind::UnexpectedToken { .. } => ErrorTip::None,
            DiagnosticKind::PrematureEnd { .. } => ErrorTip::Suggestion(String::from(
                "the file ends in the middle of a declaration",
            )),
            DiagnosticKind::LocalsOutsideMethod => ErrorTip::Suggestion(String::from(
                "declare locals at the top level of a method or constructor body",
            )),
            DiagnosticKind::ExpectedBooleanExpression { .. } => ErrorTip::Suggestion(
                String::from("conditions must be a comparison, a method call or a variable"),
            ),
            DiagnosticKind::MissingReturnDeclaration => ErrorTip::Suggestion(String::from(
                "list at least one return after `:` or remove the `:`",
            )),
            DiagnosticKind::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "split the expression or block into smaller methods",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    #[error("unrecognized character {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("code found after end of comment")]
    CodeAfterComment,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated character literal")]
    UnterminatedCharacter,
    #[error("malformed operator `{operator}`, expected `{operator}=`")]
    MalformedOperator { operator: char },
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,
    #[error("expected {expected} but found {found}")]
    UnexpectedToken { expected: String, found: String },
    #[error("expected {expected} but found none")]
    PrematureEnd { expected: String },
    #[error("locals outside method/constructor")]
    LocalsOutsideMethod,
    #[error("expected a boolean expression but found {found}")]
    ExpectedBooleanExpression { found: String },
    #[error("expected a return declaration after COLON")]
    MissingReturnDeclaration,
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
