//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance, with or without a literal value

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$line` - The 1-based source line
/// * `$column` - The 1-based source column
/// * `$value` - Optional literal text, for kinds that carry one
///
/// # Example
///
/// ```ignore
/// let plus = MK_TOKEN!(TokenKind::Plus, 1, 3);
/// let number = MK_TOKEN!(TokenKind::Number, 1, 5, "42");
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $line:expr, $column:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            line: $line,
            column: $column,
            value: None,
        }
    };
    ($kind:expr, $line:expr, $column:expr, $value:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            line: $line,
            column: $column,
            value: Some(String::from($value)),
        }
    };
}
