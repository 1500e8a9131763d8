#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::{
    ast::ast::Program,
    errors::errors::{Diagnostic, ErrorTip},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Lexes and parses a complete source text in one call.
pub fn parse_source(source: &str) -> Result<Program, Diagnostic> {
    let tokens = lexer::lexer::tokenize(source)?;
    parser::parser::parse(tokens)
}

/// Formats a diagnostic against the source it was produced from.
///
/// ```text
/// Error: UnexpectedToken: expected one of CONSTRUCT, PRIVATE, SHARED, WORD but found NOTEQUAL
/// -> main.tran:2:2
///   |
/// 2 | !=
///   | ^
/// ```
pub fn render_diagnostic(diagnostic: &Diagnostic, source: &str, file_name: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::None = diagnostic.get_tip() {
        out.push_str(&format!(
            "Error: {}: {}\n",
            diagnostic.get_error_name(),
            diagnostic.message()
        ));
    } else {
        out.push_str(&format!(
            "Error: {}: {} ({})\n",
            diagnostic.get_error_name(),
            diagnostic.message(),
            diagnostic.get_tip()
        ));
    }
    out.push_str(&format!(
        "-> {}:{}:{}\n",
        file_name,
        diagnostic.line(),
        diagnostic.column()
    ));

    let Some(line_text) = source.split('\n').nth(diagnostic.line().saturating_sub(1)) else {
        return out;
    };

    let line_string = diagnostic.line().to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = diagnostic.column().saturating_sub(removed_whitespace).max(1);
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    use super::{parse_source, render_diagnostic};

    #[test]
    fn test_render_diagnostic_points_at_column() {
        let source = "class C\n\t!=\n";
        let error = parse_source(source).unwrap_err();
        let rendered = render_diagnostic(&error, source, "main.tran");
        let lines = rendered.lines().collect::<Vec<_>>();

        assert!(lines[0].starts_with("Error: UnexpectedToken"));
        assert_eq!(lines[1], "-> main.tran:2:2");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | !=");
        assert_eq!(lines[4], "  | ^");
    }

    #[test]
    fn test_render_diagnostic_with_tip() {
        let source = "class C\n\tnumber a {x} y\n";
        let error = parse_source(source).unwrap_err();
        let rendered = render_diagnostic(&error, source, "main.tran");

        assert!(rendered.starts_with(
            "Error: CodeAfterComment: code found after end of comment (move the code"
        ));
        assert!(rendered.contains("2 | number a {x} y"));
    }

    #[test]
    fn test_render_diagnostic_past_end_of_source() {
        let error = crate::errors::errors::Diagnostic::new(
            crate::errors::errors::DiagnosticKind::UnterminatedComment,
            40,
            1,
        );
        let rendered = render_diagnostic(&error, "class C\n", "main.tran");

        assert_eq!(rendered.lines().count(), 2);
    }
}
