//! Property-based tests for the lexer.
//!
//! 1. **Lexer never panics** on arbitrary input
//! 2. **Lexer is deterministic** for the same input
//! 3. **Indentation is balanced**: INDENT and DEDENT counts match for any
//!    file indented with only tabs or only groups of four spaces
//! 4. **Values only on literal kinds**

use proptest::prelude::*;

use super::{lexer::tokenize, tokens::TokenKind};

/// A line body: a few lowercase words, or nothing for a blank line.
const LINE_BODY: &str = "([a-z]{1,8}( [a-z0-9]{1,8}){0,3})?";

fn indented_file(use_tabs: bool, lines: &[(usize, String)]) -> String {
    let unit = if use_tabs { "\t" } else { "    " };
    lines
        .iter()
        .map(|(depth, body)| format!("{}{}\n", unit.repeat(*depth), body))
        .collect()
}

proptest! {
    #[test]
    fn lexer_never_panics(input in "\\PC{0,120}") {
        let _ = tokenize(&input);
    }

    #[test]
    fn lexer_is_deterministic(input in "[a-z0-9 \\t\\n(){}=<>!.,:\"']{0,80}") {
        prop_assert_eq!(tokenize(&input), tokenize(&input));
    }

    #[test]
    fn indentation_is_balanced(
        use_tabs in any::<bool>(),
        lines in prop::collection::vec((0usize..5, LINE_BODY), 0..24),
    ) {
        let source = indented_file(use_tabs, &lines);
        let tokens = tokenize(&source).unwrap();

        let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
        let dedents = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).count();
        prop_assert_eq!(indents, dedents);
    }

    #[test]
    fn one_newline_token_per_line(
        lines in prop::collection::vec((0usize..3, LINE_BODY), 0..16),
    ) {
        let source = indented_file(true, &lines);
        let tokens = tokenize(&source).unwrap();

        let newlines = tokens.iter().filter(|t| t.kind == TokenKind::Newline).count();
        prop_assert_eq!(newlines, lines.len());
    }

    #[test]
    fn values_only_on_literal_kinds(input in "[a-z0-9 .+*()=\\n\"']{0,60}") {
        if let Ok(tokens) = tokenize(&input) {
            for token in tokens {
                prop_assert_eq!(token.value.is_some(), token.kind.carries_value());
            }
        }
    }
}
