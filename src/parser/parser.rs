//! Parser state and the helpers every production shares.
//!
//! Productions are free functions over `&mut Parser`, split by family:
//! declarations in `decl`, statements in `stmt`, expressions in `expr`.
//! Each returns the node it parsed or the first `Diagnostic`, unchanged.

use log::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Diagnostic, DiagnosticKind},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{decl::parse_program, token_stream::TokenStream};

/// Deepest combined nesting of bodies and parenthesised expressions.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The main parser structure.
///
/// Holds the remaining tokens and the current nesting depth; everything
/// else a production needs is passed down the call stack.
pub struct Parser {
    tokens: TokenStream,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens: TokenStream::new(tokens),
            depth: 0,
        }
    }

    /// Called on entry to every recursive production, paired with
    /// [`Parser::leave_nesting`].
    pub fn enter_nesting(&mut self) -> Result<(), Diagnostic> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Diagnostic::at(
                DiagnosticKind::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Read-only view for lookahead predicates.
    pub fn stream(&self) -> &TokenStream {
        &self.tokens
    }

    pub fn match_and_remove(&mut self, kind: TokenKind) -> Option<Token> {
        self.tokens.match_and_remove(kind)
    }

    /// Removes the head token if it has the expected kind, otherwise
    /// reports what was found instead.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Diagnostic> {
        match self.tokens.match_and_remove(expected_kind) {
            Some(token) => Ok(token),
            None => Err(self.unexpected(&[expected_kind])),
        }
    }

    /// Expects a WORD and returns its text.
    pub fn expect_word(&mut self) -> Result<String, Diagnostic> {
        let token = self.expect(TokenKind::Word)?;
        Ok(token.value.unwrap_or_default())
    }

    /// Expects a NEWLINE, then drops any blank lines after it.
    pub fn expect_newline(&mut self) -> Result<(), Diagnostic> {
        self.expect(TokenKind::Newline)?;
        self.skip_newlines();
        Ok(())
    }

    /// Ends a line-terminated construct: a NEWLINE is consumed, a DEDENT
    /// is accepted but left for the enclosing block to consume.
    pub fn expect_line_end(&mut self) -> Result<(), Diagnostic> {
        if self.match_and_remove(TokenKind::Newline).is_some()
            || self.tokens.next_is(TokenKind::Dedent)
        {
            Ok(())
        } else {
            Err(self.unexpected(&[TokenKind::Newline, TokenKind::Dedent]))
        }
    }

    pub fn skip_newlines(&mut self) {
        while self.match_and_remove(TokenKind::Newline).is_some() {}
    }

    /// Builds the diagnostic for a head token that matches none of `expected`.
    pub fn unexpected(&self, expected: &[TokenKind]) -> Diagnostic {
        let expected = describe_kinds(expected);
        let kind = match self.tokens.peek() {
            Some(token) => DiagnosticKind::UnexpectedToken {
                expected,
                found: token.kind.to_string(),
            },
            None => DiagnosticKind::PrematureEnd { expected },
        };

        Diagnostic::new(kind, self.tokens.current_line(), self.tokens.current_column())
    }

    pub fn get_position(&self) -> Position {
        self.tokens.current_position()
    }
}

pub fn describe_kinds(kinds: &[TokenKind]) -> String {
    match kinds {
        [single] => single.to_string(),
        _ => format!(
            "one of {}",
            kinds
                .iter()
                .map(TokenKind::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

/// Parses a complete token sequence into a `Program`.
///
/// This is the main entry point for parsing. Parsing stops at the first
/// malformed construct and no partial tree is returned.
pub fn parse(tokens: Vec<Token>) -> Result<Program, Diagnostic> {
    debug!("Parsing {} tokens", tokens.len());
    let mut parser = Parser::new(tokens);
    let program = parse_program(&mut parser)?;
    debug!(
        "Parsed {} classes and {} interfaces",
        program.classes.len(),
        program.interfaces.len()
    );
    Ok(program)
}
