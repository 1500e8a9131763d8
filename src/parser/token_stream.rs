//! Destructive lookahead over the lexer's output.
//!
//! The parser never backtracks by re-inserting tokens. Alternatives are
//! chosen with the non-consuming predicates here, and only a confirmed
//! match is removed.

use std::collections::VecDeque;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position,
};

#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: VecDeque<Token>,
    /// Reported once every token has been removed.
    end: Position,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens
            .last()
            .map(Token::position)
            .unwrap_or(Position::start());

        TokenStream {
            tokens: tokens.into(),
            end,
        }
    }

    pub fn done(&self) -> bool {
        self.tokens.is_empty()
    }

    /// True when fewer than `index + 1` tokens remain.
    pub fn done_at(&self, index: usize) -> bool {
        index >= self.tokens.len()
    }

    pub fn tokens_left(&self) -> usize {
        self.tokens.len()
    }

    pub fn peek(&self) -> Option<&Token> {
        self.peek_at(0)
    }

    pub fn peek_at(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn peek_kind_at(&self, index: usize) -> Option<TokenKind> {
        self.peek_at(index).map(|token| token.kind)
    }

    /// Removes and returns the head token only if it has the given kind.
    pub fn match_and_remove(&mut self, kind: TokenKind) -> Option<Token> {
        if self.next_is(kind) {
            self.tokens.pop_front()
        } else {
            None
        }
    }

    pub fn next_is(&self, kind: TokenKind) -> bool {
        self.peek_kind_at(0) == Some(kind)
    }

    pub fn next_is_either(&self, first: TokenKind, second: TokenKind) -> bool {
        self.next_is(first) || self.next_is(second)
    }

    pub fn next_two_match(&self, first: TokenKind, second: TokenKind) -> bool {
        self.peek_kind_at(0) == Some(first) && self.peek_kind_at(1) == Some(second)
    }

    /// True when the upcoming kinds begin with `kinds`, in order.
    pub fn next_match(&self, kinds: &[TokenKind]) -> bool {
        kinds
            .iter()
            .enumerate()
            .all(|(index, kind)| self.peek_kind_at(index) == Some(*kind))
    }

    pub fn current_line(&self) -> usize {
        self.current_position().line
    }

    pub fn current_column(&self) -> usize {
        self.current_position().column
    }

    /// Position of the head token, or of the stream's last token once empty.
    pub fn current_position(&self) -> Position {
        self.peek().map(Token::position).unwrap_or(self.end)
    }
}
