use log::{debug, trace};

use crate::{
    errors::errors::{Diagnostic, DiagnosticKind},
    Position, MK_TOKEN,
};

use super::{
    cursor::Cursor,
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

/// Stands in for "no character" whenever lookahead runs past the source.
pub const END_OF_INPUT: char = '\u{1A}';

/// Number of consecutive spaces that make up one indentation level.
pub const SPACES_PER_INDENT: usize = 4;

pub struct Lexer {
    cursor: Cursor,
    tokens: Vec<Token>,
    line: usize,
    column: usize,
    indent_level: usize,
    open_parens: usize,
    /// Where the outermost currently-open `(` was found.
    outermost_paren: Option<Position>,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            cursor: Cursor::new(source),
            tokens: vec![],
            line: 1,
            column: 1,
            indent_level: 0,
            open_parens: 0,
            outermost_paren: None,
        }
    }

    /// Turns the whole source into tokens. A lexer is good for one pass.
    pub fn lex(mut self) -> Result<Vec<Token>, Diagnostic> {
        while !self.cursor.is_at_end() {
            let current = self.at();

            if current.is_alphabetic() {
                self.read_word();
            } else if current == '\n' {
                self.read_newline();
            } else if current == '{' {
                self.skip_comment()?;
            } else if current.is_ascii_digit() || (current == '.' && self.at_n(1).is_ascii_digit()) {
                self.read_number();
            } else if current.is_whitespace() {
                self.advance();
            } else {
                self.read_punctuation()?;
            }
        }

        for _ in 0..self.indent_level {
            self.push(MK_TOKEN!(TokenKind::Dedent, self.line, 1));
        }
        self.indent_level = 0;

        if self.open_parens > 0 {
            let position = self.outermost_paren.unwrap_or(self.position());
            return Err(Diagnostic::at(DiagnosticKind::UnbalancedParentheses, position));
        }

        Ok(self.tokens)
    }

    pub fn push(&mut self, token: Token) {
        trace!("token {}", token);
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.cursor.peek().unwrap_or(END_OF_INPUT)
    }

    pub fn at_n(&self, distance: usize) -> char {
        self.cursor.peek_at(distance).unwrap_or(END_OF_INPUT)
    }

    /// Consumes one character, keeping line and column in step.
    pub fn advance(&mut self) -> char {
        match self.cursor.consume() {
            Some('\n') => {
                self.line += 1;
                self.column = 1;
                '\n'
            }
            Some(current) => {
                self.column += 1;
                current
            }
            None => END_OF_INPUT,
        }
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    fn error(&self, kind: DiagnosticKind) -> Diagnostic {
        Diagnostic::at(kind, self.position())
    }

    fn read_word(&mut self) {
        let (line, column) = (self.line, self.column);
        let mut word = String::new();

        while self.at().is_alphanumeric() {
            word.push(self.advance());
        }

        match RESERVED_LOOKUP.get(word.as_str()) {
            Some(kind) => self.push(MK_TOKEN!(*kind, line, column)),
            None => self.push(MK_TOKEN!(TokenKind::Word, line, column, word)),
        }
    }

    fn read_number(&mut self) {
        let (line, column) = (self.line, self.column);
        let mut number = String::new();
        let mut seen_dot = false;

        loop {
            let current = self.at();
            if current == '.' && !seen_dot {
                seen_dot = true;
            } else if !current.is_ascii_digit() {
                break;
            }
            number.push(self.advance());
        }

        self.push(MK_TOKEN!(TokenKind::Number, line, column, number));
    }

    fn read_newline(&mut self) {
        self.push(MK_TOKEN!(TokenKind::Newline, self.line, self.column));
        self.advance();
        self.read_indentation();
    }

    /// Measures the leading whitespace of a fresh line and emits one
    /// INDENT or DEDENT per level of change. Blank lines leave the
    /// running level untouched.
    fn read_indentation(&mut self) {
        let mut level = 0;
        let mut spaces = 0;

        loop {
            match self.at() {
                ' ' => {
                    spaces += 1;
                    if spaces == SPACES_PER_INDENT {
                        level += 1;
                        spaces = 0;
                    }
                }
                '\t' => {
                    level += 1;
                    spaces = 0;
                }
                '\r' => {}
                _ => break,
            }
            self.advance();
        }

        if self.cursor.is_at_end() || self.at() == '\n' {
            return;
        }

        while self.indent_level < level {
            self.push(MK_TOKEN!(TokenKind::Indent, self.line, 1));
            self.indent_level += 1;
        }
        while self.indent_level > level {
            self.push(MK_TOKEN!(TokenKind::Dedent, self.line, 1));
            self.indent_level -= 1;
        }
    }

    fn skip_comment(&mut self) -> Result<(), Diagnostic> {
        let start = self.position();
        self.advance();

        loop {
            if self.cursor.is_at_end() {
                return Err(Diagnostic::at(DiagnosticKind::UnterminatedComment, start));
            }
            if self.advance() == '}' {
                break;
            }
        }

        // Only whitespace may follow on the closing line.
        let mut distance = 0;
        while !self.cursor.is_at_end_at(distance) {
            match self.at_n(distance) {
                '\n' => break,
                current if current.is_whitespace() => distance += 1,
                _ => {
                    return Err(Diagnostic::new(
                        DiagnosticKind::CodeAfterComment,
                        self.line,
                        self.column + distance,
                    ))
                }
            }
        }

        Ok(())
    }

    fn read_punctuation(&mut self) -> Result<(), Diagnostic> {
        let (line, column) = (self.line, self.column);
        let current = self.at();
        let followed_by_equals = self.at_n(1) == '=';

        let (kind, width) = match current {
            '"' => return self.read_quoted_string(),
            '\'' => return self.read_quoted_character(),
            '(' => {
                if self.open_parens == 0 {
                    self.outermost_paren = Some(self.position());
                }
                self.open_parens += 1;
                (TokenKind::LParen, 1)
            }
            ')' => {
                if self.open_parens == 0 {
                    let position = self.outermost_paren.unwrap_or(self.position());
                    return Err(Diagnostic::at(DiagnosticKind::UnbalancedParentheses, position));
                }
                self.open_parens -= 1;
                if self.open_parens == 0 {
                    self.outermost_paren = None;
                }
                (TokenKind::RParen, 1)
            }
            ':' => (TokenKind::Colon, 1),
            '.' => (TokenKind::Dot, 1),
            ',' => (TokenKind::Comma, 1),
            '+' => (TokenKind::Plus, 1),
            '-' => (TokenKind::Minus, 1),
            '*' => (TokenKind::Times, 1),
            '/' => (TokenKind::Divide, 1),
            '%' => (TokenKind::Modulo, 1),
            '=' if followed_by_equals => (TokenKind::Equal, 2),
            '=' => (TokenKind::Assign, 1),
            '!' if followed_by_equals => (TokenKind::NotEqual, 2),
            '!' => return Err(self.error(DiagnosticKind::MalformedOperator { operator: '!' })),
            '<' if followed_by_equals => (TokenKind::LessThanEqual, 2),
            '<' => (TokenKind::LessThan, 1),
            '>' if followed_by_equals => (TokenKind::GreaterThanEqual, 2),
            '>' => (TokenKind::GreaterThan, 1),
            _ => {
                return Err(self.error(DiagnosticKind::UnrecognisedCharacter { character: current }))
            }
        };

        for _ in 0..width {
            self.advance();
        }
        self.push(MK_TOKEN!(kind, line, column));

        Ok(())
    }

    /// Strings may span lines; embedded newlines move the position but
    /// never produce NEWLINE tokens. The value is the raw text between
    /// the quotes, escapes included.
    fn read_quoted_string(&mut self) -> Result<(), Diagnostic> {
        let start = self.position();
        self.advance();

        let mut value = String::new();
        loop {
            if self.cursor.is_at_end() {
                return Err(Diagnostic::at(DiagnosticKind::UnterminatedString, start));
            }
            match self.advance() {
                '"' => break,
                '\\' => {
                    value.push('\\');
                    if !self.cursor.is_at_end() {
                        value.push(self.advance());
                    }
                }
                current => value.push(current),
            }
        }

        self.push(MK_TOKEN!(TokenKind::QuotedString, start.line, start.column, value));
        Ok(())
    }

    fn read_quoted_character(&mut self) -> Result<(), Diagnostic> {
        let start = self.position();
        self.advance();

        if self.cursor.is_at_end() || self.at() == '\n' {
            return Err(Diagnostic::at(DiagnosticKind::UnterminatedCharacter, start));
        }
        let character = self.advance();

        if self.cursor.is_at_end() || self.at() != '\'' {
            return Err(Diagnostic::at(DiagnosticKind::UnterminatedCharacter, start));
        }
        self.advance();

        self.push(MK_TOKEN!(
            TokenKind::QuotedCharacter,
            start.line,
            start.column,
            character.to_string()
        ));
        Ok(())
    }
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Diagnostic> {
    debug!("Lexing {} bytes", source.len());
    let tokens = Lexer::new(source).lex()?;
    debug!("Lexed {} tokens", tokens.len());
    Ok(tokens)
}
