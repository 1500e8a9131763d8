use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("class", TokenKind::Class);
        map.insert("interface", TokenKind::Interface);
        map.insert("implements", TokenKind::Implements);
        map.insert("construct", TokenKind::Construct);
        map.insert("private", TokenKind::Private);
        map.insert("shared", TokenKind::Shared);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("loop", TokenKind::Loop);
        map.insert("new", TokenKind::New);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Structure
    Newline,
    Indent,
    Dedent,

    // Reserved
    Class,
    Interface,
    Implements,
    Construct,
    Private,
    Shared,
    If,
    Else,
    Loop,
    New,

    Word,
    Number,
    QuotedString,
    QuotedCharacter,

    LParen,
    RParen,
    Colon,
    Dot,
    Comma,

    Assign,           // =
    Equal,            // ==
    NotEqual,         // !=
    LessThan,         // <
    LessThanEqual,    // <=
    GreaterThan,      // >
    GreaterThanEqual, // >=

    Plus,
    Minus,
    Times,
    Divide,
    Modulo,
}

impl TokenKind {
    /// Whether tokens of this kind carry their source text in `Token::value`.
    pub fn carries_value(&self) -> bool {
        matches!(
            self,
            TokenKind::Word | TokenKind::Number | TokenKind::QuotedString | TokenKind::QuotedCharacter
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Newline => "NEWLINE",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::Class => "CLASS",
            TokenKind::Interface => "INTERFACE",
            TokenKind::Implements => "IMPLEMENTS",
            TokenKind::Construct => "CONSTRUCT",
            TokenKind::Private => "PRIVATE",
            TokenKind::Shared => "SHARED",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Loop => "LOOP",
            TokenKind::New => "NEW",
            TokenKind::Word => "WORD",
            TokenKind::Number => "NUMBER",
            TokenKind::QuotedString => "QUOTEDSTRING",
            TokenKind::QuotedCharacter => "QUOTEDCHARACTER",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Colon => "COLON",
            TokenKind::Dot => "DOT",
            TokenKind::Comma => "COMMA",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Equal => "EQUAL",
            TokenKind::NotEqual => "NOTEQUAL",
            TokenKind::LessThan => "LESSTHAN",
            TokenKind::LessThanEqual => "LESSTHANEQUAL",
            TokenKind::GreaterThan => "GREATERTHAN",
            TokenKind::GreaterThanEqual => "GREATERTHANEQUAL",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Modulo => "MODULO",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
    pub value: Option<String>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}({}) at {}", self.kind, value, self.position()),
            None => write!(f, "{} at {}", self.kind, self.position()),
        }
    }
}

impl Token {
    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    /// The literal text of the token, or an empty string for kinds without one.
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}
