//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into tokens for parsing. It handles:
//!
//! - Keywords and identifiers, numbers, string and character literals
//! - One- and two-character operators
//! - `{ ... }` comments, which may span lines
//! - Indentation, turned into synthetic INDENT/DEDENT tokens
//! - Parenthesis balance across lines

pub mod cursor;
pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod property_tests;
