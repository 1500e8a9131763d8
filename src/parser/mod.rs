//! Parser module for building the Abstract Syntax Tree (AST).
//!
//! A recursive-descent parser over a destructive token stream. Optional
//! constructs are detected with lookahead before any token is removed, so
//! a failed `try_parse_*` leaves the stream exactly as it found it and
//! the caller can move on to the next alternative.
//!
//! Blank lines are insignificant between declarations; inside a body
//! the INDENT/DEDENT tokens delimit the block.

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod token_stream;
