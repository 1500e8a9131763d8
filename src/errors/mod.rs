//! Error types and error handling for the front end.
//!
//! Both the lexer and the parser report failures through a single
//! [`Diagnostic`](errors::Diagnostic): a message category plus the 1-based
//! line and column of the offending position. There is no recovery; the
//! first diagnostic ends the call that produced it.

pub mod errors;

#[cfg(test)]
mod tests;
