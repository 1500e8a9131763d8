use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::{
    ast::expressions::{CompareOperator, MathOperator},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

lazy_static! {
    /// Operators joining terms in an `Expression`.
    pub static ref ADDITIVE_LOOKUP: HashMap<TokenKind, MathOperator> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Plus, MathOperator::Add);
        map.insert(TokenKind::Minus, MathOperator::Subtract);
        map
    };

    /// Operators joining factors in a `Term`.
    pub static ref MULTIPLICATIVE_LOOKUP: HashMap<TokenKind, MathOperator> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Times, MathOperator::Multiply);
        map.insert(TokenKind::Divide, MathOperator::Divide);
        map.insert(TokenKind::Modulo, MathOperator::Modulo);
        map
    };

    pub static ref COMPARE_LOOKUP: HashMap<TokenKind, CompareOperator> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Equal, CompareOperator::Equal);
        map.insert(TokenKind::NotEqual, CompareOperator::NotEqual);
        map.insert(TokenKind::LessThan, CompareOperator::LessThan);
        map.insert(TokenKind::LessThanEqual, CompareOperator::LessThanEqual);
        map.insert(TokenKind::GreaterThan, CompareOperator::GreaterThan);
        map.insert(TokenKind::GreaterThanEqual, CompareOperator::GreaterThanEqual);
        map
    };
}

/// Removes the head token if `lookup` maps it to an operator.
pub fn take_operator<T: Copy>(parser: &mut Parser, lookup: &HashMap<TokenKind, T>) -> Option<T> {
    let kind = parser.stream().peek_kind_at(0)?;
    let operator = *lookup.get(&kind)?;
    parser.match_and_remove(kind);
    Some(operator)
}
