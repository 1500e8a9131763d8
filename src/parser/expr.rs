use crate::{
    ast::expressions::{Expression, MethodCallExpr, VariableReference},
    errors::errors::{Diagnostic, DiagnosticKind},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{take_operator, ADDITIVE_LOOKUP, COMPARE_LOOKUP, MULTIPLICATIVE_LOOKUP},
    parser::Parser,
};

const FACTOR_STARTS: [TokenKind; 6] = [
    TokenKind::Number,
    TokenKind::Word,
    TokenKind::QuotedString,
    TokenKind::QuotedCharacter,
    TokenKind::LParen,
    TokenKind::New,
];

/// Expression = Term ( ("+"|"-") Term )*
pub fn parse_expression(parser: &mut Parser) -> Result<Expression, Diagnostic> {
    parser.enter_nesting()?;
    let expression = parse_sum(parser);
    parser.leave_nesting();
    expression
}

fn parse_sum(parser: &mut Parser) -> Result<Expression, Diagnostic> {
    let mut left = parse_term(parser)?;

    while let Some(op) = take_operator(parser, &*ADDITIVE_LOOKUP) {
        let right = parse_term(parser)?;
        left = Expression::math(op, left, right);
    }

    Ok(left)
}

/// Term = Factor ( ("*"|"/"|"%") Factor )*
pub fn parse_term(parser: &mut Parser) -> Result<Expression, Diagnostic> {
    let mut left = parse_factor(parser)?;

    while let Some(op) = take_operator(parser, &*MULTIPLICATIVE_LOOKUP) {
        let right = parse_factor(parser)?;
        left = Expression::math(op, left, right);
    }

    Ok(left)
}

pub fn parse_factor(parser: &mut Parser) -> Result<Expression, Diagnostic> {
    if let Some(token) = parser.match_and_remove(TokenKind::Number) {
        return Ok(Expression::NumericLiteral(token.text().to_string()));
    }
    if let Some(token) = parser.match_and_remove(TokenKind::QuotedString) {
        return Ok(Expression::StringLiteral(token.text().to_string()));
    }
    if parser.stream().next_is(TokenKind::QuotedCharacter) {
        let position = parser.get_position();
        let token = parser.expect(TokenKind::QuotedCharacter)?;
        return match token.text().chars().next() {
            Some(character) => Ok(Expression::CharLiteral(character)),
            None => Err(Diagnostic::at(DiagnosticKind::UnterminatedCharacter, position)),
        };
    }

    if parser.match_and_remove(TokenKind::LParen).is_some() {
        let inner = parse_expression(parser)?;
        parser.expect(TokenKind::RParen)?;
        return Ok(inner);
    }

    if parser.match_and_remove(TokenKind::New).is_some() {
        let type_name = parser.expect_word()?;
        parser.expect(TokenKind::LParen)?;
        let arguments = parse_arguments(parser)?;
        return Ok(Expression::New {
            type_name,
            arguments,
        });
    }

    if let Some(call) = try_parse_method_call(parser)? {
        return Ok(Expression::MethodCall(call));
    }

    if let Some(token) = parser.match_and_remove(TokenKind::Word) {
        return Ok(Expression::VariableReference(VariableReference::new(
            token.text(),
        )));
    }

    Err(parser.unexpected(&FACTOR_STARTS))
}

/// MethodCallExpr = ( WORD "." )? WORD "(" ( Expression ( "," Expression )* )? ")"
///
/// Returns `Ok(None)` with nothing removed unless the lookahead commits to
/// a call.
pub fn try_parse_method_call(parser: &mut Parser) -> Result<Option<MethodCallExpr>, Diagnostic> {
    let stream = parser.stream();
    let receiver = if stream.next_match(&[
        TokenKind::Word,
        TokenKind::Dot,
        TokenKind::Word,
        TokenKind::LParen,
    ]) {
        let receiver = parser.expect_word()?;
        parser.expect(TokenKind::Dot)?;
        Some(receiver)
    } else if stream.next_two_match(TokenKind::Word, TokenKind::LParen) {
        None
    } else {
        return Ok(None);
    };

    let method = parser.expect_word()?;
    parser.expect(TokenKind::LParen)?;
    let arguments = parse_arguments(parser)?;

    Ok(Some(MethodCallExpr {
        receiver,
        method,
        arguments,
    }))
}

/// Comma-separated expressions up to and including the closing `)`.
fn parse_arguments(parser: &mut Parser) -> Result<Vec<Expression>, Diagnostic> {
    let mut arguments = Vec::new();
    if parser.match_and_remove(TokenKind::RParen).is_some() {
        return Ok(arguments);
    }

    loop {
        arguments.push(parse_expression(parser)?);
        if parser.match_and_remove(TokenKind::Comma).is_none() {
            break;
        }
    }

    parser.expect(TokenKind::RParen)?;
    Ok(arguments)
}

/// BoolExpr = MethodCallExpr | Expression CompareOp Expression | VarRef
pub fn parse_boolean_expression(parser: &mut Parser) -> Result<Expression, Diagnostic> {
    let position = parser.get_position();
    let left = parse_expression(parser)?;

    if let Some(op) = take_operator(parser, &*COMPARE_LOOKUP) {
        let right = parse_expression(parser)?;
        return Ok(Expression::compare(op, left, right));
    }

    match left {
        Expression::MethodCall(_) | Expression::VariableReference(_) => Ok(left),
        other => Err(Diagnostic::at(
            DiagnosticKind::ExpectedBooleanExpression {
                found: other.to_string(),
            },
            position,
        )),
    }
}
