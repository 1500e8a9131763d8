use log::trace;

use crate::{
    ast::{
        ast::VariableDeclaration,
        expressions::{Expression, VariableReference},
        statements::{AssignmentStmt, ElseBody, IfStmt, LoopStmt, MethodCallStmt, Statement},
    },
    errors::errors::{Diagnostic, DiagnosticKind},
    lexer::tokens::TokenKind,
};

use super::{
    decl::parse_variable_declarations,
    expr::{parse_boolean_expression, parse_expression, try_parse_method_call},
    parser::Parser,
};

/// Body = INDENT ( VariableDeclaration | Statement )* DEDENT
///
/// `locals` is `Some` only for constructor and method bodies; declarations
/// anywhere else are rejected.
pub fn parse_body(
    parser: &mut Parser,
    locals: Option<&mut Vec<VariableDeclaration>>,
) -> Result<Vec<Statement>, Diagnostic> {
    parser.enter_nesting()?;
    let statements = parse_block(parser, locals);
    parser.leave_nesting();
    statements
}

fn parse_block(
    parser: &mut Parser,
    mut locals: Option<&mut Vec<VariableDeclaration>>,
) -> Result<Vec<Statement>, Diagnostic> {
    parser.skip_newlines();
    parser.expect(TokenKind::Indent)?;

    let mut statements = Vec::new();
    loop {
        parser.skip_newlines();
        if parser.match_and_remove(TokenKind::Dedent).is_some() {
            break;
        }

        if parser
            .stream()
            .next_two_match(TokenKind::Word, TokenKind::Word)
        {
            match locals.as_mut() {
                Some(locals) => locals.extend(parse_variable_declarations(parser)?),
                None => return Err(locals_outside_method(parser)),
            }
            continue;
        }

        statements.push(parse_statement(parser)?);
    }

    Ok(statements)
}

fn locals_outside_method(parser: &Parser) -> Diagnostic {
    Diagnostic::at(DiagnosticKind::LocalsOutsideMethod, parser.get_position())
}

pub fn parse_statement(parser: &mut Parser) -> Result<Statement, Diagnostic> {
    if parser.match_and_remove(TokenKind::If).is_some() {
        return parse_if(parser).map(Statement::If);
    }
    if parser.match_and_remove(TokenKind::Loop).is_some() {
        return parse_loop(parser).map(Statement::Loop);
    }
    if parser
        .stream()
        .next_two_match(TokenKind::Word, TokenKind::Word)
    {
        return Err(locals_outside_method(parser));
    }

    if let Some(call) = try_parse_method_call(parser)? {
        parser.expect_line_end()?;
        trace!("Parsed call statement {}", call);
        return Ok(Statement::MethodCall(MethodCallStmt {
            targets: None,
            call,
        }));
    }

    if parser.stream().next_is(TokenKind::Word) {
        return parse_assignment(parser);
    }

    Err(parser.unexpected(&[TokenKind::If, TokenKind::Loop, TokenKind::Word]))
}

/// VarRef ( "," VarRef )* "=" Expression
///
/// A call on the right-hand side makes this a `MethodCallStmt` whose
/// results land in the targets.
pub fn parse_assignment(parser: &mut Parser) -> Result<Statement, Diagnostic> {
    let mut targets = Vec::new();
    loop {
        let name = parser.expect_word()?;
        targets.push(VariableReference::new(name));
        if parser.match_and_remove(TokenKind::Comma).is_none() {
            break;
        }
    }

    parser.expect(TokenKind::Assign)?;
    let value = parse_expression(parser)?;
    parser.expect_line_end()?;

    let statement = match value {
        Expression::MethodCall(call) => Statement::MethodCall(MethodCallStmt {
            targets: Some(targets),
            call,
        }),
        value => Statement::Assignment(AssignmentStmt { targets, value }),
    };

    trace!("Parsed assignment {}", statement.to_string().trim_end());
    Ok(statement)
}

/// If = "if" BoolExpr NEWLINE Body ( "else" ( If | NEWLINE ( Body | Statement ) ) )?
///
/// Called with the `if` keyword already removed.
pub fn parse_if(parser: &mut Parser) -> Result<IfStmt, Diagnostic> {
    let condition = parse_boolean_expression(parser)?;
    parser.expect(TokenKind::Newline)?;
    let then_body = parse_body(parser, None)?;

    // A comment line between the body and `else` leaves a NEWLINE behind.
    parser.skip_newlines();
    let else_body = if parser.match_and_remove(TokenKind::Else).is_some() {
        if parser.match_and_remove(TokenKind::If).is_some() {
            parser.enter_nesting()?;
            let nested = parse_if(parser);
            parser.leave_nesting();
            Some(ElseBody::Statement(Box::new(Statement::If(nested?))))
        } else {
            parser.expect_newline()?;
            if parser.stream().next_is(TokenKind::Indent) {
                Some(ElseBody::Block(parse_body(parser, None)?))
            } else {
                Some(ElseBody::Statement(Box::new(parse_statement(parser)?)))
            }
        }
    } else {
        None
    };

    Ok(IfStmt {
        condition,
        then_body,
        else_body,
    })
}

/// Loop = "loop" ( WORD "=" )? BoolExpr NEWLINE Body
///
/// Called with the `loop` keyword already removed.
pub fn parse_loop(parser: &mut Parser) -> Result<LoopStmt, Diagnostic> {
    let loop_variable = if parser
        .stream()
        .next_two_match(TokenKind::Word, TokenKind::Assign)
    {
        let name = parser.expect_word()?;
        parser.expect(TokenKind::Assign)?;
        Some(VariableReference::new(name))
    } else {
        None
    };

    let condition = parse_boolean_expression(parser)?;
    parser.expect(TokenKind::Newline)?;
    let body = parse_body(parser, None)?;

    Ok(LoopStmt {
        loop_variable,
        condition,
        body,
    })
}
