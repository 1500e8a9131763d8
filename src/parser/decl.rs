use log::debug;

use crate::{
    ast::ast::{
        Class, Constructor, Interface, Member, MethodDeclaration, MethodHeader, Program,
        ReturnDeclaration, VariableDeclaration,
    },
    errors::errors::{Diagnostic, DiagnosticKind},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expression, parser::Parser, stmt::parse_body};

/// Program = ( Class | Interface )*
pub fn parse_program(parser: &mut Parser) -> Result<Program, Diagnostic> {
    let mut program = Program::default();

    loop {
        parser.skip_newlines();
        if parser.stream().done() {
            break;
        }

        if parser.match_and_remove(TokenKind::Class).is_some() {
            program.classes.push(parse_class(parser)?);
        } else if parser.match_and_remove(TokenKind::Interface).is_some() {
            program.interfaces.push(parse_interface(parser)?);
        } else {
            return Err(parser.unexpected(&[TokenKind::Class, TokenKind::Interface]));
        }
    }

    Ok(program)
}

/// Interface = "interface" WORD NEWLINE INDENT MethodHeader* DEDENT
///
/// Called with the `interface` keyword already removed.
pub fn parse_interface(parser: &mut Parser) -> Result<Interface, Diagnostic> {
    let name = parser.expect_word()?;
    parser.expect_newline()?;
    parser.expect(TokenKind::Indent)?;

    let mut methods = Vec::new();
    loop {
        parser.skip_newlines();
        match try_parse_method_header(parser)? {
            Some(header) => methods.push(header),
            None => break,
        }
    }

    parser.expect(TokenKind::Dedent)?;

    debug!("Parsed interface {} ({} methods)", name, methods.len());
    Ok(Interface { name, methods })
}

/// MethodHeader = WORD "(" ParamDecls ")" ( ":" ReturnDecls )? ( NEWLINE | lookahead DEDENT )
///
/// Only interface and class bodies look for headers: inside a method body
/// the same WORD "(" lookahead starts a call.
pub fn try_parse_method_header(parser: &mut Parser) -> Result<Option<MethodHeader>, Diagnostic> {
    if !parser
        .stream()
        .next_two_match(TokenKind::Word, TokenKind::LParen)
    {
        return Ok(None);
    }

    let name = parser.expect_word()?;
    parser.expect(TokenKind::LParen)?;
    let parameters = parse_parameter_declarations(parser)?;
    parser.expect(TokenKind::RParen)?;

    let returns = if parser.match_and_remove(TokenKind::Colon).is_some() {
        parse_return_declarations(parser)?
    } else {
        Vec::new()
    };

    parser.expect_line_end()?;

    Ok(Some(MethodHeader {
        name,
        parameters,
        returns,
    }))
}

/// ParamDecls = ( WORD WORD ( "," WORD WORD )* )?
pub fn parse_parameter_declarations(
    parser: &mut Parser,
) -> Result<Vec<VariableDeclaration>, Diagnostic> {
    let mut parameters = Vec::new();
    if !parser.stream().next_two_match(TokenKind::Word, TokenKind::Word) {
        return Ok(parameters);
    }

    loop {
        let type_name = parser.expect_word()?;
        let name = parser.expect_word()?;
        parameters.push(VariableDeclaration::new(type_name, name));

        if parser.match_and_remove(TokenKind::Comma).is_none() {
            break;
        }
    }

    Ok(parameters)
}

/// ReturnDecls = WORD WORD? ( "," WORD WORD? )*
pub fn parse_return_declarations(
    parser: &mut Parser,
) -> Result<Vec<ReturnDeclaration>, Diagnostic> {
    if !parser.stream().next_is(TokenKind::Word) {
        return Err(Diagnostic::at(
            DiagnosticKind::MissingReturnDeclaration,
            parser.get_position(),
        ));
    }

    let mut returns = Vec::new();
    loop {
        let type_name = parser.expect_word()?;
        let name = match parser.match_and_remove(TokenKind::Word) {
            Some(token) => token.value,
            None => None,
        };
        returns.push(ReturnDeclaration { type_name, name });

        if parser.match_and_remove(TokenKind::Comma).is_none() {
            break;
        }
    }

    Ok(returns)
}

/// Class = "class" WORD ( "implements" WORD ( "," WORD )* )? NEWLINE INDENT
///         ( Constructor | MethodDeclaration | Member )* DEDENT
///
/// Called with the `class` keyword already removed.
pub fn parse_class(parser: &mut Parser) -> Result<Class, Diagnostic> {
    let name = parser.expect_word()?;

    let mut interfaces = Vec::new();
    if parser
        .stream()
        .next_two_match(TokenKind::Implements, TokenKind::Word)
    {
        parser.expect(TokenKind::Implements)?;
        loop {
            interfaces.push(parser.expect_word()?);
            if parser.match_and_remove(TokenKind::Comma).is_none() {
                break;
            }
        }
    }

    parser.expect_newline()?;
    parser.expect(TokenKind::Indent)?;

    let mut class = Class {
        name,
        interfaces,
        constructors: Vec::new(),
        methods: Vec::new(),
        members: Vec::new(),
    };

    loop {
        parser.skip_newlines();
        if parser.match_and_remove(TokenKind::Dedent).is_some() {
            break;
        }

        if parser.match_and_remove(TokenKind::Construct).is_some() {
            class.constructors.push(parse_constructor(parser)?);
            continue;
        }

        let stream = parser.stream();
        if stream.next_is_either(TokenKind::Private, TokenKind::Shared)
            || stream.next_two_match(TokenKind::Word, TokenKind::LParen)
        {
            class.methods.push(parse_method_declaration(parser)?);
        } else if stream.next_two_match(TokenKind::Word, TokenKind::Word) {
            let declarations = parse_variable_declarations(parser)?;
            class
                .members
                .extend(declarations.into_iter().map(|declaration| Member { declaration }));
        } else if stream.next_is(TokenKind::Word) {
            parser.expect(TokenKind::Word)?;
            return Err(parser.unexpected(&[TokenKind::Word, TokenKind::LParen]));
        } else {
            return Err(parser.unexpected(&[
                TokenKind::Construct,
                TokenKind::Private,
                TokenKind::Shared,
                TokenKind::Word,
            ]));
        }
    }

    debug!(
        "Parsed class {} ({} constructors, {} methods, {} members)",
        class.name,
        class.constructors.len(),
        class.methods.len(),
        class.members.len()
    );
    Ok(class)
}

/// Constructor = "construct" "(" ParamDecls ")" NEWLINE Body
///
/// Called with the `construct` keyword already removed.
pub fn parse_constructor(parser: &mut Parser) -> Result<Constructor, Diagnostic> {
    parser.expect(TokenKind::LParen)?;
    let parameters = parse_parameter_declarations(parser)?;
    parser.expect(TokenKind::RParen)?;
    parser.expect_newline()?;

    let mut locals = Vec::new();
    let statements = parse_body(parser, Some(&mut locals))?;

    Ok(Constructor {
        parameters,
        locals,
        statements,
    })
}

/// MethodDeclaration = "private"? "shared"? MethodHeader Body
pub fn parse_method_declaration(parser: &mut Parser) -> Result<MethodDeclaration, Diagnostic> {
    let is_private = parser.match_and_remove(TokenKind::Private).is_some();
    let is_shared = parser.match_and_remove(TokenKind::Shared).is_some();

    let header = match try_parse_method_header(parser)? {
        Some(header) => header,
        None => {
            parser.expect(TokenKind::Word)?;
            return Err(parser.unexpected(&[TokenKind::LParen]));
        }
    };

    let mut locals = Vec::new();
    let statements = parse_body(parser, Some(&mut locals))?;

    Ok(MethodDeclaration {
        name: header.name,
        is_private,
        is_shared,
        parameters: header.parameters,
        returns: header.returns,
        locals,
        statements,
    })
}

/// VariableDeclaration = WORD NameValue ( "," NameValue )* ( NEWLINE | lookahead DEDENT )
/// NameValue = WORD ( "=" Expression )?
///
/// Every name shares the leading type; declarations come back in source order.
pub fn parse_variable_declarations(
    parser: &mut Parser,
) -> Result<Vec<VariableDeclaration>, Diagnostic> {
    let type_name = parser.expect_word()?;

    let mut declarations = Vec::new();
    loop {
        let name = parser.expect_word()?;
        let mut declaration = VariableDeclaration::new(type_name.clone(), name);
        if parser.match_and_remove(TokenKind::Assign).is_some() {
            declaration = declaration.with_initializer(parse_expression(parser)?);
        }
        declarations.push(declaration);

        if parser.match_and_remove(TokenKind::Comma).is_none() {
            break;
        }
    }

    parser.expect_line_end()?;
    Ok(declarations)
}
