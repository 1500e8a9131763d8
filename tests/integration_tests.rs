//! Integration tests for the complete front end.
//!
//! These tests drive source text through tokenization and parsing via the
//! public API and check the resulting tree, the diagnostics and the
//! printed form.

use tran::{
    ast::{
        expressions::Expression,
        statements::{ElseBody, Statement},
    },
    errors::errors::DiagnosticKind,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parse_source,
    parser::parser::parse,
    render_diagnostic,
};

const ACCOUNTS: &str = "\
interface Account
\tdeposit(number amount)
\tbalance(): number

{ A plain account with an overdraft check }
class Checking implements Account
\tnumber total, limit

\tconstruct(number start)
\t\ttotal = start
\t\tlimit = 0

\tdeposit(number amount)
\t\ttotal = total + amount

\tbalance(): number result
\t\tresult = total

\tprivate overdrawn(): boolean flag
\t\tif total < limit
\t\t\tflag = isTrue()
\t\telse
\t\t\tflag = isFalse()

class Bank
\tshared main()
\t\tChecking account
\t\tnumber value, counter
\t\taccount = new Checking(10)
\t\taccount.deposit(5)
\t\tvalue = account.balance()
\t\tloop counter = counter < 3
\t\t\tconsole.print(value * 2, 'x', \"done\")
";

#[test]
fn test_parse_multi_class_program() {
    let program = parse_source(ACCOUNTS).unwrap();

    assert_eq!(program.interfaces.len(), 1);
    assert_eq!(program.interfaces[0].methods.len(), 2);

    let names: Vec<_> = program.classes.iter().map(|class| class.name.as_str()).collect();
    assert_eq!(names, vec!["Checking", "Bank"]);

    let checking = &program.classes[0];
    assert_eq!(checking.interfaces, vec!["Account"]);
    assert_eq!(checking.members.len(), 2);
    assert_eq!(checking.constructors.len(), 1);
    assert_eq!(checking.constructors[0].statements.len(), 2);
    assert_eq!(checking.methods.len(), 3);
    assert!(checking.methods[2].is_private);

    let main = &program.classes[1].methods[0];
    assert!(main.is_shared);
    assert_eq!(main.locals.len(), 3);
    assert_eq!(main.statements.len(), 4);
}

#[test]
fn test_statement_shapes() {
    let program = parse_source(ACCOUNTS).unwrap();
    let statements = &program.classes[1].methods[0].statements;

    match &statements[0] {
        Statement::Assignment(assignment) => {
            assert!(matches!(assignment.value, Expression::New { .. }));
        }
        other => panic!("expected assignment, got {:?}", other),
    }
    match &statements[1] {
        Statement::MethodCall(call) => {
            assert_eq!(call.targets, None);
            assert_eq!(call.call.receiver.as_deref(), Some("account"));
        }
        other => panic!("expected call, got {:?}", other),
    }
    match &statements[2] {
        Statement::MethodCall(call) => assert!(call.targets.is_some()),
        other => panic!("expected call, got {:?}", other),
    }
    match &statements[3] {
        Statement::Loop(loop_stmt) => {
            assert!(loop_stmt.loop_variable.is_some());
            let Statement::MethodCall(print) = &loop_stmt.body[0] else {
                panic!("expected call in loop body");
            };
            assert_eq!(print.call.arguments.len(), 3);
        }
        other => panic!("expected loop, got {:?}", other),
    }

    let overdrawn = &program.classes[0].methods[2].statements[0];
    let Statement::If(if_stmt) = overdrawn else {
        panic!("expected if");
    };
    assert!(matches!(if_stmt.else_body, Some(ElseBody::Block(_))));
}

#[test]
fn test_printed_program_is_stable() {
    let program = parse_source(ACCOUNTS).unwrap();

    let printed = program.to_string();
    let reparsed = parse_source(&printed).unwrap();

    assert_eq!(reparsed, program);
    assert_eq!(reparsed.to_string(), printed);
}

#[test]
fn test_spaces_and_tabs_are_interchangeable() {
    let tabs = "class C\n\tm()\n\t\tx = 1\n";
    let spaces = "class C\n    m()\n        x = 1\n";

    assert_eq!(parse_source(tabs).unwrap(), parse_source(spaces).unwrap());
}

#[test]
fn test_parse_source_matches_separate_stages() {
    let tokens = tokenize(ACCOUNTS).unwrap();
    assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::Dedent));

    assert_eq!(parse(tokens).unwrap(), parse_source(ACCOUNTS).unwrap());
}

#[test]
fn test_lexer_error_surfaces_through_parse_source() {
    let error = parse_source("class C\n\tnumber a\n\tm()\n\t\tx = 1 ! 2\n").unwrap_err();

    assert_eq!(error.kind(), &DiagnosticKind::MalformedOperator { operator: '!' });
    assert_eq!((error.line(), error.column()), (4, 9));
}

#[test]
fn test_unbalanced_parentheses_reported_at_opener() {
    let error = parse_source("class C\n\tm()\n\t\tx = f((1)\n").unwrap_err();

    assert_eq!(error.kind(), &DiagnosticKind::UnbalancedParentheses);
    assert_eq!((error.line(), error.column()), (3, 8));
}

#[test]
fn test_rendered_parse_error() {
    let source = "class C\n\tm()\n\t\tif 3\n\t\t\tx = 1\n";
    let error = parse_source(source).unwrap_err();
    let rendered = render_diagnostic(&error, source, "bank.tran");

    let lines: Vec<_> = rendered.lines().collect();
    assert!(lines[0].starts_with("Error: ExpectedBooleanExpression: expected a boolean expression but found 3"));
    assert_eq!(lines[1], "-> bank.tran:3:6");
    assert_eq!(lines[3], "3 | if 3");
    assert_eq!(lines[4], "  | ---^");
}
