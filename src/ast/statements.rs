use std::fmt::{self, Write};

use super::expressions::{Expression, MethodCallExpr, VariableReference};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assignment(AssignmentStmt),
    If(IfStmt),
    Loop(LoopStmt),
    MethodCall(MethodCallStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub targets: Vec<VariableReference>,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expression,
    pub then_body: Vec<Statement>,
    /// `None` means no `else` was written.
    pub else_body: Option<ElseBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElseBody {
    Statement(Box<Statement>),
    Block(Vec<Statement>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoopStmt {
    pub loop_variable: Option<VariableReference>,
    pub condition: Expression,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodCallStmt {
    /// `None` when the call's results are discarded.
    pub targets: Option<Vec<VariableReference>>,
    pub call: MethodCallExpr,
}

fn indent(out: &mut impl Write, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_char('\t')?;
    }
    Ok(())
}

fn write_targets(out: &mut impl Write, targets: &[VariableReference]) -> fmt::Result {
    for (index, target) in targets.iter().enumerate() {
        if index > 0 {
            out.write_str(", ")?;
        }
        write!(out, "{}", target)?;
    }
    out.write_str(" = ")
}

pub fn write_block(out: &mut impl Write, statements: &[Statement], depth: usize) -> fmt::Result {
    for statement in statements {
        statement.write_indented(out, depth)?;
    }
    Ok(())
}

impl Statement {
    /// Writes the statement as source text on its own line, with nested
    /// bodies one tab deeper.
    pub fn write_indented(&self, out: &mut impl Write, depth: usize) -> fmt::Result {
        indent(out, depth)?;
        self.write_at(out, depth)
    }

    /// Like [`Statement::write_indented`], minus the leading indentation.
    fn write_at(&self, out: &mut impl Write, depth: usize) -> fmt::Result {
        match self {
            Statement::Assignment(assignment) => {
                write_targets(out, &assignment.targets)?;
                writeln!(out, "{}", assignment.value)
            }
            Statement::MethodCall(call) => {
                if let Some(targets) = &call.targets {
                    write_targets(out, targets)?;
                }
                writeln!(out, "{}", call.call)
            }
            Statement::If(if_stmt) => {
                writeln!(out, "if {}", if_stmt.condition)?;
                write_block(out, &if_stmt.then_body, depth + 1)?;
                match &if_stmt.else_body {
                    None => Ok(()),
                    Some(ElseBody::Block(body)) => {
                        indent(out, depth)?;
                        writeln!(out, "else")?;
                        write_block(out, body, depth + 1)
                    }
                    Some(ElseBody::Statement(statement)) => {
                        indent(out, depth)?;
                        if let Statement::If(_) = statement.as_ref() {
                            out.write_str("else ")?;
                            statement.write_at(out, depth)
                        } else {
                            writeln!(out, "else")?;
                            statement.write_indented(out, depth)
                        }
                    }
                }
            }
            Statement::Loop(loop_stmt) => {
                out.write_str("loop ")?;
                if let Some(variable) = &loop_stmt.loop_variable {
                    write!(out, "{} = ", variable)?;
                }
                writeln!(out, "{}", loop_stmt.condition)?;
                write_block(out, &loop_stmt.body, depth + 1)
            }
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
