use std::fmt::{self, Display};

// LITERALS AND REFERENCES

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableReference {
    pub name: String,
}

impl VariableReference {
    pub fn new(name: impl Into<String>) -> Self {
        VariableReference { name: name.into() }
    }
}

impl Display for VariableReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// `receiver.method(args)` or a bare `method(args)`.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCallExpr {
    pub receiver: Option<String>,
    pub method: String,
    pub arguments: Vec<Expression>,
}

impl Display for MethodCallExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(receiver) = &self.receiver {
            write!(f, "{}.", receiver)?;
        }
        write!(f, "{}(", self.method)?;
        write_comma_separated(f, &self.arguments)?;
        write!(f, ")")
    }
}

// OPERATORS

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Display for MathOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            MathOperator::Add => "+",
            MathOperator::Subtract => "-",
            MathOperator::Multiply => "*",
            MathOperator::Divide => "/",
            MathOperator::Modulo => "%",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOperator {
    Equal,
    NotEqual,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,
}

impl Display for CompareOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            CompareOperator::Equal => "==",
            CompareOperator::NotEqual => "!=",
            CompareOperator::LessThan => "<",
            CompareOperator::LessThanEqual => "<=",
            CompareOperator::GreaterThan => ">",
            CompareOperator::GreaterThanEqual => ">=",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOperator {
    And,
    Or,
}

impl Display for BooleanOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BooleanOperator::And => write!(f, "and"),
            BooleanOperator::Or => write!(f, "or"),
        }
    }
}

// EXPRESSIONS

/// Every expression form. `BooleanLiteral`, `BooleanOp` and `NotOp` are
/// never produced by the parser; later stages build them.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Decimal text exactly as written.
    NumericLiteral(String),
    StringLiteral(String),
    CharLiteral(char),
    BooleanLiteral(bool),
    VariableReference(VariableReference),
    MethodCall(MethodCallExpr),
    MathOp {
        op: MathOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    CompareOp {
        op: CompareOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    BooleanOp {
        op: BooleanOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    NotOp(Box<Expression>),
    New {
        type_name: String,
        arguments: Vec<Expression>,
    },
}

impl Expression {
    pub fn math(op: MathOperator, left: Expression, right: Expression) -> Self {
        Expression::MathOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn compare(op: CompareOperator, left: Expression, right: Expression) -> Self {
        Expression::CompareOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expression::VariableReference(VariableReference::new(name))
    }

    fn precedence(&self) -> u8 {
        match self {
            Expression::BooleanOp {
                op: BooleanOperator::Or,
                ..
            } => 1,
            Expression::BooleanOp {
                op: BooleanOperator::And,
                ..
            } => 2,
            Expression::NotOp(_) => 3,
            Expression::CompareOp { .. } => 4,
            Expression::MathOp {
                op: MathOperator::Add | MathOperator::Subtract,
                ..
            } => 5,
            Expression::MathOp { .. } => 6,
            _ => 7,
        }
    }
}

fn write_operand(
    f: &mut fmt::Formatter<'_>,
    operand: &Expression,
    parent: u8,
    is_right: bool,
) -> fmt::Result {
    // Operators are left-associative, so an equal-precedence right
    // operand needs its parentheses back.
    let precedence = operand.precedence();
    if precedence < parent || (is_right && precedence == parent) {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

fn write_comma_separated(f: &mut fmt::Formatter<'_>, items: &[Expression]) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parent = self.precedence();
        match self {
            Expression::NumericLiteral(text) => write!(f, "{}", text),
            Expression::StringLiteral(text) => write!(f, "\"{}\"", text),
            Expression::CharLiteral(character) => write!(f, "'{}'", character),
            Expression::BooleanLiteral(value) => write!(f, "{}", value),
            Expression::VariableReference(reference) => write!(f, "{}", reference),
            Expression::MethodCall(call) => write!(f, "{}", call),
            Expression::MathOp { op, left, right } => {
                write_operand(f, left, parent, false)?;
                write!(f, " {} ", op)?;
                write_operand(f, right, parent, true)
            }
            Expression::CompareOp { op, left, right } => {
                write_operand(f, left, parent, false)?;
                write!(f, " {} ", op)?;
                write_operand(f, right, parent, true)
            }
            Expression::BooleanOp { op, left, right } => {
                write_operand(f, left, parent, false)?;
                write!(f, " {} ", op)?;
                write_operand(f, right, parent, true)
            }
            Expression::NotOp(operand) => {
                write!(f, "not ")?;
                write_operand(f, operand, parent, false)
            }
            Expression::New {
                type_name,
                arguments,
            } => {
                write!(f, "new {}(", type_name)?;
                write_comma_separated(f, arguments)?;
                write!(f, ")")
            }
        }
    }
}
