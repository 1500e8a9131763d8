use std::fmt::{self, Display, Write};

use super::{
    expressions::Expression,
    statements::{write_block, Statement},
};

/// Root of a parsed source file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub classes: Vec<Class>,
    pub interfaces: Vec<Interface>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Interface {
    pub name: String,
    pub methods: Vec<MethodHeader>,
}

/// A method signature, as listed by an interface.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodHeader {
    pub name: String,
    pub parameters: Vec<VariableDeclaration>,
    pub returns: Vec<ReturnDeclaration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub name: String,
    pub interfaces: Vec<String>,
    pub constructors: Vec<Constructor>,
    pub methods: Vec<MethodDeclaration>,
    pub members: Vec<Member>,
}

/// A typed name. Members and locals may carry an initializer
/// (`number a = 5`); parameters never do.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub type_name: String,
    pub name: String,
    pub initializer: Option<Expression>,
}

impl VariableDeclaration {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        VariableDeclaration {
            type_name: type_name.into(),
            name: name.into(),
            initializer: None,
        }
    }

    pub fn with_initializer(mut self, initializer: Expression) -> Self {
        self.initializer = Some(initializer);
        self
    }
}

/// A declared return value; the name may be left off (`: number`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnDeclaration {
    pub type_name: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub declaration: VariableDeclaration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Constructor {
    pub parameters: Vec<VariableDeclaration>,
    pub locals: Vec<VariableDeclaration>,
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDeclaration {
    pub name: String,
    pub is_private: bool,
    pub is_shared: bool,
    pub parameters: Vec<VariableDeclaration>,
    pub returns: Vec<ReturnDeclaration>,
    pub locals: Vec<VariableDeclaration>,
    pub statements: Vec<Statement>,
}

impl Display for VariableDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.type_name, self.name)?;
        if let Some(initializer) = &self.initializer {
            write!(f, " = {}", initializer)?;
        }
        Ok(())
    }
}

impl Display for ReturnDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} {}", self.type_name, name),
            None => write!(f, "{}", self.type_name),
        }
    }
}

fn write_list<T: Display>(out: &mut impl Write, items: &[T]) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            out.write_str(", ")?;
        }
        write!(out, "{}", item)?;
    }
    Ok(())
}

fn write_signature(
    out: &mut impl Write,
    name: &str,
    parameters: &[VariableDeclaration],
    returns: &[ReturnDeclaration],
) -> fmt::Result {
    write!(out, "{}(", name)?;
    write_list(out, parameters)?;
    out.write_str(")")?;
    if !returns.is_empty() {
        out.write_str(": ")?;
        write_list(out, returns)?;
    }
    out.write_str("\n")
}

fn write_locals(out: &mut impl Write, locals: &[VariableDeclaration]) -> fmt::Result {
    for local in locals {
        writeln!(out, "\t\t{}", local)?;
    }
    Ok(())
}

impl Display for MethodHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_signature(f, &self.name, &self.parameters, &self.returns)
    }
}

impl Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "interface {}", self.name)?;
        for method in &self.methods {
            write!(f, "\t{}", method)?;
        }
        Ok(())
    }
}

impl Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class {}", self.name)?;
        if !self.interfaces.is_empty() {
            write!(f, " implements {}", self.interfaces.join(", "))?;
        }
        writeln!(f)?;

        for member in &self.members {
            writeln!(f, "\t{}", member.declaration)?;
        }
        for constructor in &self.constructors {
            f.write_str("\tconstruct(")?;
            write_list(f, &constructor.parameters)?;
            f.write_str(")\n")?;
            write_locals(f, &constructor.locals)?;
            write_block(f, &constructor.statements, 2)?;
        }
        for method in &self.methods {
            f.write_str("\t")?;
            if method.is_private {
                f.write_str("private ")?;
            }
            if method.is_shared {
                f.write_str("shared ")?;
            }
            write_signature(f, &method.name, &method.parameters, &method.returns)?;
            write_locals(f, &method.locals)?;
            write_block(f, &method.statements, 2)?;
        }
        Ok(())
    }
}

impl Display for Program {
    /// Interfaces print first, then classes, each separated by a blank line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for interface in &self.interfaces {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{}", interface)?;
            first = false;
        }
        for class in &self.classes {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{}", class)?;
            first = false;
        }
        Ok(())
    }
}
