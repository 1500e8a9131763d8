/// AST (Abstract Syntax Tree) module
/// Contains the typed tree produced by the parser
///
/// Submodules:
/// - ast: Program root and declaration nodes
/// - expressions: Expression variants and operators
/// - statements: Statement variants
///
/// Every node family is a closed enum, and every node owns its children.
/// `Display` on any node prints canonical source text.
pub mod ast;
pub mod expressions;
pub mod statements;
