/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the parsed Fusion tree
///
/// Submodules:
/// - ast: Statement, path segment and value definitions
pub mod ast;
