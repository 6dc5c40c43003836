//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms the
//! scanner's token stream into the Fusion syntax tree. It handles:
//!
//! - Statement parsing (include directives and definitions)
//! - Dotted paths with quoted, meta and `prototype(...)` segments
//! - Value parsing (literals, object names, `${...}` expressions)
//! - Nested blocks to arbitrary depth
//! - Opt-in source location decoration

pub mod parser;
pub mod stmt;
pub mod value;
