//! Lexical analysis module for the parser.
//!
//! This module contains the scanner that turns Fusion source text into
//! a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using regex patterns
//! - Recognition of identifiers, literals, symbols and `${...}` expressions
//! - The include-pattern scanning mode
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
