#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use parser::parser::{parse, ParseOptions};

/// A 1-indexed line/column position in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn origin() -> Self {
        Position { line: 1, column: 1 }
    }
}

/// The source region covered by a token or AST node, from the first
/// character of its first token to just past its last token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

pub fn get_line_at_position<'a>(source: &'a str, position: &Position) -> &'a str {
    source
        .lines()
        .nth(position.line as usize - 1)
        .unwrap_or("")
}

pub fn display_error(error: &Error, source: &str) {
    /*
        Error: name (tip)
        -> line 20, column 9
           |
        20 | root = #
           | -------^
    */

    let position = error.get_position();
    let line_text = get_line_at_position(source, position);

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> line {}, column {}", position.line, position.column);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
