use crate::{
    ast::ast::{Definition, Include, PathSegment, Property, Prototype, Statement},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, value::parse_value};

pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    // `include` is a directive only in statement-initial position;
    // inside a path it is an ordinary property name.
    if parser.current_token_kind()? == TokenKind::Include {
        return parse_include_stmt(parser);
    }

    parse_definition_stmt(parser)
}

pub fn parse_include_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let start = parser.loc_start()?;

    parser.advance()?;
    parser.expect(TokenKind::Colon)?;

    let token = parser.advance_pattern()?;
    let pattern = match token.kind {
        TokenKind::String | TokenKind::PathPattern => token.value,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: String::from("an include pattern"),
                },
                token.span.start,
            ))
        }
    };

    Ok(Statement::Include(Include {
        pattern,
        loc: parser.loc_end(start),
    }))
}

pub fn parse_definition_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let start = parser.loc_start()?;

    let path = parse_path(parser)?;

    // Value and block are independently optional; a bare path is a
    // legal statement on its own.
    let value = if parser.current_token_kind()? == TokenKind::Assignment {
        parser.advance()?;
        Some(parse_value(parser)?)
    } else {
        None
    };

    let block = if parser.current_token_kind()? == TokenKind::OpenCurly {
        Some(parse_block(parser)?)
    } else {
        None
    };

    Ok(Statement::Definition(Definition {
        path,
        value,
        block,
        loc: parser.loc_end(start),
    }))
}

pub fn parse_block(parser: &mut Parser) -> Result<Vec<Statement>, Error> {
    parser.expect(TokenKind::OpenCurly)?;

    let mut statements = Vec::new();
    while parser.current_token_kind()? != TokenKind::CloseCurly
        && parser.current_token_kind()? != TokenKind::EOF
    {
        statements.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(statements)
}

fn parse_path(parser: &mut Parser) -> Result<Vec<PathSegment>, Error> {
    let mut segments = vec![parse_path_segment(parser)?];

    while parser.current_token_kind()? == TokenKind::Dot {
        parser.advance()?;
        segments.push(parse_path_segment(parser)?);
    }

    Ok(segments)
}

fn parse_path_segment(parser: &mut Parser) -> Result<PathSegment, Error> {
    let start = parser.loc_start()?;

    match parser.current_token_kind()? {
        TokenKind::Prototype => {
            let token = parser.advance()?;
            if parser.current_token_kind()? != TokenKind::OpenParen {
                // `prototype` without a call form is a plain property
                return Ok(PathSegment::Property(Property {
                    name: token.value,
                    loc: parser.loc_end(start),
                }));
            }

            parser.advance()?;
            let name = parse_prototype_name(parser)?;
            parser.expect(TokenKind::CloseParen)?;

            Ok(PathSegment::Prototype(Prototype {
                name,
                loc: parser.loc_end(start),
            }))
        }
        // Quoted segments arrive unescaped; numeric and reserved-word
        // tokens are valid property names (`1 = ...`, `true = ...`)
        TokenKind::String
        | TokenKind::Identifier
        | TokenKind::Number
        | TokenKind::Include
        | TokenKind::True
        | TokenKind::False
        | TokenKind::Null => {
            let token = parser.advance()?;
            Ok(PathSegment::Property(Property {
                name: token.value,
                loc: parser.loc_end(start),
            }))
        }
        TokenKind::EOF => {
            let token = parser.current_token()?;
            Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: String::from("a path segment"),
                },
                token.span.start.clone(),
            ))
        }
        _ => {
            let token = parser.current_token()?;
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: String::from("a path segment"),
                    found: token.value.clone(),
                },
                token.span.start.clone(),
            ))
        }
    }
}

/// Rebuilds the raw name inside `prototype(...)` by concatenating the
/// identifier, number and `.`/`:` tokens up to the closing paren, e.g.
/// `My.Package:Object.Name`.
fn parse_prototype_name(parser: &mut Parser) -> Result<String, Error> {
    let mut name = String::new();

    loop {
        match parser.current_token_kind()? {
            TokenKind::Identifier
            | TokenKind::Number
            | TokenKind::Dot
            | TokenKind::Colon
            | TokenKind::Include
            | TokenKind::Prototype
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Null => {
                name.push_str(&parser.advance()?.value);
            }
            _ => break,
        }
    }

    if name.is_empty() {
        let token = parser.current_token()?;
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from("a prototype name"),
                found: token.value.clone(),
            },
            token.span.start.clone(),
        ));
    }

    Ok(name)
}
