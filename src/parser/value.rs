use crate::{
    ast::ast::{SimpleValue, Value, ValueKind},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Parses the right-hand side of an assignment. Literal keyword forms
/// take priority; a quoted token is always a string; any other bare
/// token falls back to an object-name reference.
pub fn parse_value(parser: &mut Parser) -> Result<Value, Error> {
    let start = parser.loc_start()?;

    let kind = match parser.current_token_kind()? {
        TokenKind::String => {
            let token = parser.advance()?;
            ValueKind::Simple(SimpleValue::String(token.value))
        }
        TokenKind::Number => {
            let token = parser.advance()?;
            let number = token.value.parse::<f64>().map_err(|_| {
                Error::new(
                    ErrorImpl::UnexpectedToken {
                        expected: String::from("a number"),
                        found: token.value.clone(),
                    },
                    token.span.start.clone(),
                )
            })?;
            ValueKind::Simple(SimpleValue::Number(number))
        }
        TokenKind::True => {
            parser.advance()?;
            ValueKind::Simple(SimpleValue::Boolean(true))
        }
        TokenKind::False => {
            parser.advance()?;
            ValueKind::Simple(SimpleValue::Boolean(false))
        }
        TokenKind::Null => {
            parser.advance()?;
            ValueKind::Simple(SimpleValue::Null)
        }
        TokenKind::Expression => {
            let token = parser.advance()?;
            ValueKind::Expression(token.value)
        }
        TokenKind::Identifier => ValueKind::ObjectName(parse_object_name(parser)?),
        TokenKind::EOF => {
            let token = parser.current_token()?;
            return Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: String::from("a value"),
                },
                token.span.start.clone(),
            ));
        }
        _ => {
            let token = parser.current_token()?;
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: String::from("a value"),
                    found: token.value.clone(),
                },
                token.span.start.clone(),
            ));
        }
    };

    Ok(Value {
        kind,
        loc: parser.loc_end(start),
    })
}

/// Joins `Ident (("." | ":") Ident)*` back into the raw object name,
/// e.g. `Neos.Fusion:Value`.
fn parse_object_name(parser: &mut Parser) -> Result<String, Error> {
    let mut name = parser.expect(TokenKind::Identifier)?.value;

    loop {
        match parser.current_token_kind()? {
            TokenKind::Dot | TokenKind::Colon => {
                name.push_str(&parser.advance()?.value);
                name.push_str(&parser.expect(TokenKind::Identifier)?.value);
            }
            _ => break,
        }
    }

    Ok(name)
}
