//! Parser state and the `parse` entry point.
//!
//! The parser owns the scanner and a single lazily-filled lookahead
//! token. Grammar rules live in `stmt.rs` and `value.rs` as free
//! functions over `&mut Parser`; this module provides the token
//! consumption primitives they share and the location decorator used
//! to attach spans to nodes when the caller asks for them.

use crate::{
    ast::ast::Statement,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Scanner,
        tokens::{Token, TokenKind},
    },
    Position, Span,
};

use super::stmt::parse_stmt;

/// Options accepted by [`parse`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Attach a [`Span`] to every node the grammar constructs. Off by
    /// default; the bookkeeping costs nothing when disabled.
    pub add_location: bool,
}

/// The parser structure that maintains parsing state.
///
/// Holds the pull-based scanner, at most one token of lookahead, and
/// the end position of the last consumed token (which closes node
/// spans). A fresh instance is built per `parse` call; nothing is
/// shared across invocations.
pub struct Parser<'src> {
    scanner: Scanner<'src>,
    current: Option<Token>,
    prev_end: Position,
    add_location: bool,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, options: ParseOptions) -> Self {
        Parser {
            scanner: Scanner::new(source),
            current: None,
            prev_end: Position::origin(),
            add_location: options.add_location,
        }
    }

    fn fill(&mut self) -> Result<(), Error> {
        if self.current.is_none() {
            self.current = Some(self.scanner.next_token()?);
        }
        Ok(())
    }

    /// Returns the current token without consuming it.
    pub fn current_token(&mut self) -> Result<&Token, Error> {
        self.fill()?;
        Ok(self.current.as_ref().unwrap())
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&mut self) -> Result<TokenKind, Error> {
        Ok(self.current_token()?.kind)
    }

    /// Consumes and returns the current token.
    pub fn advance(&mut self) -> Result<Token, Error> {
        self.fill()?;
        let token = self.current.take().unwrap();
        self.prev_end = token.span.end.clone();
        Ok(token)
    }

    /// Consumes an include pattern straight from the scanner. Only
    /// valid while the lookahead buffer is empty, which holds right
    /// after the `:` of an include directive was consumed.
    pub fn advance_pattern(&mut self) -> Result<Token, Error> {
        debug_assert!(self.current.is_none());
        let token = self.scanner.next_pattern_token()?;
        self.prev_end = token.span.end.clone();
        Ok(token)
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let kind = self.current_token_kind()?;
        if kind != expected_kind {
            let token = self.current_token()?;
            return match error {
                Some(error) => Err(error),
                None if kind == TokenKind::EOF => Err(Error::new(
                    ErrorImpl::UnexpectedEndOfInput {
                        expected: String::from(expected_kind.describe()),
                    },
                    token.span.start.clone(),
                )),
                None => Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        expected: String::from(expected_kind.describe()),
                        found: token.value.clone(),
                    },
                    token.span.start.clone(),
                )),
            };
        }
        self.advance()
    }

    /// Expects a token of the specified kind with the default error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Checks whether any meaningful tokens remain.
    pub fn has_tokens(&mut self) -> Result<bool, Error> {
        Ok(self.current_token_kind()? != TokenKind::EOF)
    }

    /// Start half of the location decorator: records where the node
    /// about to be built begins. Returns `None` when locations are off,
    /// making the whole mechanism opt-in.
    pub fn loc_start(&mut self) -> Result<Option<Position>, Error> {
        if !self.add_location {
            return Ok(None);
        }
        Ok(Some(self.current_token()?.span.start.clone()))
    }

    /// Finish half of the location decorator: closes the span at the
    /// end of the last consumed token.
    pub fn loc_end(&self, start: Option<Position>) -> Option<Span> {
        start.map(|start| Span {
            start,
            end: self.prev_end.clone(),
        })
    }
}

/// Parses a Fusion document into its ordered top-level statements.
///
/// The returned tree preserves raw encounter order and is fully built
/// on success; on the first malformed construct an [`Error`] with the
/// offending line/column is returned and no tree is produced.
pub fn parse(source: &str, options: ParseOptions) -> Result<Vec<Statement>, Error> {
    let mut parser = Parser::new(source, options);

    let mut statements = vec![];
    while parser.has_tokens()? {
        statements.push(parse_stmt(&mut parser)?);
    }

    Ok(statements)
}
