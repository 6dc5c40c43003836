use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, LITERAL_LOOKUP, RESERVED_LOOKUP};

lazy_static! {
    // The identifier alphabet also admits digits and `-`, so both
    // patterns are tried and the longer match decides the kind.
    static ref NUMBER_PATTERN: Regex = Regex::new("^-?[0-9]+(\\.[0-9]+)?").unwrap();
    static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[a-zA-Z0-9_@-]+").unwrap();
    static ref PATH_PATTERN: Regex = Regex::new("^[^\\s{}]+").unwrap();
}

/// A pull-based scanner over the source text. The parser requests one
/// token at a time; nothing is tokenized ahead of the grammar, which is
/// what lets `next_pattern_token` switch the lexical rules for include
/// patterns mid-stream.
pub struct Scanner<'src> {
    source: &'src str,
    pos: usize,
    line: u32,
    column: u32,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Scanner<'src> {
        Scanner {
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// The scanner's current position, 1-indexed.
    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    fn remainder(&self) -> &'src str {
        &self.source[self.pos..]
    }

    fn peek_char(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Consumes one character, keeping the line/column counters current.
    fn bump(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn bump_str(&mut self, text: &str) {
        for _ in text.chars() {
            self.bump();
        }
    }

    /// Returns the next meaningful token, skipping whitespace and all
    /// three comment forms. At end of input an `EOF` token is returned,
    /// repeatedly if asked again.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        self.skip_trivia()?;

        let start = self.position();
        let ch = match self.peek_char() {
            Some(ch) => ch,
            None => {
                return Ok(MK_TOKEN!(
                    TokenKind::EOF,
                    String::from("EOF"),
                    Span {
                        start: start.clone(),
                        end: start
                    }
                ))
            }
        };

        match ch {
            '$' if self.remainder().starts_with("${") => self.scan_expression(),
            '\'' | '"' => self.scan_string(ch),
            '=' => Ok(self.symbol_token(TokenKind::Assignment, "=")),
            '{' => Ok(self.symbol_token(TokenKind::OpenCurly, "{")),
            '}' => Ok(self.symbol_token(TokenKind::CloseCurly, "}")),
            '(' => Ok(self.symbol_token(TokenKind::OpenParen, "(")),
            ')' => Ok(self.symbol_token(TokenKind::CloseParen, ")")),
            '.' => Ok(self.symbol_token(TokenKind::Dot, ".")),
            ':' => Ok(self.symbol_token(TokenKind::Colon, ":")),
            ',' => Ok(self.symbol_token(TokenKind::Comma, ",")),
            _ => {
                let number = NUMBER_PATTERN.find(self.remainder());
                let identifier = IDENTIFIER_PATTERN.find(self.remainder());

                // Longest match wins, so `404page` stays one identifier.
                // On a tie the lexeme is a number; `-7` fits both
                // alphabets.
                match (number, identifier) {
                    (Some(number), Some(identifier)) if identifier.end() > number.end() => {
                        let value = identifier.as_str().to_string();
                        Ok(self.identifier_token(value))
                    }
                    (Some(number), _) => {
                        let value = number.as_str().to_string();
                        Ok(self.text_token(TokenKind::Number, value))
                    }
                    (None, Some(identifier)) => {
                        let value = identifier.as_str().to_string();
                        Ok(self.identifier_token(value))
                    }
                    (None, None) => Err(Error::new(
                        ErrorImpl::UnexpectedToken {
                            expected: String::from("a token"),
                            found: ch.to_string(),
                        },
                        start,
                    )),
                }
            }
        }
    }

    /// Scans the argument of an `include:` directive: either a quoted
    /// string or a maximal run of non-whitespace, non-brace characters.
    /// Bare patterns may contain `/`, which the regular token alphabet
    /// does not admit; `{`/`}` stay structural so a pattern ending a
    /// block does not swallow the closing brace.
    pub fn next_pattern_token(&mut self) -> Result<Token, Error> {
        self.skip_trivia()?;

        match self.peek_char() {
            None => {
                let start = self.position();
                Ok(MK_TOKEN!(
                    TokenKind::EOF,
                    String::from("EOF"),
                    Span {
                        start: start.clone(),
                        end: start
                    }
                ))
            }
            Some('\'') => self.scan_string('\''),
            Some('"') => self.scan_string('"'),
            Some(ch) => match PATH_PATTERN.find(self.remainder()) {
                Some(matched) => {
                    let value = matched.as_str().to_string();
                    Ok(self.text_token(TokenKind::PathPattern, value))
                }
                None => Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        expected: String::from("an include pattern"),
                        found: ch.to_string(),
                    },
                    self.position(),
                )),
            },
        }
    }

    fn skip_trivia(&mut self) -> Result<(), Error> {
        loop {
            match self.peek_char() {
                Some(ch) if ch.is_whitespace() => {
                    self.bump();
                }
                Some('#') => self.skip_line_comment(),
                Some('/') if self.remainder().starts_with("//") => self.skip_line_comment(),
                Some('/') if self.remainder().starts_with("/*") => self.skip_block_comment()?,
                _ => return Ok(()),
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch == '\n' {
                break;
            }
            self.bump();
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), Error> {
        let start = self.position();
        self.bump_str("/*");

        while !self.at_eof() {
            if self.remainder().starts_with("*/") {
                self.bump_str("*/");
                return Ok(());
            }
            self.bump();
        }

        Err(Error::new(
            ErrorImpl::UnterminatedLiteral {
                what: String::from("block comment"),
            },
            start,
        ))
    }

    /// Scans a quoted string. Only the delimiter and a literal backslash
    /// can be escaped; any other backslash sequence is kept
    /// character-for-character. Strings may span newlines.
    fn scan_string(&mut self, quote: char) -> Result<Token, Error> {
        let start = self.position();
        self.bump();

        let mut value = String::new();
        loop {
            match self.peek_char() {
                None => {
                    return Err(Error::new(
                        ErrorImpl::UnterminatedLiteral {
                            what: String::from("string literal"),
                        },
                        start,
                    ))
                }
                Some('\\') => {
                    self.bump();
                    match self.peek_char() {
                        None => {
                            return Err(Error::new(
                                ErrorImpl::UnterminatedLiteral {
                                    what: String::from("string literal"),
                                },
                                start,
                            ))
                        }
                        Some(next) if next == quote || next == '\\' => {
                            value.push(next);
                            self.bump();
                        }
                        Some(next) => {
                            value.push('\\');
                            value.push(next);
                            self.bump();
                        }
                    }
                }
                Some(ch) if ch == quote => {
                    self.bump();
                    return Ok(MK_TOKEN!(
                        TokenKind::String,
                        value,
                        Span {
                            start,
                            end: self.position()
                        }
                    ));
                }
                Some(ch) => {
                    value.push(ch);
                    self.bump();
                }
            }
        }
    }

    /// Captures the raw text of a `${...}` expression up to the balanced
    /// closing brace. Braces inside quoted runs or behind a backslash do
    /// not count towards the depth; the content is never interpreted.
    fn scan_expression(&mut self) -> Result<Token, Error> {
        let start = self.position();
        self.bump_str("${");

        let content_start = self.pos;
        let mut depth = 1;
        let mut in_string: Option<char> = None;

        while let Some(ch) = self.peek_char() {
            match in_string {
                Some(quote) => {
                    if ch == '\\' {
                        self.bump();
                        self.bump();
                        continue;
                    }
                    if ch == quote {
                        in_string = None;
                    }
                    self.bump();
                }
                None => match ch {
                    '\'' | '"' => {
                        in_string = Some(ch);
                        self.bump();
                    }
                    '\\' => {
                        self.bump();
                        self.bump();
                    }
                    '{' => {
                        depth += 1;
                        self.bump();
                    }
                    '}' => {
                        depth -= 1;
                        if depth == 0 {
                            let source = self.source[content_start..self.pos].to_string();
                            self.bump();
                            return Ok(MK_TOKEN!(
                                TokenKind::Expression,
                                source,
                                Span {
                                    start,
                                    end: self.position()
                                }
                            ));
                        }
                        self.bump();
                    }
                    _ => {
                        self.bump();
                    }
                },
            }
        }

        Err(Error::new(ErrorImpl::UnterminatedExpression, start))
    }

    fn symbol_token(&mut self, kind: TokenKind, value: &str) -> Token {
        let start = self.position();
        self.bump_str(value);
        MK_TOKEN!(
            kind,
            String::from(value),
            Span {
                start,
                end: self.position()
            }
        )
    }

    fn text_token(&mut self, kind: TokenKind, value: String) -> Token {
        let start = self.position();
        self.bump_str(&value);
        MK_TOKEN!(
            kind,
            value,
            Span {
                start,
                end: self.position()
            }
        )
    }

    fn identifier_token(&mut self, value: String) -> Token {
        let kind = if let Some(kind) = RESERVED_LOOKUP.get(value.as_str()) {
            *kind
        } else if let Some(kind) = LITERAL_LOOKUP.get(value.to_lowercase().as_str()) {
            *kind
        } else {
            TokenKind::Identifier
        };
        self.text_token(kind, value)
    }
}

/// Collects the entire token stream of a document. Include-pattern
/// context switching is the parser's job, so this is only suitable for
/// token dumps and tests; the parser drives [`Scanner`] incrementally.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut scanner = Scanner::new(source);
    let mut tokens = vec![];

    loop {
        let token = scanner.next_token()?;
        let at_eof = token.kind == TokenKind::EOF;
        tokens.push(token);
        if at_eof {
            return Ok(tokens);
        }
    }
}
