//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Identifiers, meta-properties and reserved words
//! - Numeric, boolean and null literals
//! - String literals with the delimiter/backslash escape policy
//! - Expression capture with brace depth counting
//! - Comments in all three styles
//! - Position tracking and error cases

use super::{
    lexer::{tokenize, Scanner},
    tokens::TokenKind,
};

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar_123 @process my-element CamelCase").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "bar_123");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "@process");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "my-element");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "CamelCase");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_reserved_words() {
    let tokens = tokenize("include prototype").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Include);
    assert_eq!(tokens[1].kind, TokenKind::Prototype);
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_literals_case_insensitive() {
    let tokens = tokenize("true TRUE False false NULL null").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::True);
    assert_eq!(tokens[1].kind, TokenKind::True);
    // The raw spelling is preserved in the token value
    assert_eq!(tokens[1].value, "TRUE");
    assert_eq!(tokens[2].kind, TokenKind::False);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::Null);
    assert_eq!(tokens[5].kind, TokenKind::Null);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 -7 -100.5").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].value, "-7");
    assert_eq!(tokens[4].kind, TokenKind::Number);
    assert_eq!(tokens[4].value, "-100.5");
}

#[test]
fn test_tokenize_digit_leading_identifier() {
    // The longer match wins over the number prefix
    let tokens = tokenize("404page 2col 42").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "404page");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "2col");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "42");
}

#[test]
fn test_tokenize_symbols() {
    let tokens = tokenize("= { } ( ) . : ,").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Assignment);
    assert_eq!(tokens[1].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[2].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[3].kind, TokenKind::OpenParen);
    assert_eq!(tokens[4].kind, TokenKind::CloseParen);
    assert_eq!(tokens[5].kind, TokenKind::Dot);
    assert_eq!(tokens[6].kind, TokenKind::Colon);
    assert_eq!(tokens[7].kind, TokenKind::Comma);
    assert_eq!(tokens[8].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_dotted_name() {
    let tokens = tokenize("Neos.Fusion:Value").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "Neos");
    assert_eq!(tokens[1].kind, TokenKind::Dot);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "Fusion");
    assert_eq!(tokens[3].kind, TokenKind::Colon);
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "Value");
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#"'single' "double" 'multiple words'"#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "single");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, "double");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "multiple words");
}

#[test]
fn test_tokenize_string_escapes() {
    // Only the delimiter and a literal backslash unescape
    let tokens = tokenize(r#"'it\'s' "say \"hi\"" 'a\\b'"#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "it's");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, "say \"hi\"");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "a\\b");
}

#[test]
fn test_tokenize_string_unknown_escapes_preserved() {
    let tokens = tokenize(r#"'Neos\Neos\Fusion' "line\nbreak""#).unwrap();

    assert_eq!(tokens[0].value, "Neos\\Neos\\Fusion");
    assert_eq!(tokens[1].value, "line\\nbreak");
}

#[test]
fn test_tokenize_expression() {
    let tokens = tokenize("${props.foo}").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Expression);
    assert_eq!(tokens[0].value, "props.foo");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_expression_nested_braces() {
    let tokens = tokenize("${Array.map(items, item => {id: item})}").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Expression);
    assert_eq!(tokens[0].value, "Array.map(items, item => {id: item})");
}

#[test]
fn test_tokenize_expression_braces_in_strings() {
    let tokens = tokenize("${q(node).find('{weird}') + \"}\"}").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Expression);
    assert_eq!(tokens[0].value, "q(node).find('{weird}') + \"}\"");
}

#[test]
fn test_tokenize_line_comments() {
    let tokens = tokenize("foo // a comment\n# another one\nbar").unwrap();

    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_block_comments() {
    let tokens = tokenize("foo /* spans\nmultiple\nlines */ bar").unwrap();

    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar");
    // Line counting continues through the comment
    assert_eq!(tokens[1].span.start.line, 3);
}

#[test]
fn test_tokenize_positions() {
    let tokens = tokenize("foo = 1\nbar = 2").unwrap();

    assert_eq!(tokens[0].span.start.line, 1);
    assert_eq!(tokens[0].span.start.column, 1);
    assert_eq!(tokens[0].span.end.column, 4);
    assert_eq!(tokens[1].span.start.column, 5);
    assert_eq!(tokens[2].span.start.column, 7);
    assert_eq!(tokens[3].span.start.line, 2);
    assert_eq!(tokens[3].span.start.column, 1);
}

#[test]
fn test_pattern_mode_bare() {
    let mut scanner = Scanner::new("  My/Custom/Object.fusion\nfoo");
    let token = scanner.next_pattern_token().unwrap();

    assert_eq!(token.kind, TokenKind::PathPattern);
    assert_eq!(token.value, "My/Custom/Object.fusion");

    let next = scanner.next_token().unwrap();
    assert_eq!(next.kind, TokenKind::Identifier);
    assert_eq!(next.value, "foo");
}

#[test]
fn test_pattern_mode_stops_at_brace() {
    let mut scanner = Scanner::new("Partial.fusion}");
    let token = scanner.next_pattern_token().unwrap();

    assert_eq!(token.kind, TokenKind::PathPattern);
    assert_eq!(token.value, "Partial.fusion");

    let next = scanner.next_token().unwrap();
    assert_eq!(next.kind, TokenKind::CloseCurly);
}

#[test]
fn test_pattern_mode_rejects_bare_brace() {
    let mut scanner = Scanner::new("}");
    let error = scanner.next_pattern_token().unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_pattern_mode_quoted() {
    let mut scanner = Scanner::new("'Another/Custom/Object.fusion'");
    let token = scanner.next_pattern_token().unwrap();

    assert_eq!(token.kind, TokenKind::String);
    assert_eq!(token.value, "Another/Custom/Object.fusion");
}

#[test]
fn test_pattern_mode_at_eof() {
    let mut scanner = Scanner::new("   ");
    let token = scanner.next_pattern_token().unwrap();

    assert_eq!(token.kind, TokenKind::EOF);
}

#[test]
fn test_error_unterminated_string() {
    let error = tokenize("foo = 'never closed").unwrap_err();

    assert_eq!(error.get_error_name(), "UnterminatedLiteral");
    assert_eq!(error.get_position().line, 1);
    assert_eq!(error.get_position().column, 7);
}

#[test]
fn test_error_unterminated_block_comment() {
    let error = tokenize("foo = 1\n/* never closed").unwrap_err();

    assert_eq!(error.get_error_name(), "UnterminatedLiteral");
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 1);
}

#[test]
fn test_error_unterminated_expression() {
    let error = tokenize("value = ${a + {b: 1}").unwrap_err();

    assert_eq!(error.get_error_name(), "UnterminatedExpression");
    assert_eq!(error.get_position().column, 9);
}

#[test]
fn test_error_unrecognised_character() {
    let error = tokenize("foo = %").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().column, 7);
}

#[test]
fn test_eof_token_is_repeatable() {
    let mut scanner = Scanner::new("");
    assert_eq!(scanner.next_token().unwrap().kind, TokenKind::EOF);
    assert_eq!(scanner.next_token().unwrap().kind, TokenKind::EOF);
}
