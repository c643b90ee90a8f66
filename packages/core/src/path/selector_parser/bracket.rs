//! Bracket segment parsing: `[N]`, `[*]`, `[a,b]` and slices

use super::core::SelectorParser;
use crate::error::ParseResult;
use crate::path::{
    ast::PathSegment,
    tokens::{Token, integer_literal},
};

/// Parse the contents of a bracket directly attached to a segment
///
/// The opening bracket has already been consumed.
pub(super) fn parse_bracket_segment(parser: &mut SelectorParser<'_>) -> ParseResult<PathSegment> {
    match parser.peek_token() {
        Some(Token::Star) => {
            parser.consume_token();
            parser.expect_token(&Token::RightBracket)?;
            Ok(PathSegment::Wildcard)
        }
        Some(Token::Colon) => super::slice::parse_slice(parser, None),
        Some(Token::Name(name)) => match integer_literal(name) {
            Some(index) => match parser.peek_nth(1) {
                Some(Token::Colon) => {
                    parser.consume_token();
                    super::slice::parse_slice(parser, Some(index))
                }
                Some(Token::RightBracket) => {
                    parser.consume_token();
                    parser.consume_token();
                    Ok(PathSegment::Index(index))
                }
                _ => parse_key_list(parser),
            },
            None => parse_key_list(parser),
        },
        Some(Token::RightBracket) => Err(parser.error("empty brackets")),
        _ => Err(parser.unexpected("invalid bracket contents")),
    }
}

/// Parse a comma-separated multi-key projection up to the closing bracket
///
/// Each key may be a dotted chain (`[num, inner.msg]`). At least two keys are
/// required; a single non-integer name in brackets is an invalid index token.
pub(super) fn parse_key_list(parser: &mut SelectorParser<'_>) -> ParseResult<PathSegment> {
    let start = parser.position();
    let mut keys = Vec::new();

    loop {
        keys.push(parse_key_chain(parser)?);
        match parser.consume_token() {
            Some(Token::Comma) => {}
            Some(Token::RightBracket) => break,
            _ => return Err(parser.error("unbalanced '[': expected ',' or ']'")),
        }
    }

    if keys.len() < 2 {
        let key = keys.concat();
        return Err(crate::error::malformed_path_error(
            parser.input,
            format!("invalid index token '{key}': expected an integer, '*', a slice or two or more keys"),
            start,
        ));
    }

    Ok(PathSegment::MultiKey(keys))
}

/// One `name(.name)*` chain inside a key list
fn parse_key_chain(parser: &mut SelectorParser<'_>) -> ParseResult<String> {
    let mut chain = String::new();
    loop {
        match parser.peek_token() {
            Some(Token::Name(name)) => {
                chain.push_str(name);
                parser.consume_token();
            }
            _ => return Err(parser.unexpected("expected key name")),
        }
        match parser.peek_token() {
            Some(Token::Dot) => {
                parser.consume_token();
                chain.push('.');
            }
            Some(token) if token.closes_item() => return Ok(chain),
            _ => return Err(parser.unexpected("expected ',' or ']' after key")),
        }
    }
}
