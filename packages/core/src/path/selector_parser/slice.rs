//! Slice parsing: `[start:end]`

use super::core::SelectorParser;
use crate::error::ParseResult;
use crate::path::{
    ast::PathSegment,
    tokens::{Token, integer_literal},
};

/// Parse the remainder of a slice; the next token must be the colon
///
/// Either bound may be omitted. A second colon (slice step) is rejected.
pub(super) fn parse_slice(
    parser: &mut SelectorParser<'_>,
    start: Option<i64>,
) -> ParseResult<PathSegment> {
    parser.expect_token(&Token::Colon)?;

    let end = match parser.peek_token() {
        Some(Token::Name(name)) => match integer_literal(name) {
            Some(end) => {
                parser.consume_token();
                Some(end)
            }
            None => return Err(parser.unexpected("invalid slice bound")),
        },
        _ => None,
    };

    match parser.peek_token() {
        Some(Token::RightBracket) => {
            parser.consume_token();
            Ok(PathSegment::Slice { start, end })
        }
        Some(Token::Colon) => Err(parser.error("slice step is not supported")),
        _ => Err(parser.unexpected("unbalanced '[': expected ']' after slice")),
    }
}
