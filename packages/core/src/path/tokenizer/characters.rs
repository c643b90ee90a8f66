//! Single-character token recognition

use super::core::PathParser;
use crate::error::{ParseResult, malformed_path_error};
use crate::path::tokens::Token;

/// Parse a structural character or dispatch to name scanning
///
/// Returns the index of the last character consumed.
pub(crate) fn parse_character_token(
    parser: &mut PathParser<'_>,
    chars: &[char],
    i: usize,
) -> ParseResult<usize> {
    let token = match chars[i] {
        '.' => Token::Dot,
        '[' => Token::LeftBracket,
        ']' => Token::RightBracket,
        ',' => Token::Comma,
        ':' => Token::Colon,
        '*' => Token::Star,
        '\\' => {
            return Err(malformed_path_error(
                parser.input,
                "escape sequences are not supported in paths",
                i,
            ));
        }
        _ => return Ok(super::names::parse_name(parser, chars, i)),
    };
    parser.tokens.push_back((token, i));
    Ok(i)
}

/// Whether `c` may appear inside a name token
#[inline]
pub(crate) fn is_name_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '.' | '[' | ']' | ',' | ':' | '*' | '\\')
}
