//! Name token scanning

use super::{characters::is_name_char, core::PathParser};
use crate::path::tokens::Token;

/// Scan a run of name characters starting at `start`
///
/// Integer literals are lexed as names too; the selector parser decides from
/// context whether a name is a field key, an index or a slice bound.
pub(crate) fn parse_name(parser: &mut PathParser<'_>, chars: &[char], start: usize) -> usize {
    let mut end = start;
    while end + 1 < chars.len() && is_name_char(chars[end + 1]) {
        end += 1;
    }
    let name: String = chars[start..=end].iter().collect();
    parser.tokens.push_back((Token::Name(name), start));
    end
}
