//! Token definitions for path lexical analysis

use std::fmt;

/// Tokens produced by the path tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Segment separator (.)
    Dot,
    /// Left bracket ([)
    LeftBracket,
    /// Right bracket (])
    RightBracket,
    /// Multi-key separator (,)
    Comma,
    /// Slice separator (:)
    Colon,
    /// Wildcard (*), only valid as `[*]`
    Star,
    /// A run of name characters: a field name or an integer literal
    Name(String),
    /// End of input
    Eof,
}

/// Token paired with the character offset it started at
pub(crate) type Spanned = (Token, usize);

impl Token {
    /// Whether this token terminates the current bracket item
    #[inline]
    pub(crate) fn closes_item(&self) -> bool {
        matches!(self, Token::Comma | Token::RightBracket)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Dot => f.write_str("'.'"),
            Token::LeftBracket => f.write_str("'['"),
            Token::RightBracket => f.write_str("']'"),
            Token::Comma => f.write_str("','"),
            Token::Colon => f.write_str("':'"),
            Token::Star => f.write_str("'*'"),
            Token::Name(name) => write!(f, "'{name}'"),
            Token::Eof => f.write_str("end of path"),
        }
    }
}

/// Parse an integer literal as used for indices and slice bounds
///
/// Accepts an optional leading `-`; anything else (including `+`) is not an
/// integer token.
pub(crate) fn integer_literal(name: &str) -> Option<i64> {
    let digits = name.strip_prefix('-').unwrap_or(name);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse().ok()
}
