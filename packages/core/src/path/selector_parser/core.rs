//! Core selector parser structure and the segment loop

use std::collections::VecDeque;

use crate::error::{ParseError, ParseResult, malformed_path_error};
use crate::path::{
    ast::PathSegment,
    tokens::{Spanned, Token},
};

/// Parser turning a token queue into path segments
pub(crate) struct SelectorParser<'a> {
    pub(super) tokens: &'a mut VecDeque<Spanned>,
    pub(super) input: &'a str,
}

impl<'a> SelectorParser<'a> {
    /// Create new selector parser
    #[inline]
    pub(crate) fn new(tokens: &'a mut VecDeque<Spanned>, input: &'a str) -> Self {
        Self { tokens, input }
    }

    /// Parse every segment of the path
    ///
    /// A path starts with a field name or a bracket. After that, segments are
    /// either dot-separated (`.name`, `.[a,b]`) or brackets directly attached
    /// to the previous segment.
    pub(crate) fn parse_segments(&mut self) -> ParseResult<Vec<PathSegment>> {
        let mut segments = Vec::new();

        match self.peek_token() {
            Some(Token::Name(_)) => segments.push(self.parse_field()?),
            Some(Token::LeftBracket) => {
                self.consume_token();
                segments.push(super::bracket::parse_bracket_segment(self)?);
            }
            Some(Token::Star) => return Err(self.error("wildcard must be written as [*]")),
            Some(Token::Dot) => return Err(self.error("empty segment before '.'")),
            _ => return Err(self.unexpected("path must start with a field name or '['")),
        }

        loop {
            match self.peek_token() {
                Some(Token::Eof) | None => break,
                Some(Token::Dot) => {
                    self.consume_token();
                    segments.push(self.parse_dot_segment()?);
                }
                Some(Token::LeftBracket) => {
                    self.consume_token();
                    segments.push(super::bracket::parse_bracket_segment(self)?);
                }
                Some(Token::Star) => return Err(self.error("wildcard must be written as [*]")),
                Some(Token::RightBracket) => return Err(self.error("unbalanced ']'")),
                _ => return Err(self.unexpected("expected '.' or '[' between segments")),
            }
        }

        Ok(segments)
    }

    /// Segment following a dot: a field name or a multi-key projection
    fn parse_dot_segment(&mut self) -> ParseResult<PathSegment> {
        match self.peek_token() {
            Some(Token::Name(_)) => self.parse_field(),
            Some(Token::LeftBracket) => {
                self.consume_token();
                super::bracket::parse_key_list(self)
            }
            Some(Token::Star) => Err(self.error("wildcard must be written as [*]")),
            _ => Err(self.unexpected("empty segment after '.'")),
        }
    }

    fn parse_field(&mut self) -> ParseResult<PathSegment> {
        match self.consume_token() {
            Some(Token::Name(name)) => Ok(PathSegment::Field(name)),
            _ => Err(self.error("expected field name")),
        }
    }

    /// Peek at next token without consuming
    #[inline]
    pub(super) fn peek_token(&self) -> Option<&Token> {
        self.tokens.front().map(|(token, _)| token)
    }

    /// Peek `n` tokens ahead
    #[inline]
    pub(super) fn peek_nth(&self, n: usize) -> Option<&Token> {
        self.tokens.get(n).map(|(token, _)| token)
    }

    /// Consume and return next token
    #[inline]
    pub(super) fn consume_token(&mut self) -> Option<Token> {
        self.tokens.pop_front().map(|(token, _)| token)
    }

    /// Expect specific token and consume it
    pub(super) fn expect_token(&mut self, expected: &Token) -> ParseResult<()> {
        match self.peek_token() {
            Some(actual) if actual == expected => {
                self.consume_token();
                Ok(())
            }
            _ => Err(self.unexpected(&format!("expected {expected}"))),
        }
    }

    /// Character offset of the next token
    pub(super) fn position(&self) -> usize {
        self.tokens
            .front()
            .map_or_else(|| self.input.chars().count(), |(_, position)| *position)
    }

    /// Error at the current position
    pub(super) fn error(&self, reason: &str) -> ParseError {
        malformed_path_error(self.input, reason, self.position())
    }

    /// Error at the current position naming the token found there
    pub(super) fn unexpected(&self, reason: &str) -> ParseError {
        let found = self
            .peek_token()
            .map_or_else(|| "end of path".to_string(), ToString::to_string);
        self.error(&format!("{reason}, found {found}"))
    }
}
