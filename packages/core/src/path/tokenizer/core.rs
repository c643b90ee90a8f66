//! Core tokenizer types and parser driver

use std::collections::VecDeque;

use crate::error::{ParseResult, malformed_path_error};
use crate::path::{
    ast::Path,
    selector_parser::SelectorParser,
    tokens::{Spanned, Token},
};

/// Path parser combining tokenization and segment parsing
pub struct PathParser<'a> {
    pub(crate) input: &'a str,
    pub(crate) tokens: VecDeque<Spanned>,
}

impl<'a> PathParser<'a> {
    /// Create new path parser
    #[inline]
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            tokens: VecDeque::new(),
        }
    }

    /// Parse the complete path string into a [`Path`]
    ///
    /// # Errors
    /// Returns `ParseError::Malformed` for empty paths, empty segments,
    /// unbalanced brackets and invalid bracket contents.
    pub fn parse(mut self) -> ParseResult<Path> {
        if self.input.trim().is_empty() {
            return Err(malformed_path_error(self.input, "empty path", 0));
        }

        self.tokenize()?;

        let mut selector_parser = SelectorParser::new(&mut self.tokens, self.input);
        let segments = selector_parser.parse_segments()?;
        Ok(Path::from_segments(segments))
    }

    /// Tokenize the input into the token queue
    pub(crate) fn tokenize(&mut self) -> ParseResult<()> {
        use super::characters;

        let chars: Vec<char> = self.input.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            if !chars[i].is_whitespace() {
                i = characters::parse_character_token(self, &chars, i)?;
            }
            i += 1;
        }

        self.tokens.push_back((Token::Eof, chars.len()));
        Ok(())
    }

    /// Tokens produced so far, without positions
    #[must_use]
    pub fn tokens(&self) -> Vec<Token> {
        self.tokens.iter().map(|(token, _)| token.clone()).collect()
    }
}
