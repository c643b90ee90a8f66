//! Path compilation entry points

use std::sync::Arc;

use super::{ast::Path, cache::global_cache, tokenizer::PathParser};
use crate::error::ParseResult;

/// Parse a path string into a fresh [`Path`]
///
/// Pure and deterministic: the same string always yields an equal path.
///
/// # Errors
/// Returns `ParseError::Malformed` when the string does not follow the path
/// grammar.
pub fn parse(path: &str) -> ParseResult<Path> {
    PathParser::new(path).parse().inspect_err(|err| {
        log::debug!("Path parse failed: {err}");
    })
}

/// Parse a path string through the process-wide path cache
///
/// Repeated compilations of the same string share one [`Path`]. Parse errors
/// are returned as-is and never cached.
///
/// # Errors
/// Returns `ParseError::Malformed` when the string does not follow the path
/// grammar.
#[inline]
pub fn compile(path: &str) -> ParseResult<Arc<Path>> {
    global_cache().get_or_compile(path)
}
