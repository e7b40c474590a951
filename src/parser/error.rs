//! Parser error types

use thiserror::Error;

/// What went wrong on a rejected line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Only one token; the `->` marker is absent or one side is blank
    #[error("expected '<path> -> <url>'")]
    MissingArrow,

    /// More than one unquoted `->` marker
    #[error("expected exactly one '->', found {0} tokens")]
    TooManyTokens(usize),

    /// A quote was opened but never closed
    #[error("no closing quotation")]
    UnterminatedQuote,
}

/// A bookmark file line that could not be parsed
///
/// Parsing stops at the first such line; no partial tree is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}: {content:?}")]
pub struct ParseError {
    /// 1-based line number, counting blank and comment lines
    pub line: usize,
    /// The offending line, without its line terminator
    pub content: String,
    /// Why the line was rejected
    pub kind: ParseErrorKind,
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
