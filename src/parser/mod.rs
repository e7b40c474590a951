//! Bookmark file parser
//!
//! Turns the flat `path -> url` text format into a [`Directory`] tree.
//!
//! # Format
//!
//! ```text
//! # comments and blank lines are ignored
//! Work/Email -> https://mail.example.com
//! Work/"Issue Tracker" -> https://issues.example.com
//! 'Odd -> Name' -> https://example.com
//! ```
//!
//! Each meaningful line holds exactly two tokens separated by `->`. Paths are
//! split on `/` and empty segments are skipped, so `//A`, `/A` and `A/` all name
//! the same node. A path made only of empty segments (`/`) adds nothing. A later
//! line for an existing path wins; a deeper path through an existing bookmark
//! turns that bookmark into a directory.

mod error;
pub mod lexer;

pub use error::{ParseError, ParseErrorKind, Result};

use crate::tree::{self, Directory};

const COMMENT: char = '#';

/// Parse bookmark file content into the root directory
///
/// # Errors
///
/// Returns a [`ParseError`] for the first line that is not a valid
/// `<path> -> <url>` pair. Nothing is returned for the lines before it.
///
/// # Examples
///
/// ```
/// use bookmarker::parser::parse;
/// use bookmarker::tree::PathNode;
///
/// let root = parse("Work/Email -> https://mail.example.com").unwrap();
/// assert_eq!(
///     root.lookup("Work/Email").and_then(PathNode::as_url),
///     Some("https://mail.example.com")
/// );
/// ```
pub fn parse(text: &str) -> Result<Directory> {
    let mut root = Directory::new();

    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT) {
            continue;
        }

        let fail = |kind| ParseError {
            line: index + 1,
            content: line.to_string(),
            kind,
        };

        let tokens = lexer::split_line(line).map_err(fail)?;
        let (path, url) = match <[String; 2]>::try_from(tokens) {
            Ok([path, url]) => (path, url),
            Err(tokens) if tokens.len() < 2 => return Err(fail(ParseErrorKind::MissingArrow)),
            Err(tokens) => return Err(fail(ParseErrorKind::TooManyTokens(tokens.len()))),
        };

        insert(&mut root, &path, url);
    }

    Ok(root)
}

/// Place `url` at `path` below `root`, creating directories on the way
///
/// A path without segments leaves the tree untouched.
fn insert(root: &mut Directory, path: &str, url: String) {
    let segments: Vec<&str> = tree::segments(path).collect();
    let Some((leaf, parents)) = segments.split_last() else {
        return;
    };

    let mut current = root;
    for segment in parents {
        current = current.directory_mut(segment);
    }
    current.insert_bookmark(leaf, url);
}
