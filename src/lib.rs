//! Bookmarker - browse a flat bookmark file as a directory tree
//!
//! A bookmark file maps slash-delimited paths to URLs:
//!
//! ```text
//! Work/Email -> https://mail.example.com
//! Work/Docs/Handbook -> https://docs.example.com/handbook
//! ```
//!
//! This library parses such a file into a [`tree::Directory`] and provides a
//! [`navigation::NavigationController`] that walks it in response to input
//! events, opening bookmarks through a [`navigation::Launcher`].

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod cli;
pub mod config;
pub mod navigation;
pub mod parser;
pub mod tree;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum BookmarkerError {
    /// The bookmark file could not be read
    #[error("Cannot read bookmark file '{}': {source}", path.display())]
    FileAccess {
        /// The file that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
    /// The bookmark file is malformed
    #[error("Invalid bookmark file: {0}")]
    Parse(#[from] parser::ParseError),
    /// The display surface asked for an entry that does not exist
    #[error("Navigation error: {0}")]
    Navigation(#[from] navigation::NavigationError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Terminal or rendering failure
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
}

/// Read and parse a bookmark file
///
/// # Errors
///
/// Returns [`BookmarkerError::FileAccess`] if the file cannot be read and
/// [`BookmarkerError::Parse`] if any line is malformed.
pub fn load_bookmarks(path: &Path) -> Result<tree::Directory, BookmarkerError> {
    let text = fs::read_to_string(path).map_err(|source| BookmarkerError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parser::parse(&text)?)
}
