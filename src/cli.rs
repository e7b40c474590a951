//! Command-line interface definitions and parsing
//!
//! ```text
//! bookmarker -f ~/bookmarks.txt
//! bookmarker --filename bookmarks.txt --no-icons
//! bookmarker -f bookmarks.txt --config ./bookmarker.toml
//! bookmarker -q -f bookmarks.txt
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "bookmarker")]
#[command(
    about = "Browse a bookmark file as a directory tree",
    long_about = "Browse a bookmark file as a directory tree.\n\n\
                  Each line in the file holds a path and a URL separated by '->', \
                  e.g. 'Work/Email -> https://mail.example.com'."
)]
#[command(version)]
pub struct Cli {
    /// The bookmark file, one 'path -> URL' per line
    #[arg(short = 'f', long = "filename", value_name = "FILE")]
    pub filename: PathBuf,

    /// Use this config file instead of the default location
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Do not prefix entries with icons (overrides config)
    #[arg(long = "no-icons")]
    pub no_icons: bool,

    /// Suppress informational output (errors are still printed)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments, exiting with usage on error
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
