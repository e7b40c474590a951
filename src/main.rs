//! Bookmarker CLI application entry point
//!
//! Loads a bookmark file and opens the interactive browser on it.
//!
//! # Usage
//!
//! ```bash
//! # Browse a bookmark file
//! bookmarker -f ~/bookmarks.txt
//!
//! # Without icons, using a specific config file
//! bookmarker --filename bookmarks.txt --no-icons --config ./bookmarker.toml
//! ```
//!
//! # Keys
//!
//! `Enter`/`SPACE` opens the highlighted entry, `ESC` goes back one level and
//! `q` quits.
//!
//! # Exit status
//!
//! `0` after a normal session; `1` if the bookmark file cannot be read or
//! parsed, an explicit `--config` file is invalid, or the terminal fails.

use bookmarker::{
    BookmarkerError,
    cli::Cli,
    config::BookmarkerConfig,
    load_bookmarks,
    navigation::{NavigationController, SystemLauncher},
    ui::{BookmarkBrowser, OutputWriter, SessionSummary, StdoutWriter},
};
use std::process::ExitCode;

type Result<T> = std::result::Result<T, BookmarkerError>;

/// Load configuration, honoring `--config` and `--no-icons`
///
/// A default config that cannot be read or created is reported as a warning
/// and replaced by built-in defaults.
///
/// # Errors
/// Returns `BookmarkerError::Config` if an explicit `--config` file cannot be read or parsed.
fn load_config(cli: &Cli, output: &impl OutputWriter) -> Result<BookmarkerConfig> {
    let mut config = match &cli.config {
        Some(path) => BookmarkerConfig::load_from(path)?,
        None => BookmarkerConfig::load_or_default(|e| {
            output.warning(&format!("Using default settings: {e}"));
        }),
    };

    if cli.no_icons {
        config.display.icons = false;
    }

    Ok(config)
}

/// Parse the bookmark file and run one interactive session
///
/// # Errors
/// Returns `BookmarkerError` if loading, parsing or the session itself fails.
fn run(cli: &Cli, output: &impl OutputWriter) -> Result<SessionSummary> {
    let root = load_bookmarks(&cli.filename)?;
    let config = load_config(cli, output)?;

    if root.is_empty() {
        output.warning(&format!("No bookmarks in {}", cli.filename.display()));
    } else {
        output.success(&format!(
            "Loaded {} bookmark(s) from {}",
            root.bookmark_count(),
            cli.filename.display()
        ));
    }

    let mut controller = NavigationController::new(&root, SystemLauncher::new());
    BookmarkBrowser::new(config.display).run(&mut controller)
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let output = if cli.quiet {
        StdoutWriter::quiet()
    } else {
        StdoutWriter::new()
    };

    match run(&cli, &output) {
        Ok(summary) => {
            if summary.launched > 0 {
                output.info(&format!("Opened {} bookmark(s)", summary.launched));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            output.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
