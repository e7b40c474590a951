//! Testing utilities for bookmarker
//!
//! Shared fixtures and a launcher that records instead of opening anything.
//!
//! Only available when compiled with `cfg(test)`.

use crate::navigation::Launcher;
use std::cell::RefCell;

/// A small bookmark file exercising nesting, comments and ordering
///
/// Root order: `Work`, `News`, `Search`. `Work` holds `Email`, `Tracker`
/// and the directory `Docs`.
pub const SAMPLE_BOOKMARKS: &str = "\
# sample bookmarks
Work/Email -> https://mail.example.com
Work/Tracker -> https://issues.example.com

Work/Docs/Handbook -> https://docs.example.com/handbook
News/Daily -> https://news.example.com
Search -> https://search.example.com
";

/// Launcher that remembers every URL it was asked to open
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    launched: RefCell<Vec<String>>,
}

impl RecordingLauncher {
    /// Create a launcher with an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs launched so far, oldest first
    #[must_use]
    pub fn launched(&self) -> Vec<String> {
        self.launched.borrow().clone()
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&self, url: &str) {
        self.launched.borrow_mut().push(url.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_sample_parses() {
        let root = parse(SAMPLE_BOOKMARKS).unwrap();
        assert_eq!(root.bookmark_count(), 5);
    }

    #[test]
    fn test_recording_launcher() {
        let launcher = RecordingLauncher::new();
        launcher.launch("a");
        launcher.launch("b");
        assert_eq!(launcher.launched(), vec!["a".to_string(), "b".to_string()]);
    }
}
