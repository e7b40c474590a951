//! Navigation controller
//!
//! Owns the [`History`] and turns [`InputEvent`]s into state transitions.
//! The display surface only renders the entries it gets back and forwards input;
//! it never touches the history or the tree directly.
//!
//! # State machine
//!
//! ```text
//! Browsing(root) ──Select(dir)──▶ Browsing(dir)   push, re-render
//!        ▲                             │
//!        └────────────Back─────────────┘          pop, re-render
//!
//! Browsing(d) ──Select(bookmark)──▶ Browsing(d)   launch url, no render
//! Browsing(root) ──Back──▶ Browsing(root)         no-op
//! ```

use super::error::{NavigationError, Result};
use super::history::{History, ROOT_LABEL};
use super::launcher::Launcher;
use crate::tree::{Directory, PathNode};

/// How a displayed entry reacts to selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// A directory; selecting it enters it
    Enterable,
    /// A bookmark; selecting it opens `url`
    Launchable {
        /// The bookmark's URL
        url: String,
    },
}

/// One row of the current directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Child name
    pub label: String,
    /// Directory or bookmark
    pub kind: EntryKind,
}

impl Entry {
    /// Whether selecting this entry enters a directory
    #[must_use]
    pub const fn is_enterable(&self) -> bool {
        matches!(self.kind, EntryKind::Enterable)
    }

    /// The bookmark URL, if this entry is launchable
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            EntryKind::Enterable => None,
            EntryKind::Launchable { url } => Some(url),
        }
    }
}

/// Which entry of the current directory to act on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Position in the rendered listing
    Index(usize),
    /// Child name
    Name(String),
}

/// Discrete input from the display surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Enter a directory or open a bookmark
    Select(Selection),
    /// Return to the parent directory
    Back,
}

/// Drives a browsing session over a parsed bookmark tree
pub struct NavigationController<'a, L: Launcher> {
    history: History<'a>,
    launcher: L,
}

impl<'a, L: Launcher> NavigationController<'a, L> {
    /// Start a session at `root`
    #[must_use]
    pub const fn new(root: &'a Directory, launcher: L) -> Self {
        Self {
            history: History::new(root),
            launcher,
        }
    }

    /// Entries of the initial directory
    #[must_use]
    pub fn on_start(&self) -> Vec<Entry> {
        self.render()
    }

    /// Apply one input event
    ///
    /// Returns the new listing when the displayed directory may have changed,
    /// or `None` when a bookmark was launched and the listing is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::UnknownEntry`] if the selection does not match
    /// any child of the current directory.
    pub fn on_input(&mut self, event: InputEvent) -> Result<Option<Vec<Entry>>> {
        match event {
            InputEvent::Select(selection) => self.select(&selection),
            InputEvent::Back => {
                self.history.pop_if_possible();
                Ok(Some(self.render()))
            }
        }
    }

    fn select(&mut self, selection: &Selection) -> Result<Option<Vec<Entry>>> {
        let current = self.history.current();
        let (label, node) = match selection {
            Selection::Index(index) => current
                .get_index(*index)
                .ok_or_else(|| NavigationError::UnknownEntry(format!("#{index}")))?,
            Selection::Name(name) => current
                .iter()
                .find(|(label, _)| *label == name.as_str())
                .ok_or_else(|| NavigationError::UnknownEntry(format!("'{name}'")))?,
        };

        match node {
            PathNode::Directory(dir) => {
                self.history.push(label, dir);
                Ok(Some(self.render()))
            }
            PathNode::Bookmark(url) => {
                self.launcher.launch(url);
                Ok(None)
            }
        }
    }

    /// Entries of the current directory, in display order
    #[must_use]
    pub fn render(&self) -> Vec<Entry> {
        self.history
            .current()
            .iter()
            .map(|(label, node)| Entry {
                label: label.to_string(),
                kind: match node {
                    PathNode::Directory(_) => EntryKind::Enterable,
                    PathNode::Bookmark(url) => EntryKind::Launchable { url: url.clone() },
                },
            })
            .collect()
    }

    /// The directory currently displayed
    #[must_use]
    pub fn current(&self) -> &'a Directory {
        self.history.current()
    }

    /// Number of directories on the history stack, root included
    #[must_use]
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Path of the current directory, e.g. `/Work/Mail`
    #[must_use]
    pub fn breadcrumb(&self) -> String {
        let labels: Vec<&str> = self.history.labels().skip(1).collect();
        if labels.is_empty() {
            ROOT_LABEL.to_string()
        } else {
            format!("{ROOT_LABEL}{}", labels.join("/"))
        }
    }

    /// The launcher bookmarks are opened with
    #[must_use]
    pub const fn launcher(&self) -> &L {
        &self.launcher
    }
}
