//! Navigation history stack

use crate::tree::Directory;

/// Label shown for the root directory
pub const ROOT_LABEL: &str = "/";

/// Stack of directories from the root to the one currently displayed
///
/// The root is held outside the pushed frames, so the stack can never be
/// emptied and the root is always at the bottom.
#[derive(Debug, Clone)]
pub struct History<'a> {
    root: &'a Directory,
    frames: Vec<(&'a str, &'a Directory)>,
}

impl<'a> History<'a> {
    /// Create a history seeded with `root`
    #[must_use]
    pub const fn new(root: &'a Directory) -> Self {
        Self {
            root,
            frames: Vec::new(),
        }
    }

    /// The directory on top of the stack
    #[must_use]
    pub fn current(&self) -> &'a Directory {
        self.frames.last().map_or(self.root, |&(_, dir)| dir)
    }

    /// Enter `dir`, recorded under `label`
    pub fn push(&mut self, label: &'a str, dir: &'a Directory) {
        self.frames.push((label, dir));
    }

    /// Pop the top directory unless it is the root
    ///
    /// Returns whether a pop happened.
    pub fn pop_if_possible(&mut self) -> bool {
        self.frames.pop().is_some()
    }

    /// Number of directories on the stack, root included
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len() + 1
    }

    /// Always `false`; the root cannot be popped
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Labels from the root up to the current directory
    pub fn labels(&self) -> impl Iterator<Item = &'a str> + '_ {
        std::iter::once(ROOT_LABEL).chain(self.frames.iter().map(|&(label, _)| label))
    }
}
