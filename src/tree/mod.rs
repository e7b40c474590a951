//! Bookmark tree model
//!
//! A bookmark file describes a tree implicitly: every `path -> url` line names
//! a leaf, and every non-final path segment names a directory. This module holds
//! the explicit form of that tree.
//!
//! # Invariants
//!
//! - The root is always a [`Directory`] (displayed as `/`)
//! - Sibling names are unique; inserting an existing name replaces the value
//!   but keeps its original position in the display order
//! - Every node is owned by exactly one parent, so the tree is acyclic
//! - Empty or whitespace-only path segments never become node names

use indexmap::IndexMap;

/// A node in the bookmark tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathNode {
    /// A named group of further nodes
    Directory(Directory),
    /// A terminal node holding a URL
    Bookmark(String),
}

impl PathNode {
    /// Returns the directory if this node is one
    #[must_use]
    pub const fn as_directory(&self) -> Option<&Directory> {
        match self {
            Self::Directory(dir) => Some(dir),
            Self::Bookmark(_) => None,
        }
    }

    /// Returns the URL if this node is a bookmark
    #[must_use]
    pub fn as_url(&self) -> Option<&str> {
        match self {
            Self::Directory(_) => None,
            Self::Bookmark(url) => Some(url),
        }
    }

    /// Turn this node into a directory, discarding a bookmark it held
    ///
    /// A node that already is a directory keeps its children.
    pub fn make_directory(&mut self) -> &mut Directory {
        match self {
            Self::Directory(dir) => dir,
            Self::Bookmark(_) => {
                *self = Self::Directory(Directory::new());
                self.make_directory()
            }
        }
    }
}

/// Ordered mapping from child name to child node
///
/// Insertion order is the display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    children: IndexMap<String, PathNode>,
}

impl Directory {
    /// Create an empty directory
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of direct children
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the directory has no children
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Look up a direct child by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PathNode> {
        self.children.get(name)
    }

    /// Look up a direct child by display position
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<(&str, &PathNode)> {
        self.children
            .get_index(index)
            .map(|(name, node)| (name.as_str(), node))
    }

    /// Iterate over children in display order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PathNode)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Store `url` as a bookmark under `name`, replacing whatever was there
    pub fn insert_bookmark(&mut self, name: &str, url: String) {
        self.children.insert(name.to_string(), PathNode::Bookmark(url));
    }

    /// Get the child directory `name`, creating it if needed
    ///
    /// An existing directory is reused. A bookmark at that position is replaced
    /// by a fresh, empty directory in the same slot.
    pub fn directory_mut(&mut self, name: &str) -> &mut Self {
        self.children
            .entry(name.to_string())
            .or_insert_with(|| PathNode::Directory(Self::new()))
            .make_directory()
    }

    /// Follow a `/`-delimited path from this directory
    ///
    /// Empty and whitespace-only segments are skipped, mirroring how the parser
    /// builds the tree. Returns `None` if any segment is missing or a bookmark is
    /// encountered before the last segment. An empty path yields `None`; the
    /// directory itself is not a `PathNode`.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&PathNode> {
        let mut segments = segments(path).peekable();
        let mut current = self;

        while let Some(segment) = segments.next() {
            let node = current.get(segment)?;
            if segments.peek().is_none() {
                return Some(node);
            }
            current = node.as_directory()?;
        }

        None
    }

    /// Total number of bookmarks in this subtree
    #[must_use]
    pub fn bookmark_count(&self) -> usize {
        self.children
            .values()
            .map(|node| match node {
                PathNode::Directory(dir) => dir.bookmark_count(),
                PathNode::Bookmark(_) => 1,
            })
            .sum()
    }
}

/// Split a bookmark path into its meaningful segments
///
/// Segments are split on `/`; empty and whitespace-only segments are dropped.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_skip_empty_and_blank() {
        let parts: Vec<_> = segments("//A/  /B/").collect();
        assert_eq!(parts, vec!["A", "B"]);
        assert_eq!(segments("").count(), 0);
    }

    #[test]
    fn test_insert_preserves_order_on_overwrite() {
        let mut dir = Directory::new();
        dir.insert_bookmark("X", "u1".into());
        dir.insert_bookmark("Y", "u2".into());
        dir.insert_bookmark("X", "u3".into());

        let names: Vec<_> = dir.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["X", "Y"]);
        assert_eq!(dir.get("X"), Some(&PathNode::Bookmark("u3".into())));
    }

    #[test]
    fn test_directory_mut_replaces_bookmark_in_place() {
        let mut dir = Directory::new();
        dir.insert_bookmark("A", "u1".into());
        dir.insert_bookmark("B", "u2".into());

        dir.directory_mut("A").insert_bookmark("C", "u3".into());

        let (name, node) = dir.get_index(0).unwrap();
        assert_eq!(name, "A");
        let inner = node.as_directory().unwrap();
        assert_eq!(inner.get("C").and_then(PathNode::as_url), Some("u3"));
    }

    #[test]
    fn test_make_directory() {
        let mut node = PathNode::Bookmark("u1".into());
        node.make_directory().insert_bookmark("X", "u2".into());
        assert_eq!(node.as_directory().map(Directory::len), Some(1));

        node.make_directory().insert_bookmark("Y", "u3".into());
        assert_eq!(node.as_directory().map(Directory::len), Some(2));
        assert!(node.as_url().is_none());
    }

    #[test]
    fn test_directory_mut_reuses_existing() {
        let mut dir = Directory::new();
        dir.directory_mut("A").insert_bookmark("X", "u1".into());
        dir.directory_mut("A").insert_bookmark("Y", "u2".into());

        assert_eq!(dir.len(), 1);
        assert_eq!(dir.get("A").and_then(PathNode::as_directory).map(Directory::len), Some(2));
    }

    #[test]
    fn test_lookup() {
        let mut root = Directory::new();
        root.directory_mut("Work").insert_bookmark("Email", "https://mail.example.com".into());

        assert_eq!(
            root.lookup("/Work//Email/").and_then(PathNode::as_url),
            Some("https://mail.example.com")
        );
        assert!(root.lookup("Work").and_then(PathNode::as_directory).is_some());
        assert!(root.lookup("Work/Email/Deeper").is_none());
        assert!(root.lookup("Missing").is_none());
        assert!(root.lookup("/").is_none());
    }

    #[test]
    fn test_bookmark_count() {
        let mut root = Directory::new();
        root.insert_bookmark("top", "u0".into());
        let work = root.directory_mut("Work");
        work.insert_bookmark("a", "u1".into());
        work.directory_mut("deep").insert_bookmark("b", "u2".into());

        assert_eq!(root.bookmark_count(), 3);
        assert_eq!(Directory::new().bookmark_count(), 0);
    }
}
