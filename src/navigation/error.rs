//! Navigation error types

use thiserror::Error;

/// Errors raised by the navigation controller
///
/// These indicate a display surface out of sync with the controller, not a
/// condition the user can cause or recover from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// A selection named an entry the current directory does not have
    #[error("no entry {0} in the current directory")]
    UnknownEntry(String),
}

/// Result type for navigation operations
pub type Result<T> = std::result::Result<T, NavigationError>;
