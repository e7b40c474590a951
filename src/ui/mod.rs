//! UI layer
//!
//! The navigation controller is UI-agnostic: it consumes [`InputEvent`]s and
//! produces entry listings. This module holds the pieces that face the user.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  NavigationController        │  history, tree, launcher
//! └──────────────▲───────────────┘
//!                │ InputEvent / Vec<Entry>
//! ┌──────────────┴───────────────┐
//! │  BookmarkBrowser (ratatui)   │  keys → events, entries → widgets
//! └──────────────────────────────┘
//! ```
//!
//! - `output`: colored CLI messages and the shared [`MessageLevel`]
//! - `ratatui_adapter`: the interactive terminal browser
//!
//! [`InputEvent`]: crate::navigation::InputEvent

mod error;

pub mod output;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use output::{MessageLevel, OutputWriter, StdoutWriter};
pub use ratatui_adapter::{BookmarkBrowser, SessionSummary};
