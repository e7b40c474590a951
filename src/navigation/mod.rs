//! Interactive navigation over the bookmark tree
//!
//! - `history`: the stack of directories from root to the current one
//! - `controller`: the input-event state machine the display surface talks to
//! - `launcher`: the seam to whatever opens a bookmark's URL

mod controller;
mod error;
mod history;
mod launcher;

pub use controller::{Entry, EntryKind, InputEvent, NavigationController, Selection};
pub use error::{NavigationError, Result};
pub use history::{History, ROOT_LABEL};
pub use launcher::{Launcher, SystemLauncher};
