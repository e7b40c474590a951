//! Ratatui widgets for the bookmark browser

mod entry_list;
mod help_bar;
mod status_bar;

pub use entry_list::EntryList;
pub use help_bar::HelpBar;
pub use status_bar::StatusBar;
