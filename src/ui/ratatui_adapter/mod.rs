//! Ratatui-based bookmark browser
//!
//! This module provides the interactive display surface: it draws the
//! current directory with ratatui and reads input with crossterm, forwarding
//! every navigation decision to the controller.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           BookmarkBrowser                   │
//! │  (drives a NavigationController)            │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │   events   │ │  widgets  │ │ Crossterm │
//! │ (key map)  │ │ (ratatui) │ │ (terminal)│
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! # Layout
//!
//! - **Entry list** titled with the current path (`/Work/Docs`)
//! - **Status line** for short-lived messages (e.g. `Opening <url>`)
//! - **Help bar** with key hints (optional)

mod browser;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use browser::{BookmarkBrowser, SessionSummary};
pub use events::EventResult;
pub use state::{BrowserState, StatusMessage};
pub use theme::Theme;
