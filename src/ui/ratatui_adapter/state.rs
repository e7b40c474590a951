//! Application state for the ratatui TUI
//!
//! Holds what the browser needs to draw a frame: the entries of the current
//! directory, the cursor and scroll position, and status messages. Navigation
//! state proper (the history stack) lives in the controller.

use crate::navigation::Entry;
use crate::ui::output::MessageLevel;
use std::time::{Duration, Instant};

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level (info or warning)
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Browser state for one session
#[derive(Debug)]
pub struct BrowserState {
    /// Entries of the directory on display
    pub entries: Vec<Entry>,
    /// Current cursor position in `entries`
    pub cursor: usize,
    /// Scroll offset for the entry list
    pub scroll_offset: usize,
    /// Height of the visible entry list area (set during render)
    pub visible_height: usize,
    /// Cursor positions of the parent directories, innermost last
    pub cursor_stack: Vec<usize>,
    /// Status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Whether the browser should exit
    pub should_exit: bool,
}

impl BrowserState {
    /// Create state showing `entries`
    #[must_use]
    pub const fn new(entries: Vec<Entry>, message_ttl: Duration) -> Self {
        Self {
            entries,
            cursor: 0,
            scroll_offset: 0,
            visible_height: 20, // Default, updated during render
            cursor_stack: Vec::new(),
            messages: Vec::new(),
            message_ttl,
            should_exit: false,
        }
    }

    /// Move cursor up
    pub const fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor down
    pub const fn cursor_down(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor up by one page
    pub const fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.visible_height);
        self.adjust_scroll();
    }

    /// Move cursor down by one page
    pub fn page_down(&mut self) {
        let max_cursor = self.entries.len().saturating_sub(1);
        self.cursor = (self.cursor + self.visible_height).min(max_cursor);
        self.adjust_scroll();
    }

    /// Jump to first entry
    pub const fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    /// Jump to last entry
    pub const fn jump_to_end(&mut self) {
        self.cursor = self.entries.len().saturating_sub(1);
        self.adjust_scroll();
    }

    /// Adjust scroll offset to keep cursor visible
    const fn adjust_scroll(&mut self) {
        let height = if self.visible_height == 0 { 1 } else { self.visible_height };
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }

    /// The entry under the cursor
    #[must_use]
    pub fn current_entry(&self) -> Option<&Entry> {
        self.entries.get(self.cursor)
    }

    /// Show a child directory, remembering where the cursor was
    pub fn enter_directory(&mut self, entries: Vec<Entry>) {
        self.cursor_stack.push(self.cursor);
        self.show(entries, 0);
    }

    /// Show the parent directory with the cursor back on the child just left
    pub fn leave_directory(&mut self, entries: Vec<Entry>) {
        let cursor = self.cursor_stack.pop().unwrap_or(0);
        self.show(entries, cursor);
    }

    /// Replace the listing without changing depth
    pub fn refresh(&mut self, entries: Vec<Entry>) {
        let cursor = self.cursor;
        self.show(entries, cursor);
    }

    fn show(&mut self, entries: Vec<Entry>, cursor: usize) {
        self.entries = entries;
        self.cursor = cursor.min(self.entries.len().saturating_sub(1));
        self.scroll_offset = 0;
        self.adjust_scroll();
    }

    /// Add a status message
    pub fn push_message(&mut self, level: MessageLevel, text: impl Into<String>) {
        self.messages.push(StatusMessage::new(level, text.into()));
    }

    /// Messages that have not yet expired
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|msg| !msg.is_expired(self.message_ttl))
            .collect()
    }

    /// Drop expired messages
    pub fn cleanup_messages(&mut self) {
        let ttl = self.message_ttl;
        self.messages.retain(|msg| !msg.is_expired(ttl));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::EntryKind;

    fn entries(count: usize) -> Vec<Entry> {
        (0..count)
            .map(|i| Entry {
                label: format!("entry{i}"),
                kind: EntryKind::Enterable,
            })
            .collect()
    }

    fn make_state(count: usize) -> BrowserState {
        BrowserState::new(entries(count), Duration::from_secs(5))
    }

    #[test]
    fn test_cursor_bounds() {
        let mut state = make_state(3);

        state.cursor_up();
        assert_eq!(state.cursor, 0);

        for _ in 0..5 {
            state.cursor_down();
        }
        assert_eq!(state.cursor, 2);

        state.jump_to_start();
        assert_eq!(state.cursor, 0);
        state.jump_to_end();
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_paging_scrolls() {
        let mut state = make_state(50);
        state.visible_height = 10;

        state.page_down();
        assert_eq!(state.cursor, 10);
        assert_eq!(state.scroll_offset, 1);

        state.page_up();
        assert_eq!(state.cursor, 0);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_enter_and_leave_restore_cursor() {
        let mut state = make_state(5);
        state.cursor = 3;

        state.enter_directory(entries(2));
        assert_eq!(state.cursor, 0);
        assert_eq!(state.cursor_stack, vec![3]);

        state.leave_directory(entries(5));
        assert_eq!(state.cursor, 3);
        assert!(state.cursor_stack.is_empty());
    }

    #[test]
    fn test_leave_at_root_keeps_cursor_in_range() {
        let mut state = make_state(2);
        state.cursor = 1;

        state.refresh(entries(2));
        assert_eq!(state.cursor, 1);

        state.leave_directory(entries(2));
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_empty_listing() {
        let mut state = make_state(0);
        state.cursor_down();
        state.page_down();
        assert_eq!(state.cursor, 0);
        assert!(state.current_entry().is_none());
    }

    #[test]
    fn test_message_ttl() {
        let mut state = BrowserState::new(entries(1), Duration::from_millis(50));
        state.push_message(MessageLevel::Info, "Opening https://example.com");
        assert_eq!(state.active_messages().len(), 1);

        std::thread::sleep(Duration::from_millis(100));
        assert!(state.active_messages().is_empty());
        state.cleanup_messages();
        assert!(state.messages.is_empty());
    }
}
