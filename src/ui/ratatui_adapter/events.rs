//! Event handling for the ratatui TUI
//!
//! Maps keyboard and mouse events to cursor movement or to navigation
//! [`InputEvent`]s for the controller. Key bindings live only here.

use super::state::BrowserState;
use crate::navigation::{InputEvent, Selection};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Forward this event to the navigation controller
    Dispatch(InputEvent),
    /// End the session
    Quit,
    /// No action taken
    Ignored,
}

/// Handle a key press
pub fn handle_key(state: &mut BrowserState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), _) => EventResult::Quit,

        // Navigation within the listing
        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => {
            state.cursor_down();
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            state.page_up();
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            state.page_down();
            EventResult::Continue
        }
        (KeyCode::Home, _) | (KeyCode::Char('g'), _) => {
            state.jump_to_start();
            EventResult::Continue
        }
        (KeyCode::End, _) | (KeyCode::Char('G'), _) => {
            state.jump_to_end();
            EventResult::Continue
        }

        // Tree navigation
        (KeyCode::Enter | KeyCode::Char(' '), _) => select_current(state),
        (KeyCode::Right | KeyCode::Char('l'), _) => enter_current(state),
        (KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h'), _) => {
            EventResult::Dispatch(InputEvent::Back)
        }

        _ => EventResult::Ignored,
    }
}

/// Select the entry under the cursor, if there is one
fn select_current(state: &BrowserState) -> EventResult {
    if state.current_entry().is_some() {
        EventResult::Dispatch(InputEvent::Select(Selection::Index(state.cursor)))
    } else {
        EventResult::Ignored
    }
}

/// Enter the directory under the cursor; bookmarks are only opened with Enter/Space
fn enter_current(state: &BrowserState) -> EventResult {
    match state.current_entry() {
        Some(entry) if entry.is_enterable() => {
            EventResult::Dispatch(InputEvent::Select(Selection::Index(state.cursor)))
        }
        _ => EventResult::Ignored,
    }
}

/// Handle mouse events (wheel scrolling moves the cursor)
fn handle_mouse(state: &mut BrowserState, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.cursor_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.cursor_down();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut BrowserState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{Entry, EntryKind};

    fn make_state(count: usize) -> BrowserState {
        let entries = (0..count)
            .map(|i| Entry {
                label: format!("entry{i}"),
                kind: EntryKind::Launchable {
                    url: format!("https://example.com/{i}"),
                },
            })
            .collect();
        BrowserState::new(entries, Duration::from_secs(5))
    }

    fn mixed_state() -> BrowserState {
        let entries = vec![
            Entry {
                label: "Work".into(),
                kind: EntryKind::Enterable,
            },
            Entry {
                label: "Search".into(),
                kind: EntryKind::Launchable {
                    url: "https://search.example.com".into(),
                },
            },
        ];
        BrowserState::new(entries, Duration::from_secs(5))
    }

    fn scroll(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_handling() {
        let mut state = make_state(10);

        assert_eq!(handle_key(&mut state, press(KeyCode::Down)), EventResult::Continue);
        assert_eq!(state.cursor, 1);

        assert_eq!(handle_key(&mut state, press(KeyCode::Char('j'))), EventResult::Continue);
        assert_eq!(state.cursor, 2);

        assert_eq!(handle_key(&mut state, press(KeyCode::Up)), EventResult::Continue);
        assert_eq!(state.cursor, 1);

        handle_key(&mut state, press(KeyCode::End));
        assert_eq!(state.cursor, 9);
    }

    #[test]
    fn test_select_uses_cursor_index() {
        let mut state = make_state(5);
        state.cursor = 3;

        for code in [KeyCode::Enter, KeyCode::Char(' ')] {
            assert_eq!(
                handle_key(&mut state, press(code)),
                EventResult::Dispatch(InputEvent::Select(Selection::Index(3)))
            );
        }
    }

    #[test]
    fn test_right_only_enters_directories() {
        let mut state = mixed_state();

        for code in [KeyCode::Right, KeyCode::Char('l')] {
            assert_eq!(
                handle_key(&mut state, press(code)),
                EventResult::Dispatch(InputEvent::Select(Selection::Index(0)))
            );
        }

        state.cursor = 1;
        assert_eq!(handle_key(&mut state, press(KeyCode::Right)), EventResult::Ignored);
        assert_eq!(handle_key(&mut state, press(KeyCode::Char('l'))), EventResult::Ignored);
    }

    #[test]
    fn test_mouse_wheel_moves_cursor() {
        let mut state = make_state(3);

        assert_eq!(handle_mouse(&mut state, scroll(MouseEventKind::ScrollDown)), EventResult::Continue);
        assert_eq!(handle_mouse(&mut state, scroll(MouseEventKind::ScrollDown)), EventResult::Continue);
        assert_eq!(state.cursor, 2);

        assert_eq!(handle_mouse(&mut state, scroll(MouseEventKind::ScrollUp)), EventResult::Continue);
        assert_eq!(state.cursor, 1);

        assert_eq!(handle_mouse(&mut state, scroll(MouseEventKind::Moved)), EventResult::Ignored);
    }

    #[test]
    fn test_select_on_empty_listing_is_ignored() {
        let mut state = make_state(0);
        assert_eq!(handle_key(&mut state, press(KeyCode::Enter)), EventResult::Ignored);
    }

    #[test]
    fn test_back_keys() {
        let mut state = make_state(1);
        for code in [KeyCode::Esc, KeyCode::Backspace, KeyCode::Left, KeyCode::Char('h')] {
            assert_eq!(
                handle_key(&mut state, press(code)),
                EventResult::Dispatch(InputEvent::Back)
            );
        }
    }

    #[test]
    fn test_quit() {
        let mut state = make_state(1);
        assert_eq!(handle_key(&mut state, press(KeyCode::Char('q'))), EventResult::Quit);
        assert_eq!(
            handle_key(
                &mut state,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            EventResult::Quit
        );
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut state = make_state(1);
        assert_eq!(handle_key(&mut state, press(KeyCode::Char('z'))), EventResult::Ignored);
        assert_eq!(handle_key(&mut state, press(KeyCode::F(5))), EventResult::Ignored);
    }
}
