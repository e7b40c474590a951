//! Ratatui-based bookmark browser
//!
//! Owns the terminal for the duration of a session and forwards user input to
//! a [`NavigationController`]. The browser never inspects the tree itself; it
//! only draws the entries the controller hands back.

use super::events::{EventResult, poll_and_handle};
use super::state::BrowserState;
use super::theme::Theme;
use super::widgets::{EntryList, HelpBar, StatusBar};
use crate::BookmarkerError;
use crate::config::DisplaySettings;
use crate::navigation::{InputEvent, Launcher, NavigationController};
use crate::ui::error::{Result, UiError};
use crate::ui::output::MessageLevel;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::cmp::Ordering;
use std::io::{self, Stdout};
use std::time::Duration;

/// How long to wait for input before redrawing (expires status messages)
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// What happened during a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Number of bookmarks handed to the launcher
    pub launched: usize,
}

/// Interactive terminal browser for a bookmark tree
pub struct BookmarkBrowser {
    theme: Theme,
    display: DisplaySettings,
}

impl BookmarkBrowser {
    /// Create a browser with the given display settings
    #[must_use]
    pub fn new(display: DisplaySettings) -> Self {
        Self {
            theme: Theme::default(),
            display,
        }
    }

    /// Run an interactive session until the user quits
    ///
    /// The terminal is restored before returning, even on error.
    ///
    /// # Errors
    ///
    /// Returns [`BookmarkerError::Ui`] if the terminal cannot be driven or
    /// restored and [`BookmarkerError::Navigation`] if the controller rejects a
    /// selection. A session error is reported in preference to a restore error.
    pub fn run<L: Launcher>(
        &self,
        controller: &mut NavigationController<'_, L>,
    ) -> std::result::Result<SessionSummary, BookmarkerError> {
        let mut terminal = Self::setup_terminal()?;

        let session = self.run_loop(&mut terminal, controller);
        finish_session(session, Self::cleanup_terminal())
    }

    /// Setup terminal for TUI
    ///
    /// Raw mode is switched off again if anything after it fails.
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        restore_on_error(Self::enter_screen(), Self::cleanup_terminal)
    }

    /// Switch to the alternate screen with mouse capture and wrap stdout
    fn enter_screen() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    ///
    /// Both steps are attempted; the first failure is returned.
    fn cleanup_terminal() -> Result<()> {
        let raw_mode = disable_raw_mode();
        execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
        raw_mode.map_err(Into::into)
    }

    /// Main event loop
    fn run_loop<L: Launcher>(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        controller: &mut NavigationController<'_, L>,
    ) -> std::result::Result<SessionSummary, BookmarkerError> {
        let mut state = BrowserState::new(controller.on_start(), self.display.message_ttl());
        let mut summary = SessionSummary::default();

        while !state.should_exit {
            let breadcrumb = controller.breadcrumb();
            let at_root = controller.depth() == 1;
            terminal
                .draw(|frame| self.render(frame, &mut state, &breadcrumb, at_root))
                .map_err(UiError::from)?;

            match poll_and_handle(&mut state, POLL_INTERVAL).map_err(UiError::from)? {
                EventResult::Dispatch(event) => {
                    Self::dispatch(controller, &mut state, &mut summary, event)?;
                }
                EventResult::Quit => state.should_exit = true,
                EventResult::Continue | EventResult::Ignored => {}
            }

            state.cleanup_messages();
        }

        Ok(summary)
    }

    /// Forward one input event to the controller and apply the outcome
    fn dispatch<L: Launcher>(
        controller: &mut NavigationController<'_, L>,
        state: &mut BrowserState,
        summary: &mut SessionSummary,
        event: InputEvent,
    ) -> std::result::Result<(), BookmarkerError> {
        let depth_before = controller.depth();
        let url = match &event {
            InputEvent::Select(_) => state.current_entry().and_then(|e| e.url()).map(str::to_string),
            InputEvent::Back => None,
        };

        match controller.on_input(event)? {
            Some(entries) => match controller.depth().cmp(&depth_before) {
                Ordering::Greater => state.enter_directory(entries),
                Ordering::Less => state.leave_directory(entries),
                Ordering::Equal => {
                    state.refresh(entries);
                    state.push_message(MessageLevel::Warning, "Already at the top level");
                }
            },
            None => {
                summary.launched += 1;
                if let Some(url) = url {
                    state.push_message(MessageLevel::Info, format!("Opening {url}"));
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame, state: &mut BrowserState, breadcrumb: &str, at_root: bool) {
        let hint_height = u16::from(self.display.show_hints);
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),              // Entry list
                Constraint::Length(1),           // Status line
                Constraint::Length(hint_height), // Help bar
            ])
            .split(frame.area());

        // Account for the list's borders
        state.visible_height = layout[0].height.saturating_sub(2) as usize;

        let entry_list = EntryList::new(state, &self.theme)
            .title(format!(" {breadcrumb} "))
            .icons(self.display.icons)
            .show_urls(self.display.show_urls);
        frame.render_widget(entry_list, layout[0]);

        let messages = state.active_messages();
        frame.render_widget(StatusBar::new(&messages, &self.theme), layout[1]);

        if self.display.show_hints {
            let help = HelpBar::new(state.current_entry(), at_root, &self.theme);
            frame.render_widget(help, layout[2]);
        }
    }
}

/// Run `restore` if `result` is an error, keeping the original error
fn restore_on_error<T>(result: Result<T>, restore: impl FnOnce() -> Result<()>) -> Result<T> {
    if result.is_err() {
        let _ = restore();
    }
    result
}

/// Combine a finished session with the outcome of restoring the terminal
///
/// A session error wins over a restore error.
fn finish_session<T>(
    session: std::result::Result<T, BookmarkerError>,
    restore: Result<()>,
) -> std::result::Result<T, BookmarkerError> {
    let value = session?;
    restore?;
    Ok(value)
}
