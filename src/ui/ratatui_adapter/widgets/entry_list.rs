//! Entry list widget for displaying the current directory

use crate::navigation::{Entry, EntryKind};
use crate::ui::ratatui_adapter::state::BrowserState;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

const DIRECTORY_ICON: &str = "📁 ";
const BOOKMARK_ICON: &str = "🌐 ";

/// Lists the entries of the current directory with a cursor
pub struct EntryList<'a> {
    /// Browser state
    state: &'a BrowserState,
    /// Theme for styling
    theme: &'a Theme,
    /// Title for the list block
    title: String,
    /// Prefix entries with icons
    icons: bool,
    /// Show bookmark URLs after their names
    show_urls: bool,
}

impl<'a> EntryList<'a> {
    /// Create a new entry list widget
    #[must_use]
    pub fn new(state: &'a BrowserState, theme: &'a Theme) -> Self {
        Self {
            state,
            theme,
            title: format!(" Bookmarks ({}) ", state.entries.len()),
            icons: true,
            show_urls: true,
        }
    }

    /// Set custom title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Enable or disable icons
    #[must_use]
    pub const fn icons(mut self, icons: bool) -> Self {
        self.icons = icons;
        self
    }

    /// Enable or disable URLs next to bookmark names
    #[must_use]
    pub const fn show_urls(mut self, show_urls: bool) -> Self {
        self.show_urls = show_urls;
        self
    }

    /// Render a single entry
    fn render_entry(&self, entry: &'a Entry, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor { ">" } else { " " };
        let mut spans = vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
        ];

        match &entry.kind {
            EntryKind::Enterable => {
                if self.icons {
                    spans.push(Span::raw(DIRECTORY_ICON));
                }
                spans.push(Span::styled(entry.label.as_str(), self.theme.directory_style()));
                spans.push(Span::styled("/", self.theme.dimmed_style()));
            }
            EntryKind::Launchable { url } => {
                if self.icons {
                    spans.push(Span::raw(BOOKMARK_ICON));
                }
                spans.push(Span::styled(entry.label.as_str(), self.theme.bookmark_style()));
                if self.show_urls {
                    spans.push(Span::raw("  "));
                    spans.push(Span::styled(url.as_str(), self.theme.dimmed_style()));
                }
            }
        }

        let item = ListItem::new(Line::from(spans));
        if is_cursor {
            item.style(self.theme.selected_style())
        } else {
            item
        }
    }
}

impl Widget for EntryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.state.entries.is_empty() {
            Paragraph::new(Line::styled("  (empty)", self.theme.dimmed_style())).render(inner, buf);
            return;
        }

        let visible_height = inner.height as usize;
        let start = self.state.scroll_offset.min(self.state.entries.len());
        let end = (start + visible_height).min(self.state.entries.len());

        let items: Vec<ListItem> = self.state.entries[start..end]
            .iter()
            .enumerate()
            .map(|(offset, entry)| self.render_entry(entry, start + offset == self.state.cursor))
            .collect();

        List::new(items).render(inner, buf);
    }
}
