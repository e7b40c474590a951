//! Hint row listing the keys that do something right now

use crate::navigation::Entry;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Help bar for the bookmark browser
///
/// The hints track the highlighted entry: a directory offers `Enter/→` to open
/// it, a bookmark offers `Enter` to launch it (`→` does nothing there). The back
/// hint is hidden at the root, where `Esc` has no effect.
pub struct HelpBar<'a> {
    /// Entry under the cursor, if the listing is not empty
    highlighted: Option<&'a Entry>,
    /// Whether the browser shows the root directory
    at_root: bool,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a help bar for the given cursor position
    #[must_use]
    pub const fn new(highlighted: Option<&'a Entry>, at_root: bool, theme: &'a Theme) -> Self {
        Self {
            highlighted,
            at_root,
            theme,
        }
    }

    /// `(keys, action)` pairs in display order
    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = vec![("↑/↓", "move")];

        match self.highlighted {
            Some(entry) if entry.is_enterable() => hints.push(("Enter/→", "open folder")),
            Some(_) => hints.push(("Enter", "launch")),
            None => {}
        }

        if !self.at_root {
            hints.push(("Esc/←", "back"));
        }

        hints.push(("q", "quit"));
        hints
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, (keys, action)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(keys, self.theme.cursor_style()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(action, self.theme.dimmed_style()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::EntryKind;

    fn directory() -> Entry {
        Entry {
            label: "Work".into(),
            kind: EntryKind::Enterable,
        }
    }

    fn bookmark() -> Entry {
        Entry {
            label: "Search".into(),
            kind: EntryKind::Launchable {
                url: "https://search.example.com".into(),
            },
        }
    }

    fn rendered(bar: HelpBar<'_>) -> String {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        buf.content().iter().map(ratatui::buffer::Cell::symbol).collect()
    }

    #[test]
    fn test_directory_at_root() {
        let theme = Theme::default();
        let entry = directory();
        let text = rendered(HelpBar::new(Some(&entry), true, &theme));

        assert!(text.contains("open folder"));
        assert!(!text.contains("launch"));
        assert!(!text.contains("back"));
        assert!(text.contains("quit"));
    }

    #[test]
    fn test_bookmark_below_root() {
        let theme = Theme::default();
        let entry = bookmark();
        let bar = HelpBar::new(Some(&entry), false, &theme);

        assert_eq!(
            bar.hints(),
            vec![("↑/↓", "move"), ("Enter", "launch"), ("Esc/←", "back"), ("q", "quit")]
        );
        assert!(rendered(bar).contains("launch"));
    }

    #[test]
    fn test_empty_listing_has_no_select_hint() {
        let theme = Theme::default();
        let bar = HelpBar::new(None, false, &theme);

        assert_eq!(bar.hints(), vec![("↑/↓", "move"), ("Esc/←", "back"), ("q", "quit")]);
    }
}
