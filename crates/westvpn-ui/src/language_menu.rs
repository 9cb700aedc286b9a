//! Language picker nested in the settings overlay.

use crate::theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use tracing::debug;
use westvpn_i18n::{LanguageKey, Strings};

/// User intent from the language picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageMenuAction {
    /// Discard the draft, back to the settings root
    Cancel,
    /// Commit the draft selection
    Confirm(LanguageKey),
}

/// Language picker view state
///
/// The draft selection is local and uncommitted; it only reaches the
/// controller inside [`LanguageMenuAction::Confirm`]. Cancel throws it away,
/// so browsing the wheel can never change the committed language.
#[derive(Debug)]
pub struct LanguageMenu {
    draft: usize,
}

impl LanguageMenu {
    /// Present the picker seeded with the committed language
    pub fn new(committed: LanguageKey) -> Self {
        Self {
            draft: committed.index(),
        }
    }

    /// Re-seed the draft from the committed language
    pub fn present(&mut self, committed: LanguageKey) {
        self.draft = committed.index();
    }

    /// Current draft selection
    pub fn draft(&self) -> LanguageKey {
        LanguageKey::all()[self.draft]
    }

    /// Translate a key press into an intent
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<LanguageMenuAction> {
        let len = LanguageKey::all().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.draft = (self.draft + len - 1) % len;
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.draft = (self.draft + 1) % len;
                None
            }
            KeyCode::Enter => {
                debug!("Language confirmed: {}", self.draft().name());
                Some(LanguageMenuAction::Confirm(self.draft()))
            }
            KeyCode::Esc => Some(LanguageMenuAction::Cancel),
            _ => None,
        }
    }

    /// Draw the picker centered over the home screen
    pub fn draw(&self, frame: &mut Frame, strings: &Strings) {
        let mut lines = vec![
            Line::from(Span::styled(
                strings.language,
                Style::default()
                    .fg(theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (i, key) in LanguageKey::all().iter().enumerate() {
            let marker = if i == self.draft { "▸" } else { " " };
            let style = if i == self.draft {
                Style::default()
                    .fg(theme::TEXT_PRIMARY)
                    .bg(theme::SURFACE_ELEVATED)
            } else {
                Style::default().fg(theme::TEXT_SECONDARY)
            };
            lines.push(Line::from(Span::styled(
                format!(" {} {} ", marker, key.name()),
                style,
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" esc: {} · enter: {} ", strings.cancel, strings.ok),
            Style::default().fg(theme::TEXT_SECONDARY),
        )));

        let area = theme::centered_rect(40, lines.len() as u16 + 2, frame.area());
        frame.render_widget(Clear, area);
        frame.render_widget(Paragraph::new(lines).block(theme::card()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_seeded_with_committed() {
        let menu = LanguageMenu::new(LanguageKey::Turkish);
        assert_eq!(menu.draft(), LanguageKey::Turkish);
    }

    #[test]
    fn test_browse_then_cancel_discards_draft() {
        let mut menu = LanguageMenu::new(LanguageKey::Russian);
        menu.handle_key(press(KeyCode::Down));
        assert_ne!(menu.draft(), LanguageKey::Russian);

        assert_eq!(menu.handle_key(press(KeyCode::Esc)), Some(LanguageMenuAction::Cancel));

        // Re-presenting restores the committed selection
        menu.present(LanguageKey::Russian);
        assert_eq!(menu.draft(), LanguageKey::Russian);
    }

    #[test]
    fn test_confirm_carries_draft() {
        let mut menu = LanguageMenu::new(LanguageKey::English);
        menu.handle_key(press(KeyCode::Down));
        let expected = menu.draft();

        assert_eq!(
            menu.handle_key(press(KeyCode::Enter)),
            Some(LanguageMenuAction::Confirm(expected))
        );
    }

    #[test]
    fn test_wheel_wraps() {
        let mut menu = LanguageMenu::new(LanguageKey::all()[0]);
        menu.handle_key(press(KeyCode::Up));
        assert_eq!(menu.draft(), *LanguageKey::all().last().unwrap());
    }
}
