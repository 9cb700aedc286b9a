//! Settings card: the root row list of the settings overlay.

use crate::theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use tracing::debug;
use westvpn_i18n::Strings;

/// User intent from the settings card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    OpenLanguage,
    OpenFeedback,
    OpenTelegram,
    OpenAbout,
    /// Close the card (esc, or the toggle key again)
    Close,
}

const ROW_COUNT: usize = 4;

/// Settings card view state
///
/// Holds only the cursor; row labels come from the resolved strings at draw
/// time so a language change shows up immediately.
#[derive(Debug, Default)]
pub struct SettingsCard {
    cursor: usize,
}

impl SettingsCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the cursor for a fresh presentation
    pub fn present(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Translate a key press into an intent
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<SettingsAction> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = (self.cursor + ROW_COUNT - 1) % ROW_COUNT;
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + 1) % ROW_COUNT;
                None
            }
            KeyCode::Enter => {
                let action = match self.cursor {
                    0 => SettingsAction::OpenLanguage,
                    1 => SettingsAction::OpenFeedback,
                    2 => SettingsAction::OpenTelegram,
                    _ => SettingsAction::OpenAbout,
                };
                debug!("Settings row activated: {:?}", action);
                Some(action)
            }
            KeyCode::Esc | KeyCode::Char('s') => Some(SettingsAction::Close),
            _ => None,
        }
    }

    /// Draw the card centered over the home screen
    pub fn draw(&self, frame: &mut Frame, strings: &Strings) {
        let rows = [
            ("⚙", strings.settings),
            ("✎", strings.feedback),
            ("✈", strings.telegram),
            ("ℹ", strings.about),
        ];

        let mut lines = vec![Line::from("")];
        for (i, (icon, label)) in rows.iter().enumerate() {
            let style = if i == self.cursor {
                Style::default()
                    .fg(theme::TEXT_PRIMARY)
                    .bg(theme::SURFACE_ELEVATED)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::TEXT_PRIMARY)
            };
            lines.push(Line::from(Span::styled(
                format!("  {} {}  ", icon, label),
                style,
            )));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            "  ↑↓ · enter · esc  ",
            Style::default().fg(theme::TEXT_SECONDARY),
        )));

        let area = theme::centered_rect(46, lines.len() as u16 + 2, frame.area());
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
    fn test_cursor_wraps_both_ways() {
        let mut card = SettingsCard::new();
        card.handle_key(press(KeyCode::Up));
        assert_eq!(card.cursor(), 3);
        card.handle_key(press(KeyCode::Down));
        assert_eq!(card.cursor(), 0);
    }

    #[test]
    fn test_rows_activate_in_order() {
        let mut card = SettingsCard::new();
        assert_eq!(card.handle_key(press(KeyCode::Enter)), Some(SettingsAction::OpenLanguage));

        card.handle_key(press(KeyCode::Down));
        assert_eq!(card.handle_key(press(KeyCode::Enter)), Some(SettingsAction::OpenFeedback));

        card.handle_key(press(KeyCode::Down));
        assert_eq!(card.handle_key(press(KeyCode::Enter)), Some(SettingsAction::OpenTelegram));

        card.handle_key(press(KeyCode::Down));
        assert_eq!(card.handle_key(press(KeyCode::Enter)), Some(SettingsAction::OpenAbout));
    }

    #[test]
    fn test_present_resets_cursor() {
        let mut card = SettingsCard::new();
        card.handle_key(press(KeyCode::Down));
        card.present();
        assert_eq!(card.cursor(), 0);
    }

    #[test]
    fn test_close_keys() {
        let mut card = SettingsCard::new();
        assert_eq!(card.handle_key(press(KeyCode::Esc)), Some(SettingsAction::Close));
        assert_eq!(card.handle_key(press(KeyCode::Char('s'))), Some(SettingsAction::Close));
    }
}
