//! About panel.

use crate::theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Wrap};
use westvpn_i18n::Strings;

/// User intent from the about panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutAction {
    /// Close the panel entirely (back to the bare home screen)
    Dismiss,
}

/// Translate a key press on the about panel into an intent
pub fn handle_about_key(key: KeyEvent) -> Option<AboutAction> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => Some(AboutAction::Dismiss),
        _ => None,
    }
}

/// Draw the about panel centered over the home screen
pub fn draw_about(frame: &mut Frame, strings: &Strings) {
    let area = theme::centered_rect(44, 9, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            strings.about_text,
            Style::default().fg(theme::TEXT_PRIMARY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("[ {} ]", strings.ok),
            Style::default().fg(theme::ACCENT),
        )),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(theme::card());
    frame.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use westvpn_i18n::{Catalog, LanguageKey};

    #[test]
    fn test_dismiss_keys() {
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let other = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);

        assert_eq!(handle_about_key(enter), Some(AboutAction::Dismiss));
        assert_eq!(handle_about_key(esc), Some(AboutAction::Dismiss));
        assert_eq!(handle_about_key(other), None);
    }

    #[test]
    fn test_about_renders_ok_button() {
        let strings = Catalog::new().resolve(LanguageKey::Turkish);
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| draw_about(frame, strings)).unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains("Tamam"));
    }
}
