//! Home screen: status indicator, connect toggle, security banner.

use crate::theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use westvpn_core::ConnectionState;
use westvpn_i18n::Strings;

/// User intent from the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    /// Connect when idle, disconnect when connected
    ToggleConnection,
    /// Abort a connect in flight
    CancelConnect,
    /// Open the settings overlay
    OpenSettings,
    /// Exit the shell
    Quit,
}

/// Translate a key press on the home screen into an intent
pub fn handle_home_key(key: KeyEvent) -> Option<HomeAction> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => Some(HomeAction::ToggleConnection),
        KeyCode::Esc => Some(HomeAction::CancelConnect),
        KeyCode::Char('s') => Some(HomeAction::OpenSettings),
        KeyCode::Char('q') => Some(HomeAction::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(HomeAction::Quit)
        }
        _ => None,
    }
}

/// Draw the home screen
///
/// `banner_visible` is false while any overlay is open, matching the
/// original layout which hides the banner and status stack under overlays.
pub fn draw_home(
    frame: &mut Frame,
    strings: &Strings,
    connection: ConnectionState,
    banner_visible: bool,
    error: Option<&str>,
) {
    let area = frame.area();

    let backdrop = Paragraph::new("").style(Style::default().bg(theme::BACKGROUND));
    frame.render_widget(backdrop, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // settings hint
            Constraint::Length(3), // banner
            Constraint::Min(7),    // status stack
            Constraint::Length(1), // key hints
        ])
        .split(area);

    let gear = Paragraph::new(Line::from(Span::styled(
        " ⚙ [s]",
        Style::default().fg(theme::TEXT_SECONDARY),
    )))
    .style(Style::default().bg(theme::BACKGROUND));
    frame.render_widget(gear, rows[0]);

    if banner_visible {
        if let Some(message) = error {
            let banner_area = theme::centered_rect((message.len() as u16).saturating_add(4), 3, rows[1]);
            let banner = Paragraph::new(message.to_string())
                .alignment(Alignment::Center)
                .block(theme::field());
            frame.render_widget(banner, banner_area);
        } else if !connection.is_connected() {
            let text = strings.banner;
            let banner_area =
                theme::centered_rect((text.chars().count() as u16).saturating_add(4), 3, rows[1]);
            let banner = Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(theme::field());
            frame.render_widget(banner, banner_area);
        }
    }

    if banner_visible {
        draw_status_stack(frame, strings, connection, rows[2]);
    }

    let hints = Paragraph::new(Line::from(Span::styled(
        " space: connect/disconnect · esc: cancel · s: settings · q: quit",
        Style::default().fg(theme::TEXT_SECONDARY),
    )))
    .style(Style::default().bg(theme::BACKGROUND));
    frame.render_widget(hints, rows[3]);
}

fn draw_status_stack(
    frame: &mut Frame,
    strings: &Strings,
    connection: ConnectionState,
    area: ratatui::layout::Rect,
) {
    let (glyph, status) = match connection {
        ConnectionState::Connected => ("🔓", strings.vpn_connected),
        ConnectionState::Connecting => ("⏳", strings.connecting),
        ConnectionState::Idle => ("🔒", strings.vpn_disconnected),
    };
    let toggle = match connection {
        ConnectionState::Connected => strings.disconnect,
        ConnectionState::Connecting => strings.connecting,
        ConnectionState::Idle => strings.connect,
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(glyph, Style::default().fg(theme::TEXT_PRIMARY))),
        Line::from(""),
        Line::from(Span::styled(status, Style::default().fg(theme::TEXT_PRIMARY))),
        Line::from(""),
        Line::from(Span::styled(
            format!("[ {} ]", toggle),
            if connection.is_connecting() {
                // Toggle reads disabled while the handshake runs
                Style::default().fg(theme::TEXT_SECONDARY)
            } else {
                Style::default().fg(theme::ACCENT)
            },
        )),
    ];

    let stack_area = theme::centered_rect(44, 9, area);
    let stack = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(theme::BACKGROUND));
    frame.render_widget(stack, stack_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use westvpn_i18n::{Catalog, LanguageKey};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn rendered(connection: ConnectionState, banner_visible: bool) -> String {
        let strings = Catalog::new().resolve(LanguageKey::English);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| draw_home(frame, strings, connection, banner_visible, None))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            handle_home_key(press(KeyCode::Char(' '))),
            Some(HomeAction::ToggleConnection)
        );
        assert_eq!(handle_home_key(press(KeyCode::Esc)), Some(HomeAction::CancelConnect));
        assert_eq!(handle_home_key(press(KeyCode::Char('s'))), Some(HomeAction::OpenSettings));
        assert_eq!(handle_home_key(press(KeyCode::Char('q'))), Some(HomeAction::Quit));
        assert_eq!(handle_home_key(press(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_disconnected_shows_banner_and_connect() {
        let content = rendered(ConnectionState::Idle, true);
        assert!(content.contains("Your connection is not secure!"));
        assert!(content.contains("VPN Disconnected"));
        assert!(content.contains("Connect"));
    }

    #[test]
    fn test_connected_hides_banner() {
        let content = rendered(ConnectionState::Connected, true);
        assert!(!content.contains("Your connection is not secure!"));
        assert!(content.contains("VPN Connected"));
        assert!(content.contains("Disconnect"));
    }

    #[test]
    fn test_overlay_hides_status_stack() {
        let content = rendered(ConnectionState::Idle, false);
        assert!(!content.contains("VPN Disconnected"));
        assert!(!content.contains("Your connection is not secure!"));
    }

    #[test]
    fn test_connecting_label() {
        let content = rendered(ConnectionState::Connecting, true);
        assert!(content.contains("Connecting..."));
    }
}
