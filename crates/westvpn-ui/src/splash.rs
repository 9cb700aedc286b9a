//! Splash screen shown during the fixed startup hold.

use crate::theme;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Draw the splash screen over the full frame
pub fn draw_splash(frame: &mut Frame) {
    let area = frame.area();

    let backdrop = Paragraph::new("").style(Style::default().bg(theme::BACKGROUND));
    frame.render_widget(backdrop, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("  🛡  ", Style::default().fg(theme::TEXT_PRIMARY))),
        Line::from(""),
        Line::from(Span::styled(
            "WestVPN",
            Style::default().fg(theme::TEXT_PRIMARY),
        )),
    ];

    let card_area = theme::centered_rect(24, 8, area);
    let splash = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(theme::card());
    frame.render_widget(splash, card_area);
}
