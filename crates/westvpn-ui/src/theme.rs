//! Design tokens (dark gray ramp).

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders};

// Gray ramp
pub const GRAY_100: Color = Color::Rgb(0xF5, 0xF5, 0xF5);
pub const GRAY_200: Color = Color::Rgb(0xE6, 0xE6, 0xE6);
pub const GRAY_300: Color = Color::Rgb(0xD9, 0xD9, 0xD9);
pub const GRAY_400: Color = Color::Rgb(0xB3, 0xB3, 0xB3);
pub const GRAY_500: Color = Color::Rgb(0x75, 0x75, 0x75);
pub const GRAY_600: Color = Color::Rgb(0x44, 0x44, 0x44);
pub const GRAY_700: Color = Color::Rgb(0x38, 0x38, 0x38);
pub const GRAY_800: Color = Color::Rgb(0x2C, 0x2C, 0x2C);
pub const GRAY_900: Color = Color::Rgb(0x1E, 0x1E, 0x1E);
pub const GRAY_1000: Color = Color::Rgb(0x11, 0x11, 0x11);

// Semantic roles
pub const BACKGROUND: Color = GRAY_1000;
pub const SURFACE: Color = GRAY_900;
pub const SURFACE_ELEVATED: Color = GRAY_800;
pub const BORDER: Color = GRAY_700;
pub const TEXT_PRIMARY: Color = GRAY_100;
pub const TEXT_SECONDARY: Color = GRAY_400;
pub const ACCENT: Color = GRAY_300;

/// Bordered card in the surface color
pub fn card() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER))
        .style(Style::default().bg(SURFACE).fg(TEXT_PRIMARY))
}

/// Elevated field inside a card (text inputs, rows)
pub fn field() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER))
        .style(Style::default().bg(SURFACE_ELEVATED).fg(TEXT_PRIMARY))
}

/// Centered rect of at most `width` x `height` inside `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(40, 10, area);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 10);
        assert_eq!(rect.x, 20);
        assert_eq!(rect.y, 7);
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect(100, 50, area);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 5);
    }
}
