//! Feedback form nested in the settings overlay.

use crate::theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Wrap};
use westvpn_core::FeedbackDraft;
use westvpn_i18n::Strings;

/// User intent from the feedback form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackAction {
    /// Discard both fields, back to the settings root
    Cancel,
    /// Hand the draft to the submission sink
    Submit(FeedbackDraft),
}

/// Which text field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackField {
    #[default]
    Email,
    Opinion,
}

/// Feedback form view state
///
/// Owns the draft exclusively while open. No validation is applied; empty
/// fields submit as-is.
#[derive(Debug, Default)]
pub struct FeedbackForm {
    draft: FeedbackDraft,
    focus: FeedbackField,
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Present a fresh, empty form
    pub fn present(&mut self) {
        self.draft = FeedbackDraft::default();
        self.focus = FeedbackField::Email;
    }

    pub fn draft(&self) -> &FeedbackDraft {
        &self.draft
    }

    pub fn focus(&self) -> FeedbackField {
        self.focus
    }

    /// Translate a key press into edits or an intent
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FeedbackAction> {
        match key.code {
            KeyCode::Esc => {
                self.draft = FeedbackDraft::default();
                Some(FeedbackAction::Cancel)
            }
            KeyCode::Enter => Some(FeedbackAction::Submit(std::mem::take(&mut self.draft))),
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                self.focus = match self.focus {
                    FeedbackField::Email => FeedbackField::Opinion,
                    FeedbackField::Opinion => FeedbackField::Email,
                };
                None
            }
            KeyCode::Backspace => {
                self.focused_field_mut().pop();
                None
            }
            KeyCode::Char(c) => {
                self.focused_field_mut().push(c);
                None
            }
            _ => None,
        }
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            FeedbackField::Email => &mut self.draft.email,
            FeedbackField::Opinion => &mut self.draft.opinion,
        }
    }

    /// Draw the form centered over the home screen
    pub fn draw(&self, frame: &mut Frame, strings: &Strings) {
        let area = theme::centered_rect(54, 14, frame.area());
        frame.render_widget(Clear, area);
        frame.render_widget(theme::card(), area);

        let inner = area.inner(ratatui::layout::Margin {
            horizontal: 2,
            vertical: 1,
        });
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // email field
                Constraint::Min(5),    // opinion field
                Constraint::Length(1), // hints
            ])
            .split(inner);

        let email = field_paragraph(
            &self.draft.email,
            strings.email_placeholder,
            self.focus == FeedbackField::Email,
        );
        frame.render_widget(email, rows[0]);

        let opinion = field_paragraph(
            &self.draft.opinion,
            strings.opinion_placeholder,
            self.focus == FeedbackField::Opinion,
        )
        .wrap(Wrap { trim: false });
        frame.render_widget(opinion, rows[1]);

        let hints = Paragraph::new(Line::from(Span::styled(
            format!(
                " tab · esc: {} · enter: {} ",
                strings.cancel, strings.send
            ),
            Style::default().fg(theme::TEXT_SECONDARY),
        )));
        frame.render_widget(hints, rows[2]);
    }
}

fn field_paragraph<'a>(value: &'a str, placeholder: &'a str, focused: bool) -> Paragraph<'a> {
    let (text, style) = if value.is_empty() {
        (placeholder, Style::default().fg(theme::TEXT_SECONDARY))
    } else {
        (value, Style::default().fg(theme::TEXT_PRIMARY))
    };

    let block = if focused {
        theme::field().border_style(Style::default().fg(theme::ACCENT))
    } else {
        theme::field()
    };

    Paragraph::new(text).style(style).block(block)
}
