//! WestVPN UI - Presentation-Only Views
//!
//! Terminal views for the shell: splash, home screen, settings card,
//! language picker, feedback form, and the about panel.
//!
//! Views hold only their own transient state (a cursor, a draft). They never
//! touch the screen controller: input becomes an intent value (an action
//! enum) that the shell feeds into `westvpn_core::ScreenController`, and
//! rendering reads from resolved strings plus whatever state the shell
//! passes in.

mod about;
mod feedback_form;
mod home;
mod language_menu;
mod settings;
mod splash;
pub mod theme;

pub use about::{AboutAction, draw_about, handle_about_key};
pub use feedback_form::{FeedbackAction, FeedbackField, FeedbackForm};
pub use home::{HomeAction, draw_home, handle_home_key};
pub use language_menu::{LanguageMenu, LanguageMenuAction};
pub use settings::{SettingsAction, SettingsCard};
pub use splash::draw_splash;
