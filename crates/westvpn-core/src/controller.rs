//! Screen controller - the shell's single source of truth.

use crate::error::ConnectionError;
use crate::feedback::FeedbackDraft;
use crate::state::{ConnectionState, Overlay};
use crate::timer::OneShotTimer;
use std::time::Duration;
use tracing::{debug, info, warn};
use westvpn_i18n::LanguageKey;

/// Simulated handshake delay before the connection flips to connected
pub const CONNECT_DELAY: Duration = Duration::from_millis(1200);

/// Invite link behind the settings card's Telegram row
pub const TELEGRAM_URL: &str = "https://t.me/+iNVtHj3_3tZiZWEy";

/// Side effect requested by a transition
///
/// The controller mutates its own state only; anything that touches the
/// outside world (disk, feedback backend, OS link handler) leaves as one of
/// these for the shell to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the committed language to the preference store
    PersistLanguage(LanguageKey),
    /// Hand a feedback draft to the submission sink
    SubmitFeedback(FeedbackDraft),
    /// Open an external URL via the platform handler
    OpenLink(&'static str),
}

/// Screen controller
///
/// Owns the connection axis, the overlay axis, the committed language, and
/// the connect timer. All mutation goes through the transition methods;
/// calls that are invalid for the current state are defensive no-ops.
#[derive(Debug)]
pub struct ScreenController {
    /// Connection axis
    connection: ConnectionState,
    /// Overlay axis
    overlay: Overlay,
    /// Committed display language
    language: LanguageKey,
    /// Simulated handshake timer
    connect_timer: OneShotTimer,
    /// Last connection failure, shown as a transient banner until taken
    last_error: Option<ConnectionError>,
}

impl ScreenController {
    /// Create a controller with the persisted language
    pub fn new(language: LanguageKey) -> Self {
        Self {
            connection: ConnectionState::Idle,
            overlay: Overlay::None,
            language,
            connect_timer: OneShotTimer::new(CONNECT_DELAY),
            last_error: None,
        }
    }

    /// Create with a custom handshake delay
    pub fn with_connect_delay(language: LanguageKey, delay: Duration) -> Self {
        Self {
            connect_timer: OneShotTimer::new(delay),
            ..Self::new(language)
        }
    }

    pub fn connection(&self) -> ConnectionState {
        self.connection
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn language(&self) -> LanguageKey {
        self.language
    }

    /// Take the transient error banner, if one is pending
    pub fn take_error(&mut self) -> Option<ConnectionError> {
        self.last_error.take()
    }

    // --- Overlay transitions ---

    /// Flip the settings card on or off
    ///
    /// Entering always lands on the root row list, whatever submenu or About
    /// panel was showing before.
    pub fn toggle_settings(&mut self) {
        self.overlay = if self.overlay.in_settings() {
            Overlay::None
        } else {
            Overlay::SettingsRoot
        };
        debug!("Settings toggled: overlay={}", self.overlay);
    }

    /// Enter the language picker (settings root only)
    pub fn open_language_menu(&mut self) {
        if self.overlay != Overlay::SettingsRoot {
            warn!("Ignoring language menu open from overlay={}", self.overlay);
            return;
        }
        self.overlay = Overlay::LanguageMenu;
    }

    /// Enter the feedback form (settings root only)
    pub fn open_feedback_menu(&mut self) {
        if self.overlay != Overlay::SettingsRoot {
            warn!("Ignoring feedback menu open from overlay={}", self.overlay);
            return;
        }
        self.overlay = Overlay::FeedbackMenu;
    }

    /// Swap the settings card for the About panel
    pub fn open_about(&mut self) {
        if self.overlay != Overlay::SettingsRoot {
            warn!("Ignoring about open from overlay={}", self.overlay);
            return;
        }
        self.overlay = Overlay::About;
    }

    /// Back out of a submenu to the settings root, discarding drafts
    pub fn cancel_submenu(&mut self) {
        if matches!(self.overlay, Overlay::LanguageMenu | Overlay::FeedbackMenu) {
            self.overlay = Overlay::SettingsRoot;
        }
    }

    /// Commit a language selection and close the overlay
    pub fn confirm_language(&mut self, key: LanguageKey) -> Option<Effect> {
        if self.overlay != Overlay::LanguageMenu {
            warn!("Ignoring language confirm from overlay={}", self.overlay);
            return None;
        }
        info!("Language committed: {}", key.code());
        self.language = key;
        self.overlay = Overlay::None;
        Some(Effect::PersistLanguage(key))
    }

    /// Hand off a feedback draft and close the overlay
    pub fn confirm_feedback(&mut self, draft: FeedbackDraft) -> Option<Effect> {
        if self.overlay != Overlay::FeedbackMenu {
            warn!("Ignoring feedback confirm from overlay={}", self.overlay);
            return None;
        }
        info!("Feedback submitted ({} chars)", draft.opinion.len());
        self.overlay = Overlay::None;
        Some(Effect::SubmitFeedback(draft))
    }

    /// Request the Telegram invite link (settings card row)
    ///
    /// The card stays open; the original behaved the same way.
    pub fn open_telegram(&mut self) -> Option<Effect> {
        if self.overlay != Overlay::SettingsRoot {
            return None;
        }
        Some(Effect::OpenLink(TELEGRAM_URL))
    }

    /// Tap outside any open overlay: close everything
    pub fn dismiss_overlay(&mut self) {
        if self.overlay.is_open() {
            debug!("Overlay dismissed from {}", self.overlay);
            self.overlay = Overlay::None;
        }
    }

    // --- Connection transitions ---

    /// Begin the simulated connect (idle only)
    pub fn start_connect(&mut self) {
        if self.connection != ConnectionState::Idle {
            debug!("Ignoring connect while {}", self.connection);
            return;
        }
        info!("Connecting (simulated handshake)");
        self.connection = ConnectionState::Connecting;
        self.last_error = None;
        self.connect_timer.arm();
    }

    /// Abort a connect in flight, disarming the timer
    pub fn cancel_connect(&mut self) {
        if self.connection != ConnectionState::Connecting {
            return;
        }
        info!("Connect cancelled");
        self.connect_timer.cancel();
        self.connection = ConnectionState::Idle;
    }

    /// Record a connection failure, reverting to idle
    ///
    /// Unused by the simulated timer; entry point for a real tunnel backend.
    pub fn fail_connect(&mut self, error: ConnectionError) {
        if self.connection != ConnectionState::Connecting {
            return;
        }
        warn!("Connect failed: {}", error);
        self.connect_timer.cancel();
        self.connection = ConnectionState::Idle;
        self.last_error = Some(error);
    }

    /// Drop the connection (connected only)
    pub fn disconnect(&mut self) {
        if self.connection != ConnectionState::Connected {
            debug!("Ignoring disconnect while {}", self.connection);
            return;
        }
        info!("Disconnected");
        self.connection = ConnectionState::Idle;
    }

    /// Drive the connect timer; returns true when state changed
    ///
    /// Called from the shell's tick. Connecting flips to connected exactly
    /// once per armed timer.
    pub fn tick(&mut self) -> bool {
        if self.connection == ConnectionState::Connecting && self.connect_timer.take_elapsed() {
            info!("Connected");
            self.connection = ConnectionState::Connected;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ScreenController {
        ScreenController::with_connect_delay(LanguageKey::default(), Duration::from_millis(5))
    }

    #[test]
    fn test_settings_toggle_alternates() {
        let mut c = controller();
        for _ in 0..3 {
            c.toggle_settings();
            assert_eq!(c.overlay(), Overlay::SettingsRoot);
            c.toggle_settings();
            assert_eq!(c.overlay(), Overlay::None);
        }
    }

    #[test]
    fn test_toggle_from_submenu_closes_cleanly() {
        let mut c = controller();
        c.toggle_settings();
        c.open_language_menu();
        assert_eq!(c.overlay(), Overlay::LanguageMenu);

        // Toggling off from a submenu never strands submenu state
        c.toggle_settings();
        assert_eq!(c.overlay(), Overlay::None);

        // Re-entering lands on the root list, not the old submenu
        c.toggle_settings();
        assert_eq!(c.overlay(), Overlay::SettingsRoot);
    }

    #[test]
    fn test_submenus_only_from_root() {
        let mut c = controller();
        c.open_language_menu();
        assert_eq!(c.overlay(), Overlay::None);

        c.toggle_settings();
        c.open_language_menu();
        c.open_feedback_menu(); // invalid from LanguageMenu
        assert_eq!(c.overlay(), Overlay::LanguageMenu);
    }

    #[test]
    fn test_about_replaces_settings() {
        let mut c = controller();
        c.toggle_settings();
        c.open_about();
        assert_eq!(c.overlay(), Overlay::About);
        assert!(!c.overlay().in_settings());

        // Tap outside closes fully, not back to the card
        c.dismiss_overlay();
        assert_eq!(c.overlay(), Overlay::None);
    }

    #[test]
    fn test_language_cancel_keeps_committed() {
        let mut c = controller();
        c.toggle_settings();
        c.open_language_menu();
        c.cancel_submenu();

        assert_eq!(c.overlay(), Overlay::SettingsRoot);
        assert_eq!(c.language(), LanguageKey::Russian);
    }

    #[test]
    fn test_language_confirm_commits_and_closes() {
        let mut c = controller();
        c.toggle_settings();
        c.open_language_menu();

        let effect = c.confirm_language(LanguageKey::English);
        assert_eq!(effect, Some(Effect::PersistLanguage(LanguageKey::English)));
        assert_eq!(c.language(), LanguageKey::English);
        assert_eq!(c.overlay(), Overlay::None);
    }

    #[test]
    fn test_language_confirm_invalid_outside_menu() {
        let mut c = controller();
        assert_eq!(c.confirm_language(LanguageKey::Turkish), None);
        assert_eq!(c.language(), LanguageKey::Russian);
    }

    #[test]
    fn test_feedback_confirm_emits_submit() {
        let mut c = controller();
        c.toggle_settings();
        c.open_feedback_menu();

        let draft = FeedbackDraft::new("a@b.c", "nice");
        let effect = c.confirm_feedback(draft.clone());
        assert_eq!(effect, Some(Effect::SubmitFeedback(draft)));
        assert_eq!(c.overlay(), Overlay::None);
    }

    #[test]
    fn test_telegram_only_from_root() {
        let mut c = controller();
        assert_eq!(c.open_telegram(), None);

        c.toggle_settings();
        assert_eq!(c.open_telegram(), Some(Effect::OpenLink(TELEGRAM_URL)));
        // Card stays open
        assert_eq!(c.overlay(), Overlay::SettingsRoot);
    }

    #[test]
    fn test_connect_lifecycle() {
        let mut c = controller();
        c.start_connect();
        assert_eq!(c.connection(), ConnectionState::Connecting);

        // Connect is a no-op while already connecting
        c.start_connect();
        assert_eq!(c.connection(), ConnectionState::Connecting);

        std::thread::sleep(Duration::from_millis(10));
        assert!(c.tick());
        assert_eq!(c.connection(), ConnectionState::Connected);

        // Later ticks change nothing
        assert!(!c.tick());

        c.disconnect();
        assert_eq!(c.connection(), ConnectionState::Idle);
    }

    #[test]
    fn test_disconnect_noop_unless_connected() {
        let mut c = controller();
        c.disconnect();
        assert_eq!(c.connection(), ConnectionState::Idle);

        c.start_connect();
        c.disconnect();
        assert_eq!(c.connection(), ConnectionState::Connecting);
    }

    #[test]
    fn test_cancel_connect_disarms_timer() {
        let mut c = controller();
        c.start_connect();
        c.cancel_connect();
        assert_eq!(c.connection(), ConnectionState::Idle);

        std::thread::sleep(Duration::from_millis(10));
        assert!(!c.tick());
        assert_eq!(c.connection(), ConnectionState::Idle);
    }

    #[test]
    fn test_fail_connect_surfaces_banner() {
        let mut c = controller();
        c.start_connect();
        c.fail_connect(ConnectionError::Timeout);

        assert_eq!(c.connection(), ConnectionState::Idle);
        assert_eq!(c.take_error(), Some(ConnectionError::Timeout));
        assert_eq!(c.take_error(), None);
    }
}
