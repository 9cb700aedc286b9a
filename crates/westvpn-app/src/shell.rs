//! Shell loop: terminal lifecycle, input routing, effect execution.
//!
//! Single-threaded and event-driven. A named reader thread forwards
//! terminal events over a channel; the loop alternates between draining
//! that channel and ticking the controller's timers. All state transitions
//! happen here, on the loop thread, in response to discrete events.

use crate::link;
use anyhow::Result;
use crossbeam_channel::{Receiver, RecvTimeoutError, unbounded};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};
use westvpn_core::{
    Effect, FeedbackSink, NullFeedbackSink, OneShotTimer, Overlay, ScreenController,
};
use westvpn_i18n::Catalog;
use westvpn_prefs::Preferences;
use westvpn_ui::{
    AboutAction, FeedbackAction, FeedbackForm, HomeAction, LanguageMenu, LanguageMenuAction,
    SettingsAction, SettingsCard, draw_about, draw_home, draw_splash, handle_about_key,
    handle_home_key,
};

/// Splash hold before the home screen activates
const SPLASH_DELAY: Duration = Duration::from_millis(1600);

/// How long a connection error banner stays up
const ERROR_BANNER_DELAY: Duration = Duration::from_secs(3);

/// Loop tick while waiting for input
const TICK: Duration = Duration::from_millis(50);

/// Shell state: controller, views, and the pending side-effect targets
pub struct Shell {
    controller: ScreenController,
    catalog: Catalog,
    prefs: Preferences,
    prefs_path: Option<PathBuf>,
    sink: NullFeedbackSink,

    settings: SettingsCard,
    language_menu: LanguageMenu,
    feedback_form: FeedbackForm,

    splash: OneShotTimer,
    splash_done: bool,
    error_banner: Option<String>,
    error_timer: OneShotTimer,
    should_quit: bool,
}

impl Shell {
    pub fn new(prefs: Preferences, prefs_path: Option<PathBuf>) -> Self {
        let language = prefs.chosen_language;
        let mut splash = OneShotTimer::new(SPLASH_DELAY);
        splash.arm();

        Self {
            controller: ScreenController::new(language),
            catalog: Catalog::new(),
            prefs,
            prefs_path,
            sink: NullFeedbackSink,
            settings: SettingsCard::new(),
            language_menu: LanguageMenu::new(language),
            feedback_form: FeedbackForm::new(),
            splash,
            splash_done: false,
            error_banner: None,
            error_timer: OneShotTimer::new(ERROR_BANNER_DELAY),
            should_quit: false,
        }
    }

    /// Advance timers: splash hold, connect delay, error banner decay
    fn tick(&mut self) {
        if !self.splash_done && self.splash.take_elapsed() {
            debug!("Splash done, home screen active");
            self.splash_done = true;
        }

        self.controller.tick();

        if let Some(error) = self.controller.take_error() {
            self.error_banner = Some(error.to_string());
            self.error_timer.arm();
        }
        if self.error_banner.is_some() && self.error_timer.take_elapsed() {
            self.error_banner = None;
        }
    }

    /// Route a key press to whichever surface owns the focus
    fn handle_key(&mut self, key: KeyEvent) {
        if !self.splash_done {
            // Only quit works during the splash hold
            if matches!(handle_home_key(key), Some(HomeAction::Quit)) {
                self.should_quit = true;
            }
            return;
        }

        match self.controller.overlay() {
            Overlay::None => self.handle_home_action(key),
            Overlay::SettingsRoot => self.handle_settings_action(key),
            Overlay::LanguageMenu => self.handle_language_action(key),
            Overlay::FeedbackMenu => self.handle_feedback_action(key),
            Overlay::About => {
                if let Some(AboutAction::Dismiss) = handle_about_key(key) {
                    self.controller.dismiss_overlay();
                }
            }
        }
    }

    fn handle_home_action(&mut self, key: KeyEvent) {
        match handle_home_key(key) {
            Some(HomeAction::ToggleConnection) => {
                if self.controller.connection().is_connected() {
                    self.controller.disconnect();
                } else {
                    // No-op while connecting; the controller ignores it
                    self.controller.start_connect();
                }
            }
            Some(HomeAction::CancelConnect) => self.controller.cancel_connect(),
            Some(HomeAction::OpenSettings) => {
                self.settings.present();
                self.controller.toggle_settings();
            }
            Some(HomeAction::Quit) => self.should_quit = true,
            None => {}
        }
    }

    fn handle_settings_action(&mut self, key: KeyEvent) {
        match self.settings.handle_key(key) {
            Some(SettingsAction::OpenLanguage) => {
                self.language_menu.present(self.controller.language());
                self.controller.open_language_menu();
            }
            Some(SettingsAction::OpenFeedback) => {
                self.feedback_form.present();
                self.controller.open_feedback_menu();
            }
            Some(SettingsAction::OpenTelegram) => {
                let effect = self.controller.open_telegram();
                self.run_effect(effect);
            }
            Some(SettingsAction::OpenAbout) => self.controller.open_about(),
            Some(SettingsAction::Close) => self.controller.toggle_settings(),
            None => {}
        }
    }

    fn handle_language_action(&mut self, key: KeyEvent) {
        match self.language_menu.handle_key(key) {
            Some(LanguageMenuAction::Cancel) => self.controller.cancel_submenu(),
            Some(LanguageMenuAction::Confirm(selected)) => {
                let effect = self.controller.confirm_language(selected);
                self.run_effect(effect);
            }
            None => {}
        }
    }

    fn handle_feedback_action(&mut self, key: KeyEvent) {
        match self.feedback_form.handle_key(key) {
            Some(FeedbackAction::Cancel) => self.controller.cancel_submenu(),
            Some(FeedbackAction::Submit(draft)) => {
                let effect = self.controller.confirm_feedback(draft);
                self.run_effect(effect);
            }
            None => {}
        }
    }

    /// Execute a side effect requested by the controller
    fn run_effect(&mut self, effect: Option<Effect>) {
        match effect {
            Some(Effect::PersistLanguage(key)) => {
                self.prefs.chosen_language = key;
                let result = match &self.prefs_path {
                    Some(path) => self.prefs.save_to(path),
                    None => self.prefs.save(),
                };
                if let Err(e) = result {
                    // Non-fatal: the committed language still applies for
                    // this session
                    warn!("Failed to persist language: {}", e);
                }
            }
            Some(Effect::SubmitFeedback(draft)) => self.sink.submit(draft),
            Some(Effect::OpenLink(url)) => link::open(url),
            None => {}
        }
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        terminal.draw(|frame| {
            if !self.splash_done {
                draw_splash(frame);
                return;
            }

            let strings = self.catalog.resolve(self.controller.language());
            let overlay = self.controller.overlay();

            draw_home(
                frame,
                strings,
                self.controller.connection(),
                !overlay.is_open(),
                self.error_banner.as_deref(),
            );

            match overlay {
                Overlay::None => {}
                Overlay::SettingsRoot => self.settings.draw(frame, strings),
                Overlay::LanguageMenu => self.language_menu.draw(frame, strings),
                Overlay::FeedbackMenu => self.feedback_form.draw(frame, strings),
                Overlay::About => draw_about(frame, strings),
            }
        })?;
        Ok(())
    }
}

/// Forward terminal events to the shell loop from a dedicated thread
fn spawn_input_thread() -> Result<Receiver<Event>> {
    let (tx, rx) = unbounded();
    thread::Builder::new()
        .name("input".to_string())
        .spawn(move || {
            while let Ok(ev) = event::read() {
                if tx.send(ev).is_err() {
                    break;
                }
            }
        })?;
    Ok(rx)
}

/// Restores the terminal even when the loop errors out
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the shell until the user quits
pub fn run(prefs: Preferences) -> Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let prefs_path = Preferences::default_path().ok();
    let mut shell = Shell::new(prefs, prefs_path);
    let input = spawn_input_thread()?;

    while !shell.should_quit {
        shell.draw(&mut terminal)?;

        match input.recv_timeout(TICK) {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => shell.handle_key(key),
            Ok(Event::Resize(..)) => {} // next draw picks up the new size
            Ok(_) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        shell.tick();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::time::{SystemTime, UNIX_EPOCH};
    use westvpn_core::ConnectionState;
    use westvpn_i18n::LanguageKey;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn scratch_prefs_path() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock before epoch")
            .subsec_nanos();
        std::env::temp_dir().join(format!(
            "westvpn-shell-{}-{}",
            std::process::id(),
            nanos
        ))
    }

    fn active_shell(path: PathBuf) -> Shell {
        let mut shell = Shell::new(Preferences::default(), Some(path));
        shell.splash_done = true;
        shell
    }

    #[test]
    fn test_splash_swallows_everything_but_quit() {
        let mut shell = Shell::new(Preferences::default(), None);

        shell.handle_key(press(KeyCode::Char(' ')));
        assert_eq!(shell.controller.connection(), ConnectionState::Idle);
        assert!(!shell.should_quit);

        shell.handle_key(press(KeyCode::Char('q')));
        assert!(shell.should_quit);
    }

    #[test]
    fn test_settings_flow_routes_by_overlay() {
        let path = scratch_prefs_path();
        let mut shell = active_shell(path.clone());

        shell.handle_key(press(KeyCode::Char('s')));
        assert_eq!(shell.controller.overlay(), Overlay::SettingsRoot);

        // First row is the language picker
        shell.handle_key(press(KeyCode::Enter));
        assert_eq!(shell.controller.overlay(), Overlay::LanguageMenu);

        // Picker order is English, Russian, Turkish; default committed is
        // Russian, one step up is English
        shell.handle_key(press(KeyCode::Up));
        shell.handle_key(press(KeyCode::Enter));
        assert_eq!(shell.controller.overlay(), Overlay::None);
        assert_eq!(shell.controller.language(), LanguageKey::English);

        // The commit was persisted through the effect
        let saved = Preferences::load_from(&path);
        assert_eq!(saved.chosen_language, LanguageKey::English);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_feedback_cancel_returns_to_root() {
        let mut shell = active_shell(scratch_prefs_path());

        shell.handle_key(press(KeyCode::Char('s')));
        shell.handle_key(press(KeyCode::Down));
        shell.handle_key(press(KeyCode::Enter));
        assert_eq!(shell.controller.overlay(), Overlay::FeedbackMenu);

        shell.handle_key(press(KeyCode::Char('h')));
        shell.handle_key(press(KeyCode::Char('i')));
        shell.handle_key(press(KeyCode::Esc));
        assert_eq!(shell.controller.overlay(), Overlay::SettingsRoot);
    }

    #[test]
    fn test_about_dismiss_closes_fully() {
        let mut shell = active_shell(scratch_prefs_path());

        shell.handle_key(press(KeyCode::Char('s')));
        for _ in 0..3 {
            shell.handle_key(press(KeyCode::Down));
        }
        shell.handle_key(press(KeyCode::Enter));
        assert_eq!(shell.controller.overlay(), Overlay::About);

        shell.handle_key(press(KeyCode::Esc));
        assert_eq!(shell.controller.overlay(), Overlay::None);
    }

    #[test]
    fn test_connect_toggle_and_cancel() {
        let mut shell = active_shell(scratch_prefs_path());

        shell.handle_key(press(KeyCode::Char(' ')));
        assert_eq!(shell.controller.connection(), ConnectionState::Connecting);

        // Space is ignored mid-handshake
        shell.handle_key(press(KeyCode::Char(' ')));
        assert_eq!(shell.controller.connection(), ConnectionState::Connecting);

        shell.handle_key(press(KeyCode::Esc));
        assert_eq!(shell.controller.connection(), ConnectionState::Idle);
    }
}
