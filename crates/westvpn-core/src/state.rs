//! Connection and overlay state axes.

/// VPN connection state (simulated, no tunnel behind it)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// Not connected
    #[default]
    Idle,
    /// Simulated handshake in progress
    Connecting,
    /// Connected until an explicit disconnect
    Connected,
}

impl ConnectionState {
    /// Check if the toggle should read "disconnect"
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }

    /// Check if the connect action must be ignored
    pub fn is_connecting(&self) -> bool {
        matches!(self, ConnectionState::Connecting)
    }
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionState::Idle => write!(f, "idle"),
            ConnectionState::Connecting => write!(f, "connecting"),
            ConnectionState::Connected => write!(f, "connected"),
        }
    }
}

/// Which modal panel, if any, sits over the home screen
///
/// One tagged union instead of independent `show_settings` / `show_about` /
/// `active_menu` flags, so the invalid combinations those allow (both open,
/// a submenu with settings closed) cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    /// Home screen only
    #[default]
    None,
    /// Settings card with its row list
    SettingsRoot,
    /// Language picker nested in the settings card
    LanguageMenu,
    /// Feedback form nested in the settings card
    FeedbackMenu,
    /// About panel (replaces the settings card)
    About,
}

impl Overlay {
    /// Is any overlay presented?
    pub fn is_open(&self) -> bool {
        !matches!(self, Overlay::None)
    }

    /// Is the settings card (root or a submenu) showing?
    pub fn in_settings(&self) -> bool {
        matches!(
            self,
            Overlay::SettingsRoot | Overlay::LanguageMenu | Overlay::FeedbackMenu
        )
    }
}

impl std::fmt::Display for Overlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Overlay::None => write!(f, "none"),
            Overlay::SettingsRoot => write!(f, "settings"),
            Overlay::LanguageMenu => write!(f, "language"),
            Overlay::FeedbackMenu => write!(f, "feedback"),
            Overlay::About => write!(f, "about"),
        }
    }
}
