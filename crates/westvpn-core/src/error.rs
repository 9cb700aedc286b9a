//! Connection error taxonomy.

/// Connection failure kinds
///
/// The simulated timer cannot fail, so nothing in this crate produces these
/// today. They exist as the seam for a real tunnel backend: a failed connect
/// attempt reverts the controller to idle via
/// [`ScreenController::fail_connect`](crate::ScreenController::fail_connect)
/// and is surfaced to the user through the transient banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConnectionError {
    #[error("Authentication failed")]
    AuthFailure,

    #[error("Network unreachable")]
    NetworkUnreachable,

    #[error("Connection timed out")]
    Timeout,
}
