//! Fire-and-forget external link opening.

use std::process::{Child, Command};
use tracing::{info, warn};

#[cfg(target_os = "macos")]
fn spawn_opener(url: &str) -> std::io::Result<Child> {
    Command::new("open").arg(url).spawn()
}

#[cfg(target_os = "windows")]
fn spawn_opener(url: &str) -> std::io::Result<Child> {
    Command::new("cmd").args(["/C", "start", url]).spawn()
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn spawn_opener(url: &str) -> std::io::Result<Child> {
    Command::new("xdg-open").arg(url).spawn()
}

/// Open a URL with the platform's default handler
///
/// No response is consumed and failure is not surfaced to the user; a spawn
/// error only lands in the log.
pub fn open(url: &str) {
    match spawn_opener(url) {
        Ok(_) => info!("Opened external link: {}", url),
        Err(e) => warn!("Failed to open {}: {}", url, e),
    }
}
