//! WestVPN Shell
//!
//! Entry point for the terminal shell. Sets up file-based logging (the
//! terminal itself belongs to the UI), validates the localization catalog,
//! loads the persisted language preference, and runs the shell loop.

mod link;
mod shell;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use westvpn_i18n::Catalog;
use westvpn_prefs::Preferences;

fn init_logging() -> Result<()> {
    let log_path = dirs::config_dir()
        .map(|dir| dir.join("westvpn").join("westvpn.log"));

    let Some(log_path) = log_path else {
        // No config dir on this platform; run without logs rather than
        // writing into the UI's terminal.
        return Ok(());
    };

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(&log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();

    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;
    info!("WestVPN shell starting");

    // A missing or empty string for any language is a configuration defect;
    // refuse to start rather than panic mid-session.
    Catalog::new()
        .validate()
        .context("Localization catalog is incomplete")?;

    let prefs = Preferences::load();
    info!("Language preference: {}", prefs.chosen_language.code());

    shell::run(prefs)?;

    info!("WestVPN shell shutting down");
    Ok(())
}
