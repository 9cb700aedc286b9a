//! WestVPN Core - View-State Orchestration
//!
//! The single source of truth for what the shell shows: the connection state
//! machine, the overlay state machine, and the effects they emit.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                     Shell loop                       │
//! │                                                      │
//! │  input ──▶ views ──▶ intent ──▶ ScreenController     │
//! │                                      │               │
//! │              Effect (persist / submit / open link)   │
//! │                                      │               │
//! │                                      ▼               │
//! │                        prefs / FeedbackSink / OS     │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! The controller is single-threaded and never performs I/O; transitions
//! return [`Effect`] values the shell executes. The simulated connect delay
//! is a cancellable [`OneShotTimer`] driven by the shell's tick, not a
//! blocking wait.

mod controller;
mod error;
mod feedback;
mod state;
mod timer;

pub use controller::{CONNECT_DELAY, Effect, ScreenController, TELEGRAM_URL};
pub use error::ConnectionError;
pub use feedback::{FeedbackDraft, FeedbackSink, NullFeedbackSink};
pub use state::{ConnectionState, Overlay};
pub use timer::OneShotTimer;
