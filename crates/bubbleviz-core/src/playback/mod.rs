//! Playback - autoplay, pause, single-step and reset around the sort engine
//!
//! The controller is a plain state machine. It never sleeps: each suspension
//! point is handed to the caller as a [`Wait`], and the caller resumes the tick
//! by passing the wait's token back to [`PlaybackController::on_timer`].

mod controller;
mod error;

pub use controller::{PlaybackController, PlaybackState, TimerToken, Wait};
pub use error::{PlaybackError, PlaybackResult};
