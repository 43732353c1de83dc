//! Bubbleviz Core - step-wise bubble sort and its playback state machine
//!
//! Nothing in this crate knows about windows, widgets or timers. The
//! [`PlaybackController`] hands every suspension point back to its caller as a
//! [`Wait`], and every visual change goes through the [`Renderer`] trait.

pub mod config;
pub mod engine;
pub mod playback;
pub mod render;
pub mod types;

pub use engine::SortEngine;
pub use playback::{PlaybackController, PlaybackError, PlaybackResult, PlaybackState, TimerToken, Wait};
pub use render::{Highlight, HighlightKind, Renderer, Transition};
pub use types::*;
