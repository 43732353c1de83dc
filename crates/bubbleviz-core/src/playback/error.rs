//! Playback error types

use thiserror::Error;

/// Operations the controller refused to perform
///
/// None of these mutate anything; they are safe to log and ignore.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackError {
    /// A tick is running or still finishing
    #[error("Cannot step while playback is active")]
    Busy,

    /// Every comparison has already been made
    #[error("Dataset is already sorted")]
    AlreadySorted,
}

/// Result type for playback operations
pub type PlaybackResult<T> = Result<T, PlaybackError>;
