//! Application messages for the bubbleviz player

use std::time::Instant;

use bubbleviz_core::TimerToken;

/// Messages that can be sent to the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Transport controls
    Playback(PlaybackMessage),
    /// A controller wait elapsed
    TimerElapsed(TimerToken),
    /// Animation frame while bars are moving
    AnimationFrame(Instant),
    /// Settings persistence
    Settings(SettingsMessage),
}

/// The four user controls
#[derive(Debug, Clone)]
pub enum PlaybackMessage {
    /// Play when idle, pause when running
    TogglePlay,
    /// Single highlight → compare → render cycle
    Step,
    /// New random dataset
    Reset,
    /// Speed slider moved (milliseconds)
    SetSpeed(u32),
}

#[derive(Debug, Clone)]
pub enum SettingsMessage {
    /// Speed slider released; persist the new default
    SaveSpeed,
    /// Background save finished
    SaveComplete(Result<(), String>),
}
