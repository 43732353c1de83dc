//! Message handlers for VisualizerApp
//!
//! Each handler module is responsible for a specific category of messages.
//! Handlers receive `&mut VisualizerApp` and return `Task<Message>`.

pub mod animation;
pub mod playback;
pub mod settings;
