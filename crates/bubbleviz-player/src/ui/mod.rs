//! UI module for the bubbleviz player
//!
//! Built with iced. The app owns the playback controller and the bar chart;
//! messages from the controls and from timers are routed through `handlers`.

pub mod app;
pub mod controls;
pub mod handlers;
pub mod message;
pub mod theme;
