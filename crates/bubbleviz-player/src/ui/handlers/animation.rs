//! Animation frame handler

use std::time::Instant;

use iced::Task;

use crate::ui::app::VisualizerApp;
use crate::ui::message::Message;

/// Advance the bar height animation (called ~60fps while it runs)
pub fn handle(app: &mut VisualizerApp, now: Instant) -> Task<Message> {
    app.chart.advance(now);
    Task::none()
}
