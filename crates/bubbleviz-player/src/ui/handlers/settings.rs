//! Settings message handler
//!
//! Persists the speed slider position as the new default speed.

use std::path::Path;

use iced::Task;

use bubbleviz_core::config::{save_config, VisualizerConfig};

use crate::ui::app::VisualizerApp;
use crate::ui::message::{Message, SettingsMessage};

/// Handle settings messages
pub fn handle(app: &mut VisualizerApp, msg: SettingsMessage) -> Task<Message> {
    use SettingsMessage::*;

    match msg {
        SaveSpeed => {
            if app.config.playback.speed_ms == app.speed_ms {
                return Task::none();
            }
            app.config.playback.speed_ms = app.speed_ms;

            // Save to disk in background
            let config = app.config.clone();
            let config_path = app.config_path.clone();
            Task::perform(async move { persist(&config, &config_path) }, |result| {
                Message::Settings(SaveComplete(result))
            })
        }
        SaveComplete(result) => {
            match result {
                Ok(()) => {
                    app.status = format!("Default speed saved ({} ms)", app.config.playback.speed_ms);
                }
                Err(e) => {
                    log::warn!("Settings save failed: {}", e);
                    app.status = format!("Settings save failed: {}", e);
                }
            }
            Task::none()
        }
    }
}

/// Write `config` to `path`, reporting failure as a display string
fn persist(config: &VisualizerConfig, path: &Path) -> Result<(), String> {
    save_config(config, path).map_err(|e| e.to_string())
}
