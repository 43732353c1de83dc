//! Bubbleviz - animated step-by-step bubble sort
//!
//! Entry point for the GUI application. It:
//! 1. Loads `~/.config/bubbleviz/config.yaml` and `theme.yaml`
//! 2. Launches the iced application with the playback controller
//!
//! ## Command line flags
//!
//! - `--autoplay`: start sorting as soon as the window opens
//! - `--seed <n>`: generate datasets from a fixed seed (not saved to config)

mod ui;

use iced::{Size, Task};

use bubbleviz_core::config::{self, VisualizerConfig};
use ui::app::VisualizerApp;
use ui::message::{Message, PlaybackMessage};
use ui::theme;

fn main() -> iced::Result {
    let args: Vec<String> = std::env::args().collect();
    let autoplay = args.iter().any(|arg| arg == "--autoplay");
    let seed = parse_seed(&args);

    // Initialize logger - set RUST_LOG=debug to trace every tick
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("bubbleviz starting up");
    if let Some(seed) = seed {
        log::info!("Using fixed dataset seed {}", seed);
    }

    let config_path = config::default_config_path();
    let config: VisualizerConfig = config::load_config(&config_path);

    theme::init_theme();

    iced::application(
        move || {
            let app = VisualizerApp::new(config.clone(), config_path.clone(), seed);

            let startup_task = if autoplay {
                Task::done(Message::Playback(PlaybackMessage::TogglePlay))
            } else {
                Task::none()
            };

            (app, startup_task)
        },
        update,
        view,
    )
    .subscription(subscription)
    .theme(theme)
    .title("Bubble Sort Visualizer")
    .window_size(Size::new(900.0, 520.0))
    .run()
}

/// Value following `--seed`, if present and numeric
fn parse_seed(args: &[String]) -> Option<u64> {
    let position = args.iter().position(|arg| arg == "--seed")?;
    let Some(raw) = args.get(position + 1) else {
        log::warn!("--seed given without a value, ignoring");
        return None;
    };
    match raw.parse() {
        Ok(seed) => Some(seed),
        Err(e) => {
            log::warn!("Invalid --seed value '{}': {}, ignoring", raw, e);
            None
        }
    }
}

fn update(app: &mut VisualizerApp, message: Message) -> Task<Message> {
    app.update(message)
}

fn view(app: &VisualizerApp) -> iced::Element<'_, Message> {
    app.view()
}

fn subscription(app: &VisualizerApp) -> iced::Subscription<Message> {
    app.subscription()
}

fn theme(app: &VisualizerApp) -> iced::Theme {
    app.theme()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed(&args(&["bubbleviz", "--seed", "17"])), Some(17));
        assert_eq!(parse_seed(&args(&["bubbleviz", "--autoplay"])), None);
        assert_eq!(parse_seed(&args(&["bubbleviz", "--seed"])), None);
        assert_eq!(parse_seed(&args(&["bubbleviz", "--seed", "abc"])), None);
    }
}
