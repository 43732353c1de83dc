//! Main iced application for the bubbleviz player
//!
//! Owns:
//! - The playback controller (engine + tick state machine)
//! - The bar chart it draws into
//! - The single pending timer task, as an abort handle

use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

use iced::task::Handle;
use iced::time;
use iced::widget::{column, container, row, text, Space};
use iced::{Center, Element, Fill, Subscription, Task, Theme};

use bubbleviz_core::config::VisualizerConfig;
use bubbleviz_core::{PlaybackController, PlaybackState, TimerToken};
use bubbleviz_widgets::{bar_chart, BarChartState};

use super::controls;
use super::handlers;
use super::message::Message;
use super::theme;

/// Animation frame interval while bars are moving (~60fps)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Application state
pub struct VisualizerApp {
    pub(crate) controller: PlaybackController,
    pub(crate) chart: BarChartState,
    /// Task sleeping on the controller's current wait
    pub(crate) pending_timer: Option<(TimerToken, Handle)>,
    /// Speed slider position in milliseconds
    pub(crate) speed_ms: u32,
    pub(crate) speed_range: RangeInclusive<u32>,
    /// Config as loaded from disk (command line overrides not applied)
    pub(crate) config: VisualizerConfig,
    pub(crate) config_path: PathBuf,
    /// Last notable event, shown in the status bar
    pub(crate) status: String,
}

impl VisualizerApp {
    /// Create a new application instance
    ///
    /// `seed` overrides the configured dataset seed for this session only.
    pub fn new(config: VisualizerConfig, config_path: PathBuf, seed: Option<u64>) -> Self {
        let mut effective = config.clone();
        if seed.is_some() {
            effective.dataset.seed = seed;
        }

        let controller = PlaybackController::new(&effective);
        let max_value = *controller.engine().value_range().end();
        let mut chart = BarChartState::new(max_value, theme::chart_colors());
        controller.redraw(&mut chart);

        Self {
            speed_ms: effective.playback.validated_speed_ms(),
            speed_range: effective.playback.speed_range(),
            controller,
            chart,
            pending_timer: None,
            config,
            config_path,
            status: "Ready".to_string(),
        }
    }

    /// Update application state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Playback(msg) => handlers::playback::handle(self, msg),
            Message::TimerElapsed(token) => handlers::playback::handle_timer(self, token),
            Message::AnimationFrame(now) => handlers::animation::handle(self, now),
            Message::Settings(msg) => handlers::settings::handle(self, msg),
        }
    }

    /// Animation frames only while the chart is moving
    pub fn subscription(&self) -> Subscription<Message> {
        if self.chart.is_animating() {
            time::every(FRAME_INTERVAL).map(Message::AnimationFrame)
        } else {
            Subscription::none()
        }
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let header = row![
            text("BUBBLE SORT").size(24),
            Space::new().width(Fill),
            text(self.state_label()).size(12),
        ]
        .spacing(20)
        .align_y(Center)
        .padding(10);

        let chart = container(bar_chart(&self.chart))
            .width(Fill)
            .height(Fill)
            .padding(5);

        let content = column![
            header,
            chart,
            controls::view_controls(self),
            controls::view_status(self),
        ]
        .spacing(10)
        .padding(10);

        container(content).width(Fill).height(Fill).into()
    }

    fn state_label(&self) -> &'static str {
        if self.controller.engine().is_sorted() {
            return "● Sorted";
        }
        match self.controller.state() {
            PlaybackState::Idle => "○ Paused",
            PlaybackState::Running => "● Playing",
            PlaybackState::Finishing => "◐ Pausing",
        }
    }

    /// Get the theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::message::PlaybackMessage;
    use bubbleviz_core::config::DatasetConfig;
    use bubbleviz_core::Cursor;

    fn app(values_len: usize) -> VisualizerApp {
        let config = VisualizerConfig {
            dataset: DatasetConfig {
                len: values_len,
                ..Default::default()
            },
            ..Default::default()
        };
        VisualizerApp::new(config, PathBuf::from("/nonexistent/config.yaml"), Some(11))
    }

    #[test]
    fn test_new_draws_initial_dataset() {
        let app = app(30);
        assert_eq!(app.chart.len(), 30);
        assert_eq!(app.chart.max_value(), 100);
        assert_eq!(app.speed_ms, 500);
        assert!(app.pending_timer.is_none());
    }

    #[test]
    fn test_seed_override_is_not_kept_in_config() {
        let app = app(30);
        assert_eq!(app.config.dataset.seed, None);
    }

    #[test]
    fn test_toggle_play_arms_one_timer() {
        let mut app = app(30);
        let _ = app.update(Message::Playback(PlaybackMessage::TogglePlay));
        assert_eq!(app.controller.state(), PlaybackState::Running);
        let armed = app.pending_timer.as_ref().map(|(token, _)| *token);
        assert_eq!(armed, app.controller.pending_timer());

        let _ = app.update(Message::Playback(PlaybackMessage::TogglePlay));
        assert!(!app.controller.is_running());
        // Pausing leaves the in-flight wait alone
        assert!(app.pending_timer.is_some());
    }

    #[test]
    fn test_step_while_playing_reports_busy() {
        let mut app = app(30);
        let _ = app.update(Message::Playback(PlaybackMessage::TogglePlay));
        let _ = app.update(Message::Playback(PlaybackMessage::Step));
        assert_eq!(app.status, "Cannot step while playback is active");
    }

    #[test]
    fn test_reset_drops_timer_and_rewinds() {
        let mut app = app(30);
        let _ = app.update(Message::Playback(PlaybackMessage::TogglePlay));
        let token = app.controller.pending_timer().unwrap();

        let _ = app.update(Message::Playback(PlaybackMessage::Reset));
        assert!(app.pending_timer.is_none());
        assert_eq!(app.controller.state(), PlaybackState::Idle);
        assert_eq!(app.controller.engine().cursor(), Cursor::START);

        // The aborted timer's message may still be queued; it must be ignored
        let _ = app.update(Message::TimerElapsed(token));
        assert_eq!(app.controller.engine().cursor(), Cursor::START);
        assert!(app.pending_timer.is_none());
        assert_eq!(app.status, "New dataset");
    }

    #[test]
    fn test_speed_slider_updates_controller() {
        let mut app = app(30);
        let _ = app.update(Message::Playback(PlaybackMessage::SetSpeed(120)));
        assert_eq!(app.speed_ms, 120);
        assert_eq!(app.controller.speed(), Duration::from_millis(120));
    }

    #[test]
    fn test_manual_steps_walk_the_cursor() {
        let mut app = app(3);
        let _ = app.update(Message::Playback(PlaybackMessage::Step));
        assert_eq!(app.controller.state(), PlaybackState::Finishing);

        while let Some(token) = app.pending_timer.as_ref().map(|(token, _)| *token) {
            let _ = app.update(Message::TimerElapsed(token));
        }
        assert_eq!(app.controller.state(), PlaybackState::Idle);
        assert_eq!(app.controller.engine().cursor(), Cursor::new(0, 1));
        assert_eq!(app.status, "Ready");
    }

    #[test]
    fn test_status_settles_after_paused_tick() {
        let mut app = app(30);
        let _ = app.update(Message::Playback(PlaybackMessage::TogglePlay));
        let _ = app.update(Message::Playback(PlaybackMessage::TogglePlay));
        assert_eq!(app.status, "Paused");

        while let Some(token) = app.pending_timer.as_ref().map(|(token, _)| *token) {
            let _ = app.update(Message::TimerElapsed(token));
        }
        assert_eq!(app.controller.state(), PlaybackState::Idle);
        assert_eq!(app.status, "Ready");
    }
}
