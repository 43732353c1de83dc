//! Transport controls and status bar

use iced::widget::{button, row, slider, text, Space};
use iced::{Center, Element, Fill};

use bubbleviz_core::PlaybackState;
use bubbleviz_widgets::button_styles::{control_style, play_toggle_style};

use super::app::VisualizerApp;
use super::message::{Message, PlaybackMessage, SettingsMessage};

/// Play/Pause, Next, Reset and the speed slider
pub fn view_controls(app: &VisualizerApp) -> Element<'_, Message> {
    let playing = app.controller.is_running();
    let can_step =
        app.controller.state() == PlaybackState::Idle && !app.controller.engine().is_sorted();

    let play = button(text(if playing { "Pause" } else { "Play" }).size(14))
        .padding([6, 16])
        .style(move |_theme, status| play_toggle_style(status, playing))
        .on_press(Message::Playback(PlaybackMessage::TogglePlay));

    // Next is only live while nothing is in flight
    let next = button(text("Next").size(14))
        .padding([6, 16])
        .style(|_theme, status| control_style(status))
        .on_press_maybe(can_step.then_some(Message::Playback(PlaybackMessage::Step)));

    let reset = button(text("Reset").size(14))
        .padding([6, 16])
        .style(|_theme, status| control_style(status))
        .on_press(Message::Playback(PlaybackMessage::Reset));

    let speed_label = text(format!("Speed: {} ms", app.speed_ms)).size(14);
    let speed_slider = slider(app.speed_range.clone(), app.speed_ms, |speed_ms| {
        Message::Playback(PlaybackMessage::SetSpeed(speed_ms))
    })
    .step(10u32)
    .on_release(Message::Settings(SettingsMessage::SaveSpeed))
    .width(240);

    row![
        play,
        next,
        reset,
        Space::new().width(Fill),
        speed_label,
        speed_slider,
    ]
    .spacing(10)
    .align_y(Center)
    .into()
}

/// Pass, comparison and swap counters plus the last status message
pub fn view_status(app: &VisualizerApp) -> Element<'_, Message> {
    let engine = app.controller.engine();
    let stats = engine.stats();
    let passes = engine.len().saturating_sub(1);
    let pass = (engine.cursor().i + 1).min(passes.max(1));

    text(format!(
        "Pass {}/{}  ·  {} comparisons  ·  {} swaps  ·  {}",
        pass, passes, stats.comparisons, stats.swaps, app.status
    ))
    .size(12)
    .into()
}
